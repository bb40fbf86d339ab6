pub mod base;
pub mod envelope;
pub mod identity;
pub mod meta;
pub mod value;

pub use base::{BaseDomain, HydrationMode};
pub use envelope::{parse_resource, try_parse_resource, PageResults};
pub use identity::{DomainIdentity, IdOrName};
pub use meta::{Meta, Pagination};
pub use value::{parse_iso8601, type_mismatch, ApiRepr, FromApiValue, Timestamp};

pub use serde_json::{Map, Value};
