pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use crate::core::{BaseDomain, DomainIdentity, HydrationMode, IdOrName, Meta, PageResults, Pagination};
pub use domain::{Action, Image, SshKey};
pub use utils::error::{HcloudError, Result};
