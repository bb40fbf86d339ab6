// Concrete API resources. Everything here is declared through `domain_model!`.

pub mod actions;
pub mod images;
pub mod ssh_keys;

pub use actions::{Action, ActionError, ActionResource};
pub use images::{Image, ImageProtection, ServerReference};
pub use ssh_keys::SshKey;
