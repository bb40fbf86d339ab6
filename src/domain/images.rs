use crate::core::Timestamp;
use std::collections::BTreeMap;

crate::domain_model! {
    /// Server an image was created from.
    pub struct ServerReference {
        pub id: Option<i64>,
        pub name: Option<String>,
    }
}

crate::domain_model! {
    pub struct ImageProtection {
        pub delete: bool,
    }
}

crate::domain_model! {
    /// A disk image: system image, snapshot, backup or app.
    pub struct Image {
        pub id: Option<i64>,
        pub name: Option<String>,
        pub kind as "type": Option<String>,
        pub status: Option<String>,
        pub description: Option<String>,
        pub image_size: Option<f64>,
        pub disk_size: Option<f64>,
        pub created: Option<Timestamp>,
        pub created_from: Option<ServerReference>,
        pub bound_to: Option<i64>,
        pub os_flavor: Option<String>,
        pub os_version: Option<String>,
        pub architecture: Option<String>,
        pub rapid_deploy: Option<bool>,
        pub protection: Option<ImageProtection>,
        pub deprecated: Option<Timestamp>,
        pub deleted: Option<Timestamp>,
        pub labels: BTreeMap<String, String>,
    }
}

crate::impl_domain_identity!(Image, ServerReference);

impl Image {
    pub const TYPE_SNAPSHOT: &'static str = "snapshot";
    pub const TYPE_BACKUP: &'static str = "backup";
    pub const TYPE_SYSTEM: &'static str = "system";
    pub const TYPE_APP: &'static str = "app";

    pub const STATUS_AVAILABLE: &'static str = "available";
    pub const STATUS_CREATING: &'static str = "creating";

    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_AVAILABLE)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    pub fn is_delete_protected(&self) -> bool {
        self.protection.as_ref().is_some_and(|p| p.delete)
    }
}
