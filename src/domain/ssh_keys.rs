use crate::core::Timestamp;
use std::collections::BTreeMap;

crate::domain_model! {
    pub struct SshKey {
        pub id: Option<i64>,
        pub name: Option<String>,
        pub fingerprint: Option<String>,
        pub public_key: Option<String>,
        pub labels: BTreeMap<String, String>,
        pub created: Option<Timestamp>,
    }
}

crate::impl_domain_identity!(SshKey);
