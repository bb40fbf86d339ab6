//! Pagination envelope of list responses.

use crate::core::{BaseDomain, HydrationMode};
use crate::utils::error::{HcloudError, Result};
use serde_json::Value;

crate::domain_model! {
    /// Page cursor of a list response.
    pub struct Pagination {
        pub page: i64,
        pub per_page: i64,
        pub previous_page: Option<i64>,
        pub next_page: Option<i64>,
        pub last_page: Option<i64>,
        pub total_entries: Option<i64>,
    }
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}

crate::domain_model! {
    /// Metadata accompanying a response.
    pub struct Meta {
        pub pagination: Option<Pagination>,
    }
}

impl Meta {
    /// Parses `meta.pagination` out of a response payload.
    ///
    /// Never fails: an absent, empty or non-object payload, a missing `meta`
    /// and a missing `pagination` all give a `Meta` without pagination.
    pub fn parse_meta(response: Option<&Value>) -> Self {
        let Some(meta) = response.and_then(|r| r.get("meta")).and_then(Value::as_object) else {
            return Self::default();
        };

        let pagination = meta
            .get("pagination")
            .and_then(Value::as_object)
            .map(Pagination::from_dict);

        if pagination.is_none() {
            tracing::debug!("response meta carries no pagination");
        }

        Self { pagination }
    }

    /// Like [`Meta::parse_meta`], but honours `mode`.
    ///
    /// A missing or `null` `meta` is still accepted. In strict mode any other
    /// non-object `meta` is an error, and `pagination` is hydrated strictly.
    pub fn try_parse_meta(response: Option<&Value>, mode: HydrationMode) -> Result<Self> {
        if mode == HydrationMode::Lenient {
            return Ok(Self::parse_meta(response));
        }

        match response.and_then(|r| r.get("meta")) {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(meta)) => Self::try_from_dict(meta, mode),
            Some(other) => Err(HcloudError::InvalidPayload {
                message: format!("expected an object under `meta`, got {}", other),
            }),
        }
    }
}
