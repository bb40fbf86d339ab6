use crate::core::{BaseDomain, HydrationMode, Meta};
use crate::utils::error::{HcloudError, Result};
use serde_json::Value;

/// Hydrates the single resource stored under `key`, e.g. `{"image": {...}}`.
pub fn parse_resource<T: BaseDomain>(response: &Value, key: &str) -> Option<T> {
    response.get(key).and_then(Value::as_object).map(T::from_dict)
}

pub fn try_parse_resource<T: BaseDomain>(
    response: &Value,
    key: &str,
    mode: HydrationMode,
) -> Result<T> {
    let object = response
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| HcloudError::InvalidPayload {
            message: format!("expected an object under `{}`", key),
        })?;
    T::try_from_dict(object, mode)
}

/// One page of a list response together with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResults<T> {
    pub items: Vec<T>,
    pub meta: Meta,
}

impl<T: BaseDomain> PageResults<T> {
    /// Hydrates every object listed under `items_key`.
    ///
    /// A missing key gives an empty page; entries that are not objects are
    /// skipped.
    pub fn parse(response: &Value, items_key: &str) -> Self {
        let items = match response.get(items_key).and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| {
                    let object = entry.as_object();
                    if object.is_none() {
                        tracing::debug!(items_key, "skipping non-object list entry");
                    }
                    object.map(T::from_dict)
                })
                .collect(),
            None => {
                tracing::debug!(items_key, "response has no list under key");
                Vec::new()
            }
        };

        Self {
            items,
            meta: Meta::parse_meta(Some(response)),
        }
    }

    pub fn try_parse(response: &Value, items_key: &str, mode: HydrationMode) -> Result<Self> {
        if mode == HydrationMode::Lenient {
            return Ok(Self::parse(response, items_key));
        }

        let entries = response
            .get(items_key)
            .and_then(Value::as_array)
            .ok_or_else(|| HcloudError::InvalidPayload {
                message: format!("expected an array under `{}`", items_key),
            })?;

        let items = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let object = entry.as_object().ok_or_else(|| HcloudError::InvalidPayload {
                    message: format!("entry {} of `{}` is not an object", index, items_key),
                })?;
                T::try_from_dict(object, mode)
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Self {
            items,
            meta: Meta::try_parse_meta(Some(response), mode)?,
        })
    }

    pub fn next_page(&self) -> Option<i64> {
        self.meta.pagination.as_ref().and_then(|p| p.next_page)
    }
}
