//! Shared behaviour of every domain object.
//!
//! A domain type declares its API attributes once through [`domain_model!`].
//! Hydration, defaults, equality and rendering are all generated from that
//! single field list, so a field that is not declared can never be set from a
//! payload.

use crate::utils::error::{HcloudError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How strictly payloads are mapped onto domain objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrationMode {
    /// Unknown fields are dropped, malformed values keep the default.
    #[default]
    Lenient,
    /// Unknown fields and malformed values are errors.
    Strict,
}

pub trait BaseDomain: Sized + Default {
    /// Name used in the rendered form.
    const TYPE_NAME: &'static str;

    /// Declared attributes, in declaration order.
    const API_PROPERTIES: &'static [&'static str];

    /// Assigns one declared attribute from a payload value.
    ///
    /// Returns the reason when `key` is not declared or `value` has the wrong
    /// shape. The attribute is left untouched in that case. `mode` applies to
    /// nested objects and lists inside `value`.
    fn set_api_property(
        &mut self,
        key: &str,
        value: &Value,
        mode: HydrationMode,
    ) -> std::result::Result<(), String>;

    /// Rendered `(attribute, value)` pairs in declaration order.
    fn api_values(&self) -> Vec<(&'static str, String)>;

    /// Builds an instance from a payload object, ignoring unknown keys.
    fn from_dict(data: &Map<String, Value>) -> Self {
        let mut model = Self::default();
        for (key, value) in data {
            if !Self::API_PROPERTIES.contains(&key.as_str()) {
                continue;
            }
            if let Err(reason) = model.set_api_property(key, value, HydrationMode::Lenient) {
                tracing::debug!(
                    type_name = Self::TYPE_NAME,
                    field = %key,
                    %reason,
                    "keeping default for malformed field"
                );
            }
        }
        model
    }

    /// Like [`BaseDomain::from_dict`], but honours `mode`.
    fn try_from_dict(data: &Map<String, Value>, mode: HydrationMode) -> Result<Self> {
        if mode == HydrationMode::Lenient {
            return Ok(Self::from_dict(data));
        }

        let mut model = Self::default();
        for (key, value) in data {
            if !Self::API_PROPERTIES.contains(&key.as_str()) {
                return Err(HcloudError::UnknownField {
                    type_name: Self::TYPE_NAME.to_string(),
                    field: key.clone(),
                });
            }
            model
                .set_api_property(key, value, HydrationMode::Strict)
                .map_err(|reason| HcloudError::InvalidField {
                    type_name: Self::TYPE_NAME.to_string(),
                    field: key.clone(),
                    reason,
                })?;
        }
        Ok(model)
    }

    /// Builds an instance from any payload value. Non-objects give the default.
    fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_dict).unwrap_or_default()
    }

    /// `Type(attr=value, ...)`.
    fn repr(&self) -> String {
        let attributes: Vec<String> = self
            .api_values()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("{}({})", Self::TYPE_NAME, attributes.join(", "))
    }
}

/// Declares a domain object.
///
/// Each field may carry a payload key (`kind as "type"`) when the attribute
/// name is not a valid Rust identifier, and a default (`= expr`) used when the
/// payload does not provide it. Fields without a default use
/// [`Default::default`].
///
/// ```
/// use hcloud_domain::domain_model;
/// use hcloud_domain::core::BaseDomain;
///
/// domain_model! {
///     pub struct Volume {
///         pub id: Option<i64>,
///         pub kind as "type": Option<String>,
///         pub size: i64 = 10,
///     }
/// }
///
/// let payload = serde_json::json!({"id": 3, "type": "ssd"});
/// let volume = Volume::from_value(&payload);
/// assert_eq!(volume.size, 10);
/// assert_eq!(volume.to_string(), "Volume(id=3, type='ssd', size=10)");
/// ```
#[macro_export]
macro_rules! domain_model {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $api:literal) => {
        $api
    };
    (@default) => {
        ::core::default::Default::default()
    };
    (@default $default:expr) => {
        $default
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident $(as $api:literal)? : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::domain_model!(@default $($default)?), )*
                }
            }
        }

        impl $crate::core::BaseDomain for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const API_PROPERTIES: &'static [&'static str] = &[
                $( $crate::domain_model!(@key $field $($api)?), )*
            ];

            fn set_api_property(
                &mut self,
                key: &str,
                value: &$crate::core::Value,
                mode: $crate::core::HydrationMode,
            ) -> ::std::result::Result<(), ::std::string::String> {
                $(
                    if key == $crate::domain_model!(@key $field $($api)?) {
                        self.$field = <$ty as $crate::core::FromApiValue>::from_api_value(value, mode)?;
                        return ::std::result::Result::Ok(());
                    }
                )*
                ::std::result::Result::Err(::std::format!(
                    "`{}` is not an attribute of {}",
                    key,
                    stringify!($name)
                ))
            }

            fn api_values(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                ::std::vec![
                    $(
                        (
                            $crate::domain_model!(@key $field $($api)?),
                            $crate::core::ApiRepr::api_repr(&self.$field),
                        ),
                    )*
                ]
            }
        }

        impl $crate::core::FromApiValue for $name {
            const EXPECTED: &'static str = "an object";

            fn from_api_value(
                value: &$crate::core::Value,
                mode: $crate::core::HydrationMode,
            ) -> ::std::result::Result<Self, ::std::string::String> {
                let object = value
                    .as_object()
                    .ok_or_else(|| $crate::core::type_mismatch::<Self>(value))?;
                <$name as $crate::core::BaseDomain>::try_from_dict(object, mode)
                    .map_err(|err| err.to_string())
            }
        }

        impl $crate::core::ApiRepr for $name {
            fn api_repr(&self) -> ::std::string::String {
                <$name as $crate::core::BaseDomain>::repr(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&<$name as $crate::core::BaseDomain>::repr(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::domain_model! {
        struct Disk {
            id: Option<i64>,
            kind as "type": Option<String>,
            size: i64 = 10,
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_declared_properties_use_payload_keys() {
        assert_eq!(Disk::API_PROPERTIES, &["id", "type", "size"]);
        assert_eq!(Disk::TYPE_NAME, "Disk");
    }

    #[test]
    fn test_defaults_apply_to_missing_fields() {
        let disk = Disk::from_dict(&object(json!({"id": 1})));
        assert_eq!(disk.id, Some(1));
        assert_eq!(disk.kind, None);
        assert_eq!(disk.size, 10);
    }

    #[test]
    fn test_lenient_keeps_default_for_malformed_value() {
        let disk = Disk::from_dict(&object(json!({"id": "one", "size": 3, "extra": true})));
        assert_eq!(disk.id, None);
        assert_eq!(disk.size, 3);
    }

    #[test]
    fn test_strict_rejects_unknown_field() {
        let err = Disk::try_from_dict(&object(json!({"id": 1, "extra": true})), HydrationMode::Strict)
            .unwrap_err();
        assert!(matches!(err, HcloudError::UnknownField { ref field, .. } if field == "extra"));
    }

    #[test]
    fn test_strict_rejects_malformed_value() {
        let err = Disk::try_from_dict(&object(json!({"size": "big"})), HydrationMode::Strict)
            .unwrap_err();
        assert!(matches!(err, HcloudError::InvalidField { ref field, .. } if field == "size"));
        assert!(err.to_string().contains("expected an integer"));
    }

    #[test]
    fn test_strict_accepts_clean_payload() {
        let disk = Disk::try_from_dict(&object(json!({"id": 2, "type": "ssd"})), HydrationMode::Strict)
            .unwrap();
        assert_eq!(disk.kind.as_deref(), Some("ssd"));
    }

    crate::domain_model! {
        struct Mount {
            path: Option<String>,
            disk: Option<Disk>,
            spares: Vec<Disk>,
        }
    }

    #[test]
    fn test_strict_reaches_nested_object() {
        let payload = object(json!({"path": "/data", "disk": {"id": 1, "extra": true}}));

        let err = Mount::try_from_dict(&payload, HydrationMode::Strict).unwrap_err();
        assert!(matches!(err, HcloudError::InvalidField { ref field, .. } if field == "disk"));
        assert!(err.to_string().contains("extra"));

        let mount = Mount::try_from_dict(&payload, HydrationMode::Lenient).unwrap();
        assert_eq!(mount.disk.unwrap().id, Some(1));
    }

    #[test]
    fn test_strict_reaches_nested_list_entries() {
        let payload = object(json!({"spares": [{"id": 1}, {"size": "big"}]}));

        let err = Mount::try_from_dict(&payload, HydrationMode::Strict).unwrap_err();
        assert!(matches!(err, HcloudError::InvalidField { ref field, .. } if field == "spares"));

        let mount = Mount::from_dict(&payload);
        assert_eq!(mount.spares.len(), 2);
        assert_eq!(mount.spares[1].size, 10);
    }

    #[test]
    fn test_from_value_of_non_object_is_default() {
        assert_eq!(Disk::from_value(&json!([1, 2])), Disk::default());
    }

    #[test]
    fn test_repr_uses_payload_keys() {
        let disk = Disk::from_dict(&object(json!({"id": 5, "type": "hdd"})));
        assert_eq!(disk.repr(), "Disk(id=5, type='hdd', size=10)");
        assert_eq!(disk.to_string(), disk.repr());
    }
}
