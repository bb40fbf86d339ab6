use crate::utils::error::{HcloudError, Result};
use std::fmt;

/// The value used to reference a resource in API calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdOrName {
    Id(i64),
    Name(String),
}

impl fmt::Display for IdOrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdOrName::Id(id) => write!(f, "{}", id),
            IdOrName::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for IdOrName {
    fn from(id: i64) -> Self {
        IdOrName::Id(id)
    }
}

impl From<&str> for IdOrName {
    fn from(name: &str) -> Self {
        IdOrName::Name(name.to_string())
    }
}

impl From<String> for IdOrName {
    fn from(name: String) -> Self {
        IdOrName::Name(name)
    }
}

impl PartialEq<i64> for IdOrName {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, IdOrName::Id(id) if id == other)
    }
}

impl PartialEq<&str> for IdOrName {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, IdOrName::Name(name) if name == other)
    }
}

/// Id-or-name identity shared by resources that can be looked up either way.
pub trait DomainIdentity {
    fn domain_id(&self) -> Option<i64>;

    fn domain_name(&self) -> Option<&str>;

    /// The id when set, otherwise the name.
    fn id_or_name(&self) -> Result<IdOrName> {
        if let Some(id) = self.domain_id() {
            return Ok(IdOrName::Id(id));
        }
        if let Some(name) = self.domain_name() {
            return Ok(IdOrName::Name(name.to_string()));
        }
        Err(HcloudError::MissingIdentity)
    }

    /// Whether `candidate` names this resource.
    ///
    /// Comparison is on the string forms, so `1` and `"1"` are the same
    /// candidate and either may hit the id or the name.
    fn has_id_or_name<C: Into<IdOrName>>(&self, candidate: C) -> bool
    where
        Self: Sized,
    {
        let candidate = candidate.into().to_string();
        let matched = self.domain_id().is_some_and(|id| id.to_string() == candidate)
            || self.domain_name().is_some_and(|name| name == candidate);
        tracing::trace!(%candidate, matched, "id or name lookup");
        matched
    }
}

/// Implements [`DomainIdentity`] for a type with `id: Option<i64>` and
/// `name: Option<String>` fields.
#[macro_export]
macro_rules! impl_domain_identity {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::core::DomainIdentity for $name {
                fn domain_id(&self) -> ::std::option::Option<i64> {
                    self.id
                }

                fn domain_name(&self) -> ::std::option::Option<&str> {
                    self.name.as_deref()
                }
            }
        )+
    };
}
