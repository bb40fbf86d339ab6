use crate::core::{try_parse_resource, BaseDomain, HydrationMode, PageResults};
use crate::domain::{Action, Image, SshKey};
use crate::utils::error::{HcloudError, Result};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ResourceKind {
    Image,
    SshKey,
    Action,
}

impl ResourceKind {
    /// Key of a single-resource response.
    pub fn resource_key(self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::SshKey => "ssh_key",
            ResourceKind::Action => "action",
        }
    }

    /// Key of a list response.
    pub fn list_key(self) -> &'static str {
        match self {
            ResourceKind::Image => "images",
            ResourceKind::SshKey => "ssh_keys",
            ResourceKind::Action => "actions",
        }
    }
}

/// Renders every resource in `payload`, followed by the response `Meta` for
/// list responses.
pub fn render_payload(payload: &Value, kind: ResourceKind, mode: HydrationMode) -> Result<Vec<String>> {
    match kind {
        ResourceKind::Image => render::<Image>(payload, kind, mode),
        ResourceKind::SshKey => render::<SshKey>(payload, kind, mode),
        ResourceKind::Action => render::<Action>(payload, kind, mode),
    }
}

fn render<T: BaseDomain>(payload: &Value, kind: ResourceKind, mode: HydrationMode) -> Result<Vec<String>> {
    if payload.get(kind.resource_key()).is_some() {
        let resource: T = try_parse_resource(payload, kind.resource_key(), mode)?;
        return Ok(vec![resource.repr()]);
    }

    if payload.get(kind.list_key()).is_some() {
        let page: PageResults<T> = PageResults::try_parse(payload, kind.list_key(), mode)?;
        tracing::info!(count = page.items.len(), key = kind.list_key(), "parsed list response");

        let mut lines: Vec<String> = page.items.iter().map(BaseDomain::repr).collect();
        lines.push(page.meta.repr());
        return Ok(lines);
    }

    Err(HcloudError::InvalidPayload {
        message: format!(
            "payload has neither `{}` nor `{}`",
            kind.resource_key(),
            kind.list_key()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_single_resource() {
        let payload = json!({"ssh_key": {"id": 2, "name": "deploy", "fingerprint": "b7:2f"}});
        let lines = render_payload(&payload, ResourceKind::SshKey, HydrationMode::Lenient).unwrap();
        assert_eq!(
            lines,
            vec!["SshKey(id=2, name='deploy', fingerprint='b7:2f', public_key=None, labels={}, created=None)"]
        );
    }

    #[test]
    fn test_render_list_with_meta() {
        let payload = json!({
            "actions": [{"id": 1, "command": "create_image", "status": "success", "progress": 100}],
            "meta": {"pagination": {"page": 1, "per_page": 25, "total_entries": 1}}
        });
        let lines = render_payload(&payload, ResourceKind::Action, HydrationMode::Lenient).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Action(id=1, command='create_image', status='success', progress=100"));
        assert!(lines[1].starts_with("Meta(pagination=Pagination(page=1"));
    }

    #[test]
    fn test_render_rejects_foreign_payload() {
        let payload = json!({"servers": []});
        let err = render_payload(&payload, ResourceKind::Image, HydrationMode::Lenient).unwrap_err();
        assert!(err.to_string().contains("`image` nor `images`"));
    }

    #[test]
    fn test_render_strict_mode() {
        let payload = json!({"image": {"id": 1, "flavour": "vanilla"}});
        assert!(render_payload(&payload, ResourceKind::Image, HydrationMode::Strict).is_err());
        assert!(render_payload(&payload, ResourceKind::Image, HydrationMode::Lenient).is_ok());
    }
}
