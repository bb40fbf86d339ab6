use anyhow::Result;
use hcloud_domain::app::inspect::{render_payload, ResourceKind};
use hcloud_domain::utils::validation::Validate;
use hcloud_domain::{ClientConfig, HydrationMode};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_strict_mode_from_config_file() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        br#"
[hydration]
mode = "strict"

[logging]
level = "warn"
"#,
    )?;

    let config = ClientConfig::from_file(config_file.path())?;
    config.validate()?;
    assert_eq!(config.hydration_mode(), HydrationMode::Strict);

    let payload = json!({"images": [{"id": 1, "name": "snap", "unexpected": 1}], "meta": {}});
    let result = render_payload(&payload, ResourceKind::Image, config.hydration_mode());
    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_lenient_render_of_image_list() -> Result<()> {
    let config = ClientConfig::default();
    let payload = json!({
        "images": [{"id": 1, "name": "snap", "unexpected": 1}],
        "meta": {"pagination": {"page": 1, "per_page": 50, "total_entries": 1}}
    });

    let lines = render_payload(&payload, ResourceKind::Image, config.hydration_mode())?;

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Image(id=1, name='snap', type=None"));
    assert!(!lines[0].contains("unexpected"));
    assert_eq!(
        lines[1],
        "Meta(pagination=Pagination(page=1, per_page=50, previous_page=None, next_page=None, last_page=None, total_entries=1))"
    );

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = ClientConfig::from_file("/nonexistent/hcloud-domain.toml");
    assert!(result.is_err());
}
