use fridgechef_infrastructure::ConfigService;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

    let config = service.get_config().expect("Should fall back to defaults");
    assert_eq!(config.recommendation_expiry_days, 2);
    assert_eq!(config.inventory_check_expiry_days, 3);
    assert_eq!(config.session_idle_timeout(), Some(Duration::from_secs(3600)));
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
max_recommendations = 5
session_idle_timeout_secs = 0

[data]
catalog_path = "/srv/fridgechef/recipes.toml"
"#,
    )
    .unwrap();

    let config = ConfigService::with_path(&path).get_config().unwrap();
    assert_eq!(config.max_recommendations, 5);
    assert_eq!(config.session_idle_timeout(), None);
    assert_eq!(config.recommendation_expiry_days, 2);
    assert_eq!(
        config.data.catalog_path.as_deref(),
        Some(std::path::Path::new("/srv/fridgechef/recipes.toml"))
    );
    assert!(!config.openai.model.is_empty());
}

#[test]
fn test_malformed_config_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "max_recommendations = \"many\"").unwrap();

    let err = ConfigService::with_path(&path).get_config().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_config_is_cached_until_invalidated() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "max_recommendations = 4").unwrap();

    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().unwrap().max_recommendations, 4);

    std::fs::write(&path, "max_recommendations = 7").unwrap();
    assert_eq!(service.get_config().unwrap().max_recommendations, 4);

    service.invalidate_cache();
    assert_eq!(service.get_config().unwrap().max_recommendations, 7);
}

