use folio_core::loader::RecordSource;
use folio_core::{AppConfig, Locale};

#[test]
fn missing_config_is_created_with_defaults() {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "folio_config_{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let path = dir.join("config.json");

    let config = AppConfig::load_or_init(&path);
    assert_eq!(config.ui.initial_reveal, 10);
    assert_eq!(config.ui.default_locale, Locale::En);
    assert!(path.exists(), "defaults should be written back");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn partial_config_fills_in_defaults() {
    let json = r#"{
        "source": { "kind": "url", "base": "https://example.com/blog/", "path": "data.json" },
        "ui": { "default_locale": "th" }
    }"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.source,
        RecordSource::Url {
            base: "https://example.com/blog/".into(),
            path: "data.json".into()
        }
    );
    assert_eq!(config.ui.default_locale, Locale::Th);
    assert_eq!(config.ui.initial_reveal, 10);
    assert_eq!(config.profile.name, "Portfolio");
}
