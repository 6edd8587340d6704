use tomo_core::config::{
    ConfigError, DEFAULT_DATA_DIR, DEFAULT_PAD_ANGLE, DEFAULT_PORT, DEFAULT_TOP_RELATIONSHIPS,
};
use tomo_core::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.data.data_dir, DEFAULT_DATA_DIR);
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.chord.pad_angle, DEFAULT_PAD_ANGLE);
    assert_eq!(config.detail.top_relationships, DEFAULT_TOP_RELATIONSHIPS);
}

#[test]
fn test_config_to_toml() {
    let toml_str = Config::default().to_toml();
    assert!(toml_str.contains("[data]"));
    assert!(toml_str.contains("[server]"));
    assert!(toml_str.contains("[chord]"));
    assert!(toml_str.contains("[detail]"));
}

#[test]
fn test_config_round_trip() {
    let config: Config = toml::from_str(&Config::default().to_toml()).unwrap();
    assert_eq!(config.chord.base_size, Config::default().chord.base_size);
    assert_eq!(config.data.summary_file, Config::default().data.summary_file);
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[data]
data_dir = "https://example.org/extracted_miis"

[chord]
pad_angle = 0.05
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.data.is_remote());
    assert_eq!(config.chord.pad_angle, 0.05);
    assert_eq!(config.server.port, DEFAULT_PORT);
}

#[test]
fn test_from_file_rejects_invalid() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tomo.toml");
    std::fs::write(&path, "[chord]\nbase_size = 0.0\n").unwrap();

    assert!(matches!(Config::from_file(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_from_file_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tomo.toml");
    std::fs::write(&path, "[chord\n").unwrap();

    assert!(matches!(Config::from_file(&path), Err(ConfigError::ParseError(_))));
}
