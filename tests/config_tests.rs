//! 配置功能测试

use std::fs;
use wego::infrastructure::config::{apply_env_overrides, parse_config, Config};

#[test]
fn test_config_defaults() {
    // 测试配置默认值
    let config = Config::default();

    assert_eq!(config.theme, "default");
    assert!(config.enable_emoji);
    assert!(config.http_proxy.is_none());
    assert_eq!(config.search.max_results, 6);
    assert_eq!(config.unsplash.per_page, 6);
    assert!(config.unsplash.access_key.is_none());
    assert!(config.data.locations.is_none());
    assert!(config.data.destinations.is_none());
}

#[test]
fn test_logging_defaults() {
    // 测试日志默认值
    let config = Config::default();

    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.logging.path.is_none());
}

#[test]
fn test_config_toml_format() {
    // 测试 TOML 配置格式
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
theme = "sunset"
enable_emoji = false

[logging]
enable = true
path = "/tmp/wego.log"
level = "DEBUG"

[search]
debounce_ms = 120
max_results = 4

[unsplash]
access_key = "abc123"
per_page = 10

[data]
locations = "/srv/wego/locations.json"
"#,
    )
    .unwrap();

    let config = parse_config(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(config.theme, "sunset");
    assert!(!config.enable_emoji);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/wego.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.search.debounce_ms, 120);
    assert_eq!(config.search.max_results, 4);
    // 未设置的字段保持默认值
    assert_eq!(config.search.description_max_chars, 150);
    assert_eq!(config.unsplash.access_key.as_deref(), Some("abc123"));
    assert_eq!(config.unsplash.per_page, 10);
    assert_eq!(
        config.data.locations.as_deref(),
        Some(std::path::Path::new("/srv/wego/locations.json"))
    );
    assert_eq!(config.data.detail_page, "details.html");
}

#[test]
fn test_invalid_toml_is_an_error() {
    // 测试错误的配置格式
    assert!(parse_config("theme = ").is_err());
    assert!(parse_config("[search]\nmax_results = \"many\"").is_err());
}

#[test]
fn test_env_overrides_leave_file_key_without_env() {
    // 未设置环境变量时保留文件中的 key
    let mut config = Config::default();
    config.unsplash.access_key = Some("from-file".to_string());

    if std::env::var(wego::infrastructure::config::ACCESS_KEY_ENV).is_err() {
        let config = apply_env_overrides(config);
        assert_eq!(config.unsplash.access_key.as_deref(), Some("from-file"));
    }
}

#[test]
fn test_write_config_sample_never_overwrites() {
    // 测试生成配置样例
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wego").join("config.toml");

    assert!(wego::infrastructure::config::write_config_sample(&path).unwrap());
    let sample = parse_config(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(sample.search.debounce_ms, 300);

    fs::write(&path, "theme = \"plain\"\n").unwrap();
    assert!(!wego::infrastructure::config::write_config_sample(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "theme = \"plain\"\n");
}
