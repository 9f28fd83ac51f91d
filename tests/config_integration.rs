use release_stage_badge::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

const BIN: &str = "release-stage-badge";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("BADGE_SERVER__PORT");
        env::remove_var("BADGE_I18N__LOCALE");
        env::remove_var("BADGE_THEME__TEXT_COLOR");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("LOCALE");
        env::remove_var("CATALOG_PATH");
        env::remove_var("LOG_JSON");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load defaults");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.i18n.locale, "en");
    assert_eq!(config.i18n.catalog_path, None);
    assert_eq!(config.theme.grey_color_20, "#e8e8ed");
    assert!(!config.logging.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("BADGE_SERVER__PORT", "9090");
        env::set_var("BADGE_THEME__TEXT_COLOR", "#000000");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.theme.text_color, "#000000");
    assert_eq!(config.theme.grey_color_20, "#e8e8ed");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_env_beats_prefixed_env() {
    clear_env_vars();
    unsafe {
        env::set_var("BADGE_SERVER__PORT", "9090");
        env::set_var("BADGE_I18N__LOCALE", "de");
        env::set_var("PORT", "9191");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    // Prefixed layer is live for keys clap does not set...
    assert_eq!(config.i18n.locale, "de");
    // ...and loses to clap's env var for the ones it does.
    assert_eq!(config.server.port, 9191);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("badge.yaml");
    let config_content = r##"
server:
  port: 7070
i18n:
  locale: de
theme:
  grey_color_20: "#f0f0f0"
    "##;
    fs::write(&file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.i18n.locale, "de");
    assert_eq!(config.theme.grey_color_20, "#f0f0f0");
    assert_eq!(config.theme.text_color, "#1a194d");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
