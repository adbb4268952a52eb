use super::container::{config_file_candidates, read_settings, FileSettings};
use super::*;
use crate::{parser, traits::ScraperSerialize, DEFAULT_CONFIG_NAME};
use std::fs::write;
use std::path::PathBuf;
use tempfile::TempDir;

/// writes `data` as a pagescraper.toml in a fresh temporary directory
fn setup_config_file(data: &str) -> (TempDir, PathBuf) {
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);
    write(&file, data).unwrap();
    (tmp_dir, file)
}

/// a Configuration with the values from a typical config file already applied
fn setup_config_test() -> Configuration {
    let (_tmp_dir, file) = setup_config_file(
        r#"
            verbosity = 2
            debug_log = "/some/log/file"
            json = true
        "#,
    );
    let mut config = Configuration::default();
    config.merge_file(&file).unwrap();
    config
}

/// parse the given command line on top of `config`
fn merge_cli(config: &mut Configuration, args: &[&str]) {
    let matches = parser::initialize().try_get_matches_from(args).unwrap();
    config.merge_cli(&matches);
}

#[test]
/// test that all default config values meet expectations
fn default_configuration() {
    let config = Configuration::default();
    assert_eq!(config.kind, "configuration");
    assert!(config.config_files.is_empty());
    assert_eq!(config.target_url, "");
    assert_eq!(config.verbosity, 0);
    assert_eq!(config.debug_log, "");
    assert!(!config.json);
}

#[test]
/// under test, new skips the command line and hands back the defaults
fn new_returns_defaults_under_test() {
    assert_eq!(Configuration::new(), Configuration::default());
}

#[test]
/// every key a config file may set is picked up
fn config_file_sets_every_key() {
    let config = setup_config_test();
    assert_eq!(config.verbosity, 2);
    assert_eq!(config.debug_log, "/some/log/file");
    assert!(config.json);
}

#[test]
/// keys left out of the file are None, so they leave earlier values alone
fn read_settings_partial_file() {
    let (_tmp_dir, file) = setup_config_file("json = true");

    let settings = read_settings(&file).unwrap();

    assert_eq!(
        settings,
        FileSettings {
            json: Some(true),
            ..Default::default()
        }
    );
}

#[test]
/// a target url in a config file is ignored; it only ever comes from the command line
fn config_file_cannot_set_target_url() {
    let (_tmp_dir, file) = setup_config_file(
        r#"
            target_url = "https://from-the-file.example"
            verbosity = 1
        "#,
    );
    let mut config = Configuration::default();

    config.merge_file(&file).unwrap();

    assert_eq!(config.target_url, "");
    assert_eq!(config.verbosity, 1);

    merge_cli(&mut config, &["pagescraper", "https://example.com"]);
    assert_eq!(config.target_url, "https://example.com");
}

#[test]
/// garbage in the config file is an error, not a silent default
fn config_with_invalid_toml_is_error() {
    let (_tmp_dir, file) = setup_config_file("verbosity = \"loud\"");
    let mut config = Configuration::default();

    assert!(config.merge_file(&file).is_err());
    assert_eq!(config, Configuration::default());
}

#[test]
/// a config file that doesn't exist is simply skipped
fn merge_file_skips_missing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join(DEFAULT_CONFIG_NAME);
    let mut config = Configuration::default();

    config.merge_file(&file).unwrap();

    assert_eq!(config, Configuration::default());
}

#[test]
/// later files override earlier ones, and every file applied is remembered in order
fn merge_file_layers_and_records_paths() {
    let (_first_dir, first) = setup_config_file("verbosity = 3\njson = true");
    let (_second_dir, second) = setup_config_file("verbosity = 1");
    let mut config = Configuration::default();

    config.merge_file(&first).unwrap();
    config.merge_file(&second).unwrap();

    assert_eq!(config.verbosity, 1);
    assert!(config.json);
    assert_eq!(
        config.config_files,
        [first.display().to_string(), second.display().to_string()]
    );
}

#[test]
/// candidates start at /etc and end in the working directory, all named pagescraper.toml
fn candidates_in_precedence_order() {
    let candidates = config_file_candidates();

    assert_eq!(
        candidates.first().unwrap(),
        &PathBuf::from("/etc/pagescraper").join(DEFAULT_CONFIG_NAME)
    );
    assert_eq!(
        candidates.last().unwrap(),
        &std::env::current_dir().unwrap().join(DEFAULT_CONFIG_NAME)
    );
    assert!(candidates
        .iter()
        .all(|path| path.file_name().unwrap() == DEFAULT_CONFIG_NAME));
}

#[test]
/// the positional url lands in target_url untouched
fn cli_sets_target_url() {
    let mut config = Configuration::default();
    merge_cli(&mut config, &["pagescraper", "https://example.com"]);
    assert_eq!(config.target_url, "https://example.com");
    assert_eq!(config.verbosity, 0);
}

#[test]
/// values given on the command line win over values from a config file
fn cli_overrides_config_file() {
    let mut config = setup_config_test();

    merge_cli(
        &mut config,
        &[
            "pagescraper",
            "-v",
            "--debug-log",
            "/other/log",
            "http://localhost",
        ],
    );

    assert_eq!(config.target_url, "http://localhost");
    assert_eq!(config.verbosity, 1);
    assert_eq!(config.debug_log, "/other/log");
    // not given on the command line, so the file's value survives
    assert!(config.json);
}

#[test]
/// options left off the command line never clobber values from a file
fn cli_without_options_keeps_file_values() {
    let mut config = setup_config_test();

    merge_cli(&mut config, &["pagescraper", "http://localhost"]);

    assert_eq!(config.verbosity, 2);
    assert_eq!(config.debug_log, "/some/log/file");
    assert!(config.json);
}

#[test]
/// the human readable summary mentions every field
fn as_str_lists_fields() {
    let mut config = Configuration::default();
    merge_cli(&mut config, &["pagescraper", "https://example.com"]);
    let summary = console::strip_ansi_codes(&config.as_str()).to_string();

    assert_eq!(
        summary,
        "target_url: https://example.com\nconfig_files: (none)\nverbosity: 0\ndebug_log: \njson: false\n"
    );
}

#[test]
/// as_json serializes the configuration with its type tag first
fn as_json_has_type_tag() {
    let config = setup_config_test();
    let json = config.as_json().unwrap();

    assert!(json.starts_with(r#"{"type":"configuration""#));
    assert!(json.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["verbosity"], 2);
    assert_eq!(value["json"], true);
    assert_eq!(value["config_files"].as_array().unwrap().len(), 1);
}
