use std::collections::HashMap;

use crate::config::{load_config_from, save_config_to, ClientSettings, Config};
use crate::constants::GITHUB_API_URL;
use crate::error::GitHubError;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_missing_config_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        token: Some("ghp_example".to_string()),
        organization: Some("acme".to_string()),
        api_url: None,
    };
    save_config_to(&config, &path).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_corrupt_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_config_from(&path), Err(GitHubError::ConfigError(_))));
}

#[test]
fn test_environment_wins_over_file() {
    let config = Config {
        token: Some("from-file".to_string()),
        organization: Some("file-org".to_string()),
        api_url: None,
    };
    let settings = ClientSettings::resolve(
        &config,
        env_of(&[("GITHUB_TOKEN", "from-env"), ("GITHUB_ORG", "")]),
    )
    .unwrap();

    assert_eq!(settings.token, "from-env");
    assert_eq!(settings.organization, "file-org");
    assert_eq!(settings.api_url, GITHUB_API_URL);
}

#[test]
fn test_missing_token_and_organization() {
    let result = ClientSettings::resolve(&Config::default(), env_of(&[]));
    assert!(matches!(result, Err(GitHubError::TokenNotFound)));

    let result = ClientSettings::resolve(&Config::default(), env_of(&[("GITHUB_TOKEN", "t")]));
    assert!(matches!(result, Err(GitHubError::OrganizationNotFound)));
}
