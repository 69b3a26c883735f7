//! AppConfig defaults and normalization.

use festbook_frontend::config::{AppConfig, DEFAULT_API_URL};
use std::path::PathBuf;

#[test]
fn defaults_to_local_backend() {
    let config = AppConfig::from_values(None, Some(PathBuf::from("/tmp/festbook")));
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.events_url(), "http://localhost:8080/api/events");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/festbook"));
}

#[test]
fn strips_trailing_slashes_and_blank_values() {
    let config = AppConfig::from_values(Some("https://fest.example.org/ "), None);
    assert_eq!(config.events_url(), "https://fest.example.org/api/events");

    let blank = AppConfig::from_values(Some("   "), None);
    assert_eq!(blank.api_base_url, DEFAULT_API_URL);
}
