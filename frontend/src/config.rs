//! Runtime configuration: backend URL and (desktop) data directory.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Where the desktop build keeps its JSON files. Unused in the browser.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Read `FESTBOOK_API_URL` / `FESTBOOK_DATA_DIR`, falling back to defaults.
    /// The browser has no process environment, so the URL is baked in at build time there.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let api = option_env!("FESTBOOK_API_URL").map(String::from);
        #[cfg(not(target_arch = "wasm32"))]
        let api = std::env::var("FESTBOOK_API_URL").ok();

        #[cfg(target_arch = "wasm32")]
        let data_dir: Option<PathBuf> = None;
        #[cfg(not(target_arch = "wasm32"))]
        let data_dir = std::env::var_os("FESTBOOK_DATA_DIR").map(PathBuf::from);

        Self::from_values(api.as_deref(), data_dir)
    }

    pub fn from_values(api_base_url: Option<&str>, data_dir: Option<PathBuf>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base_url,
            data_dir: data_dir.unwrap_or_else(default_data_dir),
        }
    }

    pub fn events_url(&self) -> String {
        format!("{}/api/events", self.api_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("festbook"))
        .unwrap_or_else(|| PathBuf::from(".festbook"))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}
