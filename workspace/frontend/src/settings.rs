use log::Level;
use std::cell::RefCell;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "carbonpace_";

/// Runtime settings of the dashboard.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    pub log_level: Level,

    /// Enabled when served from localhost
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

fn stored(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Defaults, adjusted for the current host and any `carbonpace_*`
    /// overrides found in localStorage.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(host) = stored(&storage, "api_host") {
                settings.api_host = host;
            }
            if let Some(port) = stored(&storage, "api_port").and_then(|p| p.parse().ok()) {
                settings.api_port = port;
            }
            if let Some(path) = stored(&storage, "api_path") {
                settings.api_path = path;
            }
            if let Some(https) = stored(&storage, "api_use_https") {
                settings.api_use_https = https.eq_ignore_ascii_case("true");
            }
            if let Some(level) = stored(&storage, "log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }
        }

        settings
    }

    /// Protocol, host, port and path prefix of the API.
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Call once at startup, before the logger is configured.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
