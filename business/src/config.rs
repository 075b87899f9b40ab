//! Environment configuration.

/// Process-wide configuration for the document-store backend.
///
/// Injected once at startup and carried in the app state; there is no
/// teardown.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_base_url: String,
}

impl AppConfig {
    pub fn new(store_base_url: String) -> Self {
        Self { store_base_url }
    }

    /// Base URL for all document-store endpoints, without a trailing slash.
    pub fn store_url(&self) -> &str {
        self.store_base_url.trim_end_matches('/')
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_base_url: if cfg!(feature = "env_test") {
                "https://api-test.parkdesk.app".to_string()
            } else {
                "https://api.parkdesk.app".to_string()
            },
        }
    }
}
