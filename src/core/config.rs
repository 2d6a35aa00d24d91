//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin used for canonical/OG URLs
    /// Example: https://silentinstall.com
    pub public_origin: Option<String>,

    /// Analytics write key; page-view tracking is disabled when unset
    pub analytics_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_origin: std::env::var("PUBLIC_ORIGIN").ok(),
            analytics_key: std::env::var("ANALYTICS_KEY").ok(),
        }
    }

    /// Check if analytics is configured
    pub fn has_analytics(&self) -> bool {
        self.analytics_key.is_some()
    }

    /// Public origin, falling back to the production domain
    pub fn public_origin(&self) -> &str {
        self.public_origin
            .as_deref()
            .unwrap_or("https://silentinstall.com")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
