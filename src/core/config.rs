//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical site URL used in SEO tags and sitemaps
    /// Example: https://terramark.io
    pub site_url: Option<String>,

    /// Analytics measurement id, injected only when set
    pub analytics_id: Option<String>,

    /// Webhook URL demo-request leads are forwarded to by ops tooling
    pub leads_webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL").ok(),
            analytics_id: std::env::var("ANALYTICS_ID").ok(),
            leads_webhook_url: std::env::var("LEADS_WEBHOOK_URL").ok(),
        }
    }

    /// Check if a canonical site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Check if analytics is configured
    pub fn has_analytics(&self) -> bool {
        self.analytics_id.is_some()
    }

    /// Check if a leads webhook is configured
    pub fn has_leads_webhook(&self) -> bool {
        self.leads_webhook_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            site_url: Some("https://terramark.io".to_string()),
            analytics_id: Some("G-TM0001".to_string()),
            leads_webhook_url: Some("https://hooks.example.com/leads".to_string()),
        };

        assert!(config.has_site_url());
        assert!(config.has_analytics());
        assert!(config.has_leads_webhook());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            site_url: None,
            analytics_id: None,
            leads_webhook_url: None,
        };

        assert!(!config.has_site_url());
        assert!(!config.has_analytics());
        assert!(!config.has_leads_webhook());
    }

    #[test]
    fn test_config_with_partial_fields() {
        let config = Config {
            site_url: Some("https://staging.terramark.io".to_string()),
            analytics_id: None,
            leads_webhook_url: None,
        };

        assert!(config.has_site_url());
        assert!(!config.has_analytics());
        assert!(!config.has_leads_webhook());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we only verify the
        // accessors work for whatever is set.
        let config = Config::from_env();

        let _ = config.has_site_url();
        let _ = config.has_analytics();
        let _ = config.has_leads_webhook();
    }

    #[test]
    fn test_empty_string_values_still_count_as_set() {
        let config = Config {
            site_url: Some(String::new()),
            analytics_id: Some(String::new()),
            leads_webhook_url: Some(String::new()),
        };

        assert!(config.has_site_url());
        assert!(config.has_analytics());
        assert!(config.has_leads_webhook());
    }
}
