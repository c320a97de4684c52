//! Board configuration, resolved once at startup.

/// Compiled-in default job service (the local WhatsApp intake service).
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Everything the loader needs, resolved once and threaded explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConfig {
    /// Base URL of the job service. `None` skips the network entirely and
    /// serves the fallback set.
    pub service_base_url: Option<String>,
    /// Referral code scoping the visible set to the posting it confirms.
    pub referral_code: Option<String>,
}

impl BoardConfig {
    /// Resolve from the startup inputs: an optional service override, the
    /// offline switch, and an optional referral code.
    pub fn resolve(api: Option<String>, offline: bool, referral_code: Option<String>) -> Self {
        let service_base_url = if offline {
            None
        } else {
            Some(api.unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()))
        };

        Self {
            service_base_url,
            referral_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_compiled_in_service() {
        let config = BoardConfig::resolve(None, false, None);
        assert_eq!(config.service_base_url.as_deref(), Some(DEFAULT_SERVICE_URL));
        assert_eq!(config.referral_code, None);
    }

    #[test]
    fn override_takes_precedence() {
        let config = BoardConfig::resolve(Some("http://jobs.example".to_string()), false, None);
        assert_eq!(config.service_base_url.as_deref(), Some("http://jobs.example"));
    }

    #[test]
    fn offline_clears_the_service_url_even_with_an_override() {
        let config = BoardConfig::resolve(Some("http://jobs.example".to_string()), true, None);
        assert_eq!(config.service_base_url, None);
    }
}
