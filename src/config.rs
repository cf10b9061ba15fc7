use crate::errors::ConfigError;
use crate::region::{DEFAULT_REGION_ID, DisplayRegion, ResponsePolicy};
use crate::state::{DEFAULT_TAB, DEFAULT_TIME_PERIOD, SessionState};
use std::{env, time::Duration};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub base_url: Url,
    pub region_id: String,
    pub default_tab: String,
    pub default_time_period: String,
    pub response_policy: ResponsePolicy,
    pub request_timeout: Option<Duration>,
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves every setting through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_url = var("FRAGMENT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::BaseUrl {
            value: raw_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrlNotHierarchical(raw_url));
        }

        let response_policy = match var("FRAGMENT_RESPONSE_POLICY") {
            Some(value) => value
                .parse::<ResponsePolicy>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "FRAGMENT_RESPONSE_POLICY",
                    value,
                })?,
            None => ResponsePolicy::default(),
        };

        let request_timeout = match var("FRAGMENT_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "FRAGMENT_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => None,
        };

        Ok(Self {
            base_url,
            region_id: var("FRAGMENT_REGION").unwrap_or_else(|| DEFAULT_REGION_ID.to_string()),
            default_tab: var("FRAGMENT_DEFAULT_TAB").unwrap_or_else(|| DEFAULT_TAB.to_string()),
            default_time_period: var("FRAGMENT_DEFAULT_PERIOD")
                .unwrap_or_else(|| DEFAULT_TIME_PERIOD.to_string()),
            response_policy,
            request_timeout,
        })
    }

    pub fn session(&self) -> SessionState {
        SessionState::new(&self.default_tab, &self.default_time_period)
    }

    pub fn region(&self) -> DisplayRegion {
        DisplayRegion::new(&self.region_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Result<LoaderConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LoaderConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.region_id, "content");
        assert_eq!(config.session(), SessionState::default());
        assert_eq!(config.response_policy, ResponsePolicy::LatestOnly);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = resolve(&[
            ("FRAGMENT_BASE_URL", "https://stats.example.com/app/"),
            ("FRAGMENT_REGION", "main"),
            ("FRAGMENT_DEFAULT_TAB", "top-tracks"),
            ("FRAGMENT_DEFAULT_PERIOD", "long_term"),
            ("FRAGMENT_RESPONSE_POLICY", "last-writer-wins"),
            ("FRAGMENT_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://stats.example.com/app/");
        assert_eq!(config.region().id(), "main");
        assert_eq!(config.session(), SessionState::new("top-tracks", "long_term"));
        assert_eq!(config.response_policy, ResponsePolicy::LastWriterWins);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = resolve(&[("FRAGMENT_DEFAULT_TAB", "  "), ("FRAGMENT_TIMEOUT_SECS", "")]).unwrap();
        assert_eq!(config.default_tab, "statistics");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            resolve(&[("FRAGMENT_BASE_URL", "not a url")]),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            resolve(&[("FRAGMENT_BASE_URL", "mailto:someone@example.com")]),
            Err(ConfigError::BaseUrlNotHierarchical(_))
        ));
        assert!(matches!(
            resolve(&[("FRAGMENT_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidValue { name: "FRAGMENT_TIMEOUT_SECS", .. })
        ));
        assert!(matches!(
            resolve(&[("FRAGMENT_RESPONSE_POLICY", "newest")]),
            Err(ConfigError::InvalidValue { name: "FRAGMENT_RESPONSE_POLICY", .. })
        ));
    }
}
