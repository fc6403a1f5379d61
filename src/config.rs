use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Base url of the lookup backend, without a trailing slash.
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub sign_in_url: String,
    pub sign_out_url: String,
    /// Header the identity proxy fills with the signed-in user's name.
    pub user_header: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a port number",
                value,
            })?,
            None => 8080,
        };

        let backend_url = var("SOCIOYT_BACKEND_URL")
            .unwrap_or_else(|| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "SOCIOYT_BACKEND_URL",
                expected: "an http(s) url",
                value: backend_url,
            });
        }

        let backend_timeout = match var("SOCIOYT_BACKEND_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "SOCIOYT_BACKEND_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value,
                    });
                }
            },
            None => Duration::from_secs(60),
        };

        let sign_in_url = var("SOCIOYT_SIGN_IN_URL").unwrap_or_else(|| "/sign-in".to_string());
        let sign_out_url = var("SOCIOYT_SIGN_OUT_URL").unwrap_or_else(|| "/sign-out".to_string());
        let user_header = var("SOCIOYT_USER_HEADER")
            .unwrap_or_else(|| "x-forwarded-user".to_string())
            .to_ascii_lowercase();

        Ok(Self {
            port,
            backend_url,
            backend_timeout,
            sign_in_url,
            sign_out_url,
            user_header,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend_timeout, Duration::from_secs(60));
        assert_eq!(config.sign_in_url, "/sign-in");
        assert_eq!(config.sign_out_url, "/sign-out");
        assert_eq!(config.user_header, "x-forwarded-user");
    }

    #[test]
    fn overrides_are_normalized() {
        let config = load(&[
            ("PORT", "9000"),
            ("SOCIOYT_BACKEND_URL", "https://api.example.com/"),
            ("SOCIOYT_BACKEND_TIMEOUT_SECS", "5"),
            ("SOCIOYT_USER_HEADER", "X-Auth-Name"),
            ("SOCIOYT_SIGN_OUT_URL", "https://id.example.com/logout"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.backend_timeout, Duration::from_secs(5));
        assert_eq!(config.user_header, "x-auth-name");
        assert_eq!(config.sign_out_url, "https://id.example.com/logout");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("SOCIOYT_BACKEND_URL", "ftp://nope")]).is_err());
        assert!(load(&[("SOCIOYT_BACKEND_TIMEOUT_SECS", "0")]).is_err());
    }
}
