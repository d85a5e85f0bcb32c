use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Which backend the domain services talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// In-memory fixtures with simulated latency.
    Mock,
    /// Real HTTP calls against `api_base_url`.
    Live,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // API
    pub api_base_url: String,
    pub http_timeout_seconds: u64,

    // Session
    pub auth_token_storage_key: String,
    pub session_file: Option<PathBuf>,

    // Mock backend
    pub mode: ApiMode,
    pub mock_latency: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Environment::from_str(&lookup("ENV").unwrap_or_else(|| "dev".to_string()));

        // API
        let api_base_url = non_blank(lookup("OPJ_API_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        url::Url::parse(&api_base_url)
            .with_context(|| format!("OPJ_API_BASE_URL is not a valid URL: {api_base_url}"))?;
        let http_timeout_seconds = match lookup("OPJ_HTTP_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("OPJ_HTTP_TIMEOUT_SECONDS must be a whole number of seconds")?,
            None => 30,
        };

        // Session
        let auth_token_storage_key = non_blank(lookup("OPJ_AUTH_TOKEN_STORAGE_KEY"))
            .unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_string());
        let session_file = non_blank(lookup("OPJ_SESSION_FILE")).map(PathBuf::from);

        // Mock backend: anything but an explicit "false" keeps fixtures on
        let mode = match lookup("OPJ_USE_MOCK_API").as_deref().map(str::trim) {
            Some("false") => ApiMode::Live,
            _ => ApiMode::Mock,
        };
        let mock_latency_ms: u64 = match lookup("OPJ_MOCK_LATENCY_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("OPJ_MOCK_LATENCY_MS must be a whole number of milliseconds")?,
            None => 500,
        };

        Ok(Settings {
            env,
            api_base_url,
            http_timeout_seconds,
            auth_token_storage_key,
            session_file,
            mode,
            mock_latency: Duration::from_millis(mock_latency_ms),
        })
    }

    pub fn is_mock(&self) -> bool {
        self.mode == ApiMode::Mock
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings.env, Environment::Dev);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.auth_token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
        assert_eq!(settings.mode, ApiMode::Mock);
        assert_eq!(settings.mock_latency, Duration::from_millis(500));
        assert!(settings.session_file.is_none());
    }

    #[test]
    fn blank_values_use_fallbacks() {
        let settings = settings(&[
            ("OPJ_API_BASE_URL", "   "),
            ("OPJ_AUTH_TOKEN_STORAGE_KEY", ""),
        ])
        .unwrap();

        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.auth_token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
    }

    #[test]
    fn only_explicit_false_enables_live_mode() {
        assert_eq!(
            settings(&[("OPJ_USE_MOCK_API", "false")]).unwrap().mode,
            ApiMode::Live
        );
        assert_eq!(
            settings(&[("OPJ_USE_MOCK_API", "0")]).unwrap().mode,
            ApiMode::Mock
        );
        assert_eq!(
            settings(&[("OPJ_USE_MOCK_API", "true")]).unwrap().mode,
            ApiMode::Mock
        );
    }

    #[test]
    fn reads_overrides() {
        let settings = settings(&[
            ("ENV", "production"),
            ("OPJ_API_BASE_URL", " https://api.opjengenharia.com.br/v1 "),
            ("OPJ_AUTH_TOKEN_STORAGE_KEY", "opj_token"),
            ("OPJ_MOCK_LATENCY_MS", "0"),
            ("OPJ_HTTP_TIMEOUT_SECONDS", "5"),
            ("OPJ_SESSION_FILE", "/tmp/opj-session.json"),
        ])
        .unwrap();

        assert!(settings.env.is_prod());
        assert_eq!(settings.api_base_url, "https://api.opjengenharia.com.br/v1");
        assert_eq!(settings.auth_token_storage_key, "opj_token");
        assert_eq!(settings.mock_latency, Duration::ZERO);
        assert_eq!(settings.http_timeout_seconds, 5);
        assert_eq!(
            settings.session_file,
            Some(PathBuf::from("/tmp/opj-session.json"))
        );
    }

    #[test]
    fn rejects_malformed_numbers_and_urls() {
        assert!(settings(&[("OPJ_MOCK_LATENCY_MS", "soon")]).is_err());
        assert!(settings(&[("OPJ_API_BASE_URL", "not a url")]).is_err());
    }
}
