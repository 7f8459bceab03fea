use crate::error::AuditError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_FORMAT: &str = "md";

const ALLOWED_FORMATS: [&str; 3] = ["md", "json", "flat"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    pub fetch: Option<FetchConfig>,
    pub server: Option<ServerConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuditConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        match &self.fetch {
            Some(fetch) => FetchSettings {
                user_agent: fetch.user_agent.clone().unwrap_or(defaults.user_agent),
                timeout: fetch
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
            },
            None => defaults,
        }
    }

    pub fn bind_address(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|server| server.bind.as_deref())
            .unwrap_or(DEFAULT_BIND)
    }

    /// Listen address for `serve` when no `--bind` is given. A configured
    /// `server.bind` wins; otherwise `port` (from `PORT`) is served on all
    /// interfaces.
    pub fn serve_address(&self, port: Option<&str>) -> String {
        let configured = self
            .server
            .as_ref()
            .and_then(|server| server.bind.as_deref());
        match (configured, port.map(str::trim).filter(|p| !p.is_empty())) {
            (Some(bind), _) => bind.to_string(),
            (None, Some(port)) => format!("0.0.0.0:{port}"),
            (None, None) => DEFAULT_BIND.to_string(),
        }
    }

    pub fn default_format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|report| report.default_format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if let Some(fetch) = &self.fetch {
            if let Some(timeout_secs) = fetch.timeout_secs {
                if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECS {
                    return Err(AuditError::ConfigParse(format!(
                        "fetch.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"
                    )));
                }
            }
            if let Some(user_agent) = &fetch.user_agent {
                if user_agent.trim().is_empty() {
                    return Err(AuditError::ConfigParse(
                        "fetch.user_agent must not be blank".to_string(),
                    ));
                }
            }
        }

        let bind = self.bind_address();
        if bind.parse::<SocketAddr>().is_err() {
            return Err(AuditError::ConfigParse(format!(
                "server.bind is not a socket address: {bind}"
            )));
        }

        let format = self.default_format();
        if !ALLOWED_FORMATS.contains(&format) {
            return Err(AuditError::ConfigParse(format!(
                "unsupported report.default_format: {format}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AuditConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.fetch_settings(), FetchSettings::default());
        assert_eq!(cfg.bind_address(), DEFAULT_BIND);
        assert_eq!(cfg.default_format(), "md");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn serve_address_falls_back_to_port() {
        let cfg = AuditConfig::default();
        assert_eq!(cfg.serve_address(Some("5000")), "0.0.0.0:5000");
        assert_eq!(cfg.serve_address(Some("  ")), DEFAULT_BIND);
        assert_eq!(cfg.serve_address(None), DEFAULT_BIND);
    }

    #[test]
    fn configured_bind_beats_port() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[server]
bind = "127.0.0.1:9000"
"#,
        )
        .expect("config should parse");
        assert_eq!(cfg.serve_address(Some("5000")), "127.0.0.1:9000");
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[fetch]
user_agent = "aeo-audit/0.1"
timeout_secs = 5

[server]
bind = "127.0.0.1:9000"

[report]
default_format = "json"
"#;
        let cfg: AuditConfig = toml::from_str(toml_str).expect("full config should parse");
        let fetch = cfg.fetch_settings();
        assert_eq!(fetch.user_agent, "aeo-audit/0.1");
        assert_eq!(fetch.timeout, Duration::from_secs(5));
        assert_eq!(cfg.bind_address(), "127.0.0.1:9000");
        assert_eq!(cfg.default_format(), "json");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_fetch_section_keeps_other_defaults() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[fetch]
timeout_secs = 30
"#,
        )
        .expect("config should parse");
        let fetch = cfg.fetch_settings();
        assert_eq!(fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(fetch.timeout, Duration::from_secs(30));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[fetch]
timeout_secs = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("fetch.timeout_secs"));
    }

    #[test]
    fn validate_rejects_blank_user_agent() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[fetch]
user_agent = "  "
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_bind_address() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[server]
bind = "localhost"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("server.bind"));
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[report]
default_format = "sarif"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.default_format"));
    }
}
