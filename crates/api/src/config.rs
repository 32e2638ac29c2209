use camrelay_angelcam::api::{DEFAULT_API_URL, DEFAULT_STREAM_SCHEME};

use crate::auth::token::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session credential configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Upstream API configuration.
    pub angelcam: AngelcamConfig,
}

/// Where and how the relay reaches Angelcam.
#[derive(Debug, Clone)]
pub struct AngelcamConfig {
    /// Base API URL (default: `https://api.angelcam.com/v1`).
    pub api_url: String,
    /// Scheme for stream transport-control hosts (default: `https`).
    pub stream_scheme: String,
    /// Per-call upstream timeout in seconds (default: `30`).
    pub timeout_secs: u64,
    /// Host suffixes that transport controls may target. Empty allows any
    /// well-formed host.
    pub stream_domain_allowlist: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                       |
    /// |---------------------------|-------------------------------|
    /// | `HOST`                    | `0.0.0.0`                     |
    /// | `PORT`                    | `3000`                        |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                          |
    /// | `ANGELCAM_API_URL`        | `https://api.angelcam.com/v1` |
    /// | `ANGELCAM_STREAM_SCHEME`  | `https`                       |
    /// | `UPSTREAM_TIMEOUT_SECS`   | `30`                          |
    /// | `STREAM_DOMAIN_ALLOWLIST` | (empty)                       |
    ///
    /// See [`JwtConfig::from_env`] for the `JWT_*` variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let angelcam = AngelcamConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            angelcam,
        }
    }
}

impl AngelcamConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("ANGELCAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let stream_scheme = std::env::var("ANGELCAM_STREAM_SCHEME")
            .unwrap_or_else(|_| DEFAULT_STREAM_SCHEME.into());
        assert!(
            stream_scheme == "https" || stream_scheme == "http",
            "ANGELCAM_STREAM_SCHEME must be http or https"
        );

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let stream_domain_allowlist =
            split_list(&std::env::var("STREAM_DOMAIN_ALLOWLIST").unwrap_or_default());

        Self {
            api_url,
            stream_scheme,
            timeout_secs,
            stream_domain_allowlist,
        }
    }
}

/// Split a comma-separated env value, dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
