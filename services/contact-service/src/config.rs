use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use std::env;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub(crate) const ADDR_VAR: &str = "CONTACT_SERVICE_ADDR";
pub(crate) const ORIGIN_VAR: &str = "CONTACT_ALLOWED_ORIGIN";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Listener and CORS settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceConfig {
    pub(crate) addr: SocketAddr,
    pub(crate) allowed_origin: Option<String>,
}

impl ServiceConfig {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var(ADDR_VAR).ok(), env::var(ORIGIN_VAR).ok())
    }

    fn from_vars(addr: Option<String>, origin: Option<String>) -> anyhow::Result<Self> {
        let addr = addr
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{ADDR_VAR} is not a socket address: {addr}"))?;

        let allowed_origin = origin
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self {
            addr,
            allowed_origin,
        })
    }

    /// Any origin may post unless one is pinned.
    pub(crate) fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        let Some(origin) = &self.allowed_origin else {
            return Ok(CorsLayer::permissive());
        };

        let origin = HeaderValue::from_str(origin)
            .with_context(|| format!("{ORIGIN_VAR} is not a valid header value"))?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_8080() -> anyhow::Result<()> {
        let config = ServiceConfig::from_vars(None, None)?;
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.allowed_origin, None);
        Ok(())
    }

    #[test]
    fn blank_values_fall_back() -> anyhow::Result<()> {
        let config = ServiceConfig::from_vars(Some("  ".to_owned()), Some(" ".to_owned()))?;
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.allowed_origin, None);
        Ok(())
    }

    #[test]
    fn reads_explicit_values() -> anyhow::Result<()> {
        let config = ServiceConfig::from_vars(
            Some("127.0.0.1:9000".to_owned()),
            Some("https://folio.example".to_owned()),
        )?;
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.allowed_origin.as_deref(), Some("https://folio.example"));
        config.cors_layer()?;
        Ok(())
    }

    #[test]
    fn rejects_malformed_address() {
        let result = ServiceConfig::from_vars(Some("localhost".to_owned()), None);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_origin_with_control_characters() -> anyhow::Result<()> {
        let config = ServiceConfig::from_vars(None, Some("https://a\nb".to_owned()))?;
        assert!(config.cors_layer().is_err());
        Ok(())
    }
}
