use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        self.addr_with_port(self.port)
    }

    // Used when the configured port is taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        self.addr_with_port(self.port.wrapping_add(1))
    }

    fn addr_with_port(&self, port: u16) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("cannot parse listen address {}:{}", self.host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("STATIC_DIR", "/srv/site"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.fallback_addr().unwrap().to_string(), "0.0.0.0:9101");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_host_is_an_error() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "not a host")]));
        assert!(config.addr().is_err());
    }
}
