use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub upstream: Upstream,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Upstream {
    /// Root of the paste service, without the API path.
    pub base_url: String,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
        }
    }
}

impl Default for Upstream {
    fn default() -> Self {
        Upstream {
            base_url: "https://pastefy.app".to_owned(),
        }
    }
}

impl Server {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Config {
    /// Load the config from a TOML file, falling back to defaults if it doesn't exist.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let source = match tokio::fs::read_to_string(path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("config file '{}' not found, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        Self::parse(&source).with_context(|| format!("failed to deserialize {}", path.display()))
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.upstream.base_url, "https://pastefy.app");
    }

    #[test]
    fn partial_sections_are_filled_in() {
        let config = Config::parse(
            r#"
            [server]
            port = 8080

            [upstream]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.upstream.base_url, "http://localhost:9000");
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(Config::parse("[server]\nport = \"high\"").is_err());
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let config = Config::load("definitely/not/here.toml").await.unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
