//! Server configuration.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Configuration for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host (IP address) to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve the socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ApiError::Config(format!("invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
