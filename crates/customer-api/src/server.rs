//! HTTP server implementation.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::routes;
use tokio::net::TcpListener;

/// The customer profile server.
pub struct CustomerServer {
    config: ServerConfig,
}

impl CustomerServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ApiError> {
        let addr = self.config.socket_addr()?;

        TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::StartupFailed(format!("failed to bind to {}: {}", addr, e)))
    }

    /// Serve the router on an already bound listener until the process exits.
    pub async fn serve(listener: TcpListener) -> Result<(), ApiError> {
        let addr = listener
            .local_addr()
            .map_err(|e| ApiError::StartupFailed(e.to_string()))?;
        tracing::info!(address = %addr, "customer-server listening");

        axum::serve(listener, routes::create_router())
            .await
            .map_err(|e| ApiError::StartupFailed(e.to_string()))
    }

    /// Bind and serve.
    pub async fn run(&self) -> Result<(), ApiError> {
        let listener = self.bind().await?;
        Self::serve(listener).await
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = CustomerServer::new(ServerConfig::default());
        assert_eq!(server.config().port, 5001);
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let server = CustomerServer::new(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        });
        let listener = server.bind().await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let server = CustomerServer::new(ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        });
        let err = server.bind().await.unwrap_err();
        assert!(matches!(err, ApiError::StartupFailed(_)));
    }

    #[tokio::test]
    async fn test_bind_invalid_host() {
        let server = CustomerServer::new(ServerConfig {
            host: "localhost:80".to_string(),
            port: 0,
        });
        let err = server.bind().await.unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
