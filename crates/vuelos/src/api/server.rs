use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use super::build_router;
use crate::config::Config;
use crate::error::Result;
use crate::store::FlightStore;

/// The vuelos HTTP server.
#[derive(Debug)]
pub struct Server {
    config: Config,
    store: FlightStore,
}

impl Server {
    /// Create a server for the given configuration and store.
    #[must_use]
    pub fn new(config: Config, store: FlightStore) -> Self {
        Self { config, store }
    }

    /// Get the server configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the router (useful for testing).
    #[must_use]
    pub fn router(&self) -> axum::Router {
        build_router(self.store.clone(), self.config.request_timeout())
    }

    /// Serve requests until Ctrl-C is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener can't be bound or serving fails.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener can't be bound or serving fails.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.server.bind_addr).await?;
        info!("vuelos listening on {}", listener.local_addr()?);
        info!("Data file: {}", self.config.data_file().display());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("HTTP server has been shut down.");
        Ok(())
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("starting graceful shutdown...");
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;
    use crate::storage::MemoryRepository;

    fn test_server() -> Server {
        let mut config = Config::default();
        config.server.bind_addr = "127.0.0.1:0".parse().unwrap();
        Server::new(config, FlightStore::new(MemoryRepository::new()))
    }

    #[test]
    fn test_server_construction() {
        let server = test_server();
        assert_eq!(
            server.config().server.bind_addr,
            "127.0.0.1:0".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_router_builds() {
        let _router = test_server().router();
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let result = test_server().serve_with_shutdown(async {}).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut server = test_server();
        server.config.server.bind_addr = taken.local_addr().unwrap();

        assert!(server.serve_with_shutdown(async {}).await.is_err());
    }
}
