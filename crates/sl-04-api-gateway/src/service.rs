//! API Gateway service - binds the listener and serves the router until
//! the shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::domain::{CorsConfig, GatewayConfig, GatewayError};
use crate::router::{build_router, AppState};

/// API Gateway service
pub struct ApiGatewayService {
    addr: SocketAddr,
    router: Router,
}

impl ApiGatewayService {
    /// Validates the listen address and builds the router.
    pub fn new(
        config: &GatewayConfig,
        cors: &CorsConfig,
        state: AppState,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            addr: config.socket_addr()?,
            router: build_router(state, cors),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| GatewayError::Bind {
                addr: self.addr,
                source,
            })?;
        self.serve_on(listener, shutdown).await
    }

    /// Serves on an already-bound listener (port 0 in tests).
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        info!(addr = %local, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
