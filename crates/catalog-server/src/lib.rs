mod cors;
mod envelope;

use std::net::SocketAddr;

use axum::Router;
use catalog_config::{Config, ServerConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the item store cannot be seeded
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();
        let store = catalog_items::build_store(&config).await?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health));
        }

        // Item routes
        app = app.merge(catalog_items::endpoint_router().with_state(store));

        // Fallbacks must be registered after every route they cover
        app = app
            .fallback(envelope::route_not_found)
            .method_not_allowed_fallback(envelope::method_not_allowed);

        Ok(Self {
            router: apply_layers(app, &config.server),
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the configured listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Liveness probe, answered with a plain `ok`
async fn health() -> &'static str {
    "ok"
}

/// Apply middleware layers (innermost first)
fn apply_layers(mut app: Router, config: &ServerConfig) -> Router {
    // Panics become the generic internal error envelope
    app = app.layer(CatchPanicLayer::custom(envelope::panic_response));

    // Any error body that is not an envelope gets rewritten
    app = app.layer(axum::middleware::from_fn(envelope::envelope_guard));

    // Tracing
    app = app.layer(TraceLayer::new_for_http());

    // CORS
    if let Some(ref cors_config) = config.cors {
        app = app.layer(cors::cors_layer(cors_config));
    }

    app
}
