// Server setup and route registration

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::endpoints::{auth_handler, jwks_handler, AppState};
use crate::types::KeyStore;

/// Create the application router with all endpoints.
/// Method routing gives 405 for wrong methods and 404 for unknown paths.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/.well-known/jwks.json", get(jwks_handler))
        .route("/auth", post(auth_handler))
        .with_state(state)
}

/// Generate the key store and serve until the listener fails.
/// Key generation failure is fatal; no server is started in that case.
pub async fn start_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = KeyStore::generate()?;
    tracing::info!(
        active_kid = %store.active.kid,
        expired_kid = %store.expired.kid,
        "generated key store"
    );

    let app = create_app(Arc::new(store));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("JWKS server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
