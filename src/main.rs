// JWKS server entry point
//
// Serves the public half of an in-memory RSA key set at
// /.well-known/jwks.json and issues RS256-signed JWTs at /auth.
// Keys are regenerated on every start; nothing is persisted.

use jwks_server::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = server::start_server("0.0.0.0:8080").await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
