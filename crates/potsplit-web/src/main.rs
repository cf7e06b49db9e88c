//! potsplit-web entry point.
//!
//! Intentionally thin: parse flags, set up tracing, bind, serve. All
//! handlers live in `routes.rs`.

use std::net::SocketAddr;

use clap::Parser;
use potsplit_types::constants::DEFAULT_PORT;
use tracing::info;

/// Stateless buy-in splitter web frontend.
#[derive(Debug, Parser)]
#[command(name = "potsplit-web", version)]
struct Args {
    /// TCP port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_tracing();

    let app = potsplit_web::routes::build_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("potsplit-web listening on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
