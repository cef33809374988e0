mod handlers;
mod logging;
mod models;
mod router;
mod state;

use clap::Parser;
use rea_ingest::sources::austin::AustinApi;
use rea_ingest::sources::nyc::NycSalesApi;
use state::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "rea-web")]
#[command(about = "Real-estate market analytics over municipal open data portals")]
#[command(version = "0.1.0")]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Bind port
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let app_state = AppState {
        austin: Arc::new(AustinApi::from_env()?),
        nyc: Arc::new(NycSalesApi::from_env()?),
    };

    let app = router::app_router(app_state);

    let bind_addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
