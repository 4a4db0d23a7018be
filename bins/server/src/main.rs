//! PayCalc API Server
//!
//! Main entry point for the fee and conversion calculator service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paycalc_api::{AppState, create_router};
use paycalc_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paycalc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        fee_percent = config.calculator.fee_percent,
        fixed_fee = config.calculator.fixed_fee,
        tax_percent = config.calculator.tax_percent,
        exchange_rate = config.calculator.exchange_rate,
        "Calculator defaults loaded"
    );

    let app = create_router(AppState::new(config.calculator));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
