//! AURA: villa rental earnings estimator
//!
//! Entry point. Loads configuration, initialises structured logging,
//! checks the bundled estimation table, wires the inquiry relay and
//! serves the HTTP API until ctrl-c.

use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};

use aura::api::{self, ApiState};
use aura::config;
use aura::estimation::EstimationTable;
use aura::inquiry::client::HttpInquiryClient;

const BANNER: &str = r#"
    _   _   _ ____      _
   / \ | | | |  _ \    / \
  / _ \| | | | |_) |  / _ \
 / ___ \ |_| |  _ <  / ___ \
/_/   \_\___/|_| \_\/_/   \_\

  Villas Bali · rental earnings estimator
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        service = %cfg.service.name,
        bind = %cfg.service.bind,
        port = cfg.service.port,
        usd_to_idr = cfg.currency.usd_to_idr,
        default_currency = %cfg.currency.default_display,
        "AURA starting up"
    );

    // -- Estimation table --------------------------------------------------

    let table = EstimationTable::new();
    table
        .validate()
        .context("Bundled estimation table is inconsistent")?;
    info!(rows = table.len(), "Estimation table loaded");

    let rates = cfg.exchange_rates()?;

    // -- Inquiry relay -----------------------------------------------------

    let api_key = match cfg.inquiries.api_key_env.as_deref() {
        Some(env) => match config::AppConfig::resolve_env(env) {
            Ok(key) => Some(SecretString::new(key)),
            Err(_) => {
                warn!(env, "Inquiry API key not set, posting without Authorization header");
                None
            }
        },
        None => None,
    };

    let client = HttpInquiryClient::new(
        cfg.inquiries.endpoint.clone(),
        cfg.inquiry_timeout(),
        api_key,
    )?;
    info!(endpoint = client.endpoint(), timeout_secs = cfg.inquiries.timeout_secs, "Inquiry relay ready");

    // -- Serve ---------------------------------------------------------------

    let state = Arc::new(ApiState::new(
        table,
        rates,
        cfg.currency.default_display,
        Arc::new(client),
    ));

    api::serve(state, cfg.socket_addr()?, shutdown_signal()).await?;

    info!("AURA shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Initialise tracing. Set `AURA_LOG_JSON` for JSON lines, `RUST_LOG` to filter.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("aura=info"));

    let json_logging = std::env::var("AURA_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
