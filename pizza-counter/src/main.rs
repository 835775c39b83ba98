use std::sync::Arc;

use anyhow::Context;
use pizza_counter::CounterSession;
use pizza_order::PaymentOrchestrator;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the dialogue
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pizza_counter=warn,pizza_catalog=warn,pizza_order=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = pizza_store::Config::load().context("Failed to load config")?;
    let ledger = Arc::new(pizza_store::seed_ledger(&config));
    tracing::info!(stock = %ledger.snapshot(), "counter open");

    let mut session = CounterSession::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        ledger,
        PaymentOrchestrator::default(),
    );
    session.run().await
}
