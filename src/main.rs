use std::sync::Arc;

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;
use txledger::{
    api::{self, AppState},
    config::{CliArgs, Config, LoggingConfig},
    service::TransactionService,
    storage::SkipListStorage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);
    init_tracing(&config.logging);

    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Metrics recorder not installed");
            None
        }
    };

    let storage = Arc::new(SkipListStorage::new());
    let service = Arc::new(TransactionService::new(storage));
    let state = AppState::new(service, config.api.default_page_size).with_metrics(metrics);
    let app = api::router(state);

    let addr = config.listen_addr()?;
    tracing::info!(%addr, "API listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level {:?}: {}", logging.level, e);
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
