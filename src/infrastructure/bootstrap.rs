//! Composition root: config to order log to recommender to cold start.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::adapter::inbound::http;
use crate::adapter::outbound::csv::CsvOrderLog;
use crate::application::service::Recommender;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::recommendation::RecommendationService;
use crate::port::outbound::order_log::OrderLog;

/// Open the configured order file and build an untrained recommender.
pub fn build_recommender(config: &Config) -> Result<Arc<Recommender>> {
    let log: Arc<dyn OrderLog> = Arc::new(CsvOrderLog::new(&config.data.orders_path));
    let recommender = Recommender::open(log, config.recommender_settings())?;
    Ok(Arc::new(recommender))
}

/// Train once and report the outcome.
pub fn cold_start(recommender: &Recommender) -> bool {
    let trained = recommender.retrain();
    if trained {
        info!(
            products = recommender.product_count(),
            "Model trained"
        );
    } else {
        error!("Cold-start training failed; model is not ready");
    }
    trained
}

/// Run [`cold_start`] on the blocking pool.
pub fn spawn_cold_start(recommender: Arc<Recommender>) -> JoinHandle<bool> {
    tokio::task::spawn_blocking(move || cold_start(&recommender))
}

/// Build the recommender, start cold-start training and serve HTTP.
///
/// The listener comes up immediately; queries answer "not ready" until the
/// background training pass publishes a model.
pub async fn run_server(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let recommender = build_recommender(config)?;
    spawn_cold_start(Arc::clone(&recommender));

    let service: Arc<dyn RecommendationService> = recommender;
    http::serve(addr, service).await
}
