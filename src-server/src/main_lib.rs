use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use feedback_core::{
    db,
    enrichment::{EnrichmentService, EnrichmentServiceTrait},
    feedback::{FeedbackRepository, FeedbackService, FeedbackServiceTrait},
};

pub struct AppState {
    pub feedback_service: Arc<dyn FeedbackServiceTrait + Send + Sync>,
    pub enrichment_service: Arc<dyn EnrichmentServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let feedback_repo = Arc::new(FeedbackRepository::new(pool));
    let feedback_service = Arc::new(FeedbackService::new(feedback_repo.clone()));
    let enrichment_service = Arc::new(EnrichmentService::new(
        feedback_repo,
        config.webhook_url.clone(),
    ));

    Ok(Arc::new(AppState {
        feedback_service,
        enrichment_service,
    }))
}
