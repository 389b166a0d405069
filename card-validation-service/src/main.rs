use card_validation_service::{
    config::CardValidationConfig,
    services::{init_metrics, store_from_config},
    startup::Application,
};
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = CardValidationConfig::from_env()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting card validation service"
    );

    let store = store_from_config(&config.store);
    let application = Application::build(config, store).await?;
    application.run_until_stopped().await
}
