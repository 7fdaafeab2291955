use anyhow::Context;
use pop_report_api::api::openapi::ApiDoc;
use pop_report_api::config::AppConfig;
use pop_report_api::observability::init_tracing;
use tracing::info;
use utoipa::OpenApi;

/// Prints the OpenAPI document for the report schemas on stdout.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;
    config
        .validate()
        .context("invalid report configuration")?;

    info!(
        lookback_days = config.reports.lookback_days,
        pop_default_max_per_page = config.reports.pop_default_max_per_page,
        impression_default_max_per_page = config.reports.impression_default_max_per_page,
        "exporting report schemas"
    );

    let document = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to serialize OpenAPI document")?;
    println!("{document}");

    Ok(())
}
