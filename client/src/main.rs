//! ReviewHub headless client
//!
//! Restores the server session and loads the first browse page, logging what
//! the store ends up holding. Useful as a smoke check against a running API.

use reviewhub_client::pages::LoadStatus;
use reviewhub_client::{telemetry, App, Config};
use shared::view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    telemetry::init_tracing(&config.logging);

    tracing::info!("Starting ReviewHub client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("API: {}", config.api.base_url);

    let app = App::new(config)?;

    if !app.restore_session().await? {
        tracing::info!("Browsing anonymously");
    }

    let mut browse = app.browse_page();
    browse.mount();
    match browse.settle().await {
        LoadStatus::Loaded => {
            let state = app.state();
            for business in view::browse_list(&state) {
                tracing::info!(
                    id = business.id,
                    name = %business.name,
                    rating = %view::rating_label(business),
                    "business"
                );
            }
            tracing::info!(
                page = state.businesses.pagination.page,
                size = state.businesses.pagination.size,
                count = state.businesses.browse.len(),
                "browse page loaded"
            );
        }
        LoadStatus::Failed(message) => tracing::warn!("{}", message),
        other => tracing::debug!(status = ?other, "browse page not loaded"),
    }

    Ok(())
}
