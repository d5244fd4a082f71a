use std::error::Error;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use activity_signup::config::Config;
use activity_signup::services::activities_api::HttpActivitiesApi;
use activity_signup::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let api = HttpActivitiesApi::new(config.activities_api_url.clone());
    info!(upstream = api.base_url(), "Starting activity sign-up frontend");

    let state = AppState::new(api);

    // Page load: the first render needs a catalog.
    state.client.load_catalog().await;

    let app = web::router(state);
    let listener = web::bind_listener(&config).await?;

    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
