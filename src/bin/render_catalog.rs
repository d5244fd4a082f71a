use dotenvy::dotenv;

use activity_signup::config::Config;
use activity_signup::services::activities_api::{ActivitiesApi, HttpActivitiesApi};
use activity_signup::services::catalog_view;

/// Fetches the catalog once and prints the rendered activity list.
#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let api = HttpActivitiesApi::new(config.activities_api_url);

    let catalog = match api.fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("fetching activities failed: {}", e);
            std::process::exit(1);
        }
    };

    match catalog_view::render_activity_list(&catalog) {
        Ok(markup) => {
            println!("{}", markup.trim());
            eprintln!("rendered {} activities", catalog.len());
        }
        Err(e) => {
            eprintln!("rendering activities failed: {}", e);
            std::process::exit(1);
        }
    }
}
