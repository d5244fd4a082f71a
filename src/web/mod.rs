pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use tracing::warn;

use crate::config::Config;
use crate::page::Page;
use crate::services::activities_api::HttpActivitiesApi;
use crate::services::activity_client::ActivityClient;

pub type SignupClient = ActivityClient<HttpActivitiesApi, Page>;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SignupClient>,
    pub page: Page,
}

impl AppState {
    pub fn new(api: HttpActivitiesApi) -> Self {
        let page = Page::new();
        let client = Arc::new(ActivityClient::new(api, page.clone()));
        Self { client, page }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::index_handler))
        .route("/signup", post(routes::page::signup_handler))
        .route("/unregister", post(routes::page::unregister_handler))
        .route("/refresh", post(routes::page::refresh_handler))
        .route("/health", get(routes::health::health_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// Binds the configured endpoint, or the next port up if that one is taken.
pub async fn bind_listener(config: &Config) -> std::io::Result<TcpListener> {
    let (host, port) = config.bind_endpoint();
    match TcpListener::bind((host, port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some((host, fallback)) = config.fallback_endpoint() else {
                return Err(e);
            };
            warn!("⚠️  Could not bind {}:{}: {}. Trying port {}", host, port, e, fallback);
            TcpListener::bind((host, fallback)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> Config {
        Config {
            activities_api_url: "http://127.0.0.1:8000".to_string(),
            host: host.to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn binds_host_names() {
        let listener = bind_listener(&config("localhost", 0)).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn taken_port_moves_to_the_next_one() {
        let taken = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();
        if port == u16::MAX {
            return;
        }

        let listener = bind_listener(&config("127.0.0.1", port)).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port + 1);
    }

    #[tokio::test]
    async fn taken_last_port_is_an_error() {
        let Ok(_taken) = TcpListener::bind(("127.0.0.1", u16::MAX)).await else {
            return;
        };
        assert!(bind_listener(&config("127.0.0.1", u16::MAX)).await.is_err());
    }
}
