#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use activity_signup::models::{ActivityCatalog, ActivityDetails};

/// Activities service stand-in with the same status codes and bodies as the
/// real one.
#[derive(Clone, Default)]
pub struct UpstreamState {
    pub activities: Arc<Mutex<ActivityCatalog>>,
    pub catalog_hits: Arc<AtomicUsize>,
}

impl UpstreamState {
    pub fn catalog_hits(&self) -> usize {
        self.catalog_hits.load(Ordering::SeqCst)
    }

    pub fn participants(&self, name: &str) -> Vec<String> {
        self.activities
            .lock()
            .get(name)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }
}

pub struct Upstream {
    pub base_url: String,
    pub state: UpstreamState,
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

pub fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> ActivityDetails {
    ActivityDetails {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn school_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Chess Club",
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class",
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &[],
        ),
    );
    catalog.insert(
        "Art & Craft",
        activity("Paint & build", "Wednesdays", 1, &[]),
    );
    catalog
}

async fn list_activities(State(state): State<UpstreamState>) -> impl IntoResponse {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    let activities = state.activities.lock().clone();
    Json(activities)
}

async fn signup(
    State(state): State<UpstreamState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> impl IntoResponse {
    let mut activities = state.activities.lock();
    let Some(activity) = activities.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Activity not found" })),
        );
    };
    if activity.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is already signed up for this activity" })),
        );
    }
    activity.participants.push(query.email.clone());
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Signed up {} for {}", query.email, name) })),
    )
}

async fn unregister(
    State(state): State<UpstreamState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> impl IntoResponse {
    let mut activities = state.activities.lock();
    let Some(activity) = activities.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Activity not found" })),
        );
    };
    let Some(pos) = activity.participants.iter().position(|p| *p == query.email) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is not registered for this activity" })),
        );
    };
    activity.participants.remove(pos);
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Unregistered {} from {}", query.email, name) })),
    )
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn spawn_upstream(catalog: ActivityCatalog) -> Upstream {
    let state = UpstreamState {
        activities: Arc::new(Mutex::new(catalog)),
        catalog_hits: Arc::default(),
    };
    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", post(unregister))
        .with_state(state.clone());
    Upstream {
        base_url: serve(app).await,
        state,
    }
}

/// Answers every request with a plain-text 500, like a crashed proxy.
pub async fn spawn_plain_text_upstream() -> String {
    let app = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    });
    serve(app).await
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
