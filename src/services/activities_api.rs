use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{ActivityCatalog, ErrorReply, MutationReply};

#[derive(Debug, Clone, Error)]
pub enum ActivitiesApiError {
    /// The request never produced a response body.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A response arrived but its body was not the JSON we expected.
    #[error("response from {url} is not valid JSON: {message}")]
    Decode { url: String, message: String },

    /// The upstream answered with a non-2xx status and a JSON body.
    #[error("upstream answered {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    SignUp,
    Unregister,
}

impl Mutation {
    /// Trailing path segment of the upstream endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Mutation::SignUp => "signup",
            Mutation::Unregister => "unregister",
        }
    }
}

#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ActivitiesApiError>;

    async fn mutate(
        &self,
        mutation: Mutation,
        activity: &str,
        email: &str,
    ) -> Result<MutationReply, ActivitiesApiError>;
}

/// `ActivitiesApi` over the upstream REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpActivitiesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpActivitiesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    pub fn mutation_url(&self, mutation: Mutation, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            mutation.as_str(),
            urlencoding::encode(email)
        )
    }
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ActivitiesApiError> {
        let url = self.catalog_url();
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failed(&url, e))?;
        read_json(&url, resp).await
    }

    async fn mutate(
        &self,
        mutation: Mutation,
        activity: &str,
        email: &str,
    ) -> Result<MutationReply, ActivitiesApiError> {
        let url = self.mutation_url(mutation, activity, email);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| transport_failed(&url, e))?;
        read_json(&url, resp).await
    }
}

fn transport_failed(url: &str, err: impl ToString) -> ActivitiesApiError {
    ActivitiesApiError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}

fn decode_failed(url: &str, err: impl ToString) -> ActivitiesApiError {
    ActivitiesApiError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(
    url: &str,
    resp: reqwest::Response,
) -> Result<T, ActivitiesApiError> {
    let status = resp.status();
    let body = resp.bytes().await.map_err(|e| transport_failed(url, e))?;
    debug!(%status, bytes = body.len(), "upstream response from {}", url);
    decode_body(url, status, &body)
}

/// Error bodies must be JSON too; a plain-text 500 page counts as a decode
/// failure, not as a rejection.
fn decode_body<T: DeserializeOwned>(
    url: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<T, ActivitiesApiError> {
    if !status.is_success() {
        let body: Value = serde_json::from_slice(body).map_err(|e| decode_failed(url, e))?;
        return Err(ActivitiesApiError::Rejected {
            status,
            detail: ErrorReply::from_json(&body).detail_text(),
        });
    }
    serde_json::from_slice(body).map_err(|e| decode_failed(url, e))
}
