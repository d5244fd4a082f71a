use std::time::Duration;

use tracing::{error, info, warn};

use crate::page::{FeedbackKind, PageSurface};
use crate::services::activities_api::{ActivitiesApi, ActivitiesApiError, Mutation};
use crate::services::catalog_view;

pub const FEEDBACK_HIDE_DELAY: Duration = Duration::from_secs(5);
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_MESSAGE: &str = "Failed to unregister. Please try again.";

/// Loads the catalog into a page and relays sign-up/unregister requests.
///
/// Requests are not serialized: overlapping calls each write to the page when
/// they finish, so the last one to resolve determines what is shown.
pub struct ActivityClient<A, S> {
    api: A,
    surface: S,
}

impl<A, S> ActivityClient<A, S>
where
    A: ActivitiesApi,
    S: PageSurface + Clone + 'static,
{
    pub fn new(api: A, surface: S) -> Self {
        Self { api, surface }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replaces the activity list and the selection options with a fresh
    /// catalog. On failure only the list is replaced, with an error notice.
    pub async fn load_catalog(&self) {
        let catalog = match self.api.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Error fetching activities: {}", e);
                self.surface
                    .replace_activity_list(catalog_view::render_load_failure());
                return;
            }
        };

        let markup = match catalog_view::render_activity_list(&catalog) {
            Ok(markup) => markup,
            Err(e) => {
                error!("Rendering activities failed: {}", e);
                self.surface
                    .replace_activity_list(catalog_view::render_load_failure());
                return;
            }
        };

        self.surface.replace_activity_list(markup);
        self.surface
            .replace_activity_options(catalog_view::build_options(&catalog));
        info!(activities = catalog.len(), "📋 Catalog rendered");
    }

    /// Refetch entry point shared by both mutations.
    pub async fn refresh(&self) {
        self.load_catalog().await;
    }

    pub async fn sign_up(&self, activity: &str, email: &str) {
        self.relay(Mutation::SignUp, activity, email).await;
    }

    pub async fn unregister(&self, activity: &str, email: &str) {
        self.relay(Mutation::Unregister, activity, email).await;
    }

    async fn relay(&self, mutation: Mutation, activity: &str, email: &str) {
        match self.api.mutate(mutation, activity, email).await {
            Ok(reply) => {
                info!(action = mutation.as_str(), activity, "✅ {}", reply.message);
                self.surface.show_feedback(FeedbackKind::Success, reply.message);
                if mutation == Mutation::SignUp {
                    self.surface.reset_signup_form();
                }
                self.schedule_feedback_hide();
                self.refresh().await;
            }
            Err(ActivitiesApiError::Rejected { status, detail }) => {
                warn!(
                    action = mutation.as_str(),
                    activity,
                    %status,
                    "Upstream rejected request: {}",
                    detail.as_deref().unwrap_or("-")
                );
                let text = detail.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
                self.surface.show_feedback(FeedbackKind::Error, text);
                self.schedule_feedback_hide();
            }
            Err(e) => {
                error!(action = mutation.as_str(), activity, "Request failed: {}", e);
                self.surface
                    .show_feedback(FeedbackKind::Error, failure_message(mutation).to_string());
                self.schedule_feedback_hide();
            }
        }
    }

    // Never cancelled; a later message can be hidden by an earlier timer.
    fn schedule_feedback_hide(&self) {
        let surface = self.surface.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FEEDBACK_HIDE_DELAY).await;
            surface.hide_feedback();
        });
    }
}

fn failure_message(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::SignUp => SIGNUP_FAILED_MESSAGE,
        Mutation::Unregister => UNREGISTER_FAILED_MESSAGE,
    }
}
