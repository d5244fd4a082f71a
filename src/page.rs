//! The view state the client renders into.
//!
//! `PageSurface` is what `ActivityClient` writes to. `Page` is the shared
//! in-process implementation the web frontend renders documents from.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::services::catalog_view::SelectOption;

pub const LOADING_MARKUP: &str = "<p>Loading activities...</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Pre-escaped markup for the activity cards.
    pub activity_list: String,
    pub activity_options: Vec<SelectOption>,
    pub feedback: Option<Feedback>,
    pub form: SignupForm,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            activity_list: LOADING_MARKUP.to_string(),
            activity_options: vec![SelectOption::placeholder()],
            feedback: None,
            form: SignupForm::default(),
        }
    }
}

pub trait PageSurface: Send + Sync {
    fn replace_activity_list(&self, markup: String);
    fn replace_activity_options(&self, options: Vec<SelectOption>);
    fn show_feedback(&self, kind: FeedbackKind, text: String);
    fn hide_feedback(&self);
    fn reset_signup_form(&self);
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Arc<RwLock<PageSnapshot>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.read().clone()
    }

    /// Mirrors what the user typed into the sign-up form before it is sent.
    pub fn fill_signup_form(&self, activity: &str, email: &str) {
        let mut state = self.state.write();
        state.form.activity = activity.to_string();
        state.form.email = email.to_string();
    }
}

impl PageSurface for Page {
    fn replace_activity_list(&self, markup: String) {
        self.state.write().activity_list = markup;
    }

    fn replace_activity_options(&self, options: Vec<SelectOption>) {
        self.state.write().activity_options = options;
    }

    fn show_feedback(&self, kind: FeedbackKind, text: String) {
        self.state.write().feedback = Some(Feedback {
            kind,
            text,
            visible: true,
        });
    }

    /// Hides whatever message is current, even one newer than the timer that fired.
    fn hide_feedback(&self) {
        if let Some(feedback) = self.state.write().feedback.as_mut() {
            feedback.visible = false;
        }
    }

    fn reset_signup_form(&self) {
        self.state.write().form = SignupForm::default();
    }
}
