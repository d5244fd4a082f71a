use askama::Template;

use crate::models::ActivityCatalog;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

#[derive(Template)]
#[template(path = "activity_list.html")]
pub struct ActivityListTemplate<'a> {
    pub cards: &'a [ActivityCardView],
}

#[derive(Template)]
#[template(path = "load_failed.html")]
pub struct LoadFailedTemplate<'a> {
    pub message: &'a str,
}

pub fn build_cards(catalog: &ActivityCatalog) -> Vec<ActivityCardView> {
    catalog
        .iter()
        .map(|(name, details)| ActivityCardView {
            name: name.to_string(),
            description: details.description.clone(),
            schedule: details.schedule.clone(),
            spots_left: details.spots_left(),
            participants: details.participants.clone(),
        })
        .collect()
}

/// Placeholder first, then one option per activity in catalog order.
pub fn build_options(catalog: &ActivityCatalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder())
        .chain(catalog.iter().map(|(name, _)| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        }))
        .collect()
}

pub fn render_activity_list(catalog: &ActivityCatalog) -> askama::Result<String> {
    let cards = build_cards(catalog);
    ActivityListTemplate { cards: &cards }.render()
}

pub fn render_load_failure() -> String {
    LoadFailedTemplate {
        message: LOAD_FAILED_MESSAGE,
    }
    .render()
    .unwrap_or_else(|_| LOAD_FAILED_MESSAGE.to_string())
}
