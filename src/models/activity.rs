use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One activity as the upstream returns it. The name is the catalog key and
/// is not repeated inside the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Sign-up order.
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Capacity minus roster size. Not clamped: an upstream that overfills an
    /// activity shows up as a negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities keyed by name, in the order the upstream sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog(IndexMap<String, ActivityDetails>);

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, details: ActivityDetails) {
        self.0.insert(name.into(), details);
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityDetails> {
        self.0.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityDetails)> {
        self.0.iter().map(|(name, details)| (name.as_str(), details))
    }
}

impl FromIterator<(String, ActivityDetails)> for ActivityCatalog {
    fn from_iter<T: IntoIterator<Item = (String, ActivityDetails)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
