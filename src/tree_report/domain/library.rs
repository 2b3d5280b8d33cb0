use serde::{Deserialize, Serialize};

/// Accumulated knowledge about one artifact, independent of version.
///
/// Fields other than `name` are empty until some source supplies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub new_location: String,
    pub latest: String,
    pub description: String,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_latest(mut self, latest: impl Into<String>) -> Self {
        self.latest = latest.into();
        self
    }

    pub fn with_new_location(mut self, new_location: impl Into<String>) -> Self {
        self.new_location = new_location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
