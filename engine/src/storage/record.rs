use serde::Serialize;

/// One course as read from the source. Never mutated once it is in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub key: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(key: impl Into<String>, title: impl Into<String>, prerequisites: Vec<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            prerequisites,
        }
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// `"<key>, <title>"`, the line used by both the listing and the detail view.
    pub fn headline(&self) -> String {
        format!("{}, {}", self.key, self.title)
    }
}
