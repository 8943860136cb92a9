use derive_more::{AsRef, Display};

/// Exercise name as entered by the user.
///
/// Free text apart from being non-empty. Matching and deduplication are
/// case-insensitive, but the original spelling is preserved for display.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Case-insensitive substring match against a search pattern.
    ///
    /// The pattern is trimmed before matching. An empty pattern matches
    /// every name; callers that must reject empty input do so beforehand.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        self.0.to_lowercase().contains(pattern.to_lowercase().trim())
    }

    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}
