use serde::{Deserialize, Serialize};

/// Trimmed contact form values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSnapshot {
    /// Builds a snapshot from raw field values, trimming surrounding whitespace.
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    /// All three fields carry something besides whitespace.
    ///
    /// Email format is left to the browser's own constraint validation.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}
