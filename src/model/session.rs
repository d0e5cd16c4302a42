//! The signed-in reader.
//!
//! Constructed once by the host and owned by the model; there is no global
//! session state.

use super::highlight::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub display_name: Option<String>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name to show in status lines
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(self.user_id.as_str())
    }
}
