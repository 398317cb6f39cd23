use serde::{Deserialize, Serialize};

/// A course the current user is enrolled in or teaches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub professor: String,
    pub schedule: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_assignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_assignment_due: Option<String>,
    /// Accent color token used by course cards (e.g. `"indigo"`).
    pub color: String,
}

impl Course {
    /// Progress clamped to 0-100 for progress bars.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.progress.min(100))
    }
}
