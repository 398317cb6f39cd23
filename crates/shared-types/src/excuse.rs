use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExcuseStatus {
    Pending,
    Approved,
    Rejected,
}

impl ExcuseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExcuseStatus::Pending => "PENDING",
            ExcuseStatus::Approved => "APPROVED",
            ExcuseStatus::Rejected => "REJECTED",
        }
    }
}

/// An excuse letter filed for a missed class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExcuseLetter {
    pub id: String,
    pub course_name: String,
    pub reason: String,
    pub date: String,
    pub status: ExcuseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}
