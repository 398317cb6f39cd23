use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LostItemStatus {
    Lost,
    Found,
    Claimed,
}

impl LostItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LostItemStatus::Lost => "LOST",
            LostItemStatus::Found => "FOUND",
            LostItemStatus::Claimed => "CLAIMED",
        }
    }
}

/// A lost-and-found report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub status: LostItemStatus,
    pub date: String,
    pub contact_name: String,
}
