use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// Forum board a post belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForumCategory {
    General,
    Question,
    Announcement,
    #[serde(rename = "Lost & Found")]
    LostAndFound,
}

impl ForumCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ForumCategory::General => "General",
            ForumCategory::Question => "Question",
            ForumCategory::Announcement => "Announcement",
            ForumCategory::LostAndFound => "Lost & Found",
        }
    }
}

/// Filter tabs shown above the forum feed.
pub const FORUM_FILTERS: &[(&str, Option<ForumCategory>)] = &[
    ("All Posts", None),
    ("Announcements", Some(ForumCategory::Announcement)),
    ("Questions", Some(ForumCategory::Question)),
    ("Discussions", Some(ForumCategory::General)),
];

/// A post on the campus forum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub role: UserRole,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: String,
}

/// Posts matching `filter`, in feed order. `None` keeps everything.
pub fn filter_posts(posts: &[ForumPost], filter: Option<ForumCategory>) -> Vec<&ForumPost> {
    posts
        .iter()
        .filter(|p| filter.map_or(true, |c| p.category == c))
        .collect()
}
