use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of graded activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Assignment,
    Quiz,
    Exam,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Assignment => "ASSIGNMENT",
            ActivityKind::Quiz => "QUIZ",
            ActivityKind::Exam => "EXAM",
        }
    }
}

/// Submission status of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Pending,
    Submitted,
    Graded,
    Late,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "PENDING",
            ActivityStatus::Submitted => "SUBMITTED",
            ActivityStatus::Graded => "GRADED",
            ActivityStatus::Late => "LATE",
        }
    }
}

/// An assignment, quiz or exam attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub due_date: DateTime<Utc>,
    pub status: ActivityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u32>,
    pub max_grade: u32,
}

impl Activity {
    pub fn is_pending(&self) -> bool {
        self.status == ActivityStatus::Pending
    }
}
