//! Role-conditional dashboard content.
//!
//! The guard only decides that `/` is reachable; which dashboard variant
//! renders there is decided here, inside the view.

use crate::activity::Activity;
use crate::course::Course;
use crate::forum::ForumPost;
use crate::models::{User, UserRole};

/// Which dashboard `/` shows for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    Admin,
    Teacher,
    Student,
}

impl DashboardVariant {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => DashboardVariant::Admin,
            UserRole::Teacher => DashboardVariant::Teacher,
            UserRole::Student => DashboardVariant::Student,
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardVariant::Admin => "Here is what is happening across campus.",
            DashboardVariant::Teacher => "Ready to inspire your students today?",
            DashboardVariant::Student => "Let's make today productive.",
        }
    }

    /// Heading of the course column.
    pub fn courses_heading(&self) -> &'static str {
        match self {
            DashboardVariant::Teacher => "Your Classes",
            _ => "Current Progress",
        }
    }

    /// Heading of the right-hand feed column.
    pub fn feed_heading(&self) -> &'static str {
        match self {
            DashboardVariant::Teacher => "Activity Feed",
            _ => "Up Next",
        }
    }
}

/// The first `limit` pending activities, in fixture order.
///
/// No re-sorting happens here: if the fixture is not ordered by due date,
/// neither is the result.
pub fn upcoming(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    activities
        .iter()
        .filter(|a| a.is_pending())
        .take(limit)
        .collect()
}

/// Color accent of a stat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Indigo,
    Blue,
    Emerald,
    Amber,
    Rose,
}

impl StatTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatTone::Indigo => "indigo",
            StatTone::Blue => "blue",
            StatTone::Emerald => "emerald",
            StatTone::Amber => "amber",
            StatTone::Rose => "rose",
        }
    }
}

/// One headline number on a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StatWidget {
    pub title: &'static str,
    pub value: String,
    pub sub: &'static str,
    pub tone: StatTone,
}

impl StatWidget {
    fn new(
        title: &'static str,
        value: impl Into<String>,
        sub: &'static str,
        tone: StatTone,
    ) -> Self {
        Self {
            title,
            value: value.into(),
            sub,
            tone,
        }
    }
}

/// Headline widgets for the teacher and student dashboards.
pub fn stat_widgets(
    variant: DashboardVariant,
    courses: &[Course],
    upcoming_count: usize,
) -> Vec<StatWidget> {
    match variant {
        DashboardVariant::Teacher => vec![
            StatWidget::new("Total Students", "142", "Active in 3 courses", StatTone::Indigo),
            StatWidget::new("Attendance", "88%", "Average this week", StatTone::Emerald),
            StatWidget::new("To Grade", "24", "Pending submissions", StatTone::Amber),
            StatWidget::new("Excuses", "5", "Requires review", StatTone::Rose),
        ],
        DashboardVariant::Student => vec![
            StatWidget::new("GPA", "3.8", "Top 10% of class", StatTone::Indigo),
            StatWidget::new(
                "Enrolled",
                courses.len().to_string(),
                "Active Courses",
                StatTone::Blue,
            ),
            StatWidget::new(
                "Assignments",
                upcoming_count.to_string(),
                "Due this week",
                StatTone::Amber,
            ),
            StatWidget::new("Attendance", "96%", "Excellent record", StatTone::Emerald),
        ],
        DashboardVariant::Admin => Vec::new(),
    }
}

/// Headline widgets for the admin overview.
pub fn admin_overview(users: &[User], courses: &[Course], posts: &[ForumPost]) -> Vec<StatWidget> {
    let count = |role: UserRole| users.iter().filter(|u| u.role == role).count().to_string();
    let students = count(UserRole::Student);
    let teachers = count(UserRole::Teacher);
    let course_count = courses.len().to_string();
    let post_count = posts.len().to_string();
    vec![
        StatWidget::new("Students", students, "Registered accounts", StatTone::Indigo),
        StatWidget::new("Teachers", teachers, "Faculty accounts", StatTone::Emerald),
        StatWidget::new("Courses", course_count, "Offered this term", StatTone::Blue),
        StatWidget::new("Forum Posts", post_count, "Community activity", StatTone::Amber),
    ]
}
