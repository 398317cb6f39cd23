use dioxus::prelude::*;
use shared_types::fixtures;
use shared_types::{Activity, ActivityStatus, Course};
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, PageHeader, ProgressBar};

use crate::format_helpers::{due_day, due_month, score_line};

fn status_tone(status: ActivityStatus) -> BadgeTone {
    match status {
        ActivityStatus::Pending => BadgeTone::Warning,
        ActivityStatus::Submitted => BadgeTone::Info,
        ActivityStatus::Graded => BadgeTone::Success,
        ActivityStatus::Late => BadgeTone::Danger,
    }
}

/// All courses with their activities.
#[component]
pub fn CoursesPage() -> Element {
    let courses = use_hook(fixtures::courses);
    let activities = use_hook(fixtures::activities);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "My Courses", subtitle: "Your classes for this semester." }

            div { class: "view-stack",
                for course in courses.iter() {
                    CourseDetail {
                        key: "{course.id}",
                        course: course.clone(),
                        activities: activities.iter().filter(|a| a.course_id == course.id).cloned().collect::<Vec<_>>(),
                    }
                }
            }
        }
    }
}

#[component]
fn CourseDetail(course: Course, activities: Vec<Activity>) -> Element {
    let heading = format!("{} \u{2022} {}", course.code, course.name);

    rsx! {
        Card {
            CardHeader { title: heading }
            CardContent {
                p { class: "view-muted", "{course.professor} \u{2022} {course.schedule}" }
                ProgressBar { value: course.progress_percent(), color: course.color.clone() }

                if activities.is_empty() {
                    p { class: "view-empty", "No activities posted yet." }
                } else {
                    ul { class: "view-list",
                        for activity in activities {
                            ActivityRow { key: "{activity.id}", activity: activity.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity) -> Element {
    let due = format!("{} {}", due_month(&activity.due_date), due_day(&activity.due_date));
    let score = score_line(activity.grade, activity.max_grade);
    let kind = activity.kind.as_str();
    let status = activity.status.as_str();

    rsx! {
        li { class: "view-list-row",
            div {
                p { class: "view-row-title", "{activity.title}" }
                p { class: "view-muted", "{kind} \u{2022} Due {due}" }
            }
            div { class: "view-row-trailing",
                if let Some(score) = score {
                    span { class: "view-score", "{score}" }
                }
                Badge { tone: status_tone(activity.status), "{status}" }
            }
        }
    }
}
