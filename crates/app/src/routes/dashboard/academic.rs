use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBookOpen, LdCalendar, LdClipboardList, LdClock, LdFileText, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{
    stat_widgets, upcoming, Activity, AppConfig, Course, DashboardVariant, StatTone, User,
};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, ProgressBar, StatCard};

use crate::format_helpers::{due_day, due_month, due_time};
use crate::routes::Route;

fn tone_icon(variant: DashboardVariant, tone: StatTone) -> Element {
    match (variant, tone) {
        (DashboardVariant::Teacher, StatTone::Indigo) => {
            rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } }
        }
        (_, StatTone::Indigo) => rsx! { Icon::<LdAward> { icon: LdAward, width: 24, height: 24 } },
        (_, StatTone::Blue) => {
            rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } }
        }
        (_, StatTone::Amber) => {
            rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 24, height: 24 } }
        }
        (_, StatTone::Rose) => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } }
        }
        (_, StatTone::Emerald) => {
            rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } }
        }
    }
}

/// Student and teacher dashboard. Widgets, course cards and the feed column
/// switch on `variant`.
#[component]
pub fn AcademicDashboard(user: User, variant: DashboardVariant) -> Element {
    let config: AppConfig = use_context();
    let courses = use_hook(fixtures::courses);
    let activities = use_hook(fixtures::activities);

    let next_up = upcoming(&activities, config.dashboard.upcoming_limit);
    let widgets = stat_widgets(variant, &courses, next_up.len());
    let greeting = format!("Hello, {}!", user.first_name());
    let is_teacher = variant == DashboardVariant::Teacher;
    let subtitle = variant.subtitle();
    let courses_heading = variant.courses_heading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            div { class: "dashboard-greeting",
                h1 { "{greeting}" }
                p { "{subtitle}" }
            }

            div { class: "dashboard-stats",
                for widget in widgets {
                    StatCard {
                        key: "{widget.title}",
                        title: widget.title.to_string(),
                        value: widget.value.clone(),
                        sub: widget.sub.to_string(),
                        tone: widget.tone.as_str().to_string(),
                        icon: tone_icon(variant, widget.tone),
                    }
                }
            }

            div { class: "dashboard-columns",
                div { class: "dashboard-courses",
                    div { class: "dashboard-section-head",
                        h2 { "{courses_heading}" }
                        Link { to: Route::Courses {}, class: "dashboard-link", "View All" }
                    }
                    div { class: "dashboard-course-grid",
                        for course in courses.iter() {
                            CourseCard { key: "{course.id}", course: course.clone(), teaching: is_teacher }
                        }
                    }
                }

                Card { class: "dashboard-feed",
                    CardHeader { title: variant.feed_heading().to_string() }
                    CardContent {
                        if is_teacher {
                            for (title, detail) in fixtures::recent_submissions() {
                                div { key: "{title}", class: "dashboard-feed-item",
                                    p { class: "dashboard-feed-title", "{title}" }
                                    p { class: "dashboard-feed-detail", "{detail}" }
                                }
                            }
                        } else if next_up.is_empty() {
                            p { class: "dashboard-feed-empty", "Nothing due. Enjoy the break!" }
                        } else {
                            for activity in next_up.iter() {
                                UpNextItem { key: "{activity.id}", activity: (*activity).clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpNextItem(activity: Activity) -> Element {
    let month = due_month(&activity.due_date);
    let day = due_day(&activity.due_date);
    let time = due_time(&activity.due_date);
    let kind = activity.kind.as_str();

    rsx! {
        div { class: "dashboard-feed-item",
            div { class: "dashboard-due-chip",
                span { class: "dashboard-due-month", "{month}" }
                span { class: "dashboard-due-day", "{day}" }
            }
            div {
                p { class: "dashboard-feed-title", "{activity.title}" }
                p { class: "dashboard-feed-detail",
                    Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                    " {time} \u{2022} {kind}"
                }
            }
        }
    }
}

#[component]
fn CourseCard(course: Course, teaching: bool) -> Element {
    let progress = course.progress_percent();

    rsx! {
        Card { class: "dashboard-course-card",
            CardContent {
                div { class: "dashboard-course-top",
                    span { class: "dashboard-course-code", "data-color": "{course.color}", "{course.code}" }
                }
                h3 { class: "dashboard-course-name", "{course.name}" }
                p { class: "dashboard-course-professor", "{course.professor}" }
                if teaching {
                    p { class: "dashboard-course-schedule",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                        " {course.schedule}"
                    }
                    div { class: "dashboard-course-actions",
                        Button { variant: ButtonVariant::Soft, "Classroom" }
                        Button { variant: ButtonVariant::Soft, "Gradebook" }
                    }
                } else {
                    div { class: "dashboard-course-progress",
                        span { "Progress" }
                        span { "{course.progress}%" }
                    }
                    ProgressBar { value: progress, color: course.color.clone() }
                }
            }
        }
    }
}
