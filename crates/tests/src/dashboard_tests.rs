use pretty_assertions::assert_eq;
use shared_types::fixtures;
use shared_types::{
    stat_widgets, upcoming, ActivityStatus, DashboardVariant, DEFAULT_UPCOMING_LIMIT,
};

use crate::common::*;

#[test]
fn up_next_shows_first_three_pending_in_fixture_order() {
    use ActivityStatus::*;

    // Due dates deliberately out of order: sorting would change the answer.
    let activities = vec![
        activity("a1", 20, Pending),
        activity("a2", 1, Submitted),
        activity("a3", 15, Pending),
        activity("a4", 2, Pending),
        activity("a5", 3, Graded),
    ];

    let ids: Vec<_> = upcoming(&activities, DEFAULT_UPCOMING_LIMIT)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a1", "a3", "a4"]);
}

#[test]
fn shipped_fixture_matches_scenario_statuses() {
    use ActivityStatus::*;

    let statuses: Vec<_> = fixtures::activities().iter().map(|a| a.status).collect();
    assert_eq!(statuses, vec![Pending, Submitted, Pending, Pending, Graded]);
}

#[test]
fn up_next_with_fewer_pending_than_limit() {
    let activities = vec![
        activity("a", 1, ActivityStatus::Graded),
        activity("b", 2, ActivityStatus::Pending),
    ];
    assert_eq!(upcoming(&activities, 3).len(), 1);
    assert!(upcoming(&[], 3).is_empty());
}

#[test]
fn student_assignment_widget_counts_up_next() {
    let courses = fixtures::courses();
    let activities = fixtures::activities();
    let next_up = upcoming(&activities, DEFAULT_UPCOMING_LIMIT);
    let widgets = stat_widgets(DashboardVariant::Student, &courses, next_up.len());

    let values: Vec<_> = widgets.iter().map(|w| (w.title, w.value.as_str())).collect();
    assert_eq!(
        values,
        vec![("GPA", "3.8"), ("Enrolled", "4"), ("Assignments", "3"), ("Attendance", "96%")]
    );
}

#[test]
fn admin_variant_has_no_academic_widgets() {
    assert!(stat_widgets(DashboardVariant::Admin, &fixtures::courses(), 3).is_empty());
}
