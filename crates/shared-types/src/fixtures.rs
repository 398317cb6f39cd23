//! Static sample data standing in for a real data source.
//!
//! Read-only: views receive these collections and never mutate them.

use chrono::{DateTime, TimeZone, Utc};

use crate::activity::{Activity, ActivityKind, ActivityStatus};
use crate::course::Course;
use crate::excuse::{ExcuseLetter, ExcuseStatus};
use crate::forum::{ForumCategory, ForumPost};
use crate::lost_found::{LostItem, LostItemStatus};
use crate::models::{User, UserRecord, UserRole};
use crate::notification::{Notification, NotificationKind};

fn due(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn s(v: &str) -> String {
    v.to_string()
}

fn course(
    id: &str,
    code: &str,
    name: &str,
    professor: &str,
    schedule: &str,
    progress: u8,
    color: &str,
) -> Course {
    Course {
        id: s(id),
        code: s(code),
        name: s(name),
        professor: s(professor),
        schedule: s(schedule),
        progress,
        next_assignment: None,
        next_assignment_due: None,
        color: s(color),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course(
            "c1",
            "CS101",
            "Introduction to Programming",
            "Dr. Alan Reyes",
            "MWF 9:00 - 10:30 AM",
            75,
            "indigo",
        ),
        course(
            "c2",
            "MATH201",
            "Discrete Mathematics",
            "Prof. Liza Cruz",
            "TTh 1:00 - 2:30 PM",
            60,
            "emerald",
        ),
        course(
            "c3",
            "PHY110",
            "General Physics",
            "Dr. Ramon Dela Paz",
            "MW 3:00 - 4:30 PM",
            45,
            "amber",
        ),
        course(
            "c4",
            "ENG102",
            "Purposive Communication",
            "Ms. Andrea Lim",
            "F 1:00 - 4:00 PM",
            90,
            "rose",
        ),
    ]
}

/// An ungraded activity worth `max_grade` points.
fn activity(
    id: &str,
    course_id: &str,
    title: &str,
    kind: ActivityKind,
    due_date: DateTime<Utc>,
    status: ActivityStatus,
    max_grade: u32,
) -> Activity {
    Activity {
        id: s(id),
        course_id: s(course_id),
        title: s(title),
        kind,
        due_date,
        status,
        grade: None,
        max_grade,
    }
}

/// Activities in feed order (not sorted by due date).
pub fn activities() -> Vec<Activity> {
    use ActivityKind::*;
    use ActivityStatus::*;
    let essay_due = due(2, 27, 17);
    let mut essay = activity("a5", "c4", "Reflection Essay", Assignment, essay_due, Graded, 50);
    essay.grade = Some(46);
    vec![
        activity("a1", "c1", "Loops and Conditionals Lab", Assignment, due(3, 6, 23), Pending, 50),
        activity("a2", "c2", "Set Theory Problem Set", Assignment, due(3, 2, 17), Submitted, 40),
        activity("a3", "c3", "Kinematics Quiz", Quiz, due(3, 4, 10), Pending, 20),
        activity("a4", "c2", "Midterm Examination", Exam, due(3, 12, 8), Pending, 100),
        essay,
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: s("n1"),
            title: s("Grade Posted"),
            message: s("Your Reflection Essay in ENG102 has been graded."),
            kind: NotificationKind::Success,
            read: false,
            timestamp: s("10 mins ago"),
        },
        Notification {
            id: s("n2"),
            title: s("Deadline Approaching"),
            message: s("Kinematics Quiz closes tomorrow at 10:00 AM."),
            kind: NotificationKind::Warning,
            read: false,
            timestamp: s("1 hour ago"),
        },
        Notification {
            id: s("n3"),
            title: s("Campus Advisory"),
            message: s("The library will close early on Friday for maintenance."),
            kind: NotificationKind::Info,
            read: true,
            timestamp: s("Yesterday"),
        },
    ]
}

pub fn forum_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: s("p1"),
            author: s("Dr. Alan Reyes"),
            avatar: s("https://i.pravatar.cc/150?u=reyes"),
            role: UserRole::Teacher,
            title: s("CS101 lab moved to Room 304"),
            content: s("Starting next week our Friday lab sessions will be held in \
                 Room 304 of the Engineering Building."),
            category: ForumCategory::Announcement,
            likes: 24,
            comments: 5,
            timestamp: s("2 hours ago"),
        },
        ForumPost {
            id: s("p2"),
            author: s("Juan Dela Cruz"),
            avatar: s("https://i.pravatar.cc/150?u=juan"),
            role: UserRole::Student,
            title: s("Study group for Discrete Math?"),
            content: s("Anyone up for a review session before the midterm? \
                 Thinking Thursday at the library."),
            category: ForumCategory::Question,
            likes: 12,
            comments: 8,
            timestamp: s("5 hours ago"),
        },
        ForumPost {
            id: s("p3"),
            author: s("Maria Santos"),
            avatar: s("https://i.pravatar.cc/150?u=maria"),
            role: UserRole::Student,
            title: s("Best places to eat near campus"),
            content: s("Share your favorite lunch spots. \
                 I'll start: the carinderia beside Gate 2."),
            category: ForumCategory::General,
            likes: 31,
            comments: 17,
            timestamp: s("Yesterday"),
        },
    ]
}

pub fn lost_items() -> Vec<LostItem> {
    vec![
        LostItem {
            id: s("l1"),
            title: s("Blue Hydro Flask"),
            description: s("32oz bottle with a university sticker on the side."),
            location: s("Library, 2nd floor"),
            image_url: s("https://picsum.photos/seed/flask/400/300"),
            status: LostItemStatus::Lost,
            date: s("2026-03-01"),
            contact_name: s("Juan Dela Cruz"),
        },
        LostItem {
            id: s("l2"),
            title: s("Scientific Calculator"),
            description: s("Casio fx-991ES left after the physics quiz."),
            location: s("Science Building, Room 210"),
            image_url: s("https://picsum.photos/seed/calc/400/300"),
            status: LostItemStatus::Found,
            date: s("2026-02-27"),
            contact_name: s("Security Office"),
        },
        LostItem {
            id: s("l3"),
            title: s("Student ID Lanyard"),
            description: s("Green lanyard with ID 2023-1142."),
            location: s("Cafeteria"),
            image_url: s("https://picsum.photos/seed/lanyard/400/300"),
            status: LostItemStatus::Claimed,
            date: s("2026-02-20"),
            contact_name: s("Maria Santos"),
        },
    ]
}

pub fn excuse_letters() -> Vec<ExcuseLetter> {
    vec![
        ExcuseLetter {
            id: s("e1"),
            course_name: s("General Physics"),
            reason: s("Medical appointment"),
            date: s("2026-02-24"),
            status: ExcuseStatus::Approved,
            attachment_url: Some(s("medical-certificate.pdf")),
        },
        ExcuseLetter {
            id: s("e2"),
            course_name: s("Discrete Mathematics"),
            reason: s("Family emergency"),
            date: s("2026-03-03"),
            status: ExcuseStatus::Pending,
            attachment_url: None,
        },
    ]
}

/// Recent submissions shown on the teacher activity feed: (title, detail).
pub fn recent_submissions() -> Vec<(String, String)> {
    (1..=3)
        .map(|i| {
            (
                format!("John Doe submitted Assignment {i}"),
                s("CS101 \u{2022} 10 mins ago"),
            )
        })
        .collect()
}

/// Campus buildings listed on the map view: (name, description).
pub const CAMPUS_BUILDINGS: &[(&str, &str)] = &[
    ("Main Library", "Open 7:00 AM - 9:00 PM. Quiet study on the 3rd floor."),
    ("Engineering Building", "Computer labs and Room 304."),
    ("Science Building", "Physics and chemistry laboratories."),
    ("Student Center", "Cafeteria, clinic and the registrar's office."),
    ("Gymnasium", "Sports facilities and PE classes."),
];

fn record(id: &str, name: &str, email: &str, role: &str) -> UserRecord {
    UserRecord {
        id: s(id),
        name: s(name),
        email: s(email),
        role: s(role),
        avatar_url: None,
        student_id: None,
        about_me: None,
        major: None,
        year_level: None,
        campus: None,
        hobbies: Vec::new(),
    }
}

/// Accounts offered on the login screen. The last one carries a role the
/// portal does not know, to exercise the unknown-role policy.
pub fn demo_accounts() -> Vec<UserRecord> {
    let mut student = record("u-1001", "Juan Dela Cruz", "student@campus.edu", "STUDENT");
    student.avatar_url = Some(s("https://i.pravatar.cc/150?u=juan"));
    student.student_id = Some(s("2023-1142"));
    student.about_me = Some(s("Aspiring software engineer who loves open source."));
    student.major = Some(s("BS Computer Science"));
    student.year_level = Some(s("2nd Year"));
    student.campus = Some(s("Main Campus"));
    student.hobbies = vec![s("Basketball"), s("Chess"), s("Photography")];

    let mut teacher = record("u-2001", "Alan Reyes", "teacher@campus.edu", "TEACHER");
    teacher.about_me = Some(s("Teaching programming fundamentals since 2012."));
    teacher.campus = Some(s("Main Campus"));

    vec![
        student,
        teacher,
        record("u-9001", "Campus Administrator", "admin@campus.edu", "ADMIN"),
        record("u-5001", "Visiting Guest", "guest@campus.edu", "VISITOR"),
    ]
}

/// Directory shown on the admin users page.
pub fn directory() -> Vec<User> {
    vec![
        User::new("u-1001", "Juan Dela Cruz", "student@campus.edu", UserRole::Student),
        User::new("u-1002", "Maria Santos", "maria.santos@campus.edu", UserRole::Student),
        User::new("u-1003", "Paolo Garcia", "paolo.garcia@campus.edu", UserRole::Student),
        User::new("u-2001", "Alan Reyes", "teacher@campus.edu", UserRole::Teacher),
        User::new("u-2002", "Liza Cruz", "liza.cruz@campus.edu", UserRole::Teacher),
        User::new("u-9001", "Campus Administrator", "admin@campus.edu", UserRole::Admin),
    ]
}
