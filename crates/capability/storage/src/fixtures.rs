//! 内置演示数据
//!
//! 服务启动（`CAMPUS_SEED_FIXTURES=true`）与测试使用的种子集合。
//! 演示账户口令为明文，首次登录后升级为 argon2 哈希。

use crate::models::UserAccount;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use domain::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn account(
    id: &str,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    department: Option<&str>,
) -> UserAccount {
    UserAccount {
        user: User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: department.map(str::to_string),
            profile_image: None,
            last_login: None,
        },
        password: password.to_string(),
        refresh_jti: None,
    }
}

/// 演示账户
pub fn accounts() -> Vec<UserAccount> {
    vec![
        account("U001", "Admin User", "admin@campus.edu", "admin123", Role::Admin, None),
        account(
            "U002",
            "John Smith",
            "john.smith@campus.edu",
            "password123",
            Role::Student,
            Some("Computer Science"),
        ),
        account(
            "U003",
            "Sarah Johnson",
            "sarah.johnson@campus.edu",
            "password123",
            Role::Lecturer,
            Some("Computer Science"),
        ),
        account(
            "U004",
            "Front Office",
            "staff@campus.edu",
            "staff123",
            Role::Staff,
            Some("Administration"),
        ),
    ]
}

fn student(id: &str, name: &str, email: &str, department: &str, year: u8, gpa: f32) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        year: Some(year),
        gpa: Some(gpa),
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student("ST001", "John Smith", "john.smith@campus.edu", "Computer Science", 2, 3.6),
        student("ST002", "Emily Davis", "emily.davis@campus.edu", "Mathematics", 1, 3.9),
        student("ST003", "Michael Brown", "michael.brown@campus.edu", "Physics", 3, 3.1),
        student("ST004", "Olivia Wilson", "olivia.wilson@campus.edu", "Computer Science", 4, 3.4),
        student("ST005", "Daniel Lee", "daniel.lee@campus.edu", "Business", 2, 2.8),
    ]
}

fn lecturer(id: &str, name: &str, email: &str, department: &str, position: &str) -> Lecturer {
    Lecturer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        courses: 1,
    }
}

pub fn lecturers() -> Vec<Lecturer> {
    vec![
        lecturer(
            "LEC001",
            "Dr. Sarah Johnson",
            "sarah.johnson@campus.edu",
            "Computer Science",
            "Professor",
        ),
        lecturer(
            "LEC002",
            "Dr. Robert Chen",
            "robert.chen@campus.edu",
            "Mathematics",
            "Associate Professor",
        ),
        lecturer(
            "LEC003",
            "Prof. Maria Garcia",
            "maria.garcia@campus.edu",
            "Physics",
            "Lecturer",
        ),
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "CRS001".to_string(),
            name: "Introduction to Programming".to_string(),
            department: "Computer Science".to_string(),
            credits: 4,
            instructor: "Dr. Sarah Johnson".to_string(),
            status: ProgramStatus::Active,
            subject_ids: ids(&["SUB001", "SUB002"]),
        },
        Course {
            id: "CRS002".to_string(),
            name: "Linear Algebra".to_string(),
            department: "Mathematics".to_string(),
            credits: 3,
            instructor: "Dr. Robert Chen".to_string(),
            status: ProgramStatus::Active,
            subject_ids: ids(&["SUB003"]),
        },
        Course {
            id: "CRS003".to_string(),
            name: "Quantum Mechanics".to_string(),
            department: "Physics".to_string(),
            credits: 4,
            instructor: "Prof. Maria Garcia".to_string(),
            status: ProgramStatus::Upcoming,
            subject_ids: Vec::new(),
        },
    ]
}

fn subject(
    id: &str,
    name: &str,
    code: &str,
    credits: u32,
    department: &str,
    course_ids: &[&str],
) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        description: format!("{name} ({code})"),
        credits,
        department: department.to_string(),
        course_ids: ids(course_ids),
    }
}

pub fn subjects() -> Vec<Subject> {
    vec![
        subject("SUB001", "Programming Fundamentals", "CS101", 3, "Computer Science", &["CRS001"]),
        subject("SUB002", "Data Structures", "CS102", 3, "Computer Science", &["CRS001"]),
        subject("SUB003", "Matrix Theory", "MA201", 3, "Mathematics", &["CRS002"]),
        subject("SUB004", "Wave Physics", "PH301", 4, "Physics", &["CRS003"]),
    ]
}

pub fn batches() -> Vec<Batch> {
    vec![
        Batch {
            id: "BAT001".to_string(),
            name: "CS 2024".to_string(),
            start_date: date(2024, 9, 1),
            end_date: date(2028, 6, 30),
            department: "Computer Science".to_string(),
            coordinator: "Dr. Sarah Johnson".to_string(),
            status: ProgramStatus::Active,
            courses: ids(&["CRS001"]),
        },
        Batch {
            id: "BAT002".to_string(),
            name: "Science 2023".to_string(),
            start_date: date(2023, 9, 1),
            end_date: date(2027, 6, 30),
            department: "Physics".to_string(),
            coordinator: "Prof. Maria Garcia".to_string(),
            status: ProgramStatus::Active,
            courses: ids(&["CRS002", "CRS003"]),
        },
    ]
}

fn enrollment(
    id: &str,
    (student_id, student_name): (&str, &str),
    (course_id, course_name): (&str, &str),
    (batch_id, batch_name): (&str, &str),
    status: EnrollmentStatus,
) -> Enrollment {
    Enrollment {
        id: id.to_string(),
        student_id: student_id.to_string(),
        student_name: student_name.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        batch_id: batch_id.to_string(),
        batch_name: batch_name.to_string(),
        enrollment_date: date(2024, 9, 2),
        status,
        grade: None,
    }
}

pub fn enrollments() -> Vec<Enrollment> {
    let programming = ("CRS001", "Introduction to Programming");
    let algebra = ("CRS002", "Linear Algebra");
    let cs = ("BAT001", "CS 2024");
    let science = ("BAT002", "Science 2023");
    vec![
        enrollment(
            "ENR001",
            ("ST001", "John Smith"),
            programming,
            cs,
            EnrollmentStatus::Active,
        ),
        enrollment(
            "ENR002",
            ("ST004", "Olivia Wilson"),
            programming,
            cs,
            EnrollmentStatus::Active,
        ),
        enrollment(
            "ENR003",
            ("ST002", "Emily Davis"),
            algebra,
            science,
            EnrollmentStatus::Active,
        ),
        enrollment(
            "ENR004",
            ("ST003", "Michael Brown"),
            algebra,
            science,
            EnrollmentStatus::Pending,
        ),
        enrollment(
            "ENR005",
            ("ST005", "Daniel Lee"),
            programming,
            cs,
            EnrollmentStatus::Dropped,
        ),
    ]
}

pub fn facilities() -> Vec<Facility> {
    let facility = |id: &str, name: &str, kind: &str, capacity: u32, rooms: u32| Facility {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        capacity,
        rooms,
        status: "available".to_string(),
    };
    vec![
        facility("FAC001", "Main Library", "library", 300, 12),
        facility("FAC002", "Science Building", "laboratory", 150, 8),
        facility("FAC003", "Sports Complex", "sports", 500, 4),
    ]
}

pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "RES001".to_string(),
            facility: "Main Library".to_string(),
            room: "Study Room 3".to_string(),
            purpose: "Group study".to_string(),
            date: date(2024, 10, 14),
            time: time(14, 0),
            requested_by: "John Smith".to_string(),
            status: ReservationStatus::Pending,
        },
        Reservation {
            id: "RES002".to_string(),
            facility: "Science Building".to_string(),
            room: "Lab 2".to_string(),
            purpose: "Physics practical".to_string(),
            date: date(2024, 10, 15),
            time: time(9, 30),
            requested_by: "Prof. Maria Garcia".to_string(),
            status: ReservationStatus::Approved,
        },
        Reservation {
            id: "RES003".to_string(),
            facility: "Sports Complex".to_string(),
            room: "Court A".to_string(),
            purpose: "Basketball practice".to_string(),
            date: date(2024, 10, 16),
            time: time(17, 0),
            requested_by: "Daniel Lee".to_string(),
            status: ReservationStatus::Pending,
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    let resource =
        |id: &str, name: &str, kind: &str, location: &str, quantity: u32, available: u32| {
            Resource {
                id: id.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                location: location.to_string(),
                quantity,
                available,
                status: if available == 0 { "out-of-stock" } else { "in-stock" }.to_string(),
            }
        };
    vec![
        resource("RSC001", "Projector", "equipment", "Main Library", 10, 6),
        resource("RSC002", "Microscope", "laboratory", "Science Building", 20, 18),
        resource("RSC003", "Basketball", "sports", "Sports Complex", 15, 0),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "EVT001".to_string(),
            title: "Orientation Day".to_string(),
            description: "Welcome session for new students".to_string(),
            date: date(2024, 9, 2),
            time: time(10, 0),
            location: "Main Hall".to_string(),
            organizer: "Student Affairs".to_string(),
            category: "academic".to_string(),
            status: "completed".to_string(),
        },
        Event {
            id: "EVT002".to_string(),
            title: "Tech Career Fair".to_string(),
            description: "Meet employers from the technology sector".to_string(),
            date: date(2024, 11, 20),
            time: time(13, 0),
            location: "Sports Complex".to_string(),
            organizer: "Career Center".to_string(),
            category: "career".to_string(),
            status: "upcoming".to_string(),
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "MSG001".to_string(),
            sender_id: "U003".to_string(),
            sender_name: "Sarah Johnson".to_string(),
            recipient_id: "U002".to_string(),
            recipient_name: "John Smith".to_string(),
            subject: "Assignment feedback".to_string(),
            body: "Your last assignment was well structured.".to_string(),
            sent_at: at(2024, 10, 1, 9, 15),
            read: false,
        },
        Message {
            id: "MSG002".to_string(),
            sender_id: "U001".to_string(),
            sender_name: "Admin User".to_string(),
            recipient_id: "U003".to_string(),
            recipient_name: "Sarah Johnson".to_string(),
            subject: "Timetable update".to_string(),
            body: "The Friday lecture moves to Lab 2.".to_string(),
            sent_at: at(2024, 10, 2, 16, 40),
            read: true,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "NTF001".to_string(),
            title: "Semester registration open".to_string(),
            message: "Registration for the spring semester is now open.".to_string(),
            kind: "info".to_string(),
            created_at: at(2024, 10, 1, 8, 0),
            read: false,
            user_id: None,
        },
        Notification {
            id: "NTF002".to_string(),
            title: "Library maintenance".to_string(),
            message: "The main library closes early on Friday.".to_string(),
            kind: "warning".to_string(),
            created_at: at(2024, 10, 3, 12, 0),
            read: true,
            user_id: None,
        },
        Notification {
            id: "NTF003".to_string(),
            title: "Grade posted".to_string(),
            message: "A new grade is available for Introduction to Programming.".to_string(),
            kind: "success".to_string(),
            created_at: at(2024, 10, 4, 18, 30),
            read: false,
            user_id: Some("U002".to_string()),
        },
    ]
}

pub fn schedule_events() -> Vec<ScheduleEvent> {
    vec![
        ScheduleEvent {
            id: "SCH001".to_string(),
            title: "Introduction to Programming lecture".to_string(),
            course_id: Some("CRS001".to_string()),
            location: "Room 101".to_string(),
            starts_at: at(2024, 10, 7, 9, 0),
            ends_at: at(2024, 10, 7, 10, 30),
            recurrence: Some("weekly".to_string()),
        },
        ScheduleEvent {
            id: "SCH002".to_string(),
            title: "Linear Algebra tutorial".to_string(),
            course_id: Some("CRS002".to_string()),
            location: "Room 204".to_string(),
            starts_at: at(2024, 10, 8, 14, 0),
            ends_at: at(2024, 10, 8, 15, 0),
            recurrence: None,
        },
    ]
}

pub fn schedule_notifications() -> Vec<ScheduleNotification> {
    vec![
        ScheduleNotification {
            id: "SNT001".to_string(),
            event_id: "SCH001".to_string(),
            title: "Lecture starts soon".to_string(),
            message: "Introduction to Programming starts in 30 minutes.".to_string(),
            created_at: at(2024, 10, 7, 8, 30),
            read: false,
        },
        ScheduleNotification {
            id: "SNT002".to_string(),
            event_id: "SCH002".to_string(),
            title: "Tutorial moved".to_string(),
            message: "Linear Algebra tutorial moved to Room 204.".to_string(),
            created_at: at(2024, 10, 5, 10, 0),
            read: false,
        },
    ]
}

pub fn groups() -> Vec<CollaborationGroup> {
    vec![CollaborationGroup {
        id: "GRP001".to_string(),
        name: "Programming Project Team".to_string(),
        description: "Final project for Introduction to Programming".to_string(),
        course_id: Some("CRS001".to_string()),
        members: ids(&["ST001", "ST004"]),
        created_at: at(2024, 9, 20, 11, 0),
    }]
}

pub fn group_messages() -> Vec<CollaborationMessage> {
    vec![
        CollaborationMessage {
            id: "GMS001".to_string(),
            group_id: "GRP001".to_string(),
            sender_id: "ST001".to_string(),
            sender_name: "John Smith".to_string(),
            body: "I pushed the first draft of the parser.".to_string(),
            sent_at: at(2024, 9, 21, 19, 5),
        },
        CollaborationMessage {
            id: "GMS002".to_string(),
            group_id: "GRP001".to_string(),
            sender_id: "ST004".to_string(),
            sender_name: "Olivia Wilson".to_string(),
            body: "Reviewing it tonight.".to_string(),
            sent_at: at(2024, 9, 21, 19, 40),
        },
    ]
}

pub fn group_files() -> Vec<CollaborationFile> {
    vec![CollaborationFile {
        id: "GFL001".to_string(),
        group_id: "GRP001".to_string(),
        name: "project-plan.pdf".to_string(),
        url: "/files/project-plan.pdf".to_string(),
        size_bytes: 245_760,
        uploaded_by: "Olivia Wilson".to_string(),
        uploaded_at: at(2024, 9, 22, 10, 0),
    }]
}

pub fn group_tasks() -> Vec<CollaborationTask> {
    vec![
        CollaborationTask {
            id: "GTK001".to_string(),
            group_id: "GRP001".to_string(),
            title: "Write parser tests".to_string(),
            assignee: Some("ST001".to_string()),
            due_date: Some(date(2024, 10, 10)),
            status: TaskStatus::InProgress,
        },
        CollaborationTask {
            id: "GTK002".to_string(),
            group_id: "GRP001".to_string(),
            title: "Prepare presentation".to_string(),
            assignee: Some("ST004".to_string()),
            due_date: Some(date(2024, 10, 20)),
            status: TaskStatus::Todo,
        },
    ]
}
