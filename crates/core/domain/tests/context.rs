use domain::{
    CollaborationTask, CollaborationTaskPatch, Role, SessionContext, Student, StudentPatch,
    TaskStatus, permissions,
};

#[test]
fn session_context_builds_from_role() {
    let ctx = SessionContext::new("U001", "admin@campus.edu", Role::Admin);

    assert_eq!(ctx.user_id, "U001");
    assert_eq!(ctx.role, Role::Admin);
    assert!(ctx.has_permission(permissions::CAMPUS_WRITE));
    assert!(ctx.has_permission(permissions::SYSTEM_METRICS_READ));
}

#[test]
fn student_role_is_read_only() {
    let ctx = SessionContext::new("U003", "student@campus.edu", Role::Student);
    assert!(ctx.has_permission(permissions::CAMPUS_READ));
    assert!(!ctx.has_permission(permissions::CAMPUS_WRITE));
}

#[test]
fn role_parse_accepts_faculty_alias() {
    assert_eq!(Role::parse("Faculty"), Some(Role::Lecturer));
    assert_eq!(Role::parse(" STAFF "), Some(Role::Staff));
    assert_eq!(Role::parse("guest"), None);
}

#[test]
fn patch_only_touches_present_fields() {
    let mut student = Student {
        id: "ST001".to_string(),
        name: "John Smith".to_string(),
        email: "john@campus.edu".to_string(),
        department: "CS".to_string(),
        year: Some(2),
        gpa: Some(3.4),
    };
    student.apply(StudentPatch {
        department: Some("Math".to_string()),
        ..StudentPatch::default()
    });
    assert_eq!(student.department, "Math");
    assert_eq!(student.name, "John Smith");
    assert_eq!(student.year, Some(2));
}

#[test]
fn records_serialize_camel_case() {
    let student = Student {
        id: "ST001".to_string(),
        name: "John Smith".to_string(),
        email: "".to_string(),
        department: "CS".to_string(),
        year: None,
        gpa: Some(3.5),
    };
    let value = serde_json::to_value(&student).expect("serialize");
    assert_eq!(value["id"], "ST001");
    assert!(value.get("gpa").is_some());

    let json = r#"{"name":"A","department":"B","startDate":"2024-01-01","endDate":"2024-06-30","coordinator":"C"}"#;
    let draft: domain::BatchDraft = serde_json::from_str(json).expect("parse");
    assert_eq!(draft.status, domain::ProgramStatus::Active);
}

#[test]
fn null_clears_optional_fields_but_absence_keeps_them() {
    let mut student = Student {
        id: "ST002".to_string(),
        name: "Emma Wilson".to_string(),
        email: "emma@campus.edu".to_string(),
        department: "Business".to_string(),
        year: Some(3),
        gpa: Some(3.8),
    };
    let patch: StudentPatch =
        serde_json::from_str(r#"{"gpa":null,"year":4}"#).expect("patch");
    assert_eq!(patch.gpa, Some(None));
    assert_eq!(patch.year, Some(Some(4)));
    assert_eq!(patch.name, None);
    student.apply(patch);
    assert_eq!(student.gpa, None);
    assert_eq!(student.year, Some(4));

    let untouched: StudentPatch = serde_json::from_str(r#"{"name":"Emma W."}"#).expect("patch");
    student.apply(untouched);
    assert_eq!(student.year, Some(4));
    assert_eq!(student.name, "Emma W.");
}

#[test]
fn task_can_be_unassigned() {
    let mut task = CollaborationTask {
        id: "TSK001".to_string(),
        group_id: "GRP001".to_string(),
        title: "Draft report".to_string(),
        assignee: Some("U002".to_string()),
        due_date: None,
        status: TaskStatus::InProgress,
    };
    let patch: CollaborationTaskPatch =
        serde_json::from_str(r#"{"assignee":null,"dueDate":"2024-11-01"}"#).expect("patch");
    task.apply(patch);
    assert_eq!(task.assignee, None);
    assert_eq!(task.due_date.map(|date| date.to_string()).as_deref(), Some("2024-11-01"));
}
