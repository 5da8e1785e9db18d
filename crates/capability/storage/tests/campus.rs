use campus_storage::{CampusStore, RecordStore, SimulatedLatency, StorageError, unread_count};
use chrono::NaiveDate;
use domain::{
    Enrollment, EnrollmentDraft, EnrollmentPatch, EnrollmentStatus, FeedSource, Message,
    Notification, ReservationStatus,
};

fn store() -> CampusStore {
    CampusStore::with_fixtures(SimulatedLatency::none())
}

fn enrollment_draft(student_id: &str, course_id: &str, batch_id: &str) -> EnrollmentDraft {
    EnrollmentDraft {
        student_id: student_id.to_string(),
        student_name: None,
        course_id: course_id.to_string(),
        course_name: None,
        batch_id: batch_id.to_string(),
        batch_name: None,
        enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 5).expect("date"),
        status: EnrollmentStatus::Active,
        grade: None,
    }
}

#[tokio::test]
async fn student_counts_are_derived_from_enrollments() {
    let store = store();
    assert_eq!(store.course_student_count("CRS001").await.expect("count"), 2);
    assert_eq!(store.course_student_count("CRS003").await.expect("count"), 0);
    assert_eq!(store.batch_student_count("BAT002").await.expect("count"), 2);

    let courses = store.courses_with_counts().await.expect("courses");
    let counts: Vec<_> = courses
        .iter()
        .map(|(course, count)| (course.id.as_str(), *count))
        .collect();
    assert_eq!(counts, vec![("CRS001", 2), ("CRS002", 2), ("CRS003", 0)]);
}

#[tokio::test]
async fn dropping_an_enrollment_lowers_the_count() {
    let store = store();
    let patch = EnrollmentPatch {
        status: Some(EnrollmentStatus::Dropped),
        ..Default::default()
    };
    store
        .records::<Enrollment>()
        .update("ENR002", patch)
        .await
        .expect("drop");
    assert_eq!(store.course_student_count("CRS001").await.expect("count"), 1);
}

#[tokio::test]
async fn enroll_fills_names_and_counts() {
    let store = store();
    let created = store
        .enroll(enrollment_draft("ST002", "CRS001", "BAT001"))
        .await
        .expect("enroll");
    assert_eq!(created.student_name, "Emily Davis");
    assert_eq!(created.course_name, "Introduction to Programming");
    assert_eq!(created.batch_name, "CS 2024");
    assert_eq!(store.course_student_count("CRS001").await.expect("count"), 3);

    let by_student = store.enrollments_by_student("ST002").await.expect("list");
    assert!(by_student.iter().any(|item| item.id == created.id));
}

#[tokio::test]
async fn enroll_rejects_unknown_references() {
    let store = store();
    let before = store.records::<Enrollment>().list().await.expect("list").len();
    let err = store
        .enroll(enrollment_draft("ST999", "CRS001", "BAT001"))
        .await
        .expect_err("unknown student");
    assert_eq!(err, StorageError::Validation("unknown student ST999".to_string()));
    let err = store
        .enroll(enrollment_draft("ST001", "CRS001", "BAT404"))
        .await
        .expect_err("unknown batch");
    assert!(matches!(err, StorageError::Validation(_)));
    let after = store.records::<Enrollment>().list().await.expect("list").len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn subjects_by_course_follows_links() {
    let store = store();
    let subjects = store.subjects_by_course("CRS001").await.expect("subjects");
    let ids: Vec<_> = subjects.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["SUB001", "SUB002"]);
    assert!(store.subjects_by_course("CRS404").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn enrollments_for_unknown_parent_are_not_found() {
    let store = store();
    assert!(store.enrollments_by_batch("BAT404").await.unwrap_err().is_not_found());
    assert_eq!(store.enrollments_by_course("CRS002").await.expect("list").len(), 2);
}

#[tokio::test]
async fn reservation_review_only_from_pending() {
    let store = store();
    let approved = store
        .set_reservation_status("RES001", ReservationStatus::Approved)
        .await
        .expect("approve");
    assert_eq!(approved.status, ReservationStatus::Approved);

    let err = store
        .set_reservation_status("RES001", ReservationStatus::Rejected)
        .await
        .expect_err("already reviewed");
    assert!(matches!(err, StorageError::Conflict(_)));

    let err = store
        .set_reservation_status("RES003", ReservationStatus::Cancelled)
        .await
        .expect_err("not a review status");
    assert!(matches!(err, StorageError::Validation(_)));

    let pending = store
        .reservations_by_status(ReservationStatus::Pending)
        .await
        .expect("pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "RES003");
}

#[tokio::test]
async fn message_can_be_marked_read() {
    let store = store();
    let message = store.mark_message_read("MSG001").await.expect("read");
    assert!(message.read);
    let stored = store.records::<Message>().find("MSG001").await.expect("find");
    assert!(stored.read);
    assert!(store.mark_message_read("MSG404").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn group_children_are_scoped() {
    let store = store();
    assert_eq!(store.group_messages("GRP001").await.expect("messages").len(), 2);
    assert_eq!(store.group_files("GRP001").await.expect("files").len(), 1);
    assert_eq!(store.group_tasks("GRP001").await.expect("tasks").len(), 2);
    assert!(store.group_tasks("GRP404").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn feed_merges_sources_newest_first() {
    let store = store();
    let feed = store.notification_feed(Some("U002")).await.expect("feed");
    let ids: Vec<_> = feed.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["SNT001", "SNT002", "NTF003", "NTF002", "NTF001"]);
    assert_eq!(feed[0].source, FeedSource::Schedule);
    assert_eq!(unread_count(&feed), 4);

    let anonymous = store.notification_feed(None).await.expect("feed");
    assert_eq!(anonymous.len(), 4);
}

#[tokio::test]
async fn feed_items_are_marked_read_in_their_collection() {
    let store = store();
    let item = store
        .mark_feed_item_read("SNT002", Some("U002"))
        .await
        .expect("read");
    assert!(item.read);
    assert_eq!(item.source, FeedSource::Schedule);
    assert!(
        store
            .mark_feed_item_read("NTF404", Some("U002"))
            .await
            .unwrap_err()
            .is_not_found()
    );

    let updated = store.mark_feed_read_all(Some("U002")).await.expect("all");
    assert_eq!(updated, 3);
    let feed = store.notification_feed(Some("U002")).await.expect("feed");
    assert_eq!(unread_count(&feed), 0);
}

#[tokio::test]
async fn addressed_notification_cannot_be_marked_by_another_user() {
    let store = store();
    let err = store
        .mark_feed_item_read("NTF003", Some("U003"))
        .await
        .expect_err("not addressed to U003");
    assert!(err.is_not_found());
    assert!(
        store
            .mark_feed_item_read("NTF003", None)
            .await
            .unwrap_err()
            .is_not_found()
    );

    let stored = store
        .records::<Notification>()
        .find("NTF003")
        .await
        .expect("find");
    assert!(!stored.read);

    let item = store
        .mark_feed_item_read("NTF003", Some("U002"))
        .await
        .expect("owner marks read");
    assert!(item.read);
}
