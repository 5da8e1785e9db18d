use campus_storage::{
    CampusStore, InMemoryRecordStore, RecordStore, SimulatedLatency, StorageError,
};
use domain::{Course, CoursePatch, Student, StudentDraft, StudentPatch};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn john_smith() -> Student {
    Student {
        id: "ST001".to_string(),
        name: "John Smith".to_string(),
        email: String::new(),
        department: "CS".to_string(),
        year: None,
        gpa: None,
    }
}

fn draft(name: &str, department: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        department: department.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn seeded_collection_grows_with_unique_id() {
    let students = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    let store = CampusStore::new(SimulatedLatency::none())
        .with_collection::<Student>(Arc::new(students));

    let list = store.records::<Student>().list().await.expect("list");
    assert_eq!(list, vec![john_smith()]);

    let created = store
        .records::<Student>()
        .create(draft("Jane Doe", "Arts"))
        .await
        .expect("create");
    assert_ne!(created.id, "ST001");
    assert_eq!(created.name, "Jane Doe");

    let list = store.records::<Student>().list().await.expect("list");
    assert_eq!(list.len(), 2);
    assert_eq!(list[1], created);
}

#[tokio::test]
async fn created_record_is_found_with_draft_fields() {
    let store = InMemoryRecordStore::<Student>::new(SimulatedLatency::none());
    let created = store
        .create(StudentDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@campus.edu".to_string(),
            department: "Mathematics".to_string(),
            year: Some(2),
            gpa: Some(3.9),
        })
        .await
        .expect("create");
    let found = store.find(&created.id).await.expect("find");
    assert_eq!(found.name, "Ada Lovelace");
    assert_eq!(found.email, "ada@campus.edu");
    assert_eq!(found.year, Some(2));
    assert_eq!(found, created);
}

#[tokio::test]
async fn ids_skip_seeded_values() {
    let mut seeded = john_smith();
    seeded.id = "ST002".to_string();
    let store = InMemoryRecordStore::with_records(vec![seeded], SimulatedLatency::none());
    let first = store.create(draft("A", "Arts")).await.expect("create");
    let second = store.create(draft("B", "Arts")).await.expect("create");
    assert_ne!(first.id, "ST002");
    assert_ne!(second.id, "ST002");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn absent_id_is_not_found() {
    let store = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    let err = store.find("ST999").await.expect_err("missing");
    assert_eq!(
        err,
        StorageError::NotFound {
            kind: "student",
            id: "ST999".to_string()
        }
    );
    assert_eq!(err.to_string(), "student ST999 not found");
}

#[tokio::test]
async fn update_twice_equals_once() {
    let store = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    let patch = StudentPatch {
        department: Some("Computer Science".to_string()),
        gpa: Some(Some(3.2)),
        ..Default::default()
    };
    let once = store.update("ST001", patch.clone()).await.expect("update");
    let twice = store.update("ST001", patch).await.expect("update");
    assert_eq!(once, twice);
    assert_eq!(twice.name, "John Smith");
    assert_eq!(twice.department, "Computer Science");
}

#[tokio::test]
async fn invalid_update_leaves_record_unchanged() {
    let store = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    let patch = StudentPatch {
        gpa: Some(Some(7.5)),
        ..Default::default()
    };
    let err = store.update("ST001", patch).await.expect_err("invalid gpa");
    assert!(matches!(err, StorageError::Validation(_)));
    assert_eq!(store.find("ST001").await.expect("find"), john_smith());
}

#[tokio::test]
async fn invalid_create_is_rejected() {
    let store = InMemoryRecordStore::<Student>::new(SimulatedLatency::none());
    let err = store.create(draft("  ", "Arts")).await.expect_err("blank name");
    assert!(matches!(err, StorageError::Validation(_)));
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn delete_then_find_is_not_found() {
    let store = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    store.delete("ST001").await.expect("delete");
    assert!(store.find("ST001").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn deleting_absent_id_keeps_collection() {
    let store = InMemoryRecordStore::with_records(vec![john_smith()], SimulatedLatency::none());
    let err = store.delete("ST404").await.expect_err("missing");
    assert!(err.is_not_found());
    assert_eq!(store.list().await.expect("list"), vec![john_smith()]);
}

#[tokio::test]
async fn course_credit_range_is_enforced() {
    let store = CampusStore::with_fixtures(SimulatedLatency::none());
    let patch = CoursePatch {
        credits: Some(0),
        ..Default::default()
    };
    let err = store
        .records::<Course>()
        .update("CRS001", patch)
        .await
        .expect_err("credits");
    assert!(matches!(err, StorageError::Validation(_)));
}

#[tokio::test]
async fn latency_is_awaited_before_each_call() {
    let store = InMemoryRecordStore::with_records(
        vec![john_smith()],
        SimulatedLatency::from_millis(20),
    );
    let started = Instant::now();
    let list = store.list().await.expect("list");
    store.find("ST001").await.expect("find");
    assert_eq!(list.len(), 1);
    assert!(started.elapsed() >= Duration::from_millis(40));
}
