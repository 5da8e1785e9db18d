//! 校园数据容器
//!
//! `CampusStore` 持有全部实体集合与用户存储，每个进程（或每个测试）创建一次，
//! 不使用模块级全局状态。跨集合的查询与校验（选课引用检查、在读人数统计、
//! 预约审批）集中在这里。

use crate::error::StorageError;
use crate::fixtures;
use crate::in_memory::{InMemoryRecordStore, InMemoryUserStore, SimulatedLatency};
use crate::traits::{Record, RecordStore, UserStore};
use domain::*;
use std::collections::HashSet;
use std::sync::Arc;

/// 按实体类型取对应集合。
pub trait Collection<R: Record> {
    fn collection(&self) -> &Arc<dyn RecordStore<R>>;
}

/// 校园数据容器
#[derive(Clone)]
pub struct CampusStore {
    students: Arc<dyn RecordStore<Student>>,
    lecturers: Arc<dyn RecordStore<Lecturer>>,
    courses: Arc<dyn RecordStore<Course>>,
    subjects: Arc<dyn RecordStore<Subject>>,
    batches: Arc<dyn RecordStore<Batch>>,
    enrollments: Arc<dyn RecordStore<Enrollment>>,
    facilities: Arc<dyn RecordStore<Facility>>,
    reservations: Arc<dyn RecordStore<Reservation>>,
    resources: Arc<dyn RecordStore<Resource>>,
    events: Arc<dyn RecordStore<Event>>,
    messages: Arc<dyn RecordStore<Message>>,
    notifications: Arc<dyn RecordStore<Notification>>,
    schedule_events: Arc<dyn RecordStore<ScheduleEvent>>,
    schedule_notifications: Arc<dyn RecordStore<ScheduleNotification>>,
    groups: Arc<dyn RecordStore<CollaborationGroup>>,
    group_messages: Arc<dyn RecordStore<CollaborationMessage>>,
    group_files: Arc<dyn RecordStore<CollaborationFile>>,
    group_tasks: Arc<dyn RecordStore<CollaborationTask>>,
    users: Arc<dyn UserStore>,
}

fn store<R: Record>(records: Vec<R>, latency: SimulatedLatency) -> Arc<dyn RecordStore<R>> {
    Arc::new(InMemoryRecordStore::with_records(records, latency))
}

impl CampusStore {
    /// 全部集合为空
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            students: store(Vec::new(), latency),
            lecturers: store(Vec::new(), latency),
            courses: store(Vec::new(), latency),
            subjects: store(Vec::new(), latency),
            batches: store(Vec::new(), latency),
            enrollments: store(Vec::new(), latency),
            facilities: store(Vec::new(), latency),
            reservations: store(Vec::new(), latency),
            resources: store(Vec::new(), latency),
            events: store(Vec::new(), latency),
            messages: store(Vec::new(), latency),
            notifications: store(Vec::new(), latency),
            schedule_events: store(Vec::new(), latency),
            schedule_notifications: store(Vec::new(), latency),
            groups: store(Vec::new(), latency),
            group_messages: store(Vec::new(), latency),
            group_files: store(Vec::new(), latency),
            group_tasks: store(Vec::new(), latency),
            users: Arc::new(InMemoryUserStore::new(latency)),
        }
    }

    /// 装载内置演示数据
    pub fn with_fixtures(latency: SimulatedLatency) -> Self {
        Self {
            students: store(fixtures::students(), latency),
            lecturers: store(fixtures::lecturers(), latency),
            courses: store(fixtures::courses(), latency),
            subjects: store(fixtures::subjects(), latency),
            batches: store(fixtures::batches(), latency),
            enrollments: store(fixtures::enrollments(), latency),
            facilities: store(fixtures::facilities(), latency),
            reservations: store(fixtures::reservations(), latency),
            resources: store(fixtures::resources(), latency),
            events: store(fixtures::events(), latency),
            messages: store(fixtures::messages(), latency),
            notifications: store(fixtures::notifications(), latency),
            schedule_events: store(fixtures::schedule_events(), latency),
            schedule_notifications: store(fixtures::schedule_notifications(), latency),
            groups: store(fixtures::groups(), latency),
            group_messages: store(fixtures::group_messages(), latency),
            group_files: store(fixtures::group_files(), latency),
            group_tasks: store(fixtures::group_tasks(), latency),
            users: Arc::new(InMemoryUserStore::with_accounts(
                fixtures::accounts(),
                latency,
            )),
        }
    }

    /// 替换某个集合的实现（例如注入自定义种子数据）
    pub fn with_collection<R: Record>(mut self, records: Arc<dyn RecordStore<R>>) -> Self
    where
        Self: CollectionMut<R>,
    {
        *self.collection_mut() = records;
        self
    }

    /// 按实体类型取集合
    pub fn records<R: Record>(&self) -> &dyn RecordStore<R>
    where
        Self: Collection<R>,
    {
        self.collection().as_ref()
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        self.users.clone()
    }

    /// 课程下的科目（课程的 `subject_ids` 或科目的 `course_ids` 任一侧关联即可）
    pub async fn subjects_by_course(&self, course_id: &str) -> Result<Vec<Subject>, StorageError> {
        let course = self.courses.find(course_id).await?;
        let subjects = self.subjects.list().await?;
        Ok(subjects
            .into_iter()
            .filter(|subject| {
                course.subject_ids.contains(&subject.id)
                    || subject.course_ids.iter().any(|id| id == course_id)
            })
            .collect())
    }

    pub async fn enrollments_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Enrollment>, StorageError> {
        self.students.find(student_id).await?;
        self.enrollments_where(|item| item.student_id == student_id)
            .await
    }

    pub async fn enrollments_by_batch(
        &self,
        batch_id: &str,
    ) -> Result<Vec<Enrollment>, StorageError> {
        self.batches.find(batch_id).await?;
        self.enrollments_where(|item| item.batch_id == batch_id).await
    }

    pub async fn enrollments_by_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<Enrollment>, StorageError> {
        self.courses.find(course_id).await?;
        self.enrollments_where(|item| item.course_id == course_id)
            .await
    }

    async fn enrollments_where(
        &self,
        predicate: impl Fn(&Enrollment) -> bool,
    ) -> Result<Vec<Enrollment>, StorageError> {
        let enrollments = self.enrollments.list().await?;
        Ok(enrollments.into_iter().filter(|item| predicate(item)).collect())
    }

    /// 课程在读人数：未退课选课记录中的不同学生数
    pub async fn course_student_count(&self, course_id: &str) -> Result<usize, StorageError> {
        self.courses.find(course_id).await?;
        let enrollments = self.enrollments.list().await?;
        Ok(roster_size(&enrollments, |item| item.course_id == course_id))
    }

    /// 批次在读人数
    pub async fn batch_student_count(&self, batch_id: &str) -> Result<usize, StorageError> {
        self.batches.find(batch_id).await?;
        let enrollments = self.enrollments.list().await?;
        Ok(roster_size(&enrollments, |item| item.batch_id == batch_id))
    }

    pub async fn courses_with_counts(&self) -> Result<Vec<(Course, usize)>, StorageError> {
        let courses = self.courses.list().await?;
        let enrollments = self.enrollments.list().await?;
        Ok(courses
            .into_iter()
            .map(|course| {
                let count = roster_size(&enrollments, |item| item.course_id == course.id);
                (course, count)
            })
            .collect())
    }

    pub async fn batches_with_counts(&self) -> Result<Vec<(Batch, usize)>, StorageError> {
        let batches = self.batches.list().await?;
        let enrollments = self.enrollments.list().await?;
        Ok(batches
            .into_iter()
            .map(|batch| {
                let count = roster_size(&enrollments, |item| item.batch_id == batch.id);
                (batch, count)
            })
            .collect())
    }

    pub async fn group_messages(
        &self,
        group_id: &str,
    ) -> Result<Vec<CollaborationMessage>, StorageError> {
        self.groups.find(group_id).await?;
        let items = self.group_messages.list().await?;
        Ok(items.into_iter().filter(|item| item.group_id == group_id).collect())
    }

    pub async fn group_files(
        &self,
        group_id: &str,
    ) -> Result<Vec<CollaborationFile>, StorageError> {
        self.groups.find(group_id).await?;
        let items = self.group_files.list().await?;
        Ok(items.into_iter().filter(|item| item.group_id == group_id).collect())
    }

    pub async fn group_tasks(
        &self,
        group_id: &str,
    ) -> Result<Vec<CollaborationTask>, StorageError> {
        self.groups.find(group_id).await?;
        let items = self.group_tasks.list().await?;
        Ok(items.into_iter().filter(|item| item.group_id == group_id).collect())
    }

    pub async fn reservations_by_status(
        &self,
        status: ReservationStatus,
    ) -> Result<Vec<Reservation>, StorageError> {
        let items = self.reservations.list().await?;
        Ok(items.into_iter().filter(|item| item.status == status).collect())
    }

    /// 审批预约：只有待审批的预约可以被批准或驳回
    pub async fn set_reservation_status(
        &self,
        reservation_id: &str,
        status: ReservationStatus,
    ) -> Result<Reservation, StorageError> {
        if !matches!(status, ReservationStatus::Approved | ReservationStatus::Rejected) {
            return Err(StorageError::validation(format!(
                "reservation status {} cannot be set by review",
                status.as_str()
            )));
        }
        let current = self.reservations.find(reservation_id).await?;
        if current.status != ReservationStatus::Pending {
            return Err(StorageError::Conflict(format!(
                "reservation {reservation_id} is already {}",
                current.status.as_str()
            )));
        }
        let patch = ReservationPatch {
            status: Some(status),
            ..Default::default()
        };
        let updated = self.reservations.update(reservation_id, patch).await?;
        tracing::info!(
            reservation_id,
            status = status.as_str(),
            "reservation reviewed"
        );
        Ok(updated)
    }

    pub async fn mark_message_read(&self, message_id: &str) -> Result<Message, StorageError> {
        let patch = MessagePatch {
            read: Some(true),
            ..Default::default()
        };
        self.messages.update(message_id, patch).await
    }

    /// 创建选课记录
    ///
    /// 引用的学生、课程、批次必须存在，否则返回 Validation；
    /// 草稿未给出的冗余名称从被引用记录补齐。
    pub async fn enroll(&self, mut draft: EnrollmentDraft) -> Result<Enrollment, StorageError> {
        let student = self
            .students
            .find(&draft.student_id)
            .await
            .map_err(unknown_reference)?;
        let course = self
            .courses
            .find(&draft.course_id)
            .await
            .map_err(unknown_reference)?;
        let batch = self
            .batches
            .find(&draft.batch_id)
            .await
            .map_err(unknown_reference)?;
        draft.student_name = draft.student_name.or(Some(student.name));
        draft.course_name = draft.course_name.or(Some(course.name));
        draft.batch_name = draft.batch_name.or(Some(batch.name));
        self.enrollments.create(draft).await
    }
}

fn unknown_reference(err: StorageError) -> StorageError {
    match err {
        StorageError::NotFound { kind, id } => {
            StorageError::validation(format!("unknown {kind} {id}"))
        }
        other => other,
    }
}

fn roster_size(enrollments: &[Enrollment], predicate: impl Fn(&Enrollment) -> bool) -> usize {
    enrollments
        .iter()
        .filter(|item| item.counts_toward_roster() && predicate(*item))
        .map(|item| item.student_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// 可替换集合（仅容器构造阶段使用）。
pub trait CollectionMut<R: Record> {
    fn collection_mut(&mut self) -> &mut Arc<dyn RecordStore<R>>;
}

macro_rules! collections {
    ($($field:ident: $record:ty),* $(,)?) => {
        $(
            impl Collection<$record> for CampusStore {
                fn collection(&self) -> &Arc<dyn RecordStore<$record>> {
                    &self.$field
                }
            }

            impl CollectionMut<$record> for CampusStore {
                fn collection_mut(&mut self) -> &mut Arc<dyn RecordStore<$record>> {
                    &mut self.$field
                }
            }
        )*
    };
}

collections! {
    students: Student,
    lecturers: Lecturer,
    courses: Course,
    subjects: Subject,
    batches: Batch,
    enrollments: Enrollment,
    facilities: Facility,
    reservations: Reservation,
    resources: Resource,
    events: Event,
    messages: Message,
    notifications: Notification,
    schedule_events: ScheduleEvent,
    schedule_notifications: ScheduleNotification,
    groups: CollaborationGroup,
    group_messages: CollaborationMessage,
    group_files: CollaborationFile,
    group_tasks: CollaborationTask,
}
