//! 数据模型
//!
//! - UserAccount：用户账户（资料 + 口令 + refresh token 绑定），仅存储层可见
//! - 各领域实体的 `Record` 实现：id 前缀、草稿构造、补丁合并、写入校验

use crate::error::StorageError;
use crate::traits::Record;
use crate::validation::{
    ensure_email, ensure_optional_email, ensure_order, ensure_range, ensure_required,
};
use chrono::Utc;
use domain::*;

/// 用户账户。
///
/// `password` 为明文（种子数据）或 argon2 哈希（首次登录后升级）。
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub password: String,
    pub refresh_jti: Option<String>,
}

/// 用户资料校验（创建与更新共用）。
pub fn validate_user(user: &User) -> Result<(), StorageError> {
    ensure_required(&user.name, "name")?;
    ensure_email(&user.email, "email")
}

impl Record for Student {
    type Draft = StudentDraft;
    type Patch = StudentPatch;
    const KIND: &'static str = "student";
    const ID_PREFIX: &'static str = "ST";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: StudentDraft) -> Self {
        Student::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: StudentPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.department, "department")?;
        ensure_optional_email(&self.email, "email")?;
        if let Some(year) = self.year {
            ensure_range(year, 1, 8, "year")?;
        }
        if let Some(gpa) = self.gpa {
            ensure_range(gpa, 0.0, 4.0, "gpa")?;
        }
        Ok(())
    }
}

impl Record for Lecturer {
    type Draft = LecturerDraft;
    type Patch = LecturerPatch;
    const KIND: &'static str = "lecturer";
    const ID_PREFIX: &'static str = "LEC";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: LecturerDraft) -> Self {
        Lecturer::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: LecturerPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_email(&self.email, "email")?;
        ensure_required(&self.department, "department")?;
        ensure_required(&self.position, "position")
    }
}

impl Record for Course {
    type Draft = CourseDraft;
    type Patch = CoursePatch;
    const KIND: &'static str = "course";
    const ID_PREFIX: &'static str = "CRS";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CourseDraft) -> Self {
        Course::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: CoursePatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.department, "department")?;
        ensure_required(&self.instructor, "instructor")?;
        ensure_range(self.credits, 1, 30, "credits")
    }
}

impl Record for Subject {
    type Draft = SubjectDraft;
    type Patch = SubjectPatch;
    const KIND: &'static str = "subject";
    const ID_PREFIX: &'static str = "SUB";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: SubjectDraft) -> Self {
        Subject::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: SubjectPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.code, "code")?;
        ensure_required(&self.department, "department")?;
        ensure_range(self.credits, 1, 30, "credits")
    }
}

impl Record for Batch {
    type Draft = BatchDraft;
    type Patch = BatchPatch;
    const KIND: &'static str = "batch";
    const ID_PREFIX: &'static str = "BAT";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: BatchDraft) -> Self {
        Batch::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: BatchPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.department, "department")?;
        ensure_required(&self.coordinator, "coordinator")?;
        ensure_order(&self.start_date, &self.end_date, "startDate", "endDate")
    }
}

impl Record for Enrollment {
    type Draft = EnrollmentDraft;
    type Patch = EnrollmentPatch;
    const KIND: &'static str = "enrollment";
    const ID_PREFIX: &'static str = "ENR";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: EnrollmentDraft) -> Self {
        Enrollment::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: EnrollmentPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.student_id, "studentId")?;
        ensure_required(&self.course_id, "courseId")?;
        ensure_required(&self.batch_id, "batchId")
    }
}

impl Record for Facility {
    type Draft = FacilityDraft;
    type Patch = FacilityPatch;
    const KIND: &'static str = "facility";
    const ID_PREFIX: &'static str = "FAC";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: FacilityDraft) -> Self {
        Facility::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: FacilityPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.kind, "type")
    }
}

impl Record for Reservation {
    type Draft = ReservationDraft;
    type Patch = ReservationPatch;
    const KIND: &'static str = "reservation";
    const ID_PREFIX: &'static str = "RES";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ReservationDraft) -> Self {
        Reservation::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: ReservationPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.facility, "facility")?;
        ensure_required(&self.purpose, "purpose")?;
        ensure_required(&self.requested_by, "requestedBy")
    }
}

impl Record for Resource {
    type Draft = ResourceDraft;
    type Patch = ResourcePatch;
    const KIND: &'static str = "resource";
    const ID_PREFIX: &'static str = "RSC";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ResourceDraft) -> Self {
        Resource::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: ResourcePatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")?;
        ensure_required(&self.kind, "type")?;
        if self.available > self.quantity {
            return Err(StorageError::validation("available must not exceed quantity"));
        }
        Ok(())
    }
}

impl Record for Event {
    type Draft = EventDraft;
    type Patch = EventPatch;
    const KIND: &'static str = "event";
    const ID_PREFIX: &'static str = "EVT";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: EventDraft) -> Self {
        Event::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: EventPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.title, "title")?;
        ensure_required(&self.location, "location")?;
        ensure_required(&self.organizer, "organizer")
    }
}

impl Record for Message {
    type Draft = MessageDraft;
    type Patch = MessagePatch;
    const KIND: &'static str = "message";
    const ID_PREFIX: &'static str = "MSG";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: MessageDraft) -> Self {
        Message::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: MessagePatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.sender_id, "senderId")?;
        ensure_required(&self.recipient_id, "recipientId")?;
        ensure_required(&self.subject, "subject")
    }
}

impl Record for Notification {
    type Draft = NotificationDraft;
    type Patch = NotificationPatch;
    const KIND: &'static str = "notification";
    const ID_PREFIX: &'static str = "NTF";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NotificationDraft) -> Self {
        Notification::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.title, "title")?;
        ensure_required(&self.message, "message")
    }
}

impl Record for ScheduleEvent {
    type Draft = ScheduleEventDraft;
    type Patch = ScheduleEventPatch;
    const KIND: &'static str = "schedule event";
    const ID_PREFIX: &'static str = "SCH";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ScheduleEventDraft) -> Self {
        ScheduleEvent::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: ScheduleEventPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.title, "title")?;
        ensure_order(&self.starts_at, &self.ends_at, "startsAt", "endsAt")
    }
}

impl Record for ScheduleNotification {
    type Draft = ScheduleNotificationDraft;
    type Patch = ScheduleNotificationPatch;
    const KIND: &'static str = "schedule notification";
    const ID_PREFIX: &'static str = "SNT";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ScheduleNotificationDraft) -> Self {
        ScheduleNotification::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: ScheduleNotificationPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.event_id, "eventId")?;
        ensure_required(&self.title, "title")
    }
}

impl Record for CollaborationGroup {
    type Draft = CollaborationGroupDraft;
    type Patch = CollaborationGroupPatch;
    const KIND: &'static str = "group";
    const ID_PREFIX: &'static str = "GRP";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CollaborationGroupDraft) -> Self {
        CollaborationGroup::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: CollaborationGroupPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.name, "name")
    }
}

impl Record for CollaborationMessage {
    type Draft = CollaborationMessageDraft;
    type Patch = CollaborationMessagePatch;
    const KIND: &'static str = "group message";
    const ID_PREFIX: &'static str = "GMS";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CollaborationMessageDraft) -> Self {
        CollaborationMessage::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: CollaborationMessagePatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.group_id, "groupId")?;
        ensure_required(&self.sender_id, "senderId")?;
        ensure_required(&self.body, "body")
    }
}

impl Record for CollaborationFile {
    type Draft = CollaborationFileDraft;
    type Patch = CollaborationFilePatch;
    const KIND: &'static str = "group file";
    const ID_PREFIX: &'static str = "GFL";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CollaborationFileDraft) -> Self {
        CollaborationFile::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: CollaborationFilePatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.group_id, "groupId")?;
        ensure_required(&self.name, "name")?;
        ensure_required(&self.url, "url")
    }
}

impl Record for CollaborationTask {
    type Draft = CollaborationTaskDraft;
    type Patch = CollaborationTaskPatch;
    const KIND: &'static str = "group task";
    const ID_PREFIX: &'static str = "GTK";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CollaborationTaskDraft) -> Self {
        CollaborationTask::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: CollaborationTaskPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> Result<(), StorageError> {
        ensure_required(&self.group_id, "groupId")?;
        ensure_required(&self.title, "title")
    }
}
