//! 教学类实体：课程、科目、批次、选课。
//!
//! 课程与批次的在读人数不再保存在记录里，由选课记录实时计算，
//! 避免手工增减计数导致的漂移。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 课程/批次状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    #[default]
    Active,
    Inactive,
    Upcoming,
    Completed,
}

/// 课程记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub department: String,
    pub credits: u32,
    pub instructor: String,
    pub status: ProgramStatus,
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub department: String,
    pub credits: u32,
    pub instructor: String,
    #[serde(default)]
    pub status: ProgramStatus,
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub credits: Option<u32>,
    pub instructor: Option<String>,
    pub status: Option<ProgramStatus>,
    pub subject_ids: Option<Vec<String>>,
}

impl Course {
    pub fn from_draft(id: String, draft: CourseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            department: draft.department,
            credits: draft.credits,
            instructor: draft.instructor,
            status: draft.status,
            subject_ids: draft.subject_ids,
        }
    }

    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(credits) = patch.credits {
            self.credits = credits;
        }
        if let Some(instructor) = patch.instructor {
            self.instructor = instructor;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(subject_ids) = patch.subject_ids {
            self.subject_ids = subject_ids;
        }
    }
}

/// 科目记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub credits: u32,
    pub department: String,
    #[serde(default)]
    pub course_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDraft {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub credits: u32,
    pub department: String,
    #[serde(default)]
    pub course_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub credits: Option<u32>,
    pub department: Option<String>,
    pub course_ids: Option<Vec<String>>,
}

impl Subject {
    pub fn from_draft(id: String, draft: SubjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            code: draft.code,
            description: draft.description,
            credits: draft.credits,
            department: draft.department,
            course_ids: draft.course_ids,
        }
    }

    pub fn apply(&mut self, patch: SubjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(credits) = patch.credits {
            self.credits = credits;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(course_ids) = patch.course_ids {
            self.course_ids = course_ids;
        }
    }
}

/// 批次记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub department: String,
    pub coordinator: String,
    pub status: ProgramStatus,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub department: String,
    pub coordinator: String,
    #[serde(default)]
    pub status: ProgramStatus,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub coordinator: Option<String>,
    pub status: Option<ProgramStatus>,
    pub courses: Option<Vec<String>>,
}

impl Batch {
    pub fn from_draft(id: String, draft: BatchDraft) -> Self {
        Self {
            id,
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            department: draft.department,
            coordinator: draft.coordinator,
            status: draft.status,
            courses: draft.courses,
        }
    }

    pub fn apply(&mut self, patch: BatchPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(coordinator) = patch.coordinator {
            self.coordinator = coordinator;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
    }
}

/// 选课状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Pending,
    Completed,
    Dropped,
}

/// 选课记录（冗余保存学生、课程、批次名称）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub batch_id: String,
    pub batch_name: String,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub grade: Option<String>,
}

/// 选课创建输入；名称字段缺省时由存储层按 id 补齐。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDraft {
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    pub course_id: String,
    #[serde(default)]
    pub course_name: Option<String>,
    pub batch_id: String,
    #[serde(default)]
    pub batch_name: Option<String>,
    pub enrollment_date: NaiveDate,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPatch {
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<EnrollmentStatus>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub grade: Option<Option<String>>,
}

impl Enrollment {
    pub fn from_draft(id: String, draft: EnrollmentDraft) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            student_name: draft.student_name.unwrap_or_default(),
            course_id: draft.course_id,
            course_name: draft.course_name.unwrap_or_default(),
            batch_id: draft.batch_id,
            batch_name: draft.batch_name.unwrap_or_default(),
            enrollment_date: draft.enrollment_date,
            status: draft.status,
            grade: draft.grade,
        }
    }

    pub fn apply(&mut self, patch: EnrollmentPatch) {
        if let Some(enrollment_date) = patch.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
    }

    /// 计入在读人数的选课（已退课不计）。
    pub fn counts_toward_roster(&self) -> bool {
        self.status != EnrollmentStatus::Dropped
    }
}
