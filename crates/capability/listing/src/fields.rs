use domain::{
    Batch, CollaborationFile, CollaborationGroup, CollaborationMessage, CollaborationTask, Course,
    Enrollment, Event, Facility, FeedItem, Lecturer, Message, Notification, Reservation, Resource,
    ScheduleEvent, ScheduleNotification, Student, Subject, User,
};

/// 可被关键字检索的记录。
pub trait Searchable {
    /// 参与关键字匹配的文本字段，首项为 `id`。
    fn search_fields(&self) -> Vec<&str>;
}

/// 附带派生计数的记录（如课程在读人数）按记录本身检索。
impl<T: Searchable> Searchable for (T, usize) {
    fn search_fields(&self) -> Vec<&str> {
        self.0.search_fields()
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.email.as_str(), self.department.as_str()]
    }
}

impl Searchable for Lecturer {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.department.as_str(),
            self.position.as_str(),
        ]
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.department.as_str(),
            self.instructor.as_str(),
        ]
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.code.as_str(), self.department.as_str()]
    }
}

impl Searchable for Batch {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.department.as_str(),
            self.coordinator.as_str(),
        ]
    }
}

impl Searchable for Enrollment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.student_name.as_str(),
            self.course_name.as_str(),
            self.batch_name.as_str(),
        ]
    }
}

impl Searchable for Facility {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.kind.as_str(), self.status.as_str()]
    }
}

impl Searchable for Reservation {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.facility.as_str(),
            self.room.as_str(),
            self.purpose.as_str(),
            self.requested_by.as_str(),
        ]
    }
}

impl Searchable for Resource {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.kind.as_str(), self.location.as_str()]
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.title.as_str(),
            self.location.as_str(),
            self.organizer.as_str(),
            self.category.as_str(),
        ]
    }
}

impl Searchable for Message {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.subject.as_str(),
            self.sender_name.as_str(),
            self.recipient_name.as_str(),
        ]
    }
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.title.as_str(), self.message.as_str()]
    }
}

impl Searchable for ScheduleEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.title.as_str(), self.location.as_str()]
    }
}

impl Searchable for ScheduleNotification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.title.as_str(), self.message.as_str()]
    }
}

impl Searchable for FeedItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.title.as_str(), self.message.as_str()]
    }
}

impl Searchable for CollaborationGroup {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for CollaborationMessage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.sender_name.as_str(), self.body.as_str()]
    }
}

impl Searchable for CollaborationFile {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.uploaded_by.as_str()]
    }
}

impl Searchable for CollaborationTask {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.title.as_str()];
        if let Some(assignee) = self.assignee.as_deref() {
            fields.push(assignee);
        }
        fields
    }
}
