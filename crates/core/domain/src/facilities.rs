//! 设施类实体：设施、预约、资源。

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// 设施记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    pub rooms: u32,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    #[serde(default)]
    pub rooms: u32,
    #[serde(default = "default_facility_status")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub capacity: Option<u32>,
    pub rooms: Option<u32>,
    pub status: Option<String>,
}

fn default_facility_status() -> String {
    "available".to_string()
}

impl Facility {
    pub fn from_draft(id: String, draft: FacilityDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            capacity: draft.capacity,
            rooms: draft.rooms,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, patch: FacilityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// 预约审批状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Rejected => "rejected",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

/// 设施预约记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub facility: String,
    pub room: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub requested_by: String,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub facility: String,
    #[serde(default)]
    pub room: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub requested_by: String,
    /// 新预约一律待审批
    #[serde(skip)]
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPatch {
    pub facility: Option<String>,
    pub room: Option<String>,
    pub purpose: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// 只由审批流程写入，请求体中的 `status` 被忽略
    #[serde(skip)]
    pub status: Option<ReservationStatus>,
}

impl Reservation {
    pub fn from_draft(id: String, draft: ReservationDraft) -> Self {
        Self {
            id,
            facility: draft.facility,
            room: draft.room,
            purpose: draft.purpose,
            date: draft.date,
            time: draft.time,
            requested_by: draft.requested_by,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, patch: ReservationPatch) {
        if let Some(facility) = patch.facility {
            self.facility = facility;
        }
        if let Some(room) = patch.room {
            self.room = room;
        }
        if let Some(purpose) = patch.purpose {
            self.purpose = purpose;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// 资源（器材、教具等）记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub quantity: u32,
    pub available: u32,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    pub quantity: u32,
    pub available: u32,
    #[serde(default = "default_resource_status")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub quantity: Option<u32>,
    pub available: Option<u32>,
    pub status: Option<String>,
}

fn default_resource_status() -> String {
    "in-stock".to_string()
}

impl Resource {
    pub fn from_draft(id: String, draft: ResourceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            location: draft.location,
            quantity: draft.quantity,
            available: draft.available,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, patch: ResourcePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
