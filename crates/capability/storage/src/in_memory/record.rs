//! 通用实体内存存储实现
//!
//! 功能：
//! - 按插入顺序保存记录（`RwLock<Vec<R>>`）
//! - 存储自持单调序号生成 id，跳过已存在的 id
//! - 每次调用前等待模拟延迟，锁不跨越 await

use crate::error::StorageError;
use crate::in_memory::SimulatedLatency;
use crate::traits::{Record, RecordStore};
use campus_telemetry::{
    record_not_found, record_store_read, record_store_write, record_validation_failure,
};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// 实体内存存储
pub struct InMemoryRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
    sequence: AtomicU64,
    latency: SimulatedLatency,
}

impl<R: Record> InMemoryRecordStore<R> {
    /// 创建空存储
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// 以种子数据创建存储，序号从种子条数之后开始
    pub fn with_records(records: Vec<R>, latency: SimulatedLatency) -> Self {
        let sequence = AtomicU64::new(records.len() as u64);
        Self {
            records: RwLock::new(records),
            sequence,
            latency,
        }
    }

    /// 直接追加记录（不校验、不等待延迟），用于装载夹具
    pub fn seed(&self, records: impl IntoIterator<Item = R>) -> Result<(), StorageError> {
        let mut items = self.records.write().map_err(|_| StorageError::lock_failed())?;
        items.extend(records);
        Ok(())
    }

    /// 分配一个在当前集合中未被占用的 id（需持有写锁调用）
    fn next_id(&self, existing: &[R]) -> String {
        loop {
            let value = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let id = format!("{}{:03}", R::ID_PREFIX, value);
            if !existing.iter().any(|record| record.id() == id) {
                return id;
            }
        }
    }
}

fn validated<R: Record>(record: &R) -> Result<(), StorageError> {
    record.validate().inspect_err(|err| {
        record_validation_failure();
        tracing::debug!(kind = R::KIND, error = %err, "record rejected");
    })
}

fn missing<R: Record>(id: &str) -> StorageError {
    record_not_found();
    StorageError::not_found(R::KIND, id)
}

#[async_trait::async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    /// 返回全部记录副本
    async fn list(&self) -> Result<Vec<R>, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let items = self.records.read().map_err(|_| StorageError::lock_failed())?;
        Ok(items.clone())
    }

    /// 线性查找
    async fn find(&self, id: &str) -> Result<R, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let items = self.records.read().map_err(|_| StorageError::lock_failed())?;
        items
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| missing::<R>(id))
    }

    /// 分配 id、校验并追加
    async fn create(&self, draft: R::Draft) -> Result<R, StorageError> {
        self.latency.wait().await;
        let mut items = self.records.write().map_err(|_| StorageError::lock_failed())?;
        let id = self.next_id(&items);
        let record = R::from_draft(id, draft);
        validated(&record)?;
        items.push(record.clone());
        record_store_write();
        tracing::debug!(kind = R::KIND, id = record.id(), "record created");
        Ok(record)
    }

    /// 在副本上合并补丁，校验通过后替换原记录
    async fn update(&self, id: &str, patch: R::Patch) -> Result<R, StorageError> {
        self.latency.wait().await;
        let mut items = self.records.write().map_err(|_| StorageError::lock_failed())?;
        let slot = match items.iter_mut().find(|record| record.id() == id) {
            Some(slot) => slot,
            None => return Err(missing::<R>(id)),
        };
        let mut merged = slot.clone();
        merged.apply_patch(patch);
        validated(&merged)?;
        *slot = merged.clone();
        record_store_write();
        tracing::debug!(kind = R::KIND, id, "record updated");
        Ok(merged)
    }

    /// 删除记录；不存在时集合保持不变
    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.latency.wait().await;
        let mut items = self.records.write().map_err(|_| StorageError::lock_failed())?;
        let index = match items.iter().position(|record| record.id() == id) {
            Some(index) => index,
            None => return Err(missing::<R>(id)),
        };
        items.remove(index);
        record_store_write();
        tracing::debug!(kind = R::KIND, id, "record deleted");
        Ok(())
    }
}
