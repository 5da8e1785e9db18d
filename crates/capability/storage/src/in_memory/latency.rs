//! 模拟网络延迟。

use std::time::Duration;

/// 每次存储调用前等待的固定延迟；零延迟时不挂起。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// 无延迟（测试使用）
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
