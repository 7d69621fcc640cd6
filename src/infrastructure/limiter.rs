//! 并发令牌池 - 基础设施层
//!
//! 整个运行期间只有一个令牌池，所有抓取（标签页、分页探测、列表页）共用。
//! 令牌以 `LimiterPermit` 的形式持有，离开作用域即归还，错误路径同样归还。

use crate::error::{CrawlError, CrawlResult};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::trace;

/// 全局并发限制器
#[derive(Clone, Debug)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// 已获取的令牌
#[derive(Debug)]
pub struct LimiterPermit {
    _permit: OwnedSemaphorePermit,
}

impl LimiterPermit {
    /// 显式归还令牌（等价于 drop）
    pub fn release(self) {}
}

impl ConcurrencyLimiter {
    /// 创建容量为 `capacity` 的令牌池（至少为 1）
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// 等待并获取一个令牌
    pub async fn acquire(&self) -> CrawlResult<LimiterPermit> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| CrawlError::Config("并发令牌池已关闭".to_string()))?;
        trace!("获取令牌，剩余 {}", self.semaphore.available_permits());
        Ok(LimiterPermit { _permit: permit })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 当前空闲令牌数
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
