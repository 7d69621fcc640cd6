//! 结果汇总器
//!
//! 一个周期内所有列表页任务共享同一个结果集，只能通过 `insert_if_absent` 写入。
//! `reset` 和 `snapshot` 只能在该周期的全部任务结束后调用。

use crate::models::{Record, ResultSet};
use std::collections::hash_map::Entry;
use tokio::sync::Mutex;
use tracing::info;

/// 按标题去重的结果汇总器
#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Mutex<ResultSet>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 换成一个空结果集
    pub async fn reset(&self) {
        *self.results.lock().await = ResultSet::new();
    }

    /// 标题不存在时插入，返回是否插入
    ///
    /// 同一标题只保留第一次插入的记录，后来者直接丢弃
    pub async fn insert_if_absent(&self, record: Record) -> bool {
        let mut results = self.results.lock().await;
        match results.entry(record.title.clone()) {
            Entry::Vacant(slot) => {
                info!("{},{},{}", record.title, record.score, record.people);
                slot.insert(record);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// 当前结果集的副本
    pub async fn snapshot(&self) -> ResultSet {
        self.results.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.results.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_insert_wins() {
        let aggregator = ResultAggregator::new();

        assert!(aggregator.insert_if_absent(Record::new("A", 9.0, 3000, "first")).await);
        assert!(!aggregator.insert_if_absent(Record::new("A", 9.3, 3100, "second")).await);

        let snapshot = aggregator.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot["A"], Record::new("A", 9.0, 3000, "first"));
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let aggregator = ResultAggregator::new();
        aggregator.insert_if_absent(Record::new("A", 9.0, 3000, "")).await;
        aggregator.insert_if_absent(Record::new("B", 9.0, 3000, "")).await;

        aggregator.reset().await;

        assert!(aggregator.is_empty().await);
        assert!(aggregator.insert_if_absent(Record::new("A", 8.0, 1, "")).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_insert_exactly_once() {
        let aggregator = Arc::new(ResultAggregator::new());
        let mut handles = Vec::new();

        for i in 0..64 {
            let aggregator = aggregator.clone();
            handles.push(tokio::spawn(async move {
                let title = format!("书{}", i % 8);
                aggregator
                    .insert_if_absent(Record::new(title, 9.0, i, ""))
                    .await
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 8);
        assert_eq!(aggregator.len().await, 8);
    }
}
