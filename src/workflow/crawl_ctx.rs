//! 抓取上下文
//!
//! 封装"所有任务共享的东西"：抓取器、全局令牌池、结果汇总器

use crate::infrastructure::{ConcurrencyLimiter, PageFetcher};
use crate::workflow::aggregator::ResultAggregator;
use std::sync::Arc;

/// 抓取上下文
///
/// 克隆开销很小，每个并发任务持有一份
#[derive(Clone)]
pub struct CrawlCtx {
    pub fetcher: Arc<dyn PageFetcher>,
    pub limiter: ConcurrencyLimiter,
    pub aggregator: Arc<ResultAggregator>,
    /// 列表页每页条目数
    pub page_size: usize,
}

impl CrawlCtx {
    pub fn new(fetcher: Arc<dyn PageFetcher>, limiter: ConcurrencyLimiter, page_size: usize) -> Self {
        Self {
            fetcher,
            limiter,
            aggregator: Arc::new(ResultAggregator::new()),
            page_size: page_size.max(1),
        }
    }
}
