//! 分页探测服务 - 业务能力层

use crate::error::CrawlResult;
use crate::infrastructure::{ConcurrencyLimiter, PageFetcher};
use crate::services::listing_parser;
use std::sync::Arc;
use tracing::{debug, warn};

/// 分页探测器
///
/// 抓取小标签的第一页，读取分页控件的最后一个页码
pub struct PaginationEnumerator {
    fetcher: Arc<dyn PageFetcher>,
    limiter: ConcurrencyLimiter,
}

impl PaginationEnumerator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, limiter: ConcurrencyLimiter) -> Self {
        Self { fetcher, limiter }
    }

    /// 返回页数（至少为 1）
    ///
    /// 页码无法解析时按单页处理，不会中断运行
    pub async fn page_count(&self, link: &str) -> CrawlResult<usize> {
        let body = {
            let _permit = self.limiter.acquire().await?;
            self.fetcher.fetch(link).await?
        };

        match listing_parser::parse_page_count(&body)? {
            Some(count) => {
                debug!("url:{} , 共 {} 页", link, count);
                Ok(count)
            }
            None => {
                warn!("url:{} , 页码转换错误，按 1 页处理", link);
                Ok(1)
            }
        }
    }
}
