//! 小标签处理器 - 编排层
//!
//! ## 职责
//!
//! 处理一个小标签链接的全部列表页：
//!
//! 1. **分页探测**：委托 `PaginationEnumerator` 得到页数
//! 2. **并发分发**：每页一个 `PageProcessor` 任务，准入由全局令牌池控制
//! 3. **等待汇合**：全部页任务结束后才返回
//!
//! 结果不直接返回，全部通过共享的 `ResultAggregator` 体现。
//! 任一页抓取失败立即向上返回，其余页任务随 `JoinSet` 一起被中止。

use crate::error::CrawlResult;
use crate::models::Criteria;
use crate::services::PaginationEnumerator;
use crate::workflow::{CrawlCtx, PageProcessor, PageStats};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// 小标签处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkStats {
    pub pages: usize,
    pub seen: usize,
    pub matched: usize,
    pub inserted: usize,
}

impl LinkStats {
    fn add_page(&mut self, page: PageStats) {
        self.seen += page.seen;
        self.matched += page.matched;
        self.inserted += page.inserted;
    }
}

/// 小标签处理器
pub struct SubCategoryCrawler {
    ctx: CrawlCtx,
    pagination: PaginationEnumerator,
}

impl SubCategoryCrawler {
    pub fn new(ctx: CrawlCtx) -> Self {
        let pagination = PaginationEnumerator::new(ctx.fetcher.clone(), ctx.limiter.clone());
        Self { ctx, pagination }
    }

    /// 抓取一个小标签的所有页
    pub async fn crawl(&self, link: &str, criteria: &Criteria) -> CrawlResult<LinkStats> {
        let page_count = self.pagination.page_count(link).await?;
        debug!("url:{} , 分发 {} 个页任务", link, page_count);

        let mut tasks = JoinSet::new();
        for index in 0..page_count {
            let processor = PageProcessor::new(self.ctx.clone());
            let link = link.to_string();
            let criteria = criteria.clone();

            tasks.spawn(async move { processor.process(&link, index, &criteria).await });
        }

        let mut stats = LinkStats {
            pages: page_count,
            ..Default::default()
        };

        while let Some(joined) = tasks.join_next().await {
            stats.add_page(joined??);
        }

        info!(
            "✓ {} 完成: {} 页, 条目 {}, 符合 {}, 新增 {}",
            link, stats.pages, stats.seen, stats.matched, stats.inserted
        );

        Ok(stats)
    }
}
