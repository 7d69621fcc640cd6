//! 列表页处理流程 - 流程层
//!
//! 核心职责：定义"一个列表页"的完整处理流程
//!
//! 流程顺序：
//! 1. 获取全局令牌
//! 2. 拼出带 start 偏移的页面地址并抓取
//! 3. 解析出全部记录，按条件筛选
//! 4. 满足条件的记录交给汇总器去重插入
//! 5. 归还令牌（离开作用域时自动归还）

use crate::error::CrawlResult;
use crate::models::Criteria;
use crate::services::listing_parser;
use crate::workflow::crawl_ctx::CrawlCtx;
use tracing::debug;

/// 单页处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    /// 页面上的条目数
    pub seen: usize,
    /// 满足条件的条目数
    pub matched: usize,
    /// 实际写入结果集的条目数（去重后）
    pub inserted: usize,
}

/// 列表页处理器
pub struct PageProcessor {
    ctx: CrawlCtx,
}

impl PageProcessor {
    pub fn new(ctx: CrawlCtx) -> Self {
        Self { ctx }
    }

    /// 第 `index` 页（从 0 开始）的地址
    pub fn page_url(link: &str, index: usize, page_size: usize) -> String {
        let separator = if link.contains('?') { '&' } else { '?' };
        format!("{}{}start={}&type=T", link, separator, index * page_size)
    }

    /// 处理一个列表页
    ///
    /// 令牌覆盖抓取、解析和插入整个过程
    pub async fn process(&self, link: &str, index: usize, criteria: &Criteria) -> CrawlResult<PageStats> {
        let _permit = self.ctx.limiter.acquire().await?;

        let url = Self::page_url(link, index, self.ctx.page_size);
        let body = self.ctx.fetcher.fetch(&url).await?;
        let records = listing_parser::parse_listing(&body)?;

        let mut stats = PageStats {
            seen: records.len(),
            ..Default::default()
        };

        for record in records {
            if !criteria.accepts(&record) {
                continue;
            }
            stats.matched += 1;
            if self.ctx.aggregator.insert_if_absent(record).await {
                stats.inserted += 1;
            }
        }

        debug!(
            "url:{} , 条目 {}，符合条件 {}，新增 {}",
            url, stats.seen, stats.matched, stats.inserted
        );

        Ok(stats)
    }
}
