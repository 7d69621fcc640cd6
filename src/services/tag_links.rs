//! 标签链接解析服务 - 业务能力层
//!
//! 只负责"大标签 → 小标签链接列表"，不关心筛选条件

use crate::error::CrawlResult;
use crate::infrastructure::{ConcurrencyLimiter, PageFetcher};
use crate::services::listing_parser;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// 标签链接解析器
pub struct TagLinkResolver {
    fetcher: Arc<dyn PageFetcher>,
    limiter: ConcurrencyLimiter,
    index_url: String,
    site: Url,
}

impl TagLinkResolver {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        limiter: ConcurrencyLimiter,
        index_url: impl Into<String>,
        site: Url,
    ) -> Self {
        Self {
            fetcher,
            limiter,
            index_url: index_url.into(),
            site,
        }
    }

    /// 解析大标签下的全部小标签链接
    ///
    /// 索引页抓取失败是致命错误；标签下没有链接时返回空列表
    pub async fn resolve_links(&self, tag: &str) -> CrawlResult<Vec<String>> {
        let body = {
            let _permit = self.limiter.acquire().await?;
            self.fetcher.fetch(&self.index_url).await?
        };

        let links = listing_parser::parse_tag_links(&body, tag, &self.site)?;

        if links.is_empty() {
            warn!("⚠️ 标签 {} 下没有找到任何链接", tag);
        } else {
            info!("✓ 标签 {} 下找到 {} 个小标签", tag, links.len());
        }

        Ok(links)
    }
}
