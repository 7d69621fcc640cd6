//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：加载条件列表、创建 HTTP 抓取器和编排器
//! 2. **运行**：把条件列表交给 `CrawlOrchestrator`
//! 3. **全局统计**：输出总耗时和记录数
//!
//! 抓取错误原样向上返回，由 `main` 打印并以非零状态退出。

use crate::config::Config;
use crate::infrastructure::HttpFetcher;
use crate::models::Criteria;
use crate::orchestrator::crawl_orchestrator::{CrawlOrchestrator, RunSummary};
use crate::utils::logging;
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// 应用主结构
pub struct App {
    criteria: Vec<Criteria>,
    orchestrator: CrawlOrchestrator,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let criteria = config.load_criteria().await?;
        logging::log_startup(config.max_concurrent_fetches, criteria.len());

        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        let orchestrator = CrawlOrchestrator::new(&config, fetcher)?;

        Ok(Self {
            criteria,
            orchestrator,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        if self.criteria.is_empty() {
            warn!("⚠️ 没有任何筛选条件，程序结束");
            return Ok(RunSummary::default());
        }

        let summary = self.orchestrator.run(&self.criteria).await?;

        logging::print_final_stats(summary.cycles.len(), summary.total_records(), summary.elapsed);

        Ok(summary)
    }
}
