//! 条件周期编排器 - 编排层
//!
//! ## 职责
//!
//! 按输入顺序逐个处理筛选条件，每个条件是一个独立周期：
//!
//! 1. 清空汇总器
//! 2. 解析大标签下的小标签链接
//! 3. 每个链接一个 `SubCategoryCrawler` 任务，并发执行
//! 4. 等待全部链接任务结束
//! 5. 取结果快照写入 CSV
//!
//! 上一个周期写完文件之前，下一个周期不会开始解析链接。
//! 任何抓取错误都会终止整次运行，后续条件不再处理。

use crate::config::Config;
use crate::error::CrawlResult;
use crate::infrastructure::{ConcurrencyLimiter, PageFetcher};
use crate::models::Criteria;
use crate::orchestrator::sub_category_crawler::{LinkStats, SubCategoryCrawler};
use crate::services::{CsvWriter, TagLinkResolver};
use crate::utils::logging;
use crate::workflow::CrawlCtx;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// 单个条件周期的结果
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub criteria: Criteria,
    /// 小标签链接数
    pub links: usize,
    /// 抓取的列表页总数
    pub pages: usize,
    /// 写出的记录数
    pub records: usize,
    pub output_path: PathBuf,
}

/// 整次运行的结果
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub cycles: Vec<CycleReport>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn total_records(&self) -> usize {
        self.cycles.iter().map(|c| c.records).sum()
    }
}

/// 条件周期编排器
pub struct CrawlOrchestrator {
    ctx: CrawlCtx,
    resolver: TagLinkResolver,
    writer: CsvWriter,
    /// 周期互斥：同一时间只允许一个周期运行。
    /// `run` 本身是顺序循环，这把锁目前不会产生等待，只在直接并发调用 `run_cycle` 时生效。
    cycle_guard: Mutex<()>,
}

impl CrawlOrchestrator {
    /// 站点地址或索引页路径无效时返回配置错误
    pub fn new(config: &Config, fetcher: Arc<dyn PageFetcher>) -> CrawlResult<Self> {
        let limiter = ConcurrencyLimiter::new(config.max_concurrent_fetches);
        let resolver = TagLinkResolver::new(
            fetcher.clone(),
            limiter.clone(),
            config.tag_index_url()?,
            config.site_url()?,
        );

        Ok(Self {
            ctx: CrawlCtx::new(fetcher, limiter, config.page_size),
            resolver,
            writer: CsvWriter::new(config.output_dir.clone()),
            cycle_guard: Mutex::new(()),
        })
    }

    /// 全局令牌池
    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.ctx.limiter
    }

    /// 按顺序处理全部条件
    pub async fn run(&self, criteria_list: &[Criteria]) -> CrawlResult<RunSummary> {
        let start = Instant::now();
        let total = criteria_list.len();
        let mut summary = RunSummary::default();

        for (idx, criteria) in criteria_list.iter().enumerate() {
            let report = self.run_cycle(idx + 1, total, criteria).await?;
            summary.cycles.push(report);
        }

        summary.elapsed = start.elapsed();
        Ok(summary)
    }

    /// 处理单个条件周期
    ///
    /// `cycle_num` / `total` 只用于日志
    pub async fn run_cycle(&self, cycle_num: usize, total: usize, criteria: &Criteria) -> CrawlResult<CycleReport> {
        let _cycle = self.cycle_guard.lock().await;
        logging::log_cycle_start(cycle_num, total, criteria);

        self.ctx.aggregator.reset().await;

        let links = self.resolver.resolve_links(&criteria.tag).await?;
        let link_stats = self.crawl_links(&links, criteria).await?;

        let results = self.ctx.aggregator.snapshot().await;
        let file_name = criteria.file_name();
        logging::log_saving(&file_name);

        let output_path = self.writer.write_records(&file_name, results.values()).await?;
        logging::log_cycle_complete(cycle_num, results.len(), &output_path);

        Ok(CycleReport {
            criteria: criteria.clone(),
            links: links.len(),
            pages: link_stats.iter().map(|s| s.pages).sum(),
            records: results.len(),
            output_path,
        })
    }

    /// 并发处理所有小标签链接，全部结束后返回
    async fn crawl_links(&self, links: &[String], criteria: &Criteria) -> CrawlResult<Vec<LinkStats>> {
        let mut tasks = JoinSet::new();

        for link in links {
            let crawler = SubCategoryCrawler::new(self.ctx.clone());
            let link = link.clone();
            let criteria = criteria.clone();

            tasks.spawn(async move { crawler.crawl(&link, &criteria).await });
        }

        let mut stats = Vec::with_capacity(links.len());
        while let Some(joined) = tasks.join_next().await {
            stats.push(joined??);
        }

        Ok(stats)
    }
}
