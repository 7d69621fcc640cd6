//! # Book Tag Crawler
//!
//! 按标签抓取图书目录，按评分和评价人数筛选，每个筛选条件输出一个 CSV 文件
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `PageFetcher` / `HttpFetcher` - 取回 HTML 文本
//! - `ConcurrencyLimiter` - 全局并发令牌池
//! - `Document` - 选择器查询
//!
//! ### ② 业务能力层（Services）
//! - `TagLinkResolver` - 大标签 → 小标签链接
//! - `PaginationEnumerator` - 小标签页数
//! - `listing_parser` - 页面字段提取
//! - `CsvWriter` - 写结果文件
//!
//! ### ③ 流程层（Workflow）
//! - `PageProcessor` - 一个列表页（抓取 → 解析 → 筛选 → 汇总）
//! - `ResultAggregator` - 周期内按标题去重的结果集
//!
//! ### ④ 编排层（Orchestration）
//! - `SubCategoryCrawler` - 一个小标签的全部页
//! - `CrawlOrchestrator` - 逐个条件运行周期
//! - `App` - 程序入口
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{CrawlError, CrawlResult, FetchError};
pub use infrastructure::{ConcurrencyLimiter, HttpFetcher, PageFetcher};
pub use models::{Criteria, Record, ResultSet};
pub use orchestrator::{App, CrawlOrchestrator, CycleReport, RunSummary};
pub use workflow::{PageProcessor, ResultAggregator};
