//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载条件列表，创建抓取器
//! - 输出全局统计信息
//!
//! ### `crawl_orchestrator` - 条件周期编排
//! - 逐个条件运行周期（清空 → 解析链接 → 并发抓取 → 汇合 → 写文件）
//! - 周期之间严格串行
//!
//! ### `sub_category_crawler` - 单个小标签
//! - 探测页数，每页一个并发任务，等待全部完成
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! crawl_orchestrator (处理 Vec<Criteria>，每个条件并发处理多个链接)
//!     ↓
//! sub_category_crawler (处理一个链接，并发处理多页)
//!     ↓
//! workflow::PageProcessor (处理单个列表页)
//!     ↓
//! services (能力层：标签链接 / 分页 / 解析 / CSV)
//!     ↓
//! infrastructure (基础设施：抓取器 / 令牌池 / 文档查询)
//! ```

pub mod app;
pub mod crawl_orchestrator;
pub mod sub_category_crawler;

// 重新导出主要类型
pub use app::App;
pub use crawl_orchestrator::{CrawlOrchestrator, CycleReport, RunSummary};
pub use sub_category_crawler::{LinkStats, SubCategoryCrawler};
