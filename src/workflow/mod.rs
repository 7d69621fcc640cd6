pub mod aggregator;
pub mod crawl_ctx;
pub mod page_processor;

pub use aggregator::ResultAggregator;
pub use crawl_ctx::CrawlCtx;
pub use page_processor::{PageProcessor, PageStats};
