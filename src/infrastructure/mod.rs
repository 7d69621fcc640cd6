pub mod document;
pub mod fetcher;
pub mod limiter;

pub use document::{Document, Node};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use limiter::{ConcurrencyLimiter, LimiterPermit};
