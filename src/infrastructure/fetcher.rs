//! 页面抓取器 - 基础设施层
//!
//! 持有 HTTP 客户端，只暴露"给 URL 取回 HTML 文本"的能力

use crate::config::Config;
use crate::error::{CrawlError, CrawlResult, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// 页面抓取能力
///
/// 抓取失败对整次运行是致命的，实现方不应自行重试
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 基于 reqwest 的抓取器
///
/// 自动跟随重定向，并设置 User-Agent
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> CrawlResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CrawlError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("抓取: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
