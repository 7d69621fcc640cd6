//! 错误类型
//!
//! - `FetchError`：抓取文档失败，对整次运行是致命的
//! - `CrawlError`：核心流程向上传播的错误
//!
//! 字段解析失败（评分、人数、页码）不在这里出现，它们在解析处就地替换为默认值。

use std::path::PathBuf;
use thiserror::Error;

/// 文档抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败（连接、重定向、超时等）
    #[error("url:{url} , 抓取报错: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非 2xx 状态码
    #[error("url:{url} , 响应状态异常: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// 读取响应正文失败
    #[error("url:{url} , 读取响应失败: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// 出错的 URL
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

/// 抓取流程错误
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// CSS 选择器无法编译
    #[error("选择器无效 '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// 写入结果文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 子任务 panic 或被取消
    #[error("任务执行失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl CrawlError {
    /// 创建选择器错误
    pub fn selector(selector: impl Into<String>, message: impl ToString) -> Self {
        CrawlError::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// 是否为抓取错误
    pub fn is_fetch(&self) -> bool {
        matches!(self, CrawlError::Fetch(_))
    }
}

/// 抓取流程结果类型
pub type CrawlResult<T> = Result<T, CrawlError>;
