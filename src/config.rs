use crate::error::{CrawlError, CrawlResult};
use crate::models::{load_criteria_file, Criteria};
use std::path::PathBuf;
use url::Url;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 站点根地址，标签链接以此为基准展开
    pub base_url: String,
    /// 标签索引页路径
    pub tag_index_path: String,
    /// 同时进行的抓取数量（全局令牌数）
    pub max_concurrent_fetches: usize,
    /// 列表页每页条目数，用于计算 start 偏移
    pub page_size: usize,
    /// 请求头 User-Agent
    pub user_agent: String,
    /// CSV 输出目录
    pub output_dir: PathBuf,
    /// 条件文件（TOML），未设置时使用内置列表
    pub criteria_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://book.douban.com".to_string(),
            tag_index_path: "/tag/?view=type&icn=index-sorttags-all".to_string(),
            max_concurrent_fetches: 3,
            page_size: 20,
            user_agent: "Chrome/81.0".to_string(),
            output_dir: PathBuf::from("."),
            criteria_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("BASE_URL").unwrap_or(default.base_url),
            tag_index_path: std::env::var("TAG_INDEX_PATH").unwrap_or(default.tag_index_path),
            max_concurrent_fetches: std::env::var("MAX_CONCURRENT_FETCHES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_fetches).max(1),
            page_size: std::env::var("PAGE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_size).max(1),
            user_agent: std::env::var("USER_AGENT").unwrap_or(default.user_agent),
            output_dir: std::env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.output_dir),
            criteria_file: std::env::var("CRITERIA_FILE").ok().map(PathBuf::from).or(default.criteria_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 解析站点根地址
    pub fn site_url(&self) -> CrawlResult<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| CrawlError::Config(format!("站点地址无效 {}: {}", self.base_url, e)))
    }

    /// 标签索引页完整地址
    ///
    /// 和小标签链接一样用 `Url::join` 相对站点地址展开：
    /// 以 `/` 开头的路径会替换掉 `base_url` 自带的路径部分。
    pub fn tag_index_url(&self) -> CrawlResult<String> {
        let url = self.site_url()?.join(&self.tag_index_path).map_err(|e| {
            CrawlError::Config(format!("索引页路径无效 {}: {}", self.tag_index_path, e))
        })?;
        Ok(url.to_string())
    }

    /// 加载本次运行的条件列表
    pub async fn load_criteria(&self) -> CrawlResult<Vec<Criteria>> {
        match &self.criteria_file {
            Some(path) => load_criteria_file(path).await,
            None => Ok(Criteria::default_list()),
        }
    }
}
