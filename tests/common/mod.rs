//! 测试用的内存站点
//!
//! 按 URL 返回预先生成的 HTML，并统计同时进行中的抓取数量

#![allow(dead_code)]

use async_trait::async_trait;
use book_tag_crawler::{Config, FetchError, PageFetcher, Record};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const BASE_URL: &str = "http://catalog.test";

/// 内存站点
pub struct FakeSite {
    pages: HashMap<String, String>,
    tags: Vec<(String, Vec<String>)>,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            tags: Vec::new(),
            delay: Duration::from_millis(2),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// 在标签索引页中加入一个大标签及其小标签路径
    pub fn with_tag(mut self, tag: &str, paths: &[&str]) -> Self {
        self.tags.push((
            tag.to_string(),
            paths.iter().map(|p| p.to_string()).collect(),
        ));

        let url = Config {
            base_url: BASE_URL.to_string(),
            ..Config::default()
        }
        .tag_index_url()
        .unwrap();
        self.pages.insert(url, tag_index_html(&self.tags));
        self
    }

    /// 注册一个小标签的所有列表页
    ///
    /// 首页（无参数）带分页控件，页码等于 `pages.len()`
    pub fn with_sub_category(self, path: &str, pages: &[Vec<Record>]) -> Self {
        self.with_sub_category_opts(path, pages, true)
    }

    /// 同上，但首页没有分页控件
    pub fn with_unpaginated_sub_category(self, path: &str, pages: &[Vec<Record>]) -> Self {
        self.with_sub_category_opts(path, pages, false)
    }

    fn with_sub_category_opts(mut self, path: &str, pages: &[Vec<Record>], paginator: bool) -> Self {
        let link = format!("{}{}", BASE_URL, path);
        let page_count = if paginator { Some(pages.len()) } else { None };

        let first = pages.first().cloned().unwrap_or_default();
        self.pages
            .insert(link.clone(), listing_html(&first, page_count));

        for (index, records) in pages.iter().enumerate() {
            let url = format!("{}?start={}&type=T", link, index * 20);
            self.pages.insert(url, listing_html(records, page_count));
        }
        self
    }

    /// 删除某个地址，使其抓取失败
    pub fn without(mut self, url: &str) -> Self {
        self.pages.remove(url);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeSite {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(url.to_string());

        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }
}

pub fn test_config(output_dir: &Path, max_concurrent_fetches: usize) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        max_concurrent_fetches,
        output_dir: output_dir.to_path_buf(),
        ..Config::default()
    }
}

pub fn book(title: &str, score: f64, people: i64) -> Record {
    Record::new(title, score, people, format!("https://catalog.test/subject/{}/", title))
}

/// 读取 CSV，返回 (表头, 数据行)
pub fn read_csv(path: &Path) -> (String, Vec<String>) {
    let content = std::fs::read_to_string(path).unwrap();
    let mut lines = content.lines().map(str::to_string);
    let header = lines.next().unwrap_or_default();
    let mut rows: Vec<String> = lines.collect();
    rows.sort();
    (header, rows)
}

fn tag_index_html(groups: &[(String, Vec<String>)]) -> String {
    let mut body = String::new();
    for (tag, paths) in groups {
        body.push_str(&format!(
            r#"<a name="{tag}" class="tag-title-wrapper"><h2>{tag}</h2></a><table class="tagCol"><tbody><tr>"#
        ));
        for path in paths {
            body.push_str(&format!(r#"<td><a href="{path}">{path}</a></td>"#));
        }
        body.push_str("</tr></tbody></table>");
    }

    format!(
        r#"<html><body><div id="content"><div class="grid-16-8"><div class="article">
             <div class="hd"><h1>豆瓣图书标签</h1></div>
             <div>{body}</div>
           </div></div></div></body></html>"#
    )
}

fn listing_html(records: &[Record], page_count: Option<usize>) -> String {
    let items: String = records
        .iter()
        .map(|r| {
            format!(
                r#"<li class="subject-item"><div class="info">
                     <h2><a href="{link}" title="{title}">
                       {title}
                     </a></h2>
                     <div class="star clearfix">
                       <span class="rating_nums">{score}</span>
                       <span class="pl">
                         ({people}人评价)
                       </span>
                     </div>
                   </div></li>"#,
                link = r.link,
                title = r.title,
                score = r.score,
                people = r.people,
            )
        })
        .collect();

    let paginator = match page_count {
        Some(count) => {
            let links: String = (2..=count)
                .map(|p| format!(r#"<a href="?start={}&amp;type=T">{}</a>"#, (p - 1) * 20, p))
                .collect();
            format!(
                r#"<div class="paginator"><span class="thispage">1</span>{}<span class="next"><a>后页&gt;</a></span></div>"#,
                links
            )
        }
        None => String::new(),
    };

    format!(
        r#"<html><body><div id="subject_list"><ul class="subject-list">{}</ul>{}</div></body></html>"#,
        items, paginator
    )
}
