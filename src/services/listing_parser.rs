//! 页面解析 - 业务能力层
//!
//! 把标签页、分页控件和列表页的 HTML 转成链接、页数和记录。
//! 全部是同步函数：`Document` 只在函数内部存活。
//!
//! 评分和人数解析失败时取 0，页码解析失败返回 `None`，由调用方降级为 1 页。

use crate::error::CrawlResult;
use crate::infrastructure::document::{joined_text, Document};
use crate::models::Record;
use tracing::{debug, warn};
use url::Url;

const TAG_ANCHORS: &str = "#content > div > div.article > div:nth-child(2) a[name]";
const PAGINATOR_LINKS: &str = "#subject_list > div.paginator > a";
const LISTING_ENTRIES: &str = "#subject_list > ul > li";
const ENTRY_TITLE: &str = ".info > h2 > a";
const ENTRY_SCORE: &str = ".rating_nums";
const ENTRY_PEOPLE: &str = ".pl";
const PEOPLE_LABEL: &str = "人评价)";

/// 从标签索引页提取某个大标签下的全部小标签链接
///
/// 链接按 URL 规则相对 `base` 展开成绝对地址；找不到标签时返回空列表。
/// 标签名只和锚点的 `name` 属性比较，不拼进选择器。
pub fn parse_tag_links(body: &str, tag: &str, base: &Url) -> CrawlResult<Vec<String>> {
    let doc = Document::parse(body);

    let mut links = Vec::new();
    for anchor in doc.find_all(TAG_ANCHORS)? {
        if anchor.attr("name") != Some(tag) {
            continue;
        }
        let Some(group) = anchor.next_element() else {
            continue;
        };

        for node in group.find_all("a")? {
            let Some(href) = node.attr("href") else {
                continue;
            };
            match base.join(href) {
                Ok(url) => links.push(url.to_string()),
                Err(e) => warn!("跳过无效链接 {}: {}", href, e),
            }
        }
    }

    Ok(links)
}

/// 读取分页控件最后一个页码
///
/// 没有分页控件、文本为空或不是正整数时返回 `None`
pub fn parse_page_count(body: &str) -> CrawlResult<Option<usize>> {
    let doc = Document::parse(body);
    let controls = doc.find_all(PAGINATOR_LINKS)?;

    let text = controls.last().map(|n| n.text()).unwrap_or_default();
    match text.trim().parse::<usize>() {
        Ok(count) if count >= 1 => Ok(Some(count)),
        Ok(count) => {
            debug!("页码为 {}，视为无效", count);
            Ok(None)
        }
        Err(e) => {
            debug!("页码转换错误 '{}': {}", text, e);
            Ok(None)
        }
    }
}

/// 提取列表页上的全部记录（未筛选）
pub fn parse_listing(body: &str) -> CrawlResult<Vec<Record>> {
    let doc = Document::parse(body);
    let mut records = Vec::new();

    for entry in doc.find_all(LISTING_ENTRIES)? {
        let anchors = entry.find_all(ENTRY_TITLE)?;
        let title = normalize_title(&joined_text(&anchors));
        let link = anchors
            .first()
            .and_then(|a| a.attr("href"))
            .unwrap_or_default()
            .to_string();

        let score = parse_score(&joined_text(&entry.find_all(ENTRY_SCORE)?));
        let people = parse_people(&joined_text(&entry.find_all(ENTRY_PEOPLE)?));

        records.push(Record::new(title, score, people, link));
    }

    Ok(records)
}

/// 去掉标题中的换行和空格
pub fn normalize_title(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\n' && *c != ' ').collect()
}

/// 解析评分，失败取 0
pub fn parse_score(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or_else(|_| {
        debug!("评分转换错误: '{}'", raw);
        0.0
    })
}

/// 解析评价人数，如 "(12345人评价)"，失败取 0
pub fn parse_people(raw: &str) -> i64 {
    let cleaned = raw
        .replace(|c: char| matches!(c, ' ' | '(' | '\n'), "")
        .replace(PEOPLE_LABEL, "");

    cleaned.parse().unwrap_or_else(|_| {
        debug!("人数转换错误: '{}'", raw.trim());
        0
    })
}
