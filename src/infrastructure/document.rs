//! HTML 文档查询 - 基础设施层
//!
//! 只暴露"按选择器查找节点、读取文本和属性"的能力，不认识图书或标签。
//! `Document` 不能跨 `.await` 持有，解析必须在同步函数里完成。

use crate::error::{CrawlError, CrawlResult};
use scraper::{ElementRef, Html, Selector};

/// 已解析的 HTML 文档
pub struct Document {
    html: Html,
}

impl Document {
    /// 解析 HTML 文本
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// 查找所有匹配选择器的节点（文档顺序）
    pub fn find_all(&self, selector: &str) -> CrawlResult<Vec<Node<'_>>> {
        let selector = compile(selector)?;
        Ok(self.html.select(&selector).map(Node::new).collect())
    }
}

/// 文档中的一个元素节点
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// 节点及其后代的全部文本
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// 读取属性值
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// 在节点的后代中查找
    pub fn find_all(&self, selector: &str) -> CrawlResult<Vec<Node<'a>>> {
        let selector = compile(selector)?;
        Ok(self.element.select(&selector).map(Node::new).collect())
    }

    /// 下一个兄弟元素（跳过文本节点）
    pub fn next_element(&self) -> Option<Node<'a>> {
        self.element
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(Node::new)
    }
}

/// 查找所有匹配节点的文本并拼接
pub fn joined_text(nodes: &[Node<'_>]) -> String {
    nodes.iter().map(Node::text).collect()
}

fn compile(selector: &str) -> CrawlResult<Selector> {
    Selector::parse(selector).map_err(|e| CrawlError::selector(selector, e))
}
