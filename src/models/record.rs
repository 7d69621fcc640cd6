use std::collections::HashMap;

/// 一条图书记录
///
/// 构造后不再修改，`title` 作为去重键
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub title: String,
    pub score: f64,
    pub people: i64,
    pub link: String,
}

impl Record {
    pub fn new(title: impl Into<String>, score: f64, people: i64, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            score,
            people,
            link: link.into(),
        }
    }

    /// 输出为一行逗号分隔文本（不做转义）
    pub fn to_csv_line(&self) -> String {
        format!("{},{},{},{}", self.title, self.score, self.people, self.link)
    }
}

/// 一个筛选周期的结果集：标题 → 记录
pub type ResultSet = HashMap<String, Record>;
