use serde::{Deserialize, Serialize};

use crate::models::record::Record;

/// 筛选条件
///
/// 每个条件独立运行一个周期，并产出自己的结果文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// 大标签（如 "生活"）
    pub tag: String,
    /// 最低评分
    pub min_score: f64,
    /// 最少评价人数
    pub min_people: i64,
}

impl Criteria {
    pub fn new(tag: impl Into<String>, min_score: f64, min_people: i64) -> Self {
        Self {
            tag: tag.into(),
            min_score,
            min_people,
        }
    }

    /// 记录是否满足阈值
    pub fn accepts(&self, record: &Record) -> bool {
        record.score >= self.min_score && record.people >= self.min_people
    }

    /// 结果文件名：`<标签>-<评分>-<人数>.csv`
    pub fn file_name(&self) -> String {
        format!("{}-{}-{}.csv", self.tag, self.min_score, self.min_people)
    }

    /// 内置的条件列表
    pub fn default_list() -> Vec<Criteria> {
        const TAGS: [&str; 4] = ["生活", "科技", "文化", "经管"];
        const THRESHOLDS: [(f64, i64); 4] = [(8.5, 2000), (8.5, 5000), (9.0, 2000), (9.0, 10000)];

        let mut list = Vec::with_capacity(TAGS.len() * THRESHOLDS.len());
        for tag in TAGS {
            for (score, people) in THRESHOLDS {
                list.push(Criteria::new(tag, score, people));
            }
        }
        list
    }
}

impl std::fmt::Display for Criteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[标签 {} 评分≥{} 人数≥{}]",
            self.tag, self.min_score, self.min_people
        )
    }
}
