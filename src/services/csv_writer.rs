//! 结果写入服务 - 业务能力层
//!
//! 只负责"把一个周期的结果写成 CSV"，不关心抓取流程

use crate::error::{CrawlError, CrawlResult};
use crate::models::Record;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// CSV 表头
pub const CSV_HEADER: &str = "标题,评分,人数,链接";

/// 结果写入器
///
/// 字段不做引号转义，标题或链接中的逗号、换行会破坏行结构。
/// 同名文件会被覆盖。
pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写入记录，返回文件路径
    pub async fn write_records<'a, I>(&self, file_name: &str, rows: I) -> CrawlResult<PathBuf>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let path = self.output_dir.join(file_name);

        let mut content = String::from(CSV_HEADER);
        content.push('\n');
        let mut count = 0usize;
        for record in rows {
            content.push_str(&record.to_csv_line());
            content.push('\n');
            count += 1;
        }

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| CrawlError::Output {
                path: self.output_dir.clone(),
                source,
            })?;

        fs::write(&path, content)
            .await
            .map_err(|source| CrawlError::Output {
                path: path.clone(),
                source,
            })?;

        debug!("写入 {} 行到 {}", count, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_records_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path());
        let rows = vec![
            Record::new("活着", 9.4, 812345, "https://book.douban.com/subject/4913064/"),
            Record::new("三体", 9.0, 500000, "https://book.douban.com/subject/2567698/"),
        ];

        let path = writer.write_records("生活-8.5-2000.csv", &rows).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(
            content,
            "标题,评分,人数,链接\n\
             活着,9.4,812345,https://book.douban.com/subject/4913064/\n\
             三体,9,500000,https://book.douban.com/subject/2567698/\n"
        );
    }

    #[tokio::test]
    async fn test_write_records_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path());
        let first = vec![Record::new("旧", 9.9, 1, "x")];

        writer.write_records("out.csv", &first).await.unwrap();
        let path = writer.write_records("out.csv", &[] as &[Record]).await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "标题,评分,人数,链接\n");
    }

    #[tokio::test]
    async fn test_write_records_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path().join("nested").join("out"));

        let path = writer.write_records("a.csv", &[] as &[Record]).await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_commas_are_not_escaped() {
        let record = Record::new("上,下", 9.1, 3000, "l");
        assert_eq!(record.to_csv_line(), "上,下,9.1,3000,l");
    }
}
