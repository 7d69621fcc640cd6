use crate::error::{CrawlError, CrawlResult};
use crate::models::criteria::Criteria;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 条件文件结构
///
/// ```toml
/// [[criteria]]
/// tag = "生活"
/// min_score = 8.5
/// min_people = 2000
/// ```
#[derive(Debug, Deserialize)]
struct CriteriaFile {
    #[serde(default)]
    criteria: Vec<Criteria>,
}

/// 从 TOML 文本解析条件列表
pub fn parse_criteria(content: &str) -> CrawlResult<Vec<Criteria>> {
    let file: CriteriaFile =
        toml::from_str(content).map_err(|e| CrawlError::Config(format!("无法解析条件文件: {}", e)))?;

    if file.criteria.is_empty() {
        return Err(CrawlError::Config("条件文件中没有任何 [[criteria]]".to_string()));
    }

    Ok(file.criteria)
}

/// 从 TOML 文件加载条件列表
pub async fn load_criteria_file(path: &Path) -> CrawlResult<Vec<Criteria>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| CrawlError::Config(format!("无法读取条件文件 {}: {}", path.display(), e)))?;

    let list = parse_criteria(&content)?;
    tracing::info!("从 {} 加载了 {} 个筛选条件", path.display(), list.len());

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_criteria_keeps_file_order() {
        let content = r#"
            [[criteria]]
            tag = "文化"
            min_score = 9
            min_people = 10000

            [[criteria]]
            tag = "生活"
            min_score = 8.5
            min_people = 2000
        "#;

        let list = parse_criteria(content).unwrap();
        assert_eq!(
            list,
            vec![
                Criteria::new("文化", 9.0, 10000),
                Criteria::new("生活", 8.5, 2000)
            ]
        );
    }

    #[test]
    fn test_parse_criteria_rejects_empty_file() {
        assert!(matches!(parse_criteria(""), Err(CrawlError::Config(_))));
    }

    #[test]
    fn test_parse_criteria_rejects_missing_field() {
        let content = r#"
            [[criteria]]
            tag = "生活"
            min_score = 8.5
        "#;
        assert!(matches!(parse_criteria(content), Err(CrawlError::Config(_))));
    }

    #[tokio::test]
    async fn test_load_criteria_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_criteria_file(&dir.path().join("nope.toml")).await;
        assert!(matches!(result, Err(CrawlError::Config(_))));
    }
}
