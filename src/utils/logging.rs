//! 日志工具模块
//!
//! 提供日志初始化和各阶段的格式化输出

use crate::models::Criteria;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
/// 重复调用不会报错（测试中会多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `max_concurrent`: 全局并发令牌数
/// - `criteria_count`: 筛选条件数量
pub fn log_startup(max_concurrent: usize, criteria_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 图书标签抓取");
    info!("📊 最大并发抓取数: {}", max_concurrent);
    info!("📋 筛选条件: {} 个（逐个处理）", criteria_count);
    info!("{}", "=".repeat(60));
}

/// 记录周期开始信息
pub fn log_cycle_start(cycle_num: usize, total: usize, criteria: &Criteria) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 个条件 {}", cycle_num, total, criteria);
    info!("{}", "=".repeat(60));
}

/// 记录开始保存
pub fn log_saving(file_name: &str) {
    info!("----------------开始保存数据:{}", file_name);
}

/// 记录周期完成信息
pub fn log_cycle_complete(cycle_num: usize, records: usize, path: &Path) {
    info!("----------------数据保存成功:{}", path.display());
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 个条件完成: 共 {} 条记录", cycle_num, records);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `cycles`: 完成的周期数
/// - `records`: 写出的记录总数
/// - `elapsed`: 总耗时
pub fn print_final_stats(cycles: usize, records: usize, elapsed: Duration) {
    info!("\n{}", "=".repeat(60));
    info!("📊 数据抓取结束");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 完成条件: {}", cycles);
    info!("📄 写出记录: {}", records);
    info!("⏱️ 耗时: {} ms", elapsed.as_millis());
    info!("{}", "=".repeat(60));
}
