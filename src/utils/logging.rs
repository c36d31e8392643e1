/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数。日志写到 stderr，stdout 留给表单本身。
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `endpoint`: 推荐接口地址
/// - `batch`: 是否为批处理模式
pub fn log_startup(endpoint: &str, batch: bool) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {} - {}",
        if batch { "批处理模式" } else { "交互模式" },
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 推荐接口: {}", endpoint);
    info!("{}", "=".repeat(60));
}

/// 记录提交信息
///
/// # 参数
/// - `subjects`: 已选科目数
/// - `answered`: 已答题目数
pub fn log_submission(subjects: usize, answered: usize) {
    info!("{}", "─".repeat(60));
    info!("📤 提交中: {} 个科目, {} 道题已作答", subjects, answered);
}

/// 记录提交结果
///
/// # 参数
/// - `recommendations`: 返回的推荐条数，失败时为 None
pub fn log_outcome(recommendations: Option<usize>) {
    match recommendations {
        Some(count) => info!("✅ 收到 {} 条职业推荐", count),
        None => info!("❌ 本次提交未获得推荐"),
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
