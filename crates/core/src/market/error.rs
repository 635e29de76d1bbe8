use thiserror::Error;

/// # Summary
/// 行情域错误枚举，覆盖标的校验、周期解析与序列生成三类失败。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum MarketError {
    // 请求中包含注册表之外的标的，逐一点名
    #[error("Unsupported symbols: {}", .0.join(", "))]
    UnsupportedSymbols(Vec<String>),
    // 周期标签不在封闭枚举内
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),
    // 序列生成失败 (单标的范围，不致命)
    #[error("Data generation failed: {0}")]
    Generation(String),
}
