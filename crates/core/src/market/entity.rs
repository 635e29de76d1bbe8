use serde::{Deserialize, Serialize};

/// # Summary
/// 可交易标的的静态元数据，进程启动时定义一次，运行期只读。
///
/// # Invariants
/// - `symbol` 在注册表内唯一。
/// - `market` 必须能在交易时段日历中解析（允许落到默认窗口）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    // 交易代码 (例如: AAPL, ^GSPC)
    pub symbol: String,
    // 显示名称
    pub name: String,
    // 所属市场，作为交易时段日历的键 (例如: US, Japan)
    pub market: String,
    // 行业/类别标签
    pub category: String,
    // 币种代码
    pub currency: String,
}

impl SymbolInfo {
    /// 创建一个以 USD 计价的标的
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        market: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            market: market.into(),
            category: category.into(),
            currency: "USD".to_string(),
        }
    }

    /// 覆盖币种
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// # Summary
/// 一个市场的 UTC 交易时段窗口。
///
/// # Invariants
/// - `open_hour < close_hour`，同一 UTC 日内，不跨午夜。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSession {
    // 开盘整点 (UTC, 含)
    pub open_hour: u32,
    // 收盘整点 (UTC, 不含)
    pub close_hour: u32,
}

impl MarketSession {
    pub const fn new(open_hour: u32, close_hour: u32) -> Self {
        Self { open_hour, close_hour }
    }

    /// 判断给定 UTC 整点是否处于交易时段内
    pub fn contains(&self, utc_hour: u32) -> bool {
        self.open_hour <= utc_hour && utc_hour < self.close_hour
    }
}

/// # Summary
/// 单个 OHLCV 采样点，按请求即时合成、序列化后即丢弃。
///
/// # Invariants
/// - `low <= open, close <= high`。
/// - `timestamp_ms` 在同一序列内严格递增。
/// - 价格字段均保留两位小数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    // 墙钟时间 (格式: YYYY-MM-DD HH:MM:SS)
    pub timestamp: String,
    // Unix 毫秒时间戳
    pub timestamp_ms: i64,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
    // 成交量
    pub volume: u64,
    // 收盘价相对序列基准价的百分比偏移
    pub percentage_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_info_defaults_to_usd() {
        let info = SymbolInfo::new("AAPL", "Apple Inc.", "US", "Technology");
        assert_eq!(info.currency, "USD");

        let info = SymbolInfo::new("^N225", "Nikkei 225", "Japan", "Index").with_currency("JPY");
        assert_eq!(info.currency, "JPY");
    }

    #[test]
    fn test_session_window_bounds() {
        let session = MarketSession::new(14, 21);
        assert!(!session.contains(13));
        assert!(session.contains(14));
        assert!(session.contains(20));
        assert!(!session.contains(21));
    }
}
