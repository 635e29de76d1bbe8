use std::collections::HashMap;

use gsmt_core::market::entity::MarketSession;

/// 未注册市场的兜底窗口，几乎全天视为开盘
pub const DEFAULT_SESSION: MarketSession = MarketSession::new(0, 23);

/// # Summary
/// 市场交易时段日历：市场名 → UTC 交易窗口的静态映射。
/// 用于决定 24 小时流程中每个采样点的波动率档位。
///
/// # Invariants
/// - `is_open` 对 [0, 24) 内任意整点全定义，未注册市场落到默认窗口。
pub struct SessionCalendar {
    windows: HashMap<String, MarketSession>,
}

impl Default for SessionCalendar {
    fn default() -> Self {
        let mut windows = HashMap::new();
        windows.insert("Japan".to_string(), MarketSession::new(0, 6)); // 00:00-06:00 UTC
        windows.insert("Hong Kong".to_string(), MarketSession::new(1, 8)); // 01:00-08:00 UTC
        windows.insert("UK".to_string(), MarketSession::new(8, 16)); // 08:00-16:00 UTC
        windows.insert("Germany".to_string(), MarketSession::new(7, 15)); // 07:00-15:30 UTC
        windows.insert("France".to_string(), MarketSession::new(7, 15)); // 07:00-15:30 UTC
        windows.insert("US".to_string(), MarketSession::new(14, 21)); // 14:30-21:00 UTC
        Self { windows }
    }
}

impl SessionCalendar {
    /// 查询市场的交易窗口，未注册市场返回默认窗口
    pub fn session(&self, market: &str) -> MarketSession {
        self.windows.get(market).copied().unwrap_or(DEFAULT_SESSION)
    }

    /// 判断市场在给定 UTC 整点是否开盘
    pub fn is_open(&self, market: &str, utc_hour: u32) -> bool {
        self.session(market).contains(utc_hour)
    }
}

/// # Summary
/// 面向前端展示的全球交易时段描述（名称、起止时间与显示色）。
#[derive(Debug, Clone, Copy)]
pub struct TradingSession {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub markets: &'static [&'static str],
    pub color: &'static str,
}

/// 全球三大交易时段
pub const TRADING_SESSIONS: [TradingSession; 3] = [
    TradingSession {
        name: "Asian Session",
        start: "00:00",
        end: "08:00",
        markets: &["Japan", "Hong Kong"],
        color: "#f59e0b",
    },
    TradingSession {
        name: "European Session",
        start: "07:00",
        end: "16:00",
        markets: &["UK", "Germany", "France"],
        color: "#10b981",
    },
    TradingSession {
        name: "US Session",
        start: "14:30",
        end: "21:00",
        markets: &["US"],
        color: "#3b82f6",
    },
];
