use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::market::error::MarketError;

pub mod time;

/// # Summary
/// 回看周期枚举，定义一次分析请求覆盖的日历跨度。
///
/// # Invariants
/// - 每个周期对应唯一的天数，且天数 >= 1。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum TimePeriod {
    // 24 小时
    #[default]
    #[serde(rename = "24h")]
    Hour24,
    // 3 天
    #[serde(rename = "3d")]
    Days3,
    // 1 周
    #[serde(rename = "1w")]
    Week1,
    // 2 周
    #[serde(rename = "2w")]
    Weeks2,
    // 1 个月
    #[serde(rename = "1M")]
    Month1,
    // 3 个月
    #[serde(rename = "3M")]
    Months3,
    // 6 个月
    #[serde(rename = "6M")]
    Months6,
    // 1 年
    #[serde(rename = "1Y")]
    Year1,
    // 2 年
    #[serde(rename = "2Y")]
    Years2,
}

impl TimePeriod {
    /// 全部周期，按跨度从短到长排列
    pub const ALL: [TimePeriod; 9] = [
        TimePeriod::Hour24,
        TimePeriod::Days3,
        TimePeriod::Week1,
        TimePeriod::Weeks2,
        TimePeriod::Month1,
        TimePeriod::Months3,
        TimePeriod::Months6,
        TimePeriod::Year1,
        TimePeriod::Years2,
    ];

    /// 周期覆盖的日历天数
    pub fn days(self) -> i64 {
        match self {
            TimePeriod::Hour24 => 1,
            TimePeriod::Days3 => 3,
            TimePeriod::Week1 => 7,
            TimePeriod::Weeks2 => 14,
            TimePeriod::Month1 => 30,
            TimePeriod::Months3 => 90,
            TimePeriod::Months6 => 180,
            TimePeriod::Year1 => 365,
            TimePeriod::Years2 => 730,
        }
    }

    /// 面向前端的周期描述
    pub fn description(self) -> &'static str {
        match self {
            TimePeriod::Hour24 => "24 Hours",
            TimePeriod::Days3 => "3 Days",
            TimePeriod::Week1 => "1 Week",
            TimePeriod::Weeks2 => "2 Weeks",
            TimePeriod::Month1 => "1 Month",
            TimePeriod::Months3 => "3 Months",
            TimePeriod::Months6 => "6 Months",
            TimePeriod::Year1 => "1 Year",
            TimePeriod::Years2 => "2 Years",
        }
    }
}

impl FromStr for TimePeriod {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "24h" => Ok(TimePeriod::Hour24),
            "3d" => Ok(TimePeriod::Days3),
            "1w" => Ok(TimePeriod::Week1),
            "2w" => Ok(TimePeriod::Weeks2),
            "1m" => Ok(TimePeriod::Month1),
            "3m" => Ok(TimePeriod::Months3),
            "6m" => Ok(TimePeriod::Months6),
            "1y" => Ok(TimePeriod::Year1),
            "2y" => Ok(TimePeriod::Years2),
            _ => Err(MarketError::UnknownPeriod(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TimePeriod::Hour24 => "24h",
            TimePeriod::Days3 => "3d",
            TimePeriod::Week1 => "1w",
            TimePeriod::Weeks2 => "2w",
            TimePeriod::Month1 => "1M",
            TimePeriod::Months3 => "3M",
            TimePeriod::Months6 => "6M",
            TimePeriod::Year1 => "1Y",
            TimePeriod::Years2 => "2Y",
        };
        write!(f, "{}", tag)
    }
}

/// # Summary
/// 图表类型枚举，仅作为请求偏好透传回响应。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    // 百分比变化视图
    #[default]
    Percentage,
    // 价格视图
    Price,
    // K 线视图
    Candlestick,
}

impl ChartType {
    /// 全部图表类型
    pub const ALL: [ChartType; 3] = [ChartType::Percentage, ChartType::Price, ChartType::Candlestick];
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ChartType::Percentage => "percentage",
            ChartType::Price => "price",
            ChartType::Candlestick => "candlestick",
        };
        write!(f, "{}", tag)
    }
}
