//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向前端 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。
//! 价格字段在转换时经 `Decimal` 收敛到两位小数，保证 JSON 数值干净。

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use gsmt_core::common::{ChartType, TimePeriod};
use gsmt_core::market::entity::{MarketDataPoint, SymbolInfo};
use gsmt_market::analysis::AnalysisOutcome;
use gsmt_market::sessions::TradingSession;

// ============================================================
//  行情相关 DTO
// ============================================================

/// 单个 OHLCV 采样点 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketPointResponse {
    /// 墙钟时间
    #[schema(example = "2025-06-02 09:30:00")]
    pub timestamp: String,
    /// Unix 毫秒时间戳
    #[schema(example = 1748856600000_i64)]
    pub timestamp_ms: i64,
    /// 开盘价
    #[schema(example = 150.5)]
    pub open: Decimal,
    /// 最高价
    #[schema(example = 152.0)]
    pub high: Decimal,
    /// 最低价
    #[schema(example = 149.0)]
    pub low: Decimal,
    /// 收盘价
    #[schema(example = 151.0)]
    pub close: Decimal,
    /// 成交量
    #[schema(example = 1000000_u64)]
    pub volume: u64,
    /// 收盘价相对序列基准价的百分比变化
    #[schema(example = 0.33)]
    pub percentage_change: Decimal,
}

impl From<&MarketDataPoint> for MarketPointResponse {
    fn from(p: &MarketDataPoint) -> Self {
        Self {
            timestamp: p.timestamp.clone(),
            timestamp_ms: p.timestamp_ms,
            open: round_price(p.open),
            high: round_price(p.high),
            low: round_price(p.low),
            close: round_price(p.close),
            volume: p.volume,
            percentage_change: round_price(p.percentage_change),
        }
    }
}

/// f64 价格收敛为两位小数的 Decimal
fn round_price(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO).round_dp(2)
}

/// 标的元数据 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymbolInfoResponse {
    /// 交易代码
    #[schema(example = "AAPL")]
    pub symbol: String,
    /// 显示名称
    #[schema(example = "Apple Inc.")]
    pub name: String,
    /// 所属市场
    #[schema(example = "US")]
    pub market: String,
    /// 行业/类别
    #[schema(example = "Technology")]
    pub category: String,
    /// 币种
    #[schema(example = "USD")]
    pub currency: String,
}

impl From<&SymbolInfo> for SymbolInfoResponse {
    fn from(info: &SymbolInfo) -> Self {
        Self {
            symbol: info.symbol.clone(),
            name: info.name.clone(),
            market: info.market.clone(),
            category: info.category.clone(),
            currency: info.currency.clone(),
        }
    }
}

/// 交易时段展示信息 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradingSessionResponse {
    /// 时段名称
    #[schema(example = "Asian Session")]
    pub name: String,
    /// 开始时间 (UTC)
    #[schema(example = "00:00")]
    pub start: String,
    /// 结束时间 (UTC)
    #[schema(example = "08:00")]
    pub end: String,
    /// 覆盖的市场
    pub markets: Vec<String>,
    /// 前端展示色
    #[schema(example = "#f59e0b")]
    pub color: String,
}

impl From<&TradingSession> for TradingSessionResponse {
    fn from(s: &TradingSession) -> Self {
        Self {
            name: s.name.to_string(),
            start: s.start.to_string(),
            end: s.end.to_string(),
            markets: s.markets.iter().map(|m| (*m).to_string()).collect(),
            color: s.color.to_string(),
        }
    }
}

// ============================================================
//  分析请求/响应 DTO
// ============================================================

/// 分析请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// 标的列表 (1-10 个)
    #[schema(example = json!(["AAPL", "^GSPC"]))]
    pub symbols: Vec<String>,
    /// 回看周期
    #[serde(default)]
    pub period: TimePeriod,
    /// 图表类型
    #[serde(default)]
    pub chart_type: ChartType,
}

/// 分析响应信封
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisEnvelope {
    /// 是否成功
    pub success: bool,
    /// 标的 → 采样点序列
    pub data: BTreeMap<String, Vec<MarketPointResponse>>,
    /// 标的 → 元数据
    pub metadata: BTreeMap<String, SymbolInfoResponse>,
    /// 周期标签
    #[schema(example = "1M")]
    pub period: String,
    /// 图表类型标签
    #[schema(example = "percentage")]
    pub chart_type: String,
    /// 响应生成时间 (RFC 3339)
    pub timestamp: String,
    /// 请求的标的总数
    pub total_symbols: usize,
    /// 成功生成序列的标的数
    pub successful_symbols: usize,
}

impl From<AnalysisOutcome> for AnalysisEnvelope {
    fn from(outcome: AnalysisOutcome) -> Self {
        Self {
            success: true,
            data: outcome
                .data
                .iter()
                .map(|(symbol, points)| {
                    (symbol.clone(), points.iter().map(Into::into).collect())
                })
                .collect(),
            metadata: outcome
                .metadata
                .iter()
                .map(|(symbol, info)| (symbol.clone(), info.into()))
                .collect(),
            period: outcome.period.to_string(),
            chart_type: outcome.chart_type.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            total_symbols: outcome.total_symbols,
            successful_symbols: outcome.successful_symbols,
        }
    }
}

/// 全球 24 小时流程响应信封
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GlobalFlowEnvelope {
    /// 是否成功
    pub success: bool,
    /// 标的 → 采样点序列
    pub data: BTreeMap<String, Vec<MarketPointResponse>>,
    /// 标的 → 元数据
    pub metadata: BTreeMap<String, SymbolInfoResponse>,
    /// 三大交易时段的展示信息
    pub market_sessions: Vec<TradingSessionResponse>,
    /// 周期标签 (固定为 24h)
    #[schema(example = "24h")]
    pub period: String,
    /// 图表类型标签
    #[schema(example = "percentage")]
    pub chart_type: String,
    /// 响应生成时间 (RFC 3339)
    pub timestamp: String,
    /// 跟踪的标的总数
    pub total_symbols: usize,
    /// 成功生成序列的标的数
    pub successful_symbols: usize,
    /// 视图说明
    pub description: String,
}

impl GlobalFlowEnvelope {
    /// 从领域结果与时段描述组装信封
    pub fn new(outcome: AnalysisOutcome, market_sessions: Vec<TradingSessionResponse>) -> Self {
        let envelope = AnalysisEnvelope::from(outcome);
        Self {
            success: envelope.success,
            data: envelope.data,
            metadata: envelope.metadata,
            market_sessions,
            period: envelope.period,
            chart_type: envelope.chart_type,
            timestamp: envelope.timestamp,
            total_symbols: envelope.total_symbols,
            successful_symbols: envelope.successful_symbols,
            description: "24-hour global market flow tracking across time zones".to_string(),
        }
    }
}

// ============================================================
//  目录与搜索 DTO
// ============================================================

/// 标的目录响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymbolCatalogResponse {
    /// 注册表内的标的总数
    pub total_symbols: usize,
    /// "{market} {category}" → 标的列表
    pub categories: BTreeMap<String, Vec<SymbolInfoResponse>>,
    /// 支持的周期标签
    #[schema(example = json!(["24h", "1M", "1Y"]))]
    pub supported_periods: Vec<String>,
    /// 支持的图表类型
    #[schema(example = json!(["percentage", "price", "candlestick"]))]
    pub chart_types: Vec<String>,
}

/// 搜索响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// 原始关键字
    #[schema(example = "apple")]
    pub query: String,
    /// 命中的标的 (截断到 limit)
    pub results: Vec<SymbolInfoResponse>,
    /// 命中的总数 (不受 limit 影响)
    pub total_found: usize,
}

// ============================================================
//  状态 DTO
// ============================================================

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// 存活状态
    #[schema(example = "healthy")]
    pub status: String,
    /// 服务名
    #[schema(example = "GSMT API")]
    pub service: String,
    /// 版本号
    #[schema(example = "0.1.0")]
    pub version: String,
    /// 当前时间 (RFC 3339)
    pub timestamp: String,
    /// 已加载的标的数量
    pub supported_symbols: usize,
}

/// 主要端点索引
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointIndex {
    pub health: String,
    pub symbols: String,
    pub analyze: String,
    pub docs: String,
}

/// 服务自述响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    /// 服务名
    #[schema(example = "GSMT API")]
    pub name: String,
    /// 版本号
    #[schema(example = "0.1.0")]
    pub version: String,
    /// 一句话描述
    pub description: String,
    /// 存活状态
    #[schema(example = "healthy")]
    pub status: String,
    /// 主要端点索引
    pub endpoints: EndpointIndex,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
