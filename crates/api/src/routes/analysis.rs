//! # 行情分析路由控制器

use axum::Json;
use axum::extract::State;

use gsmt_market::sessions::TRADING_SESSIONS;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{AnalysisEnvelope, AnalyzeRequest, GlobalFlowEnvelope};

/// 单次请求允许的标的数量区间
const SYMBOL_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=10;

/// 分析标的
///
/// 为请求的标的生成演示行情序列。周期为 24h 且标的横跨多个市场时，
/// 序列切换为跟随各市场交易时段的 24 小时流程。
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "行情分析 (Analysis)",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "分析完成", body = AnalysisEnvelope),
        (status = 400, description = "标的数量越界或包含不支持的标的")
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisEnvelope>, ApiError> {
    if !SYMBOL_COUNT_RANGE.contains(&req.symbols.len()) {
        return Err(ApiError::BadRequest(format!(
            "symbols must contain between 1 and 10 entries, got {}",
            req.symbols.len()
        )));
    }

    let outcome = state.analysis.analyze(&req.symbols, req.period, req.chart_type)?;
    Ok(Json(outcome.into()))
}

/// 全球 24 小时市场流程
///
/// 跟踪横跨亚洲、欧洲、美国时区的六个核心指数，并附带三大交易时段说明。
#[utoipa::path(
    get,
    path = "/global-24h",
    tag = "行情分析 (Analysis)",
    responses(
        (status = 200, description = "全球流程数据", body = GlobalFlowEnvelope),
        (status = 500, description = "服务器内部错误")
    )
)]
pub async fn global_flow(State(state): State<AppState>) -> Result<Json<GlobalFlowEnvelope>, ApiError> {
    let outcome = state.analysis.global_flow()?;
    let sessions = TRADING_SESSIONS.iter().map(Into::into).collect();
    Ok(Json(GlobalFlowEnvelope::new(outcome, sessions)))
}
