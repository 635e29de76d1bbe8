//! # 服务状态路由控制器

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::server::AppState;
use crate::types::{EndpointIndex, HealthResponse, ServiceInfoResponse};

/// 服务自述
///
/// 返回服务名称、版本与主要端点索引。
#[utoipa::path(
    get,
    path = "/",
    tag = "状态 (Status)",
    responses(
        (status = 200, description = "服务信息", body = ServiceInfoResponse)
    )
)]
pub async fn root() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: "GSMT API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Global Stock Market Tracker".to_string(),
        status: "healthy".to_string(),
        endpoints: EndpointIndex {
            health: "/health".to_string(),
            symbols: "/symbols".to_string(),
            analyze: "/analyze".to_string(),
            docs: "/swagger-ui".to_string(),
        },
    })
}

/// 健康检查
///
/// 返回存活状态与已加载的标的数量。
#[utoipa::path(
    get,
    path = "/health",
    tag = "状态 (Status)",
    responses(
        (status = 200, description = "服务健康", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "GSMT API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        supported_symbols: state.registry.len(),
    })
}
