//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 路由树的构建与端口绑定分离，集成测试可直接复用完整的路由树。

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use gsmt_market::analysis::AnalysisService;
use gsmt_market::registry::SymbolRegistry;

use crate::error::ApiError;
use crate::routes::{analysis, status, symbols};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 所有成员在服务启动前构建完毕，启动后跨请求只读共享。
#[derive(Clone)]
pub struct AppState {
    /// 分析编排服务
    pub analysis: Arc<AnalysisService>,
    /// 标的注册表
    pub registry: Arc<SymbolRegistry>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GSMT API",
        version = "0.1.0",
        description = "Global Stock Market Tracker 的 RESTful API。提供标的目录查询、搜索与演示行情序列生成。",
        license(name = "MIT")
    ),
    tags(
        (name = "状态 (Status)", description = "服务自述与健康检查"),
        (name = "证券目录 (Symbols)", description = "标的目录与搜索"),
        (name = "行情分析 (Analysis)", description = "演示行情序列与全球 24 小时流程")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// 构建完整的 axum 应用路由树（服务启动与集成测试共用）。
pub fn build_router(state: AppState) -> Router {
    let api_router = OpenApiRouter::new()
        .routes(routes!(status::root))
        .routes(routes!(status::health))
        .routes(routes!(symbols::list_symbols))
        .routes(routes!(symbols::search_symbols))
        .routes(routes!(analysis::global_flow))
        .routes(routes!(analysis::analyze));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(api_router)
        .with_state(state)
        .split_for_parts();

    // 允许所有来源，前端部署在任意域名下均可直接调用
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(not_found)
        .layer(cors)
}

/// 未匹配任何路由时的兜底响应，保持与其余接口一致的 JSON 错误格式
async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// 绑定 TCP 端口并启动 HTTP 监听。
///
/// # Arguments
/// * `state` - 由外部组装容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8000"`
pub async fn start_server(state: AppState, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("🚀 GSMT API Server listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
