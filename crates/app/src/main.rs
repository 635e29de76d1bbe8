use std::sync::Arc;

use gsmt_api::server::{AppState, start_server};
use gsmt_core::common::time::{SystemClock, TimeProvider};
use gsmt_core::config::AppConfig;
use gsmt_market::analysis::AnalysisService;
use gsmt_market::generator::PricePathGenerator;
use gsmt_market::registry::SymbolRegistry;
use gsmt_market::sessions::SessionCalendar;
use tracing::info;

/// # Summary
/// 应用启动入口，纯粹的组装容器。
/// 负责实例化静态表与生成器并注入到 API 层的共享状态中。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 从环境变量读取监听配置（仅 PORT）。
/// 3. 构建注册表、交易时段日历与价格路径生成器。
/// 4. 组装分析编排服务并启动 HTTP 监听。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    tracing_subscriber::fmt::init();
    info!("GSMT API starting...");

    // 2. 读取监听配置
    let config = AppConfig::from_env();

    // 3. 构建静态表与生成器
    let clock: Arc<dyn TimeProvider> = Arc::new(SystemClock);
    let registry = Arc::new(SymbolRegistry::default());
    let sessions = Arc::new(SessionCalendar::default());
    let generator = Arc::new(PricePathGenerator::new(clock, sessions));

    // 4. 组装编排服务并启动
    let analysis = Arc::new(AnalysisService::new(registry.clone(), generator));
    info!("Loaded {} symbols", registry.len());

    let state = AppState { analysis, registry };
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    start_server(state, &bind_addr).await
}
