use std::sync::Arc;

use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use tokio::net::TcpListener;

use gsmt_api::server::{AppState, build_router};
use gsmt_api::types::{
    AnalysisEnvelope, AnalyzeRequest, GlobalFlowEnvelope, HealthResponse, SearchResponse,
    SymbolCatalogResponse,
};
use gsmt_core::common::time::{FixedClock, TimeProvider};
use gsmt_core::common::{ChartType, TimePeriod};
use gsmt_market::analysis::AnalysisService;
use gsmt_market::generator::PricePathGenerator;
use gsmt_market::registry::SymbolRegistry;
use gsmt_market::sessions::SessionCalendar;

// 帮助函数：在随机端口启动测试服务器，返回基地址
async fn spawn_test_server() -> String {
    let clock: Arc<dyn TimeProvider> =
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()));
    let registry = Arc::new(SymbolRegistry::default());
    let sessions = Arc::new(SessionCalendar::default());
    let generator = Arc::new(PricePathGenerator::with_seed(clock, sessions, 42));
    let analysis = Arc::new(AnalysisService::new(registry.clone(), generator));

    let state = AppState { analysis, registry };
    let router = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_full_api_workflow() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // ============================================
    // Case 1: 健康检查
    // ============================================
    let res = client.get(format!("{}/health", base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let health: HealthResponse = res.json().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.supported_symbols, 21);

    // ============================================
    // Case 2: 标的目录
    // ============================================
    let res = client.get(format!("{}/symbols", base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let catalog: SymbolCatalogResponse = res.json().await.unwrap();
    assert_eq!(catalog.total_symbols, 21);
    assert!(catalog.supported_periods.contains(&"24h".to_string()));
    assert!(catalog.chart_types.contains(&"candlestick".to_string()));
    let us_tech = catalog.categories.get("US Technology").unwrap();
    assert!(us_tech.iter().any(|s| s.symbol == "AAPL"));

    // ============================================
    // Case 3: 搜索 (大小写不敏感 + limit)
    // ============================================
    let res = client
        .get(format!("{}/search/APPLE?limit=5", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let search: SearchResponse = res.json().await.unwrap();
    assert_eq!(search.query, "APPLE");
    assert!(search.results.iter().any(|s| s.symbol == "AAPL"));
    assert!(search.results.len() <= 5);

    // ============================================
    // Case 4: 搜索 limit 越界被拒绝
    // ============================================
    let res = client
        .get(format!("{}/search/apple?limit=100", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // ============================================
    // Case 5: 未知标的被拒绝并点名
    // ============================================
    let res = client
        .post(format!("{}/analyze", base_url))
        .json(&AnalyzeRequest {
            symbols: vec!["AAPL".to_string(), "BADSYM".to_string()],
            period: TimePeriod::Month1,
            chart_type: ChartType::Percentage,
        })
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("BADSYM"));

    // ============================================
    // Case 6: 空标的列表被拒绝
    // ============================================
    let res = client
        .post(format!("{}/analyze", base_url))
        .json(&AnalyzeRequest {
            symbols: vec![],
            period: TimePeriod::Hour24,
            chart_type: ChartType::Percentage,
        })
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // ============================================
    // Case 7: 常规分析
    // ============================================
    let res = client
        .post(format!("{}/analyze", base_url))
        .json(&AnalyzeRequest {
            symbols: vec!["AAPL".to_string()],
            period: TimePeriod::Month1,
            chart_type: ChartType::Percentage,
        })
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let envelope: AnalysisEnvelope = res.json().await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.period, "1M");
    assert_eq!(envelope.chart_type, "percentage");
    assert_eq!(envelope.total_symbols, 1);
    assert_eq!(envelope.successful_symbols, 1);
    assert_eq!(envelope.data["AAPL"].len(), 60); // min(100, 30 * 2)
    assert_eq!(envelope.metadata["AAPL"].name, "Apple Inc.");

    // ============================================
    // Case 8: 跨市场 24h 请求切换到全球流程
    // ============================================
    let res = client
        .post(format!("{}/analyze", base_url))
        .json(&AnalyzeRequest {
            symbols: vec!["^N225".to_string(), "^GSPC".to_string()],
            period: TimePeriod::Hour24,
            chart_type: ChartType::Percentage,
        })
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let envelope: AnalysisEnvelope = res.json().await.unwrap();
    assert_eq!(envelope.data["^N225"].len(), 48);
    assert_eq!(envelope.data["^GSPC"].len(), 48);

    // ============================================
    // Case 9: 未知路由返回 JSON 404
    // ============================================
    let res = client.get(format!("{}/no-such-route", base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);

    // ============================================
    // Case 10: 全球 24 小时视图
    // ============================================
    let res = client.get(format!("{}/global-24h", base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let flow: GlobalFlowEnvelope = res.json().await.unwrap();
    assert!(flow.success);
    assert_eq!(flow.total_symbols, 6);
    assert_eq!(flow.successful_symbols, 6);
    assert_eq!(flow.market_sessions.len(), 3);
    assert_eq!(flow.period, "24h");
    assert_eq!(flow.data["^FTSE"].len(), 48);
    assert!(flow.metadata.contains_key("^GDAXI"));
}
