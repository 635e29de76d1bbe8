//! # 证券目录路由控制器

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use utoipa::ToSchema;

use gsmt_core::common::{ChartType, TimePeriod};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{SearchResponse, SymbolCatalogResponse, SymbolInfoResponse};

/// 搜索条数上限的合法区间
const SEARCH_LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=50;
/// 未显式给出 limit 时的默认条数
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// 列出全部标的
///
/// 按 "{market} {category}" 分组返回注册表，并附带支持的周期与图表类型。
#[utoipa::path(
    get,
    path = "/symbols",
    tag = "证券目录 (Symbols)",
    responses(
        (status = 200, description = "标的目录", body = SymbolCatalogResponse)
    )
)]
pub async fn list_symbols(State(state): State<AppState>) -> Json<SymbolCatalogResponse> {
    let mut categories: BTreeMap<String, Vec<SymbolInfoResponse>> = BTreeMap::new();
    for info in state.registry.all() {
        let group = format!("{} {}", info.market, info.category);
        categories.entry(group).or_default().push(info.into());
    }

    Json(SymbolCatalogResponse {
        total_symbols: state.registry.len(),
        categories,
        supported_periods: TimePeriod::ALL.iter().map(ToString::to_string).collect(),
        chart_types: ChartType::ALL.iter().map(ToString::to_string).collect(),
    })
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    /// 返回条数上限 (1-50)
    pub limit: Option<usize>,
}

/// 搜索标的
///
/// 对代码、名称、市场、类别做大小写不敏感的子串匹配。
#[utoipa::path(
    get,
    path = "/search/{query}",
    tag = "证券目录 (Symbols)",
    params(
        ("query" = String, Path, description = "搜索关键字"),
        ("limit" = Option<usize>, Query, description = "返回条数上限 (1-50，默认 10)")
    ),
    responses(
        (status = 200, description = "搜索结果", body = SearchResponse),
        (status = 400, description = "limit 超出范围")
    )
)]
pub async fn search_symbols(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !SEARCH_LIMIT_RANGE.contains(&limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and 50, got {}",
            limit
        )));
    }

    let results: Vec<SymbolInfoResponse> = state
        .registry
        .search(&query, limit)
        .into_iter()
        .map(Into::into)
        .collect();
    let total_found = state.registry.match_count(&query);

    Ok(Json(SearchResponse {
        query,
        results,
        total_found,
    }))
}
