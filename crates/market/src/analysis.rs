use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use gsmt_core::common::{ChartType, TimePeriod};
use gsmt_core::market::entity::{MarketDataPoint, SymbolInfo};
use gsmt_core::market::error::MarketError;

use crate::generator::PricePathGenerator;
use crate::registry::SymbolRegistry;

/// 全球 24 小时视图跟踪的六个横跨亚欧美时区的核心指数
pub const GLOBAL_FLOW_SYMBOLS: [&str; 6] = ["^N225", "^HSI", "^FTSE", "^GDAXI", "^GSPC", "^IXIC"];

/// # Summary
/// 一次分析请求的领域层结果。
///
/// # Invariants
/// - `successful_symbols <= total_symbols`。
/// - `data` 与 `metadata` 的键集合一致。
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    // 标的 → 采样点序列
    pub data: BTreeMap<String, Vec<MarketDataPoint>>,
    // 标的 → 元数据
    pub metadata: BTreeMap<String, SymbolInfo>,
    // 请求的周期
    pub period: TimePeriod,
    // 请求的图表类型
    pub chart_type: ChartType,
    // 请求的标的总数
    pub total_symbols: usize,
    // 成功生成序列的标的数
    pub successful_symbols: usize,
}

/// # Summary
/// 分析编排服务：校验标的、选择生成流程、聚合响应数据。
/// 注册表与生成器在启动时注入，跨请求只读共享。
pub struct AnalysisService {
    registry: Arc<SymbolRegistry>,
    generator: Arc<PricePathGenerator>,
}

impl AnalysisService {
    pub fn new(registry: Arc<SymbolRegistry>, generator: Arc<PricePathGenerator>) -> Self {
        Self { registry, generator }
    }

    /// # Summary
    /// 为一组标的生成演示行情序列。
    ///
    /// # Logic
    /// 1. 校验全部标的，任何未注册代码立即返回错误并逐一点名。
    /// 2. 周期为 24h 且标的横跨多个市场时，整组切换到跟随交易时段的
    ///    24 小时流程；否则逐标的生成回看序列。
    /// 3. 单标的生成失败只记录日志并跳过，不影响其余标的
    ///    （部分成功体现在 `successful_symbols` 计数上）。
    ///
    /// # Returns
    /// 成功返回聚合结果，标的校验失败返回 `UnsupportedSymbols`。
    pub fn analyze(
        &self,
        symbols: &[String],
        period: TimePeriod,
        chart_type: ChartType,
    ) -> Result<AnalysisOutcome, MarketError> {
        let unsupported: Vec<String> = symbols
            .iter()
            .filter(|s| !self.registry.contains(s))
            .cloned()
            .collect();
        if !unsupported.is_empty() {
            return Err(MarketError::UnsupportedSymbols(unsupported));
        }

        let distinct_markets: HashSet<&str> = symbols
            .iter()
            .filter_map(|s| self.registry.lookup(s))
            .map(|info| info.market.as_str())
            .collect();
        let follow_sessions = period == TimePeriod::Hour24 && distinct_markets.len() > 1;

        let mut data = BTreeMap::new();
        let mut metadata = BTreeMap::new();
        for symbol in symbols {
            let Some(info) = self.registry.lookup(symbol) else {
                continue;
            };
            let series = if follow_sessions {
                self.generator.intraday_flow(symbol, &info.market)
            } else {
                self.generator.period_series(symbol, period)
            };
            match series {
                Ok(points) => {
                    data.insert(symbol.clone(), points);
                    metadata.insert(symbol.clone(), info.clone());
                }
                Err(e) => {
                    tracing::error!(symbol = %symbol, error = %e, "标的序列生成失败，跳过");
                }
            }
        }

        let successful_symbols = data.len();
        Ok(AnalysisOutcome {
            data,
            metadata,
            period,
            chart_type,
            total_symbols: symbols.len(),
            successful_symbols,
        })
    }

    /// 为全球 24 小时视图生成精选指数集的流程数据
    pub fn global_flow(&self) -> Result<AnalysisOutcome, MarketError> {
        let symbols: Vec<String> = GLOBAL_FLOW_SYMBOLS.iter().map(|s| (*s).to_string()).collect();
        self.analyze(&symbols, TimePeriod::Hour24, ChartType::Percentage)
    }
}
