use std::ops::{Range, RangeInclusive};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use gsmt_core::common::TimePeriod;
use gsmt_core::common::time::TimeProvider;
use gsmt_core::market::entity::MarketDataPoint;
use gsmt_core::market::error::MarketError;

use crate::sessions::SessionCalendar;

/// 指数类标的的基准价区间
const INDEX_PRICE_RANGE: Range<f64> = 3_000.0..40_000.0;
/// 澳交所股票的基准价区间
const ASX_PRICE_RANGE: Range<f64> = 10.0..300.0;
/// 默认股票的基准价区间
const EQUITY_PRICE_RANGE: Range<f64> = 50.0..500.0;

/// 回看序列的最大采样点数
const MAX_SERIES_POINTS: i64 = 100;
/// 回看序列随机游走的单步波动率 (2%)
const WALK_SIGMA: f64 = 0.02;
/// 回看序列影线扰动的波动率
const WALK_WICK_SIGMA: f64 = 0.01;
/// 回看序列开盘价扰动的波动率
const WALK_OPEN_SIGMA: f64 = 0.005;
/// 回看序列成交量的均匀抽样区间 (闭区间)
const WALK_VOLUME_RANGE: RangeInclusive<u64> = 100_000..=10_000_000;

/// 24 小时流程的采样点数 (每 30 分钟一个)
const FLOW_STEPS: usize = 48;
/// 24 小时流程的采样间隔 (分钟)
const FLOW_STEP_MINUTES: i64 = 30;
/// 开盘时段的单步波动率 (1.5%)
const FLOW_ACTIVE_SIGMA: f64 = 0.015;
/// 休市时段的单步波动率 (0.2%)
const FLOW_IDLE_SIGMA: f64 = 0.002;
/// 24 小时流程影线扰动的波动率
const FLOW_WICK_SIGMA: f64 = 0.005;
/// 24 小时流程开盘价扰动的波动率
const FLOW_OPEN_SIGMA: f64 = 0.002;

/// 输出的墙钟时间格式
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// # Summary
/// 标的类别，由代码形态推断，决定基准价与成交量档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    // 指数 (^ 前缀)
    Index,
    // 澳交所股票 (.AX 后缀)
    AsxEquity,
    // 其他股票
    Equity,
}

impl SymbolClass {
    pub fn of(symbol: &str) -> Self {
        if symbol.starts_with('^') {
            SymbolClass::Index
        } else if symbol.contains(".AX") {
            SymbolClass::AsxEquity
        } else {
            SymbolClass::Equity
        }
    }

    fn price_range(self) -> Range<f64> {
        match self {
            SymbolClass::Index => INDEX_PRICE_RANGE,
            SymbolClass::AsxEquity => ASX_PRICE_RANGE,
            SymbolClass::Equity => EQUITY_PRICE_RANGE,
        }
    }

    /// 24 小时流程只区分指数与普通股票
    fn flow_price_range(self) -> Range<f64> {
        match self {
            SymbolClass::Index => INDEX_PRICE_RANGE,
            _ => EQUITY_PRICE_RANGE,
        }
    }

    fn flow_base_volume(self) -> f64 {
        match self {
            SymbolClass::Index => 1_000_000.0,
            _ => 500_000.0,
        }
    }
}

/// # Summary
/// 合成价格路径生成器。围绕一个随机抽取的基准价做乘性随机游走，
/// 按需生成回看序列或跟随交易时段的 24 小时流程序列。
///
/// # Invariants
/// - 同一种子产生完全相同的序列（测试依赖此性质）。
/// - 输出序列的时间戳严格递增。
/// - 每个采样点满足 `low <= open, close <= high`。
pub struct PricePathGenerator {
    // 时间源，可注入固定时钟钉死序列起点
    clock: Arc<dyn TimeProvider>,
    // 市场交易时段日历
    sessions: Arc<SessionCalendar>,
    // 可种子化随机源，Mutex 保证跨请求并发安全
    rng: Mutex<StdRng>,
}

impl PricePathGenerator {
    /// 使用操作系统熵源作为种子
    pub fn new(clock: Arc<dyn TimeProvider>, sessions: Arc<SessionCalendar>) -> Self {
        Self {
            clock,
            sessions,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// 使用固定种子，供确定性测试使用
    pub fn with_seed(clock: Arc<dyn TimeProvider>, sessions: Arc<SessionCalendar>, seed: u64) -> Self {
        Self {
            clock,
            sessions,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// # Summary
    /// 生成覆盖 `[now - days, now]` 的回看序列。
    ///
    /// # Logic
    /// 1. 按标的类别抽取基准价，采样点数为 `min(100, days * 2)`。
    /// 2. 每步抽取 N(0, 2%) 的变化率更新收盘价，下限钳制在基准价的一半。
    /// 3. 围绕更新后的收盘价独立扰动出 open/high/low，成交量均匀抽样。
    ///
    /// # Returns
    /// 时间戳严格递增的采样点序列。
    pub fn period_series(
        &self,
        symbol: &str,
        period: TimePeriod,
    ) -> Result<Vec<MarketDataPoint>, MarketError> {
        let mut rng = self.lock_rng()?;

        let days = period.days();
        let num_points = (days * 2).min(MAX_SERIES_POINTS);
        let class = SymbolClass::of(symbol);
        let base_price = rng.random_range(class.price_range());
        let mut close = base_price;

        let now = self.clock.now();
        let start = now - Duration::days(days);
        let span_secs = days * 86_400;

        let mut points = Vec::with_capacity(num_points as usize);
        for i in 0..num_points {
            let change = draw(&mut rng, WALK_SIGMA);
            // 半基准价下限，防止长周期里乘性游走坍缩
            close = (close * (1.0 + change)).max(base_price * 0.5);

            let timestamp = start + Duration::seconds(span_secs * i / num_points);
            let volume = rng.random_range(WALK_VOLUME_RANGE);
            points.push(sample_point(
                &mut rng,
                timestamp,
                close,
                base_price,
                WALK_WICK_SIGMA,
                WALK_OPEN_SIGMA,
                volume,
            ));
        }
        Ok(points)
    }

    /// # Summary
    /// 生成跟随市场交易时段的 24 小时流程序列：
    /// 自当日 UTC 零点起，每 30 分钟一个采样点，共 48 点。
    ///
    /// # Logic
    /// 1. 按标的类别抽取基准价（此流程不区分澳股）。
    /// 2. 每步查询交易时段日历：开盘时段用 N(0, 1.5%) 并保持满额成交量，
    ///    休市时段降到 N(0, 0.2%) 且成交量乘以 0.1。
    /// 3. 收盘价不设下限，围绕其独立扰动出 open/high/low。
    pub fn intraday_flow(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Vec<MarketDataPoint>, MarketError> {
        let mut rng = self.lock_rng()?;

        let class = SymbolClass::of(symbol);
        let base_price = rng.random_range(class.flow_price_range());
        let mut close = base_price;

        let now = self.clock.now();
        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();

        let mut points = Vec::with_capacity(FLOW_STEPS);
        for i in 0..FLOW_STEPS {
            let timestamp = midnight + Duration::minutes(FLOW_STEP_MINUTES * i as i64);
            let (sigma, volume_multiplier) = if self.sessions.is_open(market, timestamp.hour()) {
                (FLOW_ACTIVE_SIGMA, 1.0)
            } else {
                (FLOW_IDLE_SIGMA, 0.1)
            };

            let change = draw(&mut rng, sigma);
            close *= 1.0 + change;

            let volume =
                (class.flow_base_volume() * volume_multiplier * rng.random_range(0.5..2.0)).round() as u64;
            points.push(sample_point(
                &mut rng,
                timestamp,
                close,
                base_price,
                FLOW_WICK_SIGMA,
                FLOW_OPEN_SIGMA,
                volume,
            ));
        }
        Ok(points)
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, StdRng>, MarketError> {
        self.rng
            .lock()
            .map_err(|_| MarketError::Generation("random source lock poisoned".to_string()))
    }
}

/// 从 N(0, sigma) 抽取一个变化率
fn draw(rng: &mut StdRng, sigma: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    z * sigma
}

/// 围绕更新后的收盘价独立扰动出 open/high/low 并组装采样点。
/// high/low 最终取三个候选值与收盘价的最值，保证 OHLC 次序成立。
fn sample_point(
    rng: &mut StdRng,
    timestamp: DateTime<Utc>,
    close: f64,
    base_price: f64,
    wick_sigma: f64,
    open_sigma: f64,
    volume: u64,
) -> MarketDataPoint {
    let high = close * (1.0 + draw(rng, wick_sigma).abs());
    let low = close * (1.0 - draw(rng, wick_sigma).abs());
    let open = close * (1.0 + draw(rng, open_sigma));

    let high = high.max(open).max(close);
    let low = low.min(open).min(close);
    let percentage_change = (close - base_price) / base_price * 100.0;

    MarketDataPoint {
        timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        timestamp_ms: timestamp.timestamp_millis(),
        open: round2(open),
        high: round2(high),
        low: round2(low),
        close: round2(close),
        volume,
        percentage_change: round2(percentage_change),
    }
}

/// 价格字段统一保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gsmt_core::common::time::FixedClock;

    fn pinned_clock() -> Arc<dyn TimeProvider> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 2, 15, 30, 0).unwrap()))
    }

    fn generator(seed: u64) -> PricePathGenerator {
        PricePathGenerator::with_seed(pinned_clock(), Arc::new(SessionCalendar::default()), seed)
    }

    #[test]
    fn test_symbol_class_by_shape() {
        assert_eq!(SymbolClass::of("^GSPC"), SymbolClass::Index);
        assert_eq!(SymbolClass::of("CBA.AX"), SymbolClass::AsxEquity);
        assert_eq!(SymbolClass::of("AAPL"), SymbolClass::Equity);
    }

    #[test]
    fn test_series_length_is_capped() {
        let g = generator(1);
        assert_eq!(g.period_series("AAPL", TimePeriod::Hour24).unwrap().len(), 2);
        assert_eq!(g.period_series("AAPL", TimePeriod::Days3).unwrap().len(), 6);
        assert_eq!(g.period_series("AAPL", TimePeriod::Month1).unwrap().len(), 60);
        assert_eq!(g.period_series("AAPL", TimePeriod::Years2).unwrap().len(), 100);
    }

    #[test]
    fn test_series_timestamps_strictly_increase() {
        let g = generator(2);
        let points = g.period_series("MSFT", TimePeriod::Month1).unwrap();
        for pair in points.windows(2) {
            assert!(pair[0].timestamp_ms < pair[1].timestamp_ms);
        }
    }

    #[test]
    fn test_series_ohlc_ordering_holds() {
        let g = generator(3);
        for period in [TimePeriod::Week1, TimePeriod::Months6, TimePeriod::Years2] {
            for p in g.period_series("^GSPC", period).unwrap() {
                assert!(p.low <= p.open && p.open <= p.high, "low<=open<=high: {:?}", p);
                assert!(p.low <= p.close && p.close <= p.high, "low<=close<=high: {:?}", p);
            }
        }
    }

    #[test]
    fn test_walk_never_collapses_below_half_base() {
        // 长周期 + 多种子逼出极端连跌路径，收盘价仍不得跌破基准价的一半
        for seed in 0..50u64 {
            let g = generator(seed);
            for p in g.period_series("TSLA", TimePeriod::Years2).unwrap() {
                assert!(
                    p.percentage_change >= -50.01,
                    "seed {} dipped to {}%",
                    seed,
                    p.percentage_change
                );
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let a = generator(42).period_series("AAPL", TimePeriod::Months3).unwrap();
        let b = generator(42).period_series("AAPL", TimePeriod::Months3).unwrap();
        assert_eq!(a, b);

        let c = generator(43).period_series("AAPL", TimePeriod::Months3).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_intraday_flow_covers_one_utc_day() {
        let g = generator(4);
        let points = g.intraday_flow("^N225", "Japan").unwrap();
        assert_eq!(points.len(), 48);

        assert!(points[0].timestamp.ends_with("00:00:00"));
        for pair in points.windows(2) {
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, 30 * 60 * 1000);
        }

        let last = Utc.timestamp_millis_opt(points[47].timestamp_ms).unwrap();
        assert_eq!((last.hour(), last.minute()), (23, 30));
    }

    #[test]
    fn test_intraday_flow_dampens_closed_sessions() {
        // 日本市场 00:00-06:00 UTC 开盘，其余时段休市。
        // 开盘时段的步进幅度期望应显著大于休市时段（统计性质，跨种子聚合）。
        let mut open_moves = Vec::new();
        let mut closed_moves = Vec::new();

        for seed in 0..10u64 {
            let g = generator(seed);
            let points = g.intraday_flow("^N225", "Japan").unwrap();
            for pair in points.windows(2) {
                let hour = Utc.timestamp_millis_opt(pair[1].timestamp_ms).unwrap().hour();
                let change = (pair[1].close / pair[0].close - 1.0).abs();
                if hour < 6 {
                    open_moves.push(change);
                } else {
                    closed_moves.push(change);
                }
            }
        }

        let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
        assert!(
            mean(&open_moves) > 2.0 * mean(&closed_moves),
            "open {} vs closed {}",
            mean(&open_moves),
            mean(&closed_moves)
        );
    }

    #[test]
    fn test_intraday_flow_ohlc_ordering_holds() {
        let g = generator(5);
        for p in g.intraday_flow("^GSPC", "US").unwrap() {
            assert!(p.low <= p.open && p.open <= p.high);
            assert!(p.low <= p.close && p.close <= p.high);
        }
    }
}
