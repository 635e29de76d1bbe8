use chrono::{DateTime, Utc};

/// # Summary
/// 时间供给器接口，用于隔离物理系统时钟。
/// 价格路径生成器通过此接口取得"当前时刻"，使序列起点可以在测试中被钉死。
pub trait TimeProvider: Send + Sync {
    /// 获取当前时刻
    fn now(&self) -> DateTime<Utc>;
}

/// # Summary
/// 生产运行使用的真实时钟，直接返回操作系统当前时间。
pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// # Summary
/// 测试专用固定时钟，始终返回构造时给定的时刻。
pub struct FixedClock(pub DateTime<Utc>);

impl TimeProvider for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
