//! # `gsmt-market` - 行情合成领域层
//!
//! 在 `gsmt-core` 的实体之上实现服务的功能核心：
//! 静态标的注册表、市场交易时段日历、合成价格路径生成器，
//! 以及面向请求的分析编排服务。
//!
//! 本层没有任何外部 I/O：全部静态表在启动时构建一次，
//! 之后跨请求只读共享；序列按请求即时合成。

pub mod analysis;
pub mod generator;
pub mod registry;
pub mod sessions;
