//! # `gsmt-core` - 领域模型层
//!
//! 本 crate 承载 GSMT 全球股票市场追踪器的共享领域模型：
//! 标的元数据、周期与图表类型枚举、交易时段窗口、OHLCV 采样点实体、
//! 统一错误分类，以及配置与时间供给接口。
//!
//! ## 架构职责
//! - 不做任何 I/O，所有类型均为纯数据或纯函数
//! - 上层 `gsmt-market` 在这些类型之上实现合成与编排
//! - `gsmt-api` 将这里的实体转换为面向前端的 DTO

pub mod common;
pub mod config;
pub mod market;
