//! # `gsmt-api` - HTTP API 网关
//!
//! 本 crate 是 GSMT 全球股票市场追踪器的 HTTP/REST 服务入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收来自浏览器或前端应用的 HTTP 请求
//! - 校验请求边界（标的数量、搜索条数上限）后分发至编排服务
//! - 将领域模型转换为 DTO 返回给前端
//! - 统一把领域错误映射为 HTTP 状态码

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
