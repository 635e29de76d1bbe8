use serde::{Deserialize, Serialize};

/// 未设置 PORT 环境变量时的默认监听端口
pub const DEFAULT_PORT: u16 = 8000;

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
        }
    }
}

impl AppConfig {
    /// # Summary
    /// 从环境变量构建配置。部署环境只注入一个 `PORT` 变量，
    /// 其余字段取默认值。
    ///
    /// # Logic
    /// 1. 以 `Default` 为基底。
    /// 2. 若 `PORT` 存在且可解析为 u16，覆盖监听端口。
    /// 3. 解析失败时记录告警并保持默认端口。
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(_) => tracing::warn!("无法解析 PORT='{}'，保持默认端口 {}", raw, DEFAULT_PORT),
            }
        }
        config
    }
}
