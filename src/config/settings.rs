// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、跨域、速率限制、曲库种子和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 运行环境（development / production 等）
    pub environment: String,
    /// 服务器配置
    pub server: ServerSettings,
    /// 跨域配置
    pub cors: CorsSettings,
    /// 速率限制配置
    pub rate_limiting: RateLimitingSettings,
    /// 曲库配置
    pub catalog: CatalogSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源列表
    pub allowed_origins: Vec<String>,
}

/// 速率限制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitingSettings {
    /// 是否启用速率限制
    pub enabled: bool,
    /// 每个窗口内每个IP允许的请求数
    pub max_requests: u32,
    /// 窗口长度（秒）
    pub window_secs: u64,
}

/// 曲库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// 启动时生成的演示歌曲数量
    pub seed_count: usize,
    /// 演示数据的随机数种子
    pub seed: u64,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 运行环境取自 `APP_ENVIRONMENT`，缺省为 `development`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::for_environment(&env)
    }

    /// 加载指定环境的配置
    ///
    /// 依次加载默认值、`config/default`、`config/{environment}`
    /// 以及 `SONGRS__` 前缀的环境变量
    pub fn for_environment(environment: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults(environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("SONGRS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 仅由默认值构成的配置，不读取文件与环境变量
    pub fn default_for(environment: &str) -> Result<Self, ConfigError> {
        Self::defaults(environment)?.build()?.try_deserialize()
    }

    fn defaults(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            // Default server settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default CORS settings
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:3000", "http://127.0.0.1:3000"],
            )?
            // Default Rate Limiting settings
            .set_default("rate_limiting.enabled", true)?
            .set_default("rate_limiting.max_requests", 100)?
            .set_default("rate_limiting.window_secs", 900)?
            // Default Catalog settings
            .set_default("catalog.seed_count", 50)?
            .set_default("catalog.seed", 42)?
            // Default Metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen", "0.0.0.0:9000")
    }
}
