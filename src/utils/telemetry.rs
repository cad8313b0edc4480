// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// 开发环境输出可读文本，其余环境输出JSON。日志级别由 `RUST_LOG` 控制，
/// 默认 `info,songrs=debug`。
pub fn init_telemetry(environment: &str) -> Result<(), TryInitError> {
    let json = environment != "development";
    let (plain_layer, json_layer) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,songrs=debug".into()),
        )
        .with(plain_layer)
        .with(json_layer)
        .try_init()
}
