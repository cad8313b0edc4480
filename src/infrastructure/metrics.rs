// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 在 `listen` 上启动 Prometheus 导出器并注册曲库相关指标
pub fn init_metrics(listen: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = listen.parse()?;

    // Ignore error if a recorder is already installed (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return Ok(());
    }

    describe_counter!("songs_listed_total", "Total number of song list queries served");
    describe_counter!("songs_created_total", "Total number of songs created");
    describe_counter!("songs_updated_total", "Total number of songs updated");
    describe_counter!("songs_deleted_total", "Total number of songs deleted");

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}
