// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use songrs::config::settings::Settings;
use songrs::domain::services::song_service::SongService;
use songrs::infrastructure::metrics::init_metrics;
use songrs::infrastructure::repositories::song_repo_impl::InMemorySongRepository;
use songrs::infrastructure::seed;
use songrs::presentation::routes;
use songrs::utils::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Arc::new(Settings::new()?);

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.environment)?;
    info!("Starting songrs in {} environment...", settings.environment);

    // 3. Initialize Prometheus Metrics
    if settings.metrics.enabled {
        init_metrics(&settings.metrics.listen)?;
    }

    // 4. Seed the catalog
    let songs = seed::demo_catalog(settings.catalog.seed_count, settings.catalog.seed);
    let repository = Arc::new(InMemorySongRepository::with_songs(songs)?);
    let service = Arc::new(SongService::new(repository));
    info!("Catalog loaded with {} songs", service.count().await?);

    // 5. Start HTTP server
    let app = routes::app(settings.clone(), service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    info!("API base URL: http://{}/api", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
