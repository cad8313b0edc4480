// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// 速率限制错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RateLimitError {
    /// 请求过多错误
    #[error("Too many requests")]
    TooManyRequests,
}

/// 单个客户端的计数窗口
#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// 速率限制器
///
/// 固定窗口计数：每个客户端在 `window` 内最多 `max_requests` 次请求，
/// 窗口到期后计数清零。每经过一个窗口长度清理一次过期条目，
/// 表中只保留最近两个窗口内出现过的客户端。
#[derive(Debug)]
pub struct RateLimiter {
    /// 每个客户端的窗口
    windows: DashMap<String, Window>,
    /// 上次清理过期窗口的时刻
    last_sweep: Mutex<Instant>,
    /// 窗口内允许的最大请求数
    max_requests: u32,
    /// 窗口长度
    window: Duration,
}

impl RateLimiter {
    /// 创建新的速率限制器实例
    ///
    /// # 参数
    ///
    /// * `max_requests` - 每个窗口的请求数限制
    /// * `window` - 窗口长度
    ///
    /// # 返回值
    ///
    /// 返回新的速率限制器实例
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            last_sweep: Mutex::new(Instant::now()),
            max_requests,
            window,
        }
    }

    /// 检查客户端的请求速率是否超出限制
    ///
    /// # 参数
    ///
    /// * `client` - 客户端标识（通常是IP地址）
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 请求未超出限制
    /// * `Err(RateLimitError)` - 请求超出限制
    pub fn check(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        self.sweep_expired(now);

        let mut entry = self.windows.entry(client.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        entry.count = entry.count.saturating_add(1);
        if entry.count > self.max_requests {
            return Err(RateLimitError::TooManyRequests);
        }

        Ok(())
    }

    /// 当前跟踪的客户端数量
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }

    /// 清理已过期的窗口
    ///
    /// 距上次清理不足一个窗口长度时直接返回。必须在未持有任何条目引用时调用。
    fn sweep_expired(&self, now: Instant) {
        {
            let mut last_sweep = self.last_sweep.lock();
            if now.duration_since(*last_sweep) < self.window {
                return;
            }
            *last_sweep = now;
        }

        let before = self.windows.len();
        self.windows
            .retain(|_, window| now.duration_since(window.started_at) < self.window);
        let evicted = before.saturating_sub(self.windows.len());
        if evicted > 0 {
            debug!("Evicted {} expired rate limit windows", evicted);
        }
    }
}

/// 解析请求的客户端标识
///
/// 优先使用连接对端地址，其次是 `X-Forwarded-For` 的第一个地址
fn client_key(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 速率限制中间件
///
/// 按客户端IP限制请求速率，超限时返回429
pub async fn rate_limit_middleware(
    State(rate_limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);

    if let Err(e) = rate_limiter.check(&client) {
        warn!("Rate limit exceeded for client {}: {}", client, e);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "message": "Too many requests from this IP, please try again later."
            })),
        )
            .into_response();
    }

    next.run(request).await
}
