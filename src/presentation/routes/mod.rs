// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::services::song_service::SongService;
use crate::presentation::handlers::{genre_handler, song_handler};
use crate::presentation::middleware::rate_limit_middleware::{
    rate_limit_middleware, RateLimiter,
};
use axum::{
    extract::{DefaultBodyLimit, Extension, OriginalUri},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// 请求体大小上限
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// 附加到每个响应的安全头，已存在的同名头不覆盖
const SECURITY_HEADERS: [(&str, &str); 12] = [
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    (
        "strict-transport-security",
        "max-age=15552000; includeSubDomains",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// 服务启动时刻，用于计算运行时长
#[derive(Debug, Clone, Copy)]
pub struct ServerStart(pub Instant);

/// 创建 `/api` 下的业务路由
///
/// # 返回值
///
/// 返回未挂载任何中间件的路由
pub fn api_routes<R: SongRepository + 'static>() -> Router {
    Router::new()
        .route(
            "/songs",
            get(song_handler::list_songs::<R>).post(song_handler::create_song::<R>),
        )
        .route(
            "/songs/{id}",
            get(song_handler::get_song::<R>)
                .put(song_handler::update_song::<R>)
                .delete(song_handler::delete_song::<R>),
        )
        .route("/genres", get(genre_handler::list_genres::<R>))
}

/// 创建完整的应用路由
///
/// 挂载业务路由、健康检查、速率限制、跨域、安全响应头、请求体限制与请求追踪
///
/// # 参数
///
/// * `settings` - 应用配置
/// * `service` - 歌曲服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app<R: SongRepository + 'static>(
    settings: Arc<Settings>,
    service: Arc<SongService<R>>,
) -> Router {
    let mut api = api_routes::<R>();
    if settings.rate_limiting.enabled {
        let rate_limiter = Arc::new(RateLimiter::new(
            settings.rate_limiting.max_requests,
            Duration::from_secs(settings.rate_limiting.window_secs),
        ));
        api = api.layer(axum::middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));
    }

    let cors = cors_layer(&settings.cors.allowed_origins);

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(not_found)
        .layer(Extension(service))
        .layer(Extension(settings))
        .layer(Extension(ServerStart(Instant::now())))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors);

    with_security_headers(router).layer(TraceLayer::new_for_http())
}

fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .iter()
        .fold(router, |router, &(name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

/// API 概览端点
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Song Manager API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "songs": "/api/songs",
            "genres": "/api/genres",
            "health": "/health",
        },
    }))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回服务状态、当前时间、运行时长（秒）与运行环境
pub async fn health_check(
    Extension(settings): Extension<Arc<Settings>>,
    Extension(started): Extension<ServerStart>,
) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": started.0.elapsed().as_secs_f64(),
        "environment": settings.environment,
    }))
}

/// 未匹配路由
async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("Not found - {}", uri) })),
    )
}
