// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::song_request::{SongListQueryDto, SongPayloadDto};
use crate::domain::models::song::{Song, SongDraft};
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::services::query_engine::SongPage;
use crate::domain::services::song_service::SongService;
use crate::presentation::errors::{AppError, ValidationFailure};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

/// 解析并校验歌曲请求体
fn parse_payload(
    payload: Result<Json<SongPayloadDto>, JsonRejection>,
) -> Result<SongDraft, AppError> {
    let Json(payload) = payload
        .map_err(|rejection| ValidationFailure::single("body", rejection.body_text()))?;

    payload
        .into_draft()
        .map_err(|errors| AppError::from(ValidationFailure::from(errors)))
}

/// 分页查询歌曲
///
/// 支持搜索、流派过滤、排序与分页
pub async fn list_songs<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
    query: Result<Query<SongListQueryDto>, QueryRejection>,
) -> Result<Json<SongPage>, AppError> {
    let Query(query) =
        query.map_err(|rejection| ValidationFailure::single("query", rejection.body_text()))?;

    // 验证请求参数
    let query = query.into_query().map_err(ValidationFailure::from)?;

    let page = service.list(&query).await?;
    Ok(Json(page))
}

/// 获取单首歌曲
pub async fn get_song<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Song>, AppError> {
    let song = service.get(&id).await?;
    Ok(Json(song))
}

/// 创建歌曲
pub async fn create_song<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
    payload: Result<Json<SongPayloadDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Song>), AppError> {
    let draft = parse_payload(payload)?;
    let song = service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// 更新歌曲
pub async fn update_song<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<SongPayloadDto>, JsonRejection>,
) -> Result<Json<Song>, AppError> {
    let draft = parse_payload(payload)?;
    let song = service.update(&id, draft).await?;
    Ok(Json(song))
}

/// 删除歌曲
pub async fn delete_song<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&id).await?;
    debug!("Song {} removed from catalog", id);
    Ok(StatusCode::NO_CONTENT)
}
