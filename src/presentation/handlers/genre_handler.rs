// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::song_request::GenresResponseDto;
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::services::song_service::SongService;
use axum::{extract::Extension, Json};
use std::sync::Arc;

/// 获取所有可选流派
pub async fn list_genres<R: SongRepository + 'static>(
    Extension(service): Extension<Arc<SongService<R>>>,
) -> Json<GenresResponseDto> {
    Json(GenresResponseDto {
        genres: service.genres(),
    })
}
