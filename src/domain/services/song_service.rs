// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{Song, SongDraft, GENRES};
use crate::domain::repositories::song_repository::{RepositoryError, SongRepository};
use crate::domain::services::query_engine::{SongPage, SongQuery};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info};

/// 歌曲服务
///
/// 协调歌曲仓库与查询引擎，处理曲库的增删改查
pub struct SongService<R: SongRepository> {
    repository: Arc<R>,
}

impl<R: SongRepository> SongService<R> {
    /// 创建新的歌曲服务实例
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 分页查询歌曲
    pub async fn list(&self, query: &SongQuery) -> Result<SongPage, RepositoryError> {
        let page = self.repository.query(query).await?;
        counter!("songs_listed_total").increment(1);
        debug!(
            "Listed songs page={} limit={} sort={}:{} total={}",
            query.page, query.limit, query.sort_by, query.sort_order, page.total
        );
        Ok(page)
    }

    /// 获取单首歌曲
    pub async fn get(&self, id: &str) -> Result<Song, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// 创建歌曲
    pub async fn create(&self, draft: SongDraft) -> Result<Song, RepositoryError> {
        let song = self.repository.create(draft).await?;
        counter!("songs_created_total").increment(1);
        info!("Created song {} ({} - {})", song.id, song.artist, song.title);
        Ok(song)
    }

    /// 更新歌曲
    pub async fn update(&self, id: &str, draft: SongDraft) -> Result<Song, RepositoryError> {
        let song = self.repository.update(id, draft).await?;
        counter!("songs_updated_total").increment(1);
        info!("Updated song {}", song.id);
        Ok(song)
    }

    /// 删除歌曲
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.repository.delete(id).await?;
        counter!("songs_deleted_total").increment(1);
        info!("Deleted song {}", id);
        Ok(())
    }

    /// 曲库中的歌曲数量
    pub async fn count(&self) -> Result<usize, RepositoryError> {
        self.repository.count().await
    }

    /// 可选流派列表
    pub fn genres(&self) -> Vec<String> {
        GENRES.iter().map(|genre| genre.to_string()).collect()
    }
}
