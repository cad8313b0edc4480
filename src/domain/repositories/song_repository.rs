// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{Song, SongDraft};
use crate::domain::services::query_engine::{SongPage, SongQuery};
use async_trait::async_trait;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 记录未找到
    #[error("Song not found")]
    NotFound,
    /// 标识符已存在
    #[error("Song already exists: {0}")]
    AlreadyExists(String),
}

/// 歌曲仓库特质
///
/// 定义曲库的数据访问接口。实现需保证同一集合内 `id` 唯一，
/// 并按插入顺序（最新的在前）保存记录。
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// 在当前曲库快照上执行分页查询
    async fn query(&self, query: &SongQuery) -> Result<SongPage, RepositoryError>;

    /// 根据ID查找歌曲
    async fn find_by_id(&self, id: &str) -> Result<Song, RepositoryError>;

    /// 创建歌曲，新记录位于集合最前
    async fn create(&self, draft: SongDraft) -> Result<Song, RepositoryError>;

    /// 就地更新歌曲
    async fn update(&self, id: &str, draft: SongDraft) -> Result<Song, RepositoryError>;

    /// 删除歌曲
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// 曲库中的歌曲总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
