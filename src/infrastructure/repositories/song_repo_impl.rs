// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{Song, SongDraft};
use crate::domain::repositories::song_repository::{RepositoryError, SongRepository};
use crate::domain::services::query_engine::{self, SongPage, SongQuery};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;

/// 内存歌曲仓库实现
///
/// 所有读写都通过同一把读写锁：查询在读锁下执行查询引擎，
/// 创建、更新、删除持有写锁。
#[derive(Debug, Default)]
pub struct InMemorySongRepository {
    /// 按插入顺序保存的歌曲，最新的在前
    songs: RwLock<Vec<Song>>,
}

impl InMemorySongRepository {
    /// 创建空的内存仓库
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有歌曲创建仓库
    ///
    /// # 参数
    ///
    /// * `songs` - 初始歌曲，保持给定顺序
    ///
    /// # 返回值
    ///
    /// * `Ok(InMemorySongRepository)` - 创建成功
    /// * `Err(RepositoryError::AlreadyExists)` - 存在重复ID
    pub fn with_songs(songs: Vec<Song>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if !seen.insert(song.id.as_str()) {
                return Err(RepositoryError::AlreadyExists(song.id.clone()));
            }
        }

        Ok(Self {
            songs: RwLock::new(songs),
        })
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn query(&self, query: &SongQuery) -> Result<SongPage, RepositoryError> {
        let songs = self.songs.read();
        Ok(query_engine::execute(&songs, query))
    }

    async fn find_by_id(&self, id: &str) -> Result<Song, RepositoryError> {
        self.songs
            .read()
            .iter()
            .find(|song| song.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, draft: SongDraft) -> Result<Song, RepositoryError> {
        let song = Song::new(draft);
        let mut songs = self.songs.write();

        if songs.iter().any(|existing| existing.id == song.id) {
            return Err(RepositoryError::AlreadyExists(song.id));
        }

        songs.insert(0, song.clone());
        Ok(song)
    }

    async fn update(&self, id: &str, draft: SongDraft) -> Result<Song, RepositoryError> {
        let mut songs = self.songs.write();
        let song = songs
            .iter_mut()
            .find(|song| song.id == id)
            .ok_or(RepositoryError::NotFound)?;

        song.apply(draft);
        Ok(song.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut songs = self.songs.write();
        let index = songs
            .iter()
            .position(|song| song.id == id)
            .ok_or(RepositoryError::NotFound)?;

        songs.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.songs.read().len())
    }
}
