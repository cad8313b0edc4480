// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 系统识别的流派列表
pub const GENRES: [&str; 8] = [
    "Rock",
    "Pop",
    "Jazz",
    "Classical",
    "Hip-Hop",
    "Electronic",
    "Country",
    "R&B",
];

/// 歌曲实体
///
/// 曲库中的一条记录。`id` 与 `created_at` 在创建时分配且不可变，
/// 每次更新都会刷新 `updated_at`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// 歌曲唯一标识符
    pub id: String,
    /// 标题
    pub title: String,
    /// 艺术家
    pub artist: String,
    /// 专辑
    pub album: String,
    /// 发行年份
    pub year: i32,
    /// 时长（秒）
    pub duration: u32,
    /// 流派
    pub genre: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub updated_at: DateTime<Utc>,
}

/// 歌曲可编辑字段
///
/// 已经过边界层校验和去空白处理的创建/更新数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    pub duration: u32,
    pub genre: String,
}

impl Song {
    /// 创建一首新歌曲
    ///
    /// # 参数
    ///
    /// * `draft` - 歌曲可编辑字段
    ///
    /// # 返回值
    ///
    /// 返回分配了新ID和时间戳的歌曲实例
    pub fn new(draft: SongDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            artist: draft.artist,
            album: draft.album,
            year: draft.year,
            duration: draft.duration,
            genre: draft.genre,
            created_at: now,
            updated_at: now,
        }
    }

    /// 用新的字段值覆盖歌曲
    ///
    /// 保留 `id` 与 `created_at`，刷新 `updated_at`
    pub fn apply(&mut self, draft: SongDraft) {
        self.title = draft.title;
        self.artist = draft.artist;
        self.album = draft.album;
        self.year = draft.year;
        self.duration = draft.duration;
        self.genre = draft.genre;
        self.updated_at = Utc::now();
    }
}

/// 排序字段枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Title,
    Artist,
    Album,
    Year,
    Genre,
    Duration,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Artist => write!(f, "artist"),
            SortField::Album => write!(f, "album"),
            SortField::Year => write!(f, "year"),
            SortField::Genre => write!(f, "genre"),
            SortField::Duration => write!(f, "duration"),
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "artist" => Ok(SortField::Artist),
            "album" => Ok(SortField::Album),
            "year" => Ok(SortField::Year),
            "genre" => Ok(SortField::Genre),
            "duration" => Ok(SortField::Duration),
            _ => Err(()),
        }
    }
}

/// 排序方向枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// 升序
    #[default]
    Asc,
    /// 降序
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}
