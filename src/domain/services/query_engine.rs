// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{Song, SortField, SortOrder};
use deunicode::deunicode;
use serde::Serialize;
use std::cmp::Ordering;

/// 歌曲列表查询参数
///
/// 调用方需保证 `page >= 1` 且 `1 <= limit <= 100`，
/// 越界值由HTTP边界层拒绝。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongQuery {
    /// 页码（从1开始）
    pub page: u32,
    /// 每页条数
    pub limit: u32,
    /// 标题/艺术家/专辑的模糊搜索词
    pub search: Option<String>,
    /// 流派精确过滤
    pub genre: Option<String>,
    /// 排序字段
    pub sort_by: SortField,
    /// 排序方向
    pub sort_order: SortOrder,
}

impl Default for SongQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            genre: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// 分页查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPage {
    /// 当前页的歌曲
    pub data: Vec<Song>,
    /// 过滤后、分页前的总条数
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    /// ceil(total / limit)，total 为 0 时为 0
    pub total_pages: u32,
}

/// 执行查询
///
/// 依次进行搜索过滤、流派过滤、稳定排序和分页。只读取 `songs`，
/// 不改变其顺序，仅克隆结果页中的记录。
///
/// # 参数
///
/// * `songs` - 完整曲库（按插入顺序）
/// * `query` - 查询参数
///
/// # 返回值
///
/// 返回请求页的数据以及分页元信息
pub fn execute(songs: &[Song], query: &SongQuery) -> SongPage {
    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let genre = query.genre.as_deref().filter(|g| !g.is_empty());

    let mut matched: Vec<&Song> = songs
        .iter()
        .filter(|song| match needle.as_deref() {
            Some(needle) => matches_search(song, needle),
            None => true,
        })
        .filter(|song| match genre {
            Some(genre) => song.genre == genre,
            None => true,
        })
        .collect();

    // sort_by is stable, so equal keys keep their filtered order in both directions
    matched.sort_by(|a, b| {
        let ordering = compare_by(a, b, query.sort_by);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = matched.len();
    let limit = query.limit as usize;
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

    let start = (query.page.max(1) as usize - 1).saturating_mul(limit);
    let data = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(limit).min(total);
        matched[start..end].iter().map(|song| (*song).clone()).collect()
    };

    SongPage {
        data,
        total: total as u64,
        page: query.page,
        limit: query.limit,
        total_pages: total_pages as u32,
    }
}

fn matches_search(song: &Song, needle: &str) -> bool {
    song.title.to_lowercase().contains(needle)
        || song.artist.to_lowercase().contains(needle)
        || song.album.to_lowercase().contains(needle)
}

fn compare_by(a: &Song, b: &Song, field: SortField) -> Ordering {
    match field {
        SortField::Title => locale_cmp(&a.title, &b.title),
        SortField::Artist => locale_cmp(&a.artist, &b.artist),
        SortField::Album => locale_cmp(&a.album, &b.album),
        SortField::Genre => locale_cmp(&a.genre, &b.genre),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Duration => a.duration.cmp(&b.duration),
    }
}

/// 按自然语言习惯比较两个字符串
///
/// 三级比较：
/// 1. 去除重音并转小写后的文本
/// 2. 仅转小写的文本（区分重音）
/// 3. 大小写，小写字母排在大写字母之前
///
/// 这是对 CLDR 排序规则的近似：标点按 ASCII 顺序比较（`,` 在 `-` 之前），
/// 非拉丁文字先音译为拉丁字母再参与比较（`Москва` 按 `moskva` 排序）。
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());

    deunicode(&a_lower)
        .cmp(&deunicode(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        // Only case differs here; lowercase code points sort after uppercase ones, hence reversed.
        .then_with(|| b.cmp(a))
}
