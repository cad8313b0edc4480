// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{SongDraft, SortField, SortOrder};
use crate::domain::services::query_engine::SongQuery;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// 默认页码
pub const DEFAULT_PAGE: u32 = 1;
/// 默认每页条数
pub const DEFAULT_LIMIT: u32 = 10;
/// 每页条数上限
pub const MAX_LIMIT: u32 = 100;

/// 歌曲列表查询请求DTO（查询字符串）
///
/// 所有参数按原始文本接收，在 `into_query` 中解析，
/// 解析失败的值记在对应字段名下。
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongListQueryDto {
    /// 页码，从1开始
    pub page: Option<String>,

    /// 每页条数，1 到 100
    pub limit: Option<String>,

    /// 搜索词
    pub search: Option<String>,

    /// 流派过滤
    pub genre: Option<String>,

    /// 排序字段
    pub sort_by: Option<String>,

    /// 排序方向
    pub sort_order: Option<String>,
}

impl SongListQueryDto {
    /// 校验并转换为查询引擎参数，未提供的字段使用默认值
    ///
    /// # 返回值
    ///
    /// * `Ok(SongQuery)` - 解析后的查询参数
    /// * `Err(ValidationErrors)` - 至少一个参数不合法
    pub fn into_query(self) -> Result<SongQuery, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let page = parse_param(
            &mut errors,
            "page",
            self.page,
            DEFAULT_PAGE,
            |raw| raw.parse::<u32>().ok().filter(|page| *page >= 1),
            "Page must be a positive integer",
        );
        let limit = parse_param(
            &mut errors,
            "limit",
            self.limit,
            DEFAULT_LIMIT,
            |raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            },
            "Limit must be between 1 and 100",
        );
        let sort_by = parse_param(
            &mut errors,
            "sortBy",
            self.sort_by,
            SortField::default(),
            |raw| raw.parse().ok(),
            "Invalid sort field",
        );
        let sort_order = parse_param(
            &mut errors,
            "sortOrder",
            self.sort_order,
            SortOrder::default(),
            |raw| raw.parse().ok(),
            "Sort order must be asc or desc",
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SongQuery {
            page,
            limit,
            search: self.search,
            genre: self.genre,
            sort_by,
            sort_order,
        })
    }
}

/// 解析单个可选查询参数
///
/// 未提供时返回默认值；解析失败时在 `field` 下记录错误并返回默认值
fn parse_param<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<String>,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
    message: &'static str,
) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match parse(&raw) {
        Some(value) => value,
        None => {
            let mut error = ValidationError::new("invalid");
            error.message = Some(message.into());
            errors.add(field, error);
            default
        }
    }
}

/// 歌曲创建/更新请求DTO
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
pub struct SongPayloadDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Artist is required"),
        length(min = 1, message = "Artist is required")
    )]
    pub artist: Option<String>,

    #[validate(
        required(message = "Album is required"),
        length(min = 1, message = "Album is required")
    )]
    pub album: Option<String>,

    /// 发行年份，上限为明年，在 `into_draft` 中校验
    #[validate(
        required(message = "Year must be a valid year"),
        range(min = 1000, message = "Year must be a valid year")
    )]
    pub year: Option<i64>,

    /// 时长（秒）
    #[validate(
        required(message = "Duration must be between 1 and 3600 seconds"),
        range(min = 1, max = 3600, message = "Duration must be between 1 and 3600 seconds")
    )]
    pub duration: Option<i64>,

    #[validate(
        required(message = "Genre is required"),
        length(min = 1, message = "Genre is required")
    )]
    pub genre: Option<String>,
}

impl SongPayloadDto {
    /// 去除字符串首尾空白并校验，成功后转换为领域草稿
    ///
    /// # 返回值
    ///
    /// * `Ok(SongDraft)` - 校验通过的歌曲字段
    /// * `Err(ValidationErrors)` - 字段校验失败
    pub fn into_draft(self) -> Result<SongDraft, ValidationErrors> {
        let payload = Self {
            title: self.title.map(|s| s.trim().to_string()),
            artist: self.artist.map(|s| s.trim().to_string()),
            album: self.album.map(|s| s.trim().to_string()),
            genre: self.genre.map(|s| s.trim().to_string()),
            ..self
        };

        let mut errors = match payload.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let max_year = i64::from(Utc::now().year()) + 1;
        if payload.year.is_some_and(|year| year > max_year) {
            let mut error = ValidationError::new("range");
            error.message = Some("Year must be a valid year".into());
            errors.add("year", error);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(title), Some(artist), Some(album), Some(year), Some(duration), Some(genre)) = (
            payload.title,
            payload.artist,
            payload.album,
            payload.year,
            payload.duration,
            payload.genre,
        ) else {
            return Err(errors);
        };

        Ok(SongDraft {
            title,
            artist,
            album,
            year: year as i32,
            duration: duration as u32,
            genre,
        })
    }
}

/// 流派列表响应DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct GenresResponseDto {
    pub genres: Vec<String>,
}
