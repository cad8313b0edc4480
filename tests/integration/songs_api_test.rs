// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, draft, seed};
use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use serde_json::{json, Value};
use songrs::domain::models::song::Song;

fn titles(page: &Value) -> Vec<String> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|song| song["title"].as_str().unwrap().to_string())
        .collect()
}

/// 测试默认分页参数
///
/// 未提供任何查询参数时返回第1页、每页10条、按标题升序
#[tokio::test]
async fn test_list_songs_defaults() {
    let app = create_test_app();
    let drafts = (0..25)
        .map(|i| draft(&format!("Track {:02}", i), "Band", "Pop", 2000))
        .collect();
    seed(&app, drafts).await;

    let response = app.server.get("/api/songs").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: Value = response.json();
    assert_eq!(page["total"], 25);
    assert_eq!(page["page"], 1);
    assert_eq!(page["limit"], 10);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(titles(&page)[0], "Track 00");
    assert_eq!(titles(&page).len(), 10);
}

/// 测试流派过滤与按年份升序
#[tokio::test]
async fn test_list_songs_genre_filter_sorted_by_year() {
    let app = create_test_app();
    let drafts = (0..25)
        .map(|i| {
            let genre = if i < 10 { "Rock" } else { "Pop" };
            draft(&format!("Song {}", i), "Artist", genre, 1960 + (i * 7) % 25)
        })
        .collect();
    seed(&app, drafts).await;

    let response = app
        .server
        .get("/api/songs")
        .add_query_param("genre", "Rock")
        .add_query_param("page", 1)
        .add_query_param("limit", 10)
        .add_query_param("sortBy", "year")
        .add_query_param("sortOrder", "asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: Value = response.json();
    assert_eq!(page["total"], 10);
    assert_eq!(page["totalPages"], 1);

    let songs: Vec<Song> = serde_json::from_value(page["data"].clone()).unwrap();
    assert_eq!(songs.len(), 10);
    assert!(songs.iter().all(|s| s.genre == "Rock"));
    assert!(songs.windows(2).all(|w| w[0].year <= w[1].year));
}

/// 测试搜索结果的第二页
#[tokio::test]
async fn test_list_songs_search_second_page() {
    let app = create_test_app();
    let mut drafts: Vec<_> = (0..7)
        .map(|i| draft(&format!("Love Me {}", i), "Crooner", "Pop", 1990))
        .collect();
    drafts.extend((0..6).map(|i| draft(&format!("Other {}", i), "Band", "Rock", 1990)));
    seed(&app, drafts).await;

    let response = app
        .server
        .get("/api/songs")
        .add_query_param("search", "love")
        .add_query_param("page", 2)
        .add_query_param("limit", 5)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: Value = response.json();
    assert_eq!(page["total"], 7);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(titles(&page), vec!["Love Me 5", "Love Me 6"]);
}

/// 测试空曲库
#[tokio::test]
async fn test_list_songs_empty_catalog() {
    let app = create_test_app();

    let response = app
        .server
        .get("/api/songs")
        .add_query_param("search", "anything")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: Value = response.json();
    assert_eq!(page["total"], 0);
    assert_eq!(page["totalPages"], 0);
    assert_eq!(page["data"], json!([]));
}

/// 测试超出范围的页码返回空页而非错误
#[tokio::test]
async fn test_list_songs_page_out_of_range() {
    let app = create_test_app();
    seed(&app, vec![draft("Only", "One", "Jazz", 1959)]).await;

    let response = app
        .server
        .get("/api/songs")
        .add_query_param("page", 5)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: Value = response.json();
    assert_eq!(page["total"], 1);
    assert_eq!(page["page"], 5);
    assert_eq!(page["data"], json!([]));
}

/// 测试查询参数校验
///
/// 非法的页码、条数、排序字段与排序方向返回400
#[tokio::test]
async fn test_list_songs_validation() {
    let app = create_test_app();

    let cases = [
        ("page", "0"),
        ("page", "abc"),
        ("limit", "0"),
        ("limit", "101"),
        ("sortBy", "rating"),
        ("sortOrder", "up"),
    ];

    for (key, value) in cases {
        let response = app
            .server
            .get("/api/songs")
            .add_query_param(key, value)
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "{}={} should be rejected",
            key,
            value
        );

        let body: Value = response.json();
        assert_eq!(body["message"], "Validation failed");
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    // 边界值可以通过
    let response = app
        .server
        .get("/api/songs")
        .add_query_param("limit", 100)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// 测试查询参数错误归属到具体字段
#[tokio::test]
async fn test_list_songs_validation_reports_field() {
    let app = create_test_app();

    let cases = [
        ("page", "abc", "page", "Page must be a positive integer"),
        ("page", "-1", "page", "Page must be a positive integer"),
        ("limit", "1.5", "limit", "Limit must be between 1 and 100"),
        ("sortBy", "rating", "sortBy", "Invalid sort field"),
        ("sortOrder", "up", "sortOrder", "Sort order must be asc or desc"),
    ];

    for (key, value, field, message) in cases {
        let response = app
            .server
            .get("/api/songs")
            .add_query_param(key, value)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!([{ "field": field, "message": message }]),
            "{}={}",
            key,
            value
        );
    }

    // 多个非法参数各自报告
    let response = app
        .server
        .get("/api/songs")
        .add_query_param("page", "x")
        .add_query_param("limit", "0")
        .await;
    let body: Value = response.json();
    assert_eq!(
        body["errors"],
        json!([
            { "field": "limit", "message": "Limit must be between 1 and 100" },
            { "field": "page", "message": "Page must be a positive integer" }
        ])
    );
}

/// 测试创建歌曲并按ID读取
#[tokio::test]
async fn test_create_and_get_song() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/songs")
        .json(&json!({
            "title": "  Hotel California  ",
            "artist": "Eagles",
            "album": "Hotel California",
            "year": 1976,
            "duration": 391,
            "genre": "Rock"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["title"], "Hotel California");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let id = created["id"].as_str().unwrap();
    let response = app.server.get(&format!("/api/songs/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: Value = response.json();
    assert_eq!(fetched, created);
}

/// 测试新建歌曲可以通过标题搜索到
#[tokio::test]
async fn test_created_song_is_searchable() {
    let app = create_test_app();
    seed(
        &app,
        (0..15)
            .map(|i| draft(&format!("Filler {}", i), "Band", "Pop", 2001))
            .collect(),
    )
    .await;

    let response = app
        .server
        .post("/api/songs")
        .json(&json!({
            "title": "Smells Like Teen Spirit",
            "artist": "Nirvana",
            "album": "Nevermind",
            "year": 1991,
            "duration": 301,
            "genre": "Rock"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Value = response.json();

    let response = app
        .server
        .get("/api/songs")
        .add_query_param("search", "Smells Like Teen Spirit")
        .await;
    let page: Value = response.json();
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"][0]["id"], created["id"]);
}

/// 测试创建歌曲时的参数验证
#[tokio::test]
async fn test_create_song_validation() {
    let app = create_test_app();
    let next_year_plus_one = Utc::now().year() + 2;

    let invalid_bodies = [
        json!({}),
        json!({"title": "   ", "artist": "A", "album": "B", "year": 2000, "duration": 100, "genre": "Pop"}),
        json!({"title": "T", "artist": "A", "album": "B", "year": 999, "duration": 100, "genre": "Pop"}),
        json!({"title": "T", "artist": "A", "album": "B", "year": next_year_plus_one, "duration": 100, "genre": "Pop"}),
        json!({"title": "T", "artist": "A", "album": "B", "year": 2000, "duration": 0, "genre": "Pop"}),
        json!({"title": "T", "artist": "A", "album": "B", "year": 2000, "duration": 3601, "genre": "Pop"}),
        json!({"title": "T", "artist": "A", "album": "B", "year": "two thousand", "duration": 100, "genre": "Pop"}),
    ];

    for body in invalid_bodies {
        let response = app.server.post("/api/songs").json(&body).await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "body {} should be rejected",
            body
        );
        let error: Value = response.json();
        assert_eq!(error["message"], "Validation failed");
    }

    // 缺失字段逐一报告
    let response = app.server.post("/api/songs").json(&json!({})).await;
    let error: Value = response.json();
    let fields: Vec<&str> = error["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    for field in ["album", "artist", "duration", "genre", "title", "year"] {
        assert!(fields.contains(&field), "missing error for {}", field);
    }

    assert_eq!(app.service.count().await.unwrap(), 0);
}

/// 测试格式错误的请求体
#[tokio::test]
async fn test_create_song_malformed_json() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/songs")
        .content_type("application/json")
        .text("{not json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

/// 测试更新歌曲
#[tokio::test]
async fn test_update_song() {
    let app = create_test_app();
    let songs = seed(&app, vec![draft("Imagine", "John Lennon", "Pop", 1971)]).await;
    let original = &songs[0];

    let response = app
        .server
        .put(&format!("/api/songs/{}", original.id))
        .json(&json!({
            "title": "Imagine (Remastered)",
            "artist": "John Lennon",
            "album": "Imagine",
            "year": 2010,
            "duration": 184,
            "genre": "Pop"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated: Song = response.json();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
    assert_eq!(updated.title, "Imagine (Remastered)");
    assert_eq!(updated.year, 2010);

    let stored = app.service.get(&original.id).await.unwrap();
    assert_eq!(stored, updated);
}

/// 测试更新不存在或不合法的歌曲
#[tokio::test]
async fn test_update_song_errors() {
    let app = create_test_app();
    let valid = json!({
        "title": "T", "artist": "A", "album": "B", "year": 2000, "duration": 100, "genre": "Pop"
    });

    let response = app.server.put("/api/songs/does-not-exist").json(&valid).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Song not found");

    // 校验先于查找
    let response = app
        .server
        .put("/api/songs/does-not-exist")
        .json(&json!({"title": ""}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

/// 测试删除歌曲
#[tokio::test]
async fn test_delete_song() {
    let app = create_test_app();
    let songs = seed(
        &app,
        vec![
            draft("Keep", "A", "Jazz", 1960),
            draft("Remove", "B", "Jazz", 1961),
        ],
    )
    .await;

    let path = format!("/api/songs/{}", songs[1].id);
    let response = app.server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = app.server.get(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let page: Value = app.server.get("/api/songs").await.json();
    assert_eq!(page["total"], 1);
    assert_eq!(titles(&page), vec!["Keep"]);
}

/// 测试获取不存在的歌曲
#[tokio::test]
async fn test_get_missing_song() {
    let app = create_test_app();

    let response = app.server.get("/api/songs/unknown-id").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["message"], "Song not found");
}
