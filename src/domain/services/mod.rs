// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 查询引擎（query_engine）：过滤、排序与分页的纯函数
/// - 歌曲服务（song_service）：协调仓库完成曲库的增删改查
pub mod query_engine;
pub mod song_service;
