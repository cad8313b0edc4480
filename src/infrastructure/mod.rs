// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 指标导出
/// - 仓库实现（repositories）：领域仓库接口的内存实现
/// - 种子数据（seed）：启动时载入的演示曲库
pub mod metrics;
pub mod repositories;
pub mod seed;
