// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::repositories::song_repository::RepositoryError;

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 字段名
    pub field: String,
    /// 错误描述
    pub message: String,
}

/// 请求校验失败
///
/// 与"空结果"不同，表示调用方提交了不合法的参数
#[derive(Error, Debug)]
#[error("Validation failed")]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// 创建只包含一条错误的校验失败
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(|err| FieldError {
                        field: field.clone(),
                        message: err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string()),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        Self {
            errors: field_errors,
        }
    }
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(failure) = self.0.downcast_ref::<ValidationFailure>() {
            let body = Json(json!({
                "message": failure.to_string(),
                "errors": failure.errors,
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let (status, message) = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => (StatusCode::NOT_FOUND, self.0.to_string()),
            Some(RepositoryError::AlreadyExists(_)) => (StatusCode::CONFLICT, self.0.to_string()),
            None => {
                error!("Unhandled error: {:#}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
