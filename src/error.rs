//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::DocResponse;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 请求参数错误
    #[error("{0}")]
    BadRequest(String),

    /// 请求体过大
    #[error("{0}")]
    PayloadTooLarge(String),

    /// 上游生成服务错误（包括网络层失败）
    #[error("{message}: {details}")]
    Upstream { message: String, details: String },
}

impl AppError {
    /// HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Config(_) | AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => {
                DocResponse::failure(msg, None)
            }
            AppError::Upstream { message, details } => DocResponse::failure(message, Some(details)),
            AppError::Config(msg) => DocResponse::failure(msg, None),
        };

        (status, Json(body)).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
