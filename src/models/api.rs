//! REST API 请求/响应模型

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 文档生成请求
///
/// 字段在反序列化层都是可选的，缺失与空值统一由服务层校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl DocRequest {
    pub fn new(code: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            code: Some(code.into()),
            language: language.map(str::to_string),
        }
    }
}

/// 文档生成响应
///
/// `documentation` 仅在 `success` 为 true 时出现
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DocResponse {
    pub fn success(documentation: String) -> Self {
        Self {
            documentation: Some(documentation),
            success: true,
            error: None,
            details: None,
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            documentation: None,
            success: false,
            error: Some(error.into()),
            details,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
