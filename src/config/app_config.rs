//! 应用配置管理
//!
//! 配置来源（后者覆盖前者）：
//! 1. 内置默认值
//! 2. `DOCUGEN_CONFIG` 指向的 JSON 文件（可选）
//! 3. 环境变量（`main` 启动时会先加载 `.env`）
//!
//! 配置在启动时构造一次，随后注入到各个组件，不使用全局单例。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::llm::GenerationOptions;

/// 环境变量名
pub const ENV_CONFIG_FILE: &str = "DOCUGEN_CONFIG";
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_API_VERSION: &str = "GEMINI_API_VERSION";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_TEMPERATURE: &str = "GEMINI_TEMPERATURE";
pub const ENV_MAX_OUTPUT_TOKENS: &str = "GEMINI_MAX_OUTPUT_TOKENS";
pub const ENV_REQUEST_TIMEOUT: &str = "DOCUGEN_REQUEST_TIMEOUT_SECS";

/// 应用配置结构体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 生成服务 API 密钥（为空时在请求阶段报错）
    #[serde(default)]
    pub api_key: String,

    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API 版本段
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数（未设置时使用服务端默认值）
    #[serde(default)]
    pub temperature: Option<f64>,

    /// 最大输出 token 数
    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// 单次上游请求的总超时（秒），未设置则不限制
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_version() -> String {
    "v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// 从进程环境加载配置
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// 使用自定义查找函数加载配置
    pub fn load_with<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(v) = lookup(ENV_API_KEY) {
            config.api_key = v.trim().to_string();
        }
        if let Some(v) = lookup(ENV_BASE_URL) {
            config.base_url = v;
        }
        if let Some(v) = lookup(ENV_API_VERSION) {
            config.api_version = v;
        }
        if let Some(v) = lookup(ENV_MODEL) {
            config.model = v;
        }
        if let Some(v) = lookup(ENV_TEMPERATURE) {
            config.temperature = Some(parse_var(ENV_TEMPERATURE, &v)?);
        }
        if let Some(v) = lookup(ENV_MAX_OUTPUT_TOKENS) {
            config.max_output_tokens = Some(parse_var(ENV_MAX_OUTPUT_TOKENS, &v)?);
        }
        if let Some(v) = lookup(ENV_REQUEST_TIMEOUT) {
            config.request_timeout_secs = Some(parse_var(ENV_REQUEST_TIMEOUT, &v)?);
        }

        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// 是否已设置 API 密钥
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// 生成参数
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid value for {}: {} ({})", name, value, e)))
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
