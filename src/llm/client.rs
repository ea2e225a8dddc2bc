//! Gemini generateContent 客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

use super::format::build_generate_endpoint;
use super::types::{
    ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationOptions, LlmError,
};
use crate::config::AppConfig;

/// 文本生成能力
///
/// 请求处理器只依赖该 trait，测试时可替换为桩实现
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 根据 prompt 生成文本
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini 客户端
///
/// 内部的 reqwest::Client 自带连接池，可在并发请求间共享
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    api_version: String,
    model: String,
    options: GenerationOptions,
}

impl GeminiClient {
    /// 根据配置创建客户端
    ///
    /// 不校验 API 密钥，缺失时在 `generate` 阶段返回错误
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5);

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            options: config.generation_options(),
        })
    }

    /// 默认模型
    pub fn model(&self) -> &str {
        &self.model
    }

    /// 使用指定模型生成文本
    pub async fn generate_with_model(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::ConfigError(
                "API key not configured. Set GEMINI_API_KEY.".to_string(),
            ));
        }

        let endpoint = build_generate_endpoint(&self.base_url, &self.api_version, model);
        let payload = GenerateContentRequest::user_prompt(prompt, &self.options);

        info!("LLM request: model={}, prompt_len={}", model, prompt.len());
        debug!("Gemini API request: endpoint={}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        // 检查状态码
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let status_code = status.as_u16();
            error!(
                "Gemini API error: status={}, body={}",
                status_code,
                truncate(&body, 500)
            );
            let message = match serde_json::from_str::<ApiErrorEnvelope>(&body) {
                Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
                _ => body,
            };
            return Err(LlmError::ApiError {
                status: status_code,
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.into_text()?;
        debug!("Gemini API response: model={}, text_len={}", model, text.len());
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate_with_model(&self.model, prompt).await
    }
}

/// 按字符截断，用于日志
fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
