//! LLM 模块
//!
//! 提供外部文本生成服务（Gemini）的客户端，以及供请求处理器注入的 `TextGenerator` 抽象。

mod client;
mod format;
#[cfg(test)]
pub(crate) mod stub;
mod types;

pub use client::{GeminiClient, TextGenerator};
pub use types::{GenerationOptions, LlmError};
