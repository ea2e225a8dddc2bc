//! 测试用桩生成器

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{LlmError, TextGenerator};

enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
}

/// 固定返回结果的生成器，记录调用次数和最后一次 prompt
pub struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// 总是返回 `text`
    pub fn echo(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    /// 总是返回上游 API 错误
    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(Reply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::ApiError { status, message } => Err(LlmError::ApiError {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
