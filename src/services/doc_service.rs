//! 文档生成中继服务
//!
//! 校验请求 → 构建 prompt → 调用一次生成服务 → 原样返回文本。
//! 不重试，失败时记录日志并转换为 `AppError::Upstream`。

use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::PromptService;
use crate::error::{AppError, AppResult};
use crate::llm::TextGenerator;
use crate::models::DocRequest;

/// 缺少代码时的错误信息
pub const MISSING_CODE_MESSAGE: &str = "Code is required";

/// 上游失败时的错误信息
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate documentation";

/// 文档生成服务
#[derive(Clone)]
pub struct DocService {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptService,
}

impl DocService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: PromptService::new(),
        }
    }

    /// 生成文档，成功时返回上游文本（不做任何修改）
    pub async fn generate_docs(&self, request: &DocRequest) -> AppResult<String> {
        let code = match request.code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => return Err(AppError::BadRequest(MISSING_CODE_MESSAGE.to_string())),
        };
        let language = request.language.as_deref();

        let request_id = generate_request_id();
        info!(
            "Generating documentation: request_id={}, language={}, code_len={}",
            request_id,
            language.unwrap_or("-"),
            code.len()
        );

        let prompt = self.prompts.build_doc_prompt(code, language);

        match self.generator.generate(&prompt).await {
            Ok(documentation) => {
                info!(
                    "Documentation generated: request_id={}, doc_len={}",
                    request_id,
                    documentation.len()
                );
                Ok(documentation)
            }
            Err(e) => {
                error!(
                    "Error generating documentation: request_id={}, error={}",
                    request_id, e
                );
                Err(AppError::Upstream {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                    details: e.to_string(),
                })
            }
        }
    }
}

/// 生成短请求 ID，仅用于日志关联
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
