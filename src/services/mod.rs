//! 服务层模块

mod doc_service;
mod prompt_service;

pub use doc_service::{DocService, GENERATION_FAILED_MESSAGE, MISSING_CODE_MESSAGE};
pub use prompt_service::PromptService;
