//! DocuGen - API 文档生成服务
//!
//! 接收代码片段，按固定模板构建 prompt，转发给 Gemini 生成 Markdown 文档并原样返回。

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod services;
pub mod state;

pub use api::create_api_routes;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::{create_shared_state, AppState};
