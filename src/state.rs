//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。状态只包含不可变的注入依赖，请求之间没有共享可变数据。

use std::sync::Arc;

use crate::llm::TextGenerator;
use crate::services::DocService;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 文档生成服务
    pub docs: DocService,
}

impl AppState {
    /// 使用给定的文本生成器创建状态
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            docs: DocService::new(generator),
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(generator: Arc<dyn TextGenerator>) -> Arc<AppState> {
    Arc::new(AppState::new(generator))
}
