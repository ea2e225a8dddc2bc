//! 配置模块

mod app_config;

pub use app_config::{mask_api_key, AppConfig};
