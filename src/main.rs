//! DocuGen - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，提供页面和文档生成接口。

use anyhow::Context;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docugen::config::{mask_api_key, AppConfig};
use docugen::llm::GeminiClient;
use docugen::{create_api_routes, create_shared_state};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "docugen", version, about = "AI API documentation generator")]
struct Cli {
    /// 监听地址
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先加载 .env，再解析参数和配置
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docugen=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DocuGen backend...");

    let config = AppConfig::load().context("failed to load configuration")?;
    if config.has_api_key() {
        info!(
            "Generation API: model={}, api_key={}",
            config.model,
            mask_api_key(&config.api_key)
        );
    } else {
        warn!("GEMINI_API_KEY is not set; documentation requests will fail until it is configured");
    }

    // 生成客户端显式构造后注入状态
    let generator = GeminiClient::new(&config).context("failed to build HTTP client")?;
    let state = create_shared_state(Arc::new(generator));

    // 配置 CORS（允许所有来源）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", cli.host, cli.port))?;

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server is running on http://{}", addr);
    info!("API documentation generator ready");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
