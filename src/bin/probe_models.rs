//! 生成服务连通性检查
//!
//! 打印脱敏后的 API 密钥，依次尝试候选模型，报告哪些模型可用。

use anyhow::{bail, Context};
use clap::Parser;

use docugen::config::{mask_api_key, AppConfig};
use docugen::llm::GeminiClient;

/// 测试 prompt
const PROBE_PROMPT: &str = "Say hello in one word";

/// 默认候选模型（配置中的模型总是最先尝试）
const CANDIDATE_MODELS: &[&str] = &[
    "gemini-2.0-flash-exp",
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash",
    "gemini-1.5-pro-latest",
    "gemini-1.5-pro",
    "gemini-pro",
    "gemini-1.0-pro",
];

#[derive(Debug, Parser)]
#[command(name = "docugen-probe", about = "Check the Gemini API key and probe model names")]
struct Cli {
    /// 要尝试的模型（可重复，覆盖默认候选列表）
    #[arg(short, long = "model")]
    models: Vec<String>,

    /// 尝试所有模型，而不是在第一个成功后停止
    #[arg(long)]
    all: bool,
}

/// 候选模型列表：配置模型在前，去重
fn candidate_models(configured: &str, requested: &[String]) -> Vec<String> {
    let mut models = vec![configured.to_string()];
    if requested.is_empty() {
        models.extend(CANDIDATE_MODELS.iter().map(|m| m.to_string()));
    } else {
        models.extend(requested.iter().cloned());
    }

    let mut seen = std::collections::HashSet::new();
    models.retain(|m| !m.trim().is_empty() && seen.insert(m.clone()));
    models
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    if !config.has_api_key() {
        bail!("GEMINI_API_KEY is not set");
    }

    println!("API key: {}", mask_api_key(&config.api_key));
    println!("Endpoint: {} ({})\n", config.base_url, config.api_version);

    let client = GeminiClient::new(&config)?;
    let mut working = Vec::new();

    for model in candidate_models(&config.model, &cli.models) {
        println!("Testing: {}...", model);
        match client.generate_with_model(&model, PROBE_PROMPT).await {
            Ok(text) => {
                println!("  OK   {} -> {}\n", model, text.trim());
                working.push(model);
                if !cli.all {
                    break;
                }
            }
            Err(e) => {
                let message = e.to_string();
                let short: String = message.chars().take(100).collect();
                println!("  FAIL {}\n", short);
            }
        }
    }

    if working.is_empty() {
        bail!("no model answered");
    }
    println!("Working models: {}", working.join(", "));
    Ok(())
}
