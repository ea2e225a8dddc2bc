//! URL 构建工具

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().trim_end_matches('/').to_string();

    // 修复双斜杠（跳过协议部分）
    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let mut fixed_rest = rest.to_string();
        while fixed_rest.contains("//") {
            fixed_rest = fixed_rest.replace("//", "/");
        }
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 规范化模型名称（去掉 `models/` 前缀）
pub fn normalize_model(model: &str) -> &str {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model)
}

/// 构建 generateContent 端点
///
/// `base_url` 已包含版本段（如 `.../v1beta`）时不再重复追加
pub fn build_generate_endpoint(base_url: &str, api_version: &str, model: &str) -> String {
    let url = fix_base_url(base_url);
    let version = api_version.trim_matches('/');
    let model = normalize_model(model);

    let prefix = if version.is_empty() || url.ends_with(&format!("/{}", version)) {
        url
    } else {
        format!("{}/{}", url, version)
    };

    format!("{}/models/{}:generateContent", prefix, model)
}
