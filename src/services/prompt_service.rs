//! Prompt 构建服务
//!
//! 把用户代码嵌入固定的文档生成模板。代码原样放入围栏代码块，
//! 不对其中的 ``` 做转义。

/// 未指定语言时，开头描述使用的名称
const DEFAULT_SUBJECT: &str = "code";

/// 未指定语言时，代码围栏使用的标签
const DEFAULT_FENCE_LANGUAGE: &str = "javascript";

/// Prompt 服务
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建 API 文档生成 prompt
    ///
    /// `language` 为空串或缺失时，描述使用 "code"，围栏标签使用 "javascript"；
    /// 其余标签（包括仅含空白的）原样使用。
    pub fn build_doc_prompt(&self, code: &str, language: Option<&str>) -> String {
        let language = language.filter(|l| !l.is_empty());
        let subject = language.unwrap_or(DEFAULT_SUBJECT);
        let fence = language.unwrap_or(DEFAULT_FENCE_LANGUAGE);

        format!(
            r#"You are an expert technical writer. Generate comprehensive API documentation for the following {subject}:

```{fence}
{code}
```

Generate documentation in Markdown format with the following sections:

# API Documentation

## Overview
[Brief description of what this code does]

## Functions/Methods

### [Function Name]
**Description:** [What it does]

**Parameters:**
- `paramName` (type): description
- `paramName2` (type): description

**Returns:**
- (type): description

**Example:**
```{fence}
[Usage example]
```

**Throws:**
- `ErrorType`: when [condition]

[Repeat for each function/method]

## Usage Examples

```{fence}
[Complete working examples]
```

## Notes
[Any important implementation details, edge cases, or best practices]

Keep it professional, clear, and developer-friendly. Include real, working code examples."#
        )
    }
}
