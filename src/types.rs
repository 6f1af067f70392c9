//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::Serialize;
use std::fmt;

/// .env 文件中的一条有效记录
///
/// `key` 与 `value` 已去除首尾空白；引号在写入环境前才剥离。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
    /// 行号，从 1 开始，仅用于诊断
    pub line: usize,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// 无法解析为 KEY=VALUE 的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub line: usize,
    pub content: String,
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid line {}: {}", self.line, self.content)
    }
}

/// 解析后的单行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(EnvEntry),
    Invalid(InvalidLine),
}

/// 可执行命令的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub name: String,
    pub about: String,
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Env,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Env,
        }
    }
}
