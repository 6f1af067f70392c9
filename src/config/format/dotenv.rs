//! .env 格式解析器 (简单原则：透明的文本解析)

use crate::types::{EnvEntry, InvalidLine, ParsedLine};

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行（不产生警告）
    /// - 格式：KEY=VALUE，按第一个 `=` 切分
    /// - KEY 与 VALUE 去除首尾空白，KEY 不能为空，整行不能含 NUL
    /// - 其余行作为无效行返回，由调用方决定如何报告
    ///
    /// 引号不在这里处理，见 [`strip_quotes`]。
    #[must_use]
    pub fn parse(content: &str) -> Vec<ParsedLine> {
        content
            .lines()
            .enumerate()
            .filter_map(|(index, raw)| Self::parse_line(raw, index + 1))
            .collect()
    }

    /// 解析单行；空行与注释返回 `None`
    #[must_use]
    pub fn parse_line(raw: &str, line: usize) -> Option<ParsedLine> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let parsed = match trimmed.split_once('=') {
            // NUL 无法写入进程环境，按无效行处理
            Some((key, value)) if !key.trim().is_empty() && !trimmed.contains('\0') => {
                ParsedLine::Entry(EnvEntry::new(key.trim(), value.trim(), line))
            }
            _ => ParsedLine::Invalid(InvalidLine {
                line,
                content: trimmed.to_string(),
            }),
        };

        Some(parsed)
    }
}

/// 去除一层成对的首尾引号（同为单引号或同为双引号）
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
