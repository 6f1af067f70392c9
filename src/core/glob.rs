//! 选择模式匹配
//!
//! 支持 `*`、`?` 与方括号字符类（`[abc]`、`[a-z]`、`[!x]`/`[^x]`），
//! 整个键必须匹配。Windows 上不区分大小写，其他平台区分。

use crate::error::{RepokitError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// 编译后的一组选择模式，任一匹配即视为匹配
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    /// 编译模式列表；空列表表示不过滤
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        Self::with_case(patterns, cfg!(windows))
    }

    /// 显式指定是否忽略大小写
    pub fn with_case<S: AsRef<str>>(patterns: &[S], case_insensitive: bool) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|source| invalid(pattern, source))?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|source| invalid(&patterns_text(patterns), source))?;

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            set,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 原始模式文本
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// 未设置模式时总是匹配
    pub fn matches(&self, key: &str) -> bool {
        self.is_empty() || self.set.is_match(key)
    }
}

fn invalid(pattern: &str, source: globset::Error) -> RepokitError {
    RepokitError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}

fn patterns_text<S: AsRef<str>>(patterns: &[S]) -> String {
    patterns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
