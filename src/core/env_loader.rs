//! 环境文件加载器
//!
//! 只负责解析与筛选，返回一个显式的 [`EnvStore`]；
//! 写入真实进程环境由调用方在最后一步完成（见 [`EnvStore::apply`]）。

use crate::config::format::{DotenvParser, strip_quotes};
use crate::core::glob::PatternSet;
use crate::error::{RepokitError, Result};
use crate::types::{InvalidLine, ParsedLine};
use crate::utils::paths;
use std::path::Path;

/// 有序的键值存储，同名键后写覆盖先写
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: Vec<(String, String)>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// 写入当前进程环境（对本进程及其子进程可见）
    ///
    /// 必须在单线程阶段调用：`set_var` 与其他线程读环境并发时不安全。
    pub fn apply(&self) {
        for (key, value) in &self.vars {
            tracing::debug!(key = %key, "setting process environment variable");
            // SAFETY: repokit 全程单线程，调用时没有其他线程读取环境
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// 加载选项
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub patterns: PatternSet,
    pub list_only: bool,
}

/// 加载过程中产生的事件，按文件顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    /// list-only 模式下列出的键
    Listed(String),
    /// 已放入存储的键
    Set(String),
    /// 无效行（可恢复）
    Invalid(InvalidLine),
}

/// 一次加载的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub store: EnvStore,
    pub events: Vec<LoadEvent>,
    /// 有模式、非 list-only、且一个都没设置时，记录未匹配的模式
    pub unmatched_patterns: Option<Vec<String>>,
}

impl LoadOutcome {
    /// 实际设置的数量（同名键重复设置也分别计数）
    pub fn set_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, LoadEvent::Set(_)))
            .count()
    }

    pub fn invalid_lines(&self) -> impl Iterator<Item = &InvalidLine> {
        self.events.iter().filter_map(|e| match e {
            LoadEvent::Invalid(invalid) => Some(invalid),
            _ => None,
        })
    }
}

/// 校验路径后读取并处理文件
///
/// 文件不存在或扩展名错误时直接失败，不处理任何一行。
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<LoadOutcome> {
    if !paths::file_exists(path) {
        return Err(RepokitError::ConfigNotFound(path.to_path_buf()));
    }
    if !paths::has_env_extension(path) {
        return Err(RepokitError::InvalidFileExtension(path.to_path_buf()));
    }

    let content = paths::read_file(path)?;
    Ok(load_str(&content, options))
}

/// 处理已读入的文件内容
pub fn load_str(content: &str, options: &LoadOptions) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for parsed in DotenvParser::parse(content) {
        let entry = match parsed {
            ParsedLine::Entry(entry) => entry,
            ParsedLine::Invalid(invalid) => {
                outcome.events.push(LoadEvent::Invalid(invalid));
                continue;
            }
        };

        if !options.patterns.matches(&entry.key) {
            continue;
        }

        if options.list_only {
            outcome.events.push(LoadEvent::Listed(entry.key));
            continue;
        }

        outcome.store.set(entry.key.clone(), strip_quotes(&entry.value));
        outcome.events.push(LoadEvent::Set(entry.key));
    }

    if !options.patterns.is_empty() && !options.list_only && outcome.set_count() == 0 {
        outcome.unmatched_patterns = Some(options.patterns.patterns().to_vec());
    }

    outcome
}
