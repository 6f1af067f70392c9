//! 错误处理模块 (修复原则：明确抛出异常)
//!
//! 只有两类失败：前置条件失败（致命，退出码 1）与逐项失败（警告后继续）。
//! 后者不经过这里，由各命令自行报告。

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepokitError {
    #[error("environment file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("not an .env file: {}", .0.display())]
    InvalidFileExtension(PathBuf),

    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("required tool not found: {0}")]
    ToolNotFound(String),

    #[error("failed to fetch remote data: {0}")]
    RemoteFetch(String),

    #[error("no repositories returned for {0}")]
    EmptyRemoteSet(String),

    #[error("command failed: {0}")]
    CommandExecutionFailed(String),

    #[error("missing argument: {0} (pass it on the command line or set it in the settings file)")]
    MissingArgument(&'static str),

    #[error("invalid selection pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid settings file {}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepokitError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        eprintln!("error: {}", self);

        if verbose {
            // thiserror 支持自动的 source() 链
            let mut current = self.source();
            while let Some(next) = current {
                eprintln!("  caused by: {}", next);
                current = next.source();
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, RepokitError>;
