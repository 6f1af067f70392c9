//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait。
//! 前置条件失败以 `Err` 返回（致命）；逐项失败用 [`warn`] 报告后继续。

use crate::error::Result;
use std::fmt::Display;

pub mod list;
pub mod load_env;
pub mod missing;
pub mod teamless;
pub mod update;

/// 命令上下文
#[derive(Debug, Default)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// 可恢复的逐项失败：以 `WARN` 级别写到 stderr，不影响退出码
pub fn warn(message: impl Display) {
    tracing::warn!("{}", message);
}
