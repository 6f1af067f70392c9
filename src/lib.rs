//! repokit - 本地仓库克隆与开发环境变量管理
//!
//! 每个子命令都是短生命周期、单线程的：调用外部工具（gh、git），
//! 做简单的文本处理，然后输出或执行动作。

// CLI 定义
pub mod cli;

// 外部工具封装
pub mod clients;

// 命令层
pub mod commands;

// 设置文件与 .env 格式
pub mod config;

// 核心逻辑
pub mod core;

pub mod error;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use error::{RepokitError, Result};
pub use types::{CommandInfo, EnvEntry, OutputFormat};
