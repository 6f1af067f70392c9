//! 核心逻辑：不直接接触进程环境与外部工具

pub mod env_loader;
pub mod glob;
pub mod repo_set;

pub use env_loader::{EnvStore, LoadEvent, LoadOptions, LoadOutcome};
pub use glob::PatternSet;
