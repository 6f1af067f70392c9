//! 配置管理
//!
//! 设置文件 `~/.repokit/config.toml`（可用 `REPOKIT_CONFIG` 覆盖路径）。
//! 优先级：命令行参数 > 设置文件 > 内置默认值。

pub mod format;

use crate::error::{RepokitError, Result};
use crate::utils::paths::{self, file_exists};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 设置文件路径的环境变量覆盖
pub const CONFIG_PATH_ENV: &str = "REPOKIT_CONFIG";

pub const DEFAULT_MAIN_BRANCH: &str = "main";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_REPO_LIMIT: u32 = 1000;

/// 设置文件内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 默认组织
    pub org: Option<String>,
    /// 本地仓库根目录
    pub root: Option<PathBuf>,
    pub main_branch: String,
    pub remote: String,
    /// `gh repo list` 的数量上限
    pub repo_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            org: None,
            root: None,
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            repo_limit: DEFAULT_REPO_LIMIT,
        }
    }
}

impl Settings {
    /// 从默认位置加载，文件不存在时返回默认值
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => paths::get_config_path()?,
        };
        Self::load_from_file(&path)
    }

    /// 从指定文件加载
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !file_exists(path) {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = paths::read_file(path)?;
        let settings = toml::from_str(&content).map_err(|source| RepokitError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// 命令行未给出时回退到设置文件中的组织
    pub fn resolve_org(&self, cli: Option<String>) -> Result<String> {
        cli.or_else(|| self.org.clone())
            .ok_or(RepokitError::MissingArgument("--org"))
    }

    /// 命令行未给出时回退到设置文件中的根目录
    pub fn resolve_root(&self, cli: Option<PathBuf>) -> Result<PathBuf> {
        cli.or_else(|| self.root.clone())
            .ok_or(RepokitError::MissingArgument("--root"))
    }
}
