//! git 命令行封装

use crate::error::{RepokitError, Result};
use crate::utils::executor::CommandRunner;
use std::path::Path;

pub const GIT: &str = "git";

pub struct GitClient<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitClient<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// 目录下有 `.git`（目录或 worktree 文件）即视为工作副本
    pub fn is_working_copy(&self, dir: &Path) -> bool {
        dir.join(".git").exists()
    }

    /// 当前分支；分离 HEAD 时报错
    pub fn current_branch(&self, dir: &Path) -> Result<String> {
        let output = self.git(dir, &["branch", "--show-current"])?;
        let branch = output.trim().to_string();
        if branch.is_empty() {
            return Err(RepokitError::CommandExecutionFailed(
                "not currently checked out on a branch".to_string(),
            ));
        }
        Ok(branch)
    }

    pub fn checkout(&self, dir: &Path, branch: &str) -> Result<()> {
        self.git(dir, &["checkout", branch]).map(|_| ())
    }

    pub fn pull(&self, dir: &Path, remote: &str, branch: &str) -> Result<()> {
        self.git(dir, &["pull", remote, branch]).map(|_| ())
    }

    /// 在 `dir` 中运行 git，非零退出码转为错误，返回 stdout
    fn git(&self, dir: &Path, args: &[&str]) -> Result<String> {
        let output = self.runner.run(GIT, args, Some(dir))?;
        if output.success() {
            Ok(output.stdout)
        } else {
            Err(RepokitError::CommandExecutionFailed(format!(
                "git {}: {}",
                args.join(" "),
                output.failure_message()
            )))
        }
    }
}
