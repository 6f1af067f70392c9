//! update 命令：从主分支批量更新本地克隆
//!
//! 每个目录四步：记录当前分支、切到主分支、拉取、切回原分支。
//! 任一步失败都只报告，然后处理下一个目录。

use super::{CommandContext, CommandHandler, warn};
use crate::clients::{self, GitClient, git::GIT};
use crate::error::Result;
use crate::utils::executor::CommandRunner;
use crate::utils::paths;
use std::fmt;
use std::path::{Path, PathBuf};

/// 更新步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStep {
    CurrentBranch,
    CheckoutMain,
    Pull,
    ReturnToBranch,
}

impl fmt::Display for UpdateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStep::CurrentBranch => write!(f, "read current branch"),
            UpdateStep::CheckoutMain => write!(f, "switch to main branch"),
            UpdateStep::Pull => write!(f, "pull"),
            UpdateStep::ReturnToBranch => write!(f, "switch back"),
        }
    }
}

/// 单个目录的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    NotAWorkingCopy,
    /// `returned_to` 为切回的分支；留在主分支时为 `None`
    Updated { returned_to: Option<String> },
    Failed { step: UpdateStep, message: String },
}

/// update 命令
pub struct UpdateCommand<'a> {
    runner: &'a dyn CommandRunner,
    root: PathBuf,
    main_branch: String,
    remote: String,
    stay_on_main: bool,
}

impl<'a> UpdateCommand<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        root: PathBuf,
        main_branch: String,
        remote: String,
        stay_on_main: bool,
    ) -> Self {
        Self {
            runner,
            root,
            main_branch,
            remote,
            stay_on_main,
        }
    }

    /// 依次更新根目录下的每个子目录
    ///
    /// 每个目录处理完立即回调 `on_done`，长时间的 pull 不会压住前面目录的输出。
    pub fn update_all<F>(&self, mut on_done: F) -> Result<Vec<(PathBuf, UpdateStatus)>>
    where
        F: FnMut(&Path, &UpdateStatus),
    {
        let dirs = paths::list_subdirectories(&self.root)?;
        clients::ensure_tool(self.runner, GIT)?;

        let mut results = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let status = self.update_one(&dir);
            on_done(&dir, &status);
            results.push((dir, status));
        }
        Ok(results)
    }

    pub fn update_one(&self, dir: &Path) -> UpdateStatus {
        let git = GitClient::new(self.runner);
        if !git.is_working_copy(dir) {
            return UpdateStatus::NotAWorkingCopy;
        }

        let fail = |step, e: crate::error::RepokitError| UpdateStatus::Failed {
            step,
            message: e.to_string(),
        };

        let branch = match git.current_branch(dir) {
            Ok(branch) => branch,
            Err(e) => return fail(UpdateStep::CurrentBranch, e),
        };
        if let Err(e) = git.checkout(dir, &self.main_branch) {
            return fail(UpdateStep::CheckoutMain, e);
        }
        if let Err(e) = git.pull(dir, &self.remote, &self.main_branch) {
            return fail(UpdateStep::Pull, e);
        }

        if self.stay_on_main || branch == self.main_branch {
            return UpdateStatus::Updated { returned_to: None };
        }
        match git.checkout(dir, &branch) {
            Ok(()) => UpdateStatus::Updated {
                returned_to: Some(branch),
            },
            Err(e) => fail(UpdateStep::ReturnToBranch, e),
        }
    }
}

/// 单个目录结果对应的输出行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// 写到 stdout
    Done(String),
    /// 作为警告写到 stderr
    Warning(String),
}

impl UpdateStatus {
    /// 按目录名生成输出行；`verbose` 时附带切回的分支
    pub fn line(&self, name: &str, verbose: bool) -> StatusLine {
        match self {
            UpdateStatus::NotAWorkingCopy => {
                StatusLine::Warning(format!("{} is not a git working copy, skipping", name))
            }
            UpdateStatus::Updated {
                returned_to: Some(branch),
            } if verbose => StatusLine::Done(format!("updated {} (back on {})", name, branch)),
            UpdateStatus::Updated { .. } => StatusLine::Done(format!("updated {}", name)),
            UpdateStatus::Failed { step, message } => {
                StatusLine::Warning(format!("{}: failed to {}: {}", name, step, message))
            }
        }
    }
}

/// 汇总行
pub fn summary_line(results: &[(PathBuf, UpdateStatus)]) -> String {
    let updated = results
        .iter()
        .filter(|(_, status)| matches!(status, UpdateStatus::Updated { .. }))
        .count();
    format!("updated {} of {}", updated, results.len())
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned())
}

impl CommandHandler for UpdateCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let results = self.update_all(|dir, status| {
            match status.line(&dir_name(dir), ctx.verbose) {
                StatusLine::Done(line) => println!("{}", line),
                StatusLine::Warning(line) => warn(line),
            }
        })?;

        println!("{}", summary_line(&results));
        Ok(())
    }
}
