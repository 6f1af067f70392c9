//! missing 命令：组织中有、本地根目录下没有的仓库

use super::{CommandContext, CommandHandler, warn};
use crate::clients::{self, GitHubClient, github::GH};
use crate::core::repo_set;
use crate::error::{RepokitError, Result};
use crate::utils::executor::CommandRunner;
use crate::utils::paths;
use std::path::PathBuf;

/// missing 命令
pub struct MissingCommand<'a> {
    runner: &'a dyn CommandRunner,
    org: String,
    root: PathBuf,
    team: Option<String>,
    clone: bool,
    limit: u32,
}

/// 批量克隆的结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CloneSummary {
    pub cloned: Vec<String>,
    pub failed: Vec<String>,
}

impl CloneSummary {
    /// `cloned X of Y`，Y 为尝试克隆的总数
    pub fn summary_line(&self) -> String {
        format!(
            "cloned {} of {}",
            self.cloned.len(),
            self.cloned.len() + self.failed.len()
        )
    }
}

impl<'a> MissingCommand<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        org: String,
        root: PathBuf,
        team: Option<String>,
        clone: bool,
        limit: u32,
    ) -> Self {
        Self {
            runner,
            org,
            root,
            team,
            clone,
            limit,
        }
    }

    /// 远程名称减去本地子目录名称，已排序
    pub fn find_missing(&self) -> Result<Vec<String>> {
        paths::require_dir(&self.root)?;
        clients::ensure_tool(self.runner, GH)?;

        let github = GitHubClient::new(self.runner);
        let (remote, scope) = match &self.team {
            Some(team) => (
                github.list_team_repos(&self.org, team)?,
                format!("{}/{}", self.org, team),
            ),
            None => (github.list_repos(&self.org, self.limit)?, self.org.clone()),
        };
        if remote.is_empty() {
            return Err(RepokitError::EmptyRemoteSet(scope));
        }

        let local = paths::subdirectory_names(&self.root)?;
        tracing::debug!(remote = remote.len(), local = local.len(), "comparing repository sets");
        Ok(repo_set::difference(&remote, &local))
    }

    /// 逐个克隆，失败只报告不回滚
    pub fn clone_all(&self, names: &[String]) -> CloneSummary {
        let github = GitHubClient::new(self.runner);
        let mut summary = CloneSummary::default();

        for name in names {
            let dest = self.root.join(name);
            match github.clone_repo(&self.org, name, &dest) {
                Ok(()) => {
                    println!("cloned {}", name);
                    summary.cloned.push(name.clone());
                }
                Err(e) => {
                    warn(format!("failed to clone {}: {}", name, e));
                    summary.failed.push(name.clone());
                }
            }
        }

        summary
    }
}

impl CommandHandler for MissingCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let missing = self.find_missing()?;

        if missing.is_empty() {
            if ctx.verbose {
                eprintln!("all repositories of {} are present locally", self.org);
            }
            return Ok(());
        }

        for name in &missing {
            println!("{}", name);
        }

        if self.clone {
            let summary = self.clone_all(&missing);
            println!("{}", summary.summary_line());
        }

        Ok(())
    }
}
