//! teamless 命令：没有任何团队能访问的仓库

use super::{CommandContext, CommandHandler, warn};
use crate::clients::{self, GitHubClient, github::GH};
use crate::core::repo_set;
use crate::error::{RepokitError, Result};
use crate::utils::executor::CommandRunner;

/// teamless 命令
pub struct TeamlessCommand<'a> {
    runner: &'a dyn CommandRunner,
    org: String,
    limit: u32,
}

impl<'a> TeamlessCommand<'a> {
    pub fn new(runner: &'a dyn CommandRunner, org: String, limit: u32) -> Self {
        Self { runner, org, limit }
    }

    /// 组织仓库减去有团队的仓库，已排序
    ///
    /// 团队查询失败的仓库会被报告并排除在结果之外。
    pub fn find_teamless(&self) -> Result<Vec<String>> {
        clients::ensure_tool(self.runner, GH)?;

        let github = GitHubClient::new(self.runner);
        let repos = github.list_repos(&self.org, self.limit)?;
        if repos.is_empty() {
            return Err(RepokitError::EmptyRemoteSet(self.org.clone()));
        }

        let mut with_teams = Vec::new();
        for repo in &repos {
            match github.repo_teams(&self.org, repo) {
                Ok(teams) if teams.is_empty() => {}
                Ok(teams) => {
                    tracing::debug!(repo = %repo, teams = teams.len(), "repository has teams");
                    with_teams.push(repo.as_str());
                }
                Err(e) => {
                    warn(format!("failed to query teams of {}: {}", repo, e));
                    with_teams.push(repo.as_str());
                }
            }
        }

        Ok(repo_set::difference(&repos, &with_teams))
    }
}

impl CommandHandler for TeamlessCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let teamless = self.find_teamless()?;

        if teamless.is_empty() && ctx.verbose {
            eprintln!("every repository of {} has at least one team", self.org);
        }
        for name in &teamless {
            println!("{}", name);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockRunner;

    const LIST: &str = "gh repo list acme --limit 10 --json name";

    fn teams_of(repo: &str) -> String {
        format!("gh api repos/acme/{}/teams --paginate --jq .[].name", repo)
    }

    #[test]
    fn test_empty_team_list_is_teamless() {
        let runner = MockRunner::new()
            .ok(LIST, r#"[{"name":"web"},{"name":"api"},{"name":"docs"}]"#)
            .ok(&teams_of("web"), "frontend\n")
            .ok(&teams_of("api"), "")
            .ok(&teams_of("docs"), "\n");

        let teamless = TeamlessCommand::new(&runner, "acme".to_string(), 10)
            .find_teamless()
            .unwrap();
        assert_eq!(teamless, vec!["api", "docs"]);
    }

    #[test]
    fn test_failed_query_is_excluded_and_loop_continues() {
        let runner = MockRunner::new()
            .ok(LIST, r#"[{"name":"broken"},{"name":"orphan"}]"#)
            .fail(&teams_of("broken"), 1, "HTTP 403")
            .ok(&teams_of("orphan"), "");

        let teamless = TeamlessCommand::new(&runner, "acme".to_string(), 10)
            .find_teamless()
            .unwrap();
        assert_eq!(teamless, vec!["orphan"]);
        assert!(runner.calls().contains(&teams_of("orphan")));
    }

    #[test]
    fn test_unfetchable_repo_list_is_fatal() {
        let runner = MockRunner::new().fail(LIST, 1, "auth required");
        let err = TeamlessCommand::new(&runner, "acme".to_string(), 10)
            .find_teamless()
            .unwrap_err();
        assert!(matches!(err, RepokitError::RemoteFetch(_)));
    }

    #[test]
    fn test_empty_repo_list_is_fatal() {
        let runner = MockRunner::new().ok(LIST, "[]");
        let err = TeamlessCommand::new(&runner, "acme".to_string(), 10)
            .find_teamless()
            .unwrap_err();
        assert!(matches!(err, RepokitError::EmptyRemoteSet(_)));
    }
}
