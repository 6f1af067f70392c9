//! GitHub 命令行客户端 (`gh`) 封装

use crate::error::{RepokitError, Result};
use crate::utils::executor::CommandRunner;
use serde::Deserialize;
use std::path::Path;

pub const GH: &str = "gh";

/// `gh repo list --json name` 的单个元素
#[derive(Debug, Deserialize)]
struct RepoName {
    name: String,
}

/// `gh` 调用封装
pub struct GitHubClient<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitHubClient<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// 组织下可见的全部仓库名称
    pub fn list_repos(&self, org: &str, limit: u32) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let output = self.runner.run(
            GH,
            &["repo", "list", org, "--limit", limit.as_str(), "--json", "name"],
            None,
        )?;
        if !output.success() {
            return Err(RepokitError::RemoteFetch(format!(
                "gh repo list {}: {}",
                org,
                output.failure_message()
            )));
        }

        let repos: Vec<RepoName> = serde_json::from_str(output.stdout.trim())?;
        Ok(repos.into_iter().map(|r| r.name).collect())
    }

    /// 某个团队可访问的仓库名称
    pub fn list_team_repos(&self, org: &str, team: &str) -> Result<Vec<String>> {
        let endpoint = format!("orgs/{}/teams/{}/repos", org, team);
        let output = self.runner.run(
            GH,
            &["api", endpoint.as_str(), "--paginate", "--jq", ".[].name"],
            None,
        )?;
        if !output.success() {
            return Err(RepokitError::RemoteFetch(format!(
                "gh api {}: {}",
                endpoint,
                output.failure_message()
            )));
        }
        Ok(output.lines())
    }

    /// 能访问该仓库的团队名称；空列表表示没有团队
    pub fn repo_teams(&self, org: &str, repo: &str) -> Result<Vec<String>> {
        let endpoint = format!("repos/{}/{}/teams", org, repo);
        let output = self.runner.run(
            GH,
            &["api", endpoint.as_str(), "--paginate", "--jq", ".[].name"],
            None,
        )?;
        if !output.success() {
            return Err(RepokitError::CommandExecutionFailed(format!(
                "gh api {}: {}",
                endpoint,
                output.failure_message()
            )));
        }
        Ok(output.lines())
    }

    /// 克隆 `org/name` 到 `dest`
    pub fn clone_repo(&self, org: &str, name: &str, dest: &Path) -> Result<()> {
        let full_name = format!("{}/{}", org, name);
        let dest = dest.to_string_lossy();
        let output = self
            .runner
            .run(GH, &["repo", "clone", full_name.as_str(), &*dest], None)?;
        if output.success() {
            Ok(())
        } else {
            Err(RepokitError::CommandExecutionFailed(format!(
                "gh repo clone {}: {}",
                full_name,
                output.failure_message()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockRunner;
    use std::path::PathBuf;

    #[test]
    fn test_list_repos_parses_json() {
        let runner = MockRunner::new().ok(
            "gh repo list acme --limit 50 --json name",
            r#"[{"name":"api"},{"name":"web"}]"#,
        );
        let repos = GitHubClient::new(&runner).list_repos("acme", 50).unwrap();
        assert_eq!(repos, vec!["api", "web"]);
    }

    #[test]
    fn test_list_repos_failure_is_remote_fetch() {
        let runner = MockRunner::new().fail(
            "gh repo list acme --limit 50 --json name",
            1,
            "HTTP 404",
        );
        let err = GitHubClient::new(&runner).list_repos("acme", 50).unwrap_err();
        assert!(matches!(err, RepokitError::RemoteFetch(msg) if msg.contains("HTTP 404")));
    }

    #[test]
    fn test_list_repos_bad_json() {
        let runner = MockRunner::new().ok("gh repo list acme --limit 50 --json name", "not json");
        let err = GitHubClient::new(&runner).list_repos("acme", 50).unwrap_err();
        assert!(matches!(err, RepokitError::Json(_)));
    }

    #[test]
    fn test_list_team_repos() {
        let runner = MockRunner::new().ok(
            "gh api orgs/acme/teams/platform/repos --paginate --jq .[].name",
            "infra\nci\n",
        );
        let repos = GitHubClient::new(&runner)
            .list_team_repos("acme", "platform")
            .unwrap();
        assert_eq!(repos, vec!["infra", "ci"]);
    }

    #[test]
    fn test_repo_teams_empty() {
        let runner = MockRunner::new()
            .ok("gh api repos/acme/lonely/teams --paginate --jq .[].name", "\n");
        let teams = GitHubClient::new(&runner).repo_teams("acme", "lonely").unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_clone_repo_command_line() {
        let runner = MockRunner::new();
        let dest = PathBuf::from("/src/api");
        GitHubClient::new(&runner)
            .clone_repo("acme", "api", &dest)
            .unwrap();
        assert_eq!(runner.calls(), vec!["gh repo clone acme/api /src/api"]);
    }
}
