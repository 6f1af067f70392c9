//! 外部工具封装
//!
//! 每个方法对应一次外部命令调用。是否致命由命令层决定。

pub mod git;
pub mod github;

pub use git::GitClient;
pub use github::GitHubClient;

use crate::error::{RepokitError, Result};
use crate::utils::executor::CommandRunner;

/// 确认外部工具可用（`<tool> --version` 能成功运行）
pub fn ensure_tool(runner: &dyn CommandRunner, program: &str) -> Result<()> {
    let output = runner.run(program, &["--version"], None)?;
    if output.success() {
        Ok(())
    } else {
        Err(RepokitError::ToolNotFound(format!(
            "{} ({})",
            program,
            output.failure_message()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockRunner;

    #[test]
    fn test_ensure_tool_ok() {
        let runner = MockRunner::new();
        ensure_tool(&runner, "gh").unwrap();
        assert_eq!(runner.calls(), vec!["gh --version"]);
    }

    #[test]
    fn test_ensure_tool_missing() {
        let runner = MockRunner::new().missing_tool("git");
        let err = ensure_tool(&runner, "git").unwrap_err();
        assert!(matches!(err, RepokitError::ToolNotFound(_)));
    }

    #[test]
    fn test_ensure_tool_failing_version() {
        let runner = MockRunner::new().fail("gh --version", 1, "broken install");
        let err = ensure_tool(&runner, "gh").unwrap_err();
        assert!(err.to_string().contains("broken install"));
    }
}
