//! 外部命令执行器
//!
//! 所有外部工具（gh、git）都通过 [`CommandRunner`] 调用，测试中用 mock 替换。
//! 非零退出码不是错误：由调用方决定致命还是可恢复。

use crate::error::{RepokitError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// 一次外部命令的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 退出码；被信号终止时为 `None`
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// 非空的 stdout 行，已去除首尾空白
    pub fn lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 失败时的简短说明，优先使用 stderr
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        let detail = if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        };
        let code = self
            .code
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        if detail.is_empty() {
            format!("exit status {}", code)
        } else {
            format!("exit status {}: {}", code, detail.replace('\n', " "))
        }
    }
}

/// 同步执行外部命令并捕获输出
pub trait CommandRunner {
    /// 运行 `program args...`，可选工作目录
    ///
    /// 程序不存在时返回 `ToolNotFound`；其他启动失败返回 `CommandExecutionFailed`。
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput>;
}

/// 真实的系统执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, cwd = ?cwd, "running external command");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| spawn_error(program, e))?;
        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(program, code = ?result.code, "external command finished");
        Ok(result)
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> RepokitError {
    if err.kind() == ErrorKind::NotFound {
        RepokitError::ToolNotFound(program.to_string())
    } else {
        RepokitError::CommandExecutionFailed(format!("{}: {}", program, err))
    }
}

/// 执行命令并注入环境变量，继承标准流，返回子进程退出码
///
/// # 参数
/// - `command`: 命令和参数，如 `["python", "app.py"]`
/// - `env_vars`: 要注入的环境变量（覆盖继承的同名变量）
pub fn exec_with_env(command: &[String], env_vars: &[(String, String)]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(RepokitError::CommandExecutionFailed(
            "empty command".to_string(),
        ));
    };

    tracing::debug!(program = %program, ?args, vars = env_vars.len(), "executing with loaded environment");

    let status = Command::new(program)
        .args(args)
        .envs(env_vars.iter().map(|(k, v)| (k, v)))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| spawn_error(program, e))?;

    Ok(status.code().unwrap_or(1))
}
