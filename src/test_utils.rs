//! 测试工具模块
//!
//! 提供环境变量守卫与外部命令 mock，避免测试污染进程环境或依赖真实的 gh/git

use crate::error::{RepokitError, Result};
use crate::utils::executor::{CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// 环境变量守卫 - 释放时恢复原始环境
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).as_ref() != Ok(value) {
                unsafe {
                    env::set_var(key, value);
                }
            }
        }
    }
}

struct Rule {
    line: String,
    cwd: Option<PathBuf>,
    output: CommandOutput,
}

/// 外部命令 mock
///
/// 按完整命令行（`program arg1 arg2`）匹配预设结果，指定目录的规则优先；
/// 未匹配的命令成功且无输出。所有调用按顺序记录。
#[derive(Default)]
pub struct MockRunner {
    rules: Vec<Rule>,
    missing: Vec<String>,
    calls: RefCell<Vec<(String, Option<PathBuf>)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 任意目录下成功，输出 `stdout`
    pub fn ok(self, line: &str, stdout: &str) -> Self {
        self.rule(line, None, Some(0), stdout, "")
    }

    /// 在 `dir` 下成功，输出 `stdout`
    pub fn ok_in(self, dir: &Path, line: &str, stdout: &str) -> Self {
        self.rule(line, Some(dir), Some(0), stdout, "")
    }

    /// 任意目录下以 `code` 失败
    pub fn fail(self, line: &str, code: i32, stderr: &str) -> Self {
        self.rule(line, None, Some(code), "", stderr)
    }

    /// 在 `dir` 下以 `code` 失败
    pub fn fail_in(self, dir: &Path, line: &str, code: i32, stderr: &str) -> Self {
        self.rule(line, Some(dir), Some(code), "", stderr)
    }

    /// 该程序不存在
    pub fn missing_tool(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    fn rule(
        mut self,
        line: &str,
        cwd: Option<&Path>,
        code: Option<i32>,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.rules.push(Rule {
            line: line.to_string(),
            cwd: cwd.map(Path::to_path_buf),
            output: CommandOutput {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        });
        self
    }

    /// 全部调用的命令行
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(l, _)| l.clone()).collect()
    }

    /// 在 `dir` 下执行的命令行
    pub fn calls_in(&self, dir: &Path) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, cwd)| cwd.as_deref() == Some(dir))
            .map(|(l, _)| l.clone())
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls
            .borrow_mut()
            .push((line.clone(), cwd.map(Path::to_path_buf)));

        if self.missing.iter().any(|m| m == program) {
            return Err(RepokitError::ToolNotFound(program.to_string()));
        }

        let specific = self
            .rules
            .iter()
            .find(|r| r.line == line && r.cwd.is_some() && r.cwd.as_deref() == cwd);
        let generic = || {
            self.rules
                .iter()
                .find(|r| r.line == line && r.cwd.is_none())
        };

        Ok(specific
            .or_else(generic)
            .map(|r| r.output.clone())
            .unwrap_or_else(|| CommandOutput {
                code: Some(0),
                ..CommandOutput::default()
            }))
    }
}
