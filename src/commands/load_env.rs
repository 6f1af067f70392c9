//! load-env 命令处理器

use super::{CommandContext, CommandHandler, warn};
use crate::core::env_loader::{self, LoadEvent, LoadOptions, LoadOutcome};
use crate::core::glob::PatternSet;
use crate::error::Result;
use crate::utils::executor;
use std::path::PathBuf;

/// load-env 命令
pub struct LoadEnvCommand {
    file: PathBuf,
    patterns: Vec<String>,
    list_only: bool,
    export: bool,
    command: Vec<String>,
}

impl LoadEnvCommand {
    pub fn new(
        file: PathBuf,
        patterns: Vec<String>,
        list_only: bool,
        export: bool,
        command: Vec<String>,
    ) -> Self {
        Self {
            file,
            patterns,
            list_only,
            export,
            command,
        }
    }

    /// 解析并筛选文件，不触碰进程环境
    pub fn load(&self) -> Result<LoadOutcome> {
        let options = LoadOptions {
            patterns: PatternSet::new(self.patterns.as_slice())?,
            list_only: self.list_only,
        };
        env_loader::load_file(&self.file, &options)
    }

    /// 按文件顺序输出事件：列出/确认的键到 stdout，无效行到 stderr
    fn report(&self, outcome: &LoadOutcome) {
        for event in &outcome.events {
            match event {
                LoadEvent::Invalid(invalid) => warn(invalid),
                LoadEvent::Listed(key) => println!("{}", key),
                // export 模式的输出要能直接 eval，不混入确认信息
                LoadEvent::Set(key) if !self.export => println!("{}", key),
                LoadEvent::Set(_) => {}
            }
        }

        if let Some(patterns) = &outcome.unmatched_patterns {
            warn(format!(
                "no variables matched patterns: {}",
                patterns.join(", ")
            ));
        }
    }
}

/// `export KEY='value'`，值中的单引号被转义
pub fn export_line(key: &str, value: &str) -> String {
    format!("export {}='{}'", key, value.replace('\'', r"'\''"))
}

impl CommandHandler for LoadEnvCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let outcome = self.load()?;
        self.report(&outcome);

        if self.list_only {
            return Ok(());
        }

        if self.export {
            for (key, value) in outcome.store.vars() {
                println!("{}", export_line(key, value));
            }
        }

        outcome.store.apply();
        if ctx.verbose {
            eprintln!(
                "loaded {} variable(s) from {}",
                outcome.store.len(),
                self.file.display()
            );
        }

        if !self.command.is_empty() {
            let code = executor::exec_with_env(&self.command, outcome.store.vars())?;
            // 退出码透传
            std::process::exit(code);
        }

        Ok(())
    }
}
