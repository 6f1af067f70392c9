//! commands 命令处理器：列出可用命令

use super::{CommandContext, CommandHandler};
use crate::cli;
use crate::error::Result;
use crate::types::{CommandInfo, OutputFormat};

/// commands 命令
pub struct ListCommand {
    describe: bool,
    format: OutputFormat,
}

impl ListCommand {
    pub fn new(describe: bool, format: OutputFormat) -> Self {
        Self { describe, format }
    }

    /// 纯文本输出；描述按最长名称对齐
    pub fn render(&self, infos: &[CommandInfo]) -> Vec<String> {
        if !self.describe {
            return infos.iter().map(|i| i.name.clone()).collect();
        }

        let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
        infos
            .iter()
            .map(|i| format!("{:<width$}  {}", i.name, i.about, width = width))
            .collect()
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let infos = cli::command_infos();

        match self.format {
            OutputFormat::Env => {
                for line in self.render(&infos) {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&infos)?);
            }
        }

        Ok(())
    }
}
