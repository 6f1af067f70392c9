//! CLI 参数定义

use crate::types::CommandInfo;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// repokit - 本地仓库克隆与开发环境变量管理
#[derive(Parser)]
#[command(
    name = "repokit",
    version,
    about = "Manage local clones of GitHub repositories and .env files",
    long_about = "Operator helpers around gh and git: find missing or teamless repositories, \
                  bulk-update local clones, load .env files and list the available commands"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List organization repositories missing from a local root directory
    Missing {
        /// GitHub organization
        #[arg(short, long)]
        org: Option<String>,
        /// Directory holding the local clones
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Only consider repositories of this team
        #[arg(short, long)]
        team: Option<String>,
        /// Clone every missing repository into the root directory
        #[arg(short, long)]
        clone: bool,
        /// Maximum number of repositories to fetch
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List organization repositories that no team has access to
    Teamless {
        /// GitHub organization
        #[arg(short, long)]
        org: Option<String>,
        /// Maximum number of repositories to fetch
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Pull the main branch of every local clone under a root directory
    Update {
        /// Directory holding the local clones
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Branch to pull
        #[arg(short, long)]
        main_branch: Option<String>,
        /// Remote to pull from
        #[arg(long)]
        remote: Option<String>,
        /// Stay on the main branch after pulling
        #[arg(short, long)]
        stay_on_main: bool,
    },

    /// Load variables from a .env file
    LoadEnv {
        /// Environment file
        #[arg(short, long, default_value = ".env")]
        file: PathBuf,
        /// Only list the keys, never set anything
        #[arg(short, long, conflicts_with_all = ["export", "command"])]
        list_only: bool,
        /// Glob patterns (*, ?, [...]) selecting the keys to load
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,
        /// Print `export KEY='value'` lines for a shell to eval
        #[arg(short, long)]
        export: bool,
        /// Command to run with the loaded environment
        #[arg(last = true)]
        command: Vec<String>,
    },

    /// List the available commands
    Commands {
        /// Show the description of each command
        #[arg(short, long)]
        describe: bool,
        /// Output format (env/json)
        #[arg(short, long, default_value = "env")]
        format: String,
    },
}

/// 全部子命令及其一行描述，按名称排序
pub fn command_infos() -> Vec<CommandInfo> {
    let mut infos: Vec<CommandInfo> = Cli::command()
        .get_subcommands()
        .filter(|c| c.get_name() != "help")
        .map(|c| CommandInfo {
            name: c.get_name().to_string(),
            about: c.get_about().map(|a| a.to_string()).unwrap_or_default(),
        })
        .collect();
    infos.sort_by(|a, b| a.name.cmp(&b.name));
    infos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_command_infos_sorted_with_descriptions() {
        let infos = command_infos();
        let names: Vec<&str> = infos.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["commands", "load-env", "missing", "teamless", "update"]
        );
        assert!(infos.iter().all(|i| !i.about.is_empty()));
    }

    #[test]
    fn test_load_env_trailing_command() {
        let cli = Cli::try_parse_from([
            "repokit", "load-env", "-p", "DB_*", "-p", "API_?", "--", "printenv", "DB_HOST",
        ])
        .unwrap();
        match cli.command {
            Commands::LoadEnv {
                file,
                patterns,
                command,
                ..
            } => {
                assert_eq!(file, PathBuf::from(".env"));
                assert_eq!(patterns, vec!["DB_*", "API_?"]);
                assert_eq!(command, vec!["printenv", "DB_HOST"]);
            }
            _ => panic!("expected load-env"),
        }
    }

    #[test]
    fn test_list_only_conflicts_with_command() {
        let result = Cli::try_parse_from(["repokit", "load-env", "--list-only", "--", "env"]);
        assert!(result.is_err());
    }
}
