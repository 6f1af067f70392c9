//! repokit 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各命令
//! - 前置条件失败退出码 1，逐项失败只警告
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use std::io::IsTerminal;
use repokit::cli::{Cli, Commands};
use repokit::commands::list::ListCommand;
use repokit::commands::load_env::LoadEnvCommand;
use repokit::commands::missing::MissingCommand;
use repokit::commands::teamless::TeamlessCommand;
use repokit::commands::update::UpdateCommand;
use repokit::commands::{CommandContext, CommandHandler};
use repokit::config::Settings;
use repokit::types::OutputFormat;
use repokit::utils::executor::SystemRunner;
use repokit::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = CommandContext {
        verbose: cli.verbose,
    };

    if let Err(e) = run_command(cli.command, &ctx) {
        tracing::debug!(error = ?e, "command failed");
        e.report(ctx.verbose);
        std::process::exit(1);
    }
}

/// 日志写到 stderr；`RUST_LOG` 优先，其次 --verbose，默认只输出警告
fn init_logging(verbose: bool) {
    let default = if verbose { "repokit=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// 运行具体命令
fn run_command(command: Commands, ctx: &CommandContext) -> Result<()> {
    let runner = SystemRunner;

    match command {
        Commands::Missing {
            org,
            root,
            team,
            clone,
            limit,
        } => {
            let settings = Settings::load()?;
            MissingCommand::new(
                &runner,
                settings.resolve_org(org)?,
                settings.resolve_root(root)?,
                team,
                clone,
                limit.unwrap_or(settings.repo_limit),
            )
            .execute(ctx)
        }

        Commands::Teamless { org, limit } => {
            let settings = Settings::load()?;
            TeamlessCommand::new(
                &runner,
                settings.resolve_org(org)?,
                limit.unwrap_or(settings.repo_limit),
            )
            .execute(ctx)
        }

        Commands::Update {
            root,
            main_branch,
            remote,
            stay_on_main,
        } => {
            let settings = Settings::load()?;
            UpdateCommand::new(
                &runner,
                settings.resolve_root(root)?,
                main_branch.unwrap_or_else(|| settings.main_branch.clone()),
                remote.unwrap_or_else(|| settings.remote.clone()),
                stay_on_main,
            )
            .execute(ctx)
        }

        Commands::LoadEnv {
            file,
            list_only,
            patterns,
            export,
            command,
        } => LoadEnvCommand::new(file, patterns, list_only, export, command).execute(ctx),

        Commands::Commands { describe, format } => {
            ListCommand::new(describe, OutputFormat::from(format.as_str())).execute(ctx)
        }
    }
}
