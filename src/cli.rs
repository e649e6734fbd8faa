// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::MetricsConfig;
use crate::infra::t;

pub mod commands;

/// Everything a command needs: the resolved configuration and locale.
/// 命令所需的一切：解析后的配置和语言环境。
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: MetricsConfig,
    pub locale: String,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

fn build_cli(locale: &str) -> Command {
    Command::new("suite-metrics")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config", locale = locale).to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("reports-dir")
                .long("reports-dir")
                .help(t!("cli.reports_dir", locale = locale).to_string())
                .value_name("DIR")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(Command::new("merge").about(t!("cmd.merge", locale = locale).to_string()))
        .subcommand(Command::new("metrics").about(t!("cmd.metrics", locale = locale).to_string()))
        .subcommand(Command::new("trend").about(t!("cmd.trend", locale = locale).to_string()))
        .subcommand(
            Command::new("export-trends").about(t!("cmd.export_trends", locale = locale).to_string()),
        )
        .subcommand(Command::new("readme").about(t!("cmd.readme", locale = locale).to_string()))
        .subcommand(
            Command::new("visual-report").about(t!("cmd.visual_report", locale = locale).to_string()),
        )
        .subcommand(
            Command::new("cleanup-snapshots")
                .about(t!("cmd.cleanup_snapshots", locale = locale).to_string())
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help(t!("cli.dry_run", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd.init", locale = locale).to_string())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Loads the config file, then applies environment and command-line overrides.
/// 加载配置文件，然后应用环境变量和命令行覆盖。
fn resolve_context(matches: &ArgMatches) -> Result<CommandContext> {
    let mut config = MetricsConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    config.apply_env(|key| env::var(key).ok());
    if let Some(dir) = matches.get_one::<PathBuf>("reports-dir") {
        config.reports_dir = dir.clone();
    }
    if let Some(lang) = matches.get_one::<String>("lang") {
        config.language = lang.clone();
    }

    let locale = crate::resolve_locale(&config.language);
    rust_i18n::set_locale(&locale);
    Ok(CommandContext { config, locale })
}

pub fn run() -> Result<()> {
    // CI logs are plain text.
    if env::var_os("CI").is_some() {
        colored::control::set_override(false);
    }

    // Pre-parse language and initialize i18n first so help text is localised.
    let early = pre_parse_language()
        .or_else(|| env::var(crate::core::config::ENV_LANG).ok())
        .unwrap_or_default();
    let help_locale = crate::resolve_locale(&early);
    rust_i18n::set_locale(&help_locale);

    let matches = build_cli(&help_locale).get_matches();
    // Global args are propagated down, so everything is read from the subcommand.
    let Some((name, sub)) = matches.subcommand() else {
        return Ok(());
    };

    if name == "init" {
        let path = sub
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(crate::core::config::DEFAULT_CONFIG_FILE));
        let lang = sub.get_one::<String>("lang").cloned().unwrap_or(early);
        let locale = crate::resolve_locale(&lang);
        rust_i18n::set_locale(&locale);
        return commands::init::execute(&path, sub.get_flag("force"), &locale);
    }

    let ctx = resolve_context(sub)?;
    tracing::debug!(command = name, locale = %ctx.locale, reports_dir = %ctx.config.reports_dir.display(), "context resolved");

    match name {
        "merge" => commands::merge::execute(&ctx),
        "metrics" => commands::metrics::execute(&ctx),
        "trend" => commands::trend::execute(&ctx),
        "export-trends" => commands::export::execute(&ctx),
        "readme" => commands::readme::execute(&ctx),
        "visual-report" => commands::visual::execute(&ctx),
        "cleanup-snapshots" => commands::snapshots::execute(&ctx, sub.get_flag("dry-run")),
        _ => Ok(()),
    }
}
