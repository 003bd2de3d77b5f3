//! Omer CLI - a calculator for Sefirat HaOmer
//!
//! This is the command-line interface for Omer. It provides a user-friendly
//! interface to the core library's queries.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use clap::Parser;
use omer_core::VERSION;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{config as config_cmd, days, export, info, lookup, misc, status};
use crate::constants::LOG_ENV;
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context();
        let error_msg = format!("{}", e);
        let (message, hint) = split_error(&error_msg);
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr: `-v`/`-vv` first, then OMER_LOG, then warnings only.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split an error into its message and a hint, explicit or contextual.
fn split_error(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (error[..idx].trim_end(), Some(error[idx + 1..].to_string()));
    }
    (error, contextual_hint(error))
}

/// Hints for common errors that do not carry one.
fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("omer day must be between") {
        return Some("Hint: The count has 49 days, e.g. `omer day 33`.".to_string());
    }
    if error_lower.contains("omer week must be between") {
        return Some("Hint: The count has 7 weeks, e.g. `omer week 5`.".to_string());
    }
    if error_lower.contains("invalid hebrew month") {
        return Some("Hint: Omer months are Nisan, Iyyar and Sivan.".to_string());
    }
    if error_lower.contains("not within the sefirat haomer period") {
        return Some("Hint: The count runs from 16 Nisan to 5 Sivan.".to_string());
    }
    if error_lower.contains("invalid date range") {
        return Some("Hint: Put the earlier date in --start.".to_string());
    }
    if error_lower.contains("failed to parse config") {
        return Some(
            "Hint: Run `omer config init --force` to write a fresh config file.".to_string(),
        );
    }
    if error_lower.contains("integrity check failed") {
        return Some("Hint: Run `omer validate --json` for the full list.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Today(args)) => {
            status::handle_today(ctx, args)?;
        }
        Some(Commands::Status(args)) => {
            status::handle_status(ctx, args)?;
        }
        Some(Commands::Day(args)) => {
            days::handle_day(ctx, args)?;
        }
        Some(Commands::Week(args)) => {
            days::handle_week(ctx, args)?;
        }
        Some(Commands::Range(args)) => {
            days::handle_range(ctx, args)?;
        }
        Some(Commands::Special) => {
            days::handle_special(ctx)?;
        }
        Some(Commands::Export(args)) => {
            export::handle_export(ctx, args)?;
        }
        Some(Commands::Sefirot) => {
            info::handle_sefirot(ctx)?;
        }
        Some(Commands::AnaBekoach) => {
            info::handle_ana_bekoach(ctx)?;
        }
        Some(Commands::HebrewDate(args)) => {
            lookup::handle_hebrew_date(ctx, args)?;
        }
        Some(Commands::GregorianDate(args)) => {
            lookup::handle_gregorian_date(ctx, args)?;
        }
        Some(Commands::Validate) => {
            info::handle_validate(ctx)?;
        }
        Some(Commands::Config(args)) => match &args.command {
            ConfigSubcommand::Show => {
                config_cmd::handle_show(ctx)?;
            }
            ConfigSubcommand::Path => {
                config_cmd::handle_path(ctx)?;
            }
            ConfigSubcommand::Init(init_args) => {
                config_cmd::handle_init(ctx, init_args)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Omer v{}", VERSION);
            println!("\nQuickstart:");
            println!("  omer today --blessing");
            println!("  omer day 33");
            println!("  omer week 5");
            println!("  omer gregorian-date 2024-05-26");
            println!("  omer export --as text -o omer.txt");
            println!("\nRun `omer --help` for full usage.");
        }
    }

    Ok(())
}
