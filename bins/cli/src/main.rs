//! hrkit CLI
//!
//! # Commands
//!
//! - `hrkit periods` - Build a report period list
//! - `hrkit fiscal-year` - Look up or check fiscal years
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hrkit_core::period::Periodicity;
use hrkit_shared::{AppConfig, AppError};
use tracing::{debug, error};

mod commands;
mod context;
mod logging;

use context::Context;

/// HR period and fiscal year toolkit
#[derive(Parser)]
#[command(name = "hrkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON file of fiscal year records (overrides data.fiscal_years_path)
    #[arg(long, global = true)]
    fiscal_years: Option<PathBuf>,

    /// Pin today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the period list for a report
    Periods {
        /// Span start (date-range mode)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Span end (date-range mode)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// First fiscal year of the span (switches to fiscal-year mode)
        #[arg(long)]
        from_fiscal_year: Option<String>,

        /// Last fiscal year of the span
        #[arg(long)]
        to_fiscal_year: Option<String>,

        /// Bucket size: Yearly, Half-Yearly, Quarterly or Monthly
        #[arg(short, long, default_value = "Monthly")]
        periodicity: Periodicity,

        /// Label periods cumulatively
        #[arg(long)]
        accumulated: bool,

        /// Do not restart cumulative labels at each fiscal year
        #[arg(long)]
        no_reset: bool,

        /// Skip per-period fiscal year resolution
        #[arg(long)]
        ignore_fiscal_year: bool,

        /// Company used for fiscal year resolution
        #[arg(long)]
        company: Option<String>,
    },

    /// Look up fiscal years by date, name and company
    FiscalYear {
        /// Date the fiscal year must contain
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Fiscal year name
        #[arg(short, long)]
        name: Option<String>,

        /// Company scope
        #[arg(long)]
        company: Option<String>,

        /// Print whether a match exists instead of failing
        #[arg(long)]
        check: bool,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            error!(error = %err, code, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load_from(cli.config.as_deref()).map_err(AppError::from)?;
    if let Some(path) = cli.fiscal_years {
        config.data.fiscal_years_path = Some(path);
    }
    if let Some(today) = cli.today {
        config.clock.today = Some(today);
    }

    logging::init(&config.logging, cli.verbose);
    debug!(?config, "configuration loaded");

    let ctx = Context::from_config(&config)?;

    let output = match cli.command {
        Commands::Periods {
            from,
            to,
            from_fiscal_year,
            to_fiscal_year,
            periodicity,
            accumulated,
            no_reset,
            ignore_fiscal_year,
            company,
        } => commands::periods::run(
            &ctx,
            commands::periods::PeriodsArgs {
                from,
                to,
                from_fiscal_year,
                to_fiscal_year,
                periodicity,
                accumulated,
                reset: !no_reset,
                ignore_fiscal_year,
                company,
            },
        )?,
        Commands::FiscalYear {
            date,
            name,
            company,
            check,
        } => commands::fiscal_year::run(&ctx, date, name, company, check)?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
