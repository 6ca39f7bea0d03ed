// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EDITH CLI - Unlock Schedule & Supply Projection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::{Parser, Subcommand};
use colored::*;
use edith_core::HIGH_RISK_SHOCK_PERCENT;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "edith-cli")]
#[command(about = "EDITH (ED) Tokenomics - Unlock Schedule & Supply Projection", long_about = None)]
#[command(version)]
struct Cli {
    /// Tokenomics config file, TOML or JSON (reads EDITH_CONFIG env var).
    /// Without it the built-in reference configuration is used.
    #[arg(short, long, env = "EDITH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration
    Validate,

    /// Allocation per category and share of total supply
    Allocations,

    /// Per-category unlock table
    Schedule {
        /// Last month to show (TGE = month 0)
        #[arg(short, long, default_value_t = 12)]
        months: u32,
    },

    /// Circulating supply series
    Supply {
        /// Horizon in months (defaults to the configured projection horizon)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Month-over-month supply shocks
    Shocks {
        /// Last month to show
        #[arg(short, long, default_value_t = 12)]
        months: u32,

        /// Shock percentage flagged as high risk
        #[arg(short, long, default_value_t = HIGH_RISK_SHOCK_PERCENT)]
        threshold: f64,
    },

    /// Fundraising rounds, FDV and implied price
    Fundraising,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let engine = commands::common::load_engine(cli.config.as_deref())?;

    if !cli.json {
        print_banner();
    }

    match cli.command {
        Commands::Validate => commands::validate::handle(&engine, cli.json)?,
        Commands::Allocations => commands::allocations::handle(&engine, cli.json)?,
        Commands::Schedule { months } => commands::schedule::handle(&engine, months, cli.json)?,
        Commands::Supply { months } => {
            let months = months.unwrap_or(engine.config().projection_months);
            commands::supply::handle_series(&engine, months, cli.json)?
        }
        Commands::Shocks { months, threshold } => {
            commands::supply::handle_shocks(&engine, months, threshold, cli.json)?
        }
        Commands::Fundraising => commands::fundraising::handle(&engine, cli.json)?,
    }

    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║        EDITH (ED) - TOKENOMICS CLI            ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "║   Vesting | Circulating Supply | Shocks       ║".cyan()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════╝".cyan()
    );
    println!();
}

fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
