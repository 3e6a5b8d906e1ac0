//! Report Builder CLI
//!
//! Batch front-end for the two pipeline stages: play-by-play extraction and
//! weekly aggregation. Exit codes follow the batch outcome: extraction exits
//! non-zero when any file failed, aggregation when no weekly file was
//! written.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use report_builder::DataLayout;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Process play-by-play data into weekly report files", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert raw play-by-play files to comprehensive format
    Extract {
        /// Data directory root
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Process only files whose name starts with this date prefix
        /// (e.g. 2025-08-22)
        #[arg(long)]
        date_prefix: Option<String>,

        /// Process all play-by-play files, ignoring any date prefix
        #[arg(long, default_value = "false")]
        all: bool,

        /// Reprocess files even when the comprehensive output is newer
        #[arg(long, default_value = "false")]
        force: bool,
    },

    /// Aggregate comprehensive files into weekly rollups and the summary
    Aggregate {
        /// Data directory root
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Extract {
            data_dir,
            date_prefix,
            all,
            force,
        } => {
            let layout = DataLayout::new(data_dir);
            let date_prefix = if all { None } else { date_prefix };

            let outcome = report_builder::run_extraction(&layout, date_prefix.as_deref(), force)?;

            println!("\nComprehensive Data Processing Summary:");
            println!("  Total files: {}", outcome.total);
            println!("  Processed:   {}", outcome.processed);
            println!("  Failed:      {}", outcome.failed);

            if outcome.failed > 0 {
                println!("\n⚠️  {} files failed to process", outcome.failed);
                std::process::exit(1);
            }
            println!("\n✅ All files processed successfully");
        }

        Commands::Aggregate { data_dir } => {
            let layout = DataLayout::new(data_dir);

            let (saved, summary) = report_builder::run_aggregation(&layout)?;
            let Some(summary) = summary else {
                println!("\n❌ Weekly aggregation failed - no weekly files written");
                std::process::exit(1);
            };

            println!("\n✅ Weekly Aggregation Complete!");
            println!("   Weekly files:              {}", saved);
            println!("   Total weeks:               {}", summary.totals.total_weeks);
            println!("   Total games:               {}", summary.totals.total_games);
            println!(
                "   Total player performances: {}",
                summary.totals.total_player_performances
            );

            println!("\n📊 Week-by-week breakdown:");
            for (week, stats) in &summary.weeks {
                println!(
                    "   Week {}: {} games, {} player stats",
                    week, stats.games, stats.player_performances
                );
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("report_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
