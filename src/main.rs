mod analysis;
mod config;
mod data;
mod display;
mod error;

use analysis::coach_stats::CoachStatsTracker;
use analysis::formations::FormationTally;
use analysis::report::DashboardReport;
use clap::Parser;
use config::Config;
use display::output::{
    display_coach_list, display_coach_metrics, display_error, display_formation_comparison,
    display_info, display_leaderboard, display_success, display_top_formations, display_warning,
};
use error::AppError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Coach Dashboard")]
#[command(about = "Coach results and formation usage from a match dataset", long_about = None)]
struct Args {
    /// Path to the match CSV (default: $DASHBOARD_DATASET or campeonato-brasileiro-full.csv)
    dataset: Option<PathBuf>,

    /// Coach to show metrics for
    #[arg(short, long)]
    coach: Option<String>,

    /// Number of top formations per side (default: $DASHBOARD_TOP_N or 5)
    #[arg(short, long)]
    top_n: Option<usize>,

    /// List every coach available for selection
    #[arg(long)]
    list_coaches: bool,

    /// Show the coach leaderboard ranked by performance
    #[arg(long)]
    leaderboard: bool,

    /// Minimum games for a coach to enter the leaderboard
    #[arg(long, default_value = "10")]
    min_games: u32,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(dataset) = &args.dataset {
        config.dataset = dataset.display().to_string();
    }
    if let Some(top_n) = args.top_n {
        if top_n == 0 {
            return Err(AppError::ConfigError("--top-n must be at least 1".to_string()));
        }
        config.top_n = top_n;
    }

    let interactive = !args.json;

    if interactive {
        display_info(&format!("Loading matches from {}", config.dataset));
    }

    let pb = if interactive {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {pos} rows") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("Reading");

    let loaded = data::loader::load_matches(Path::new(&config.dataset), &pb);
    pb.finish_and_clear();
    let matches = loaded?;

    if matches.is_empty() {
        warn!(dataset = %config.dataset, "dataset has no match rows");
    }

    let coaches = CoachStatsTracker::from_matches(&matches);
    let formations = FormationTally::from_matches(&matches);

    if interactive {
        display_success(&format!(
            "Loaded {} matches, {} coaches",
            matches.len(),
            coaches.len()
        ));
    }

    let selected = match coaches.select(args.coach.as_deref()) {
        Ok(coach) => Some(coach),
        Err(e) if !e.is_missing_selection() => return Err(e),
        Err(AppError::NoCoachSelected) => {
            if interactive {
                display_info("No coach selected (use --coach NAME, see --list-coaches)");
            }
            None
        }
        Err(e) => {
            display_warning(&format!("{}; skipping coach metrics", e));
            None
        }
    };

    if args.json {
        let report = DashboardReport::build(
            &config.dataset,
            matches.len(),
            &coaches,
            selected,
            &formations,
            config.top_n,
        );
        println!("{}", report.to_json()?);
        return Ok(());
    }

    if args.list_coaches {
        display_coach_list(coaches.coaches());
    }

    if let Some(coach) = selected {
        display_coach_metrics(coach);
    }

    if args.leaderboard {
        let board = coaches.leaderboard(args.min_games, config.top_n);
        display_leaderboard(&board, args.min_games);
    }

    display_top_formations(
        &format!("🏠 Top {} Home Formations", config.top_n),
        formations.home.top(config.top_n),
    );
    display_top_formations(
        &format!("✈️  Top {} Away Formations", config.top_n),
        formations.away.top(config.top_n),
    );
    display_formation_comparison(&formations.comparison());

    Ok(())
}
