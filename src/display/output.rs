use crate::analysis::coach_stats::CoachRecord;
use crate::analysis::formations::{FormationComparison, FormationCount};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct CoachMetricsRow {
    games: String,
    wins: String,
    draws: String,
    losses: String,
    performance: String,
}

#[derive(Tabled)]
struct FormationRow {
    rank: String,
    formation: String,
    count: String,
    chart: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    formation: String,
    home: String,
    away: String,
    #[tabled(rename = "home chart")]
    home_chart: String,
    #[tabled(rename = "away chart")]
    away_chart: String,
}

#[derive(Tabled)]
struct CoachListRow {
    #[tabled(rename = "#")]
    number: String,
    coach: String,
    games: String,
}

#[derive(Tabled)]
struct LeaderboardRow {
    rank: String,
    coach: String,
    games: String,
    record: String,
    performance: String,
}

fn label(identifier: &str) -> String {
    if identifier.is_empty() {
        "(unknown)".to_string()
    } else {
        identifier.to_string()
    }
}

pub fn format_performance(performance: Option<f64>) -> String {
    match performance {
        Some(p) => format!("{:.2}%", p),
        None => "n/a".to_string(),
    }
}

/// Horizontal bar scaled against `max`; any non-zero value gets at least one block.
pub fn render_bar(value: usize, max: usize, width: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(len.clamp(1, width))
}

fn section(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

pub fn display_coach_metrics(coach: &CoachRecord) {
    section(&format!("🧑‍💼 Coach Analysis: {}", label(&coach.name)), 60);

    let performance = coach.performance();
    let row = CoachMetricsRow {
        games: coach.games.to_string(),
        wins: coach.wins.to_string().green().to_string(),
        draws: coach.draws.to_string().yellow().to_string(),
        losses: coach.losses.to_string().red().to_string(),
        performance: format_performance(performance),
    };

    let mut table = Table::new(vec![row]);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(p) = performance {
        println!(
            "\n{} {} of {} points available\n",
            "📈 Performance:".bold(),
            coach.points(),
            coach.available_points()
        );
        if p >= 60.0 {
            println!("  {} Strong record", "🔥".green());
        } else if p < 33.0 {
            println!("  {} Struggling record", "⚠️".red());
        }
    }

    println!();
}

pub fn display_top_formations(title: &str, formations: &[FormationCount]) {
    section(title, 60);

    if formations.is_empty() {
        println!("{}", "No formations recorded".yellow());
        return;
    }

    let max = formations.iter().map(|f| f.count).max().unwrap_or(0);
    let rows: Vec<FormationRow> = formations
        .iter()
        .enumerate()
        .map(|(idx, f)| FormationRow {
            rank: format!("#{}", idx + 1),
            formation: label(&f.formation),
            count: f.count.to_string(),
            chart: render_bar(f.count, max, BAR_WIDTH).cyan().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_formation_comparison(comparison: &[FormationComparison]) {
    section("⚖️  Formation Comparison (home vs away)", 80);

    if comparison.is_empty() {
        println!("{}", "No formations recorded".yellow());
        return;
    }

    let max = comparison
        .iter()
        .map(|r| r.home.max(r.away))
        .max()
        .unwrap_or(0);

    let rows: Vec<ComparisonRow> = comparison
        .iter()
        .map(|r| ComparisonRow {
            formation: label(&r.formation),
            home: r.home.to_string(),
            away: r.away.to_string(),
            home_chart: render_bar(r.home, max, BAR_WIDTH / 2).green().to_string(),
            away_chart: render_bar(r.away, max, BAR_WIDTH / 2).blue().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_coach_list(coaches: &[CoachRecord]) {
    section(&format!("📋 Coaches ({})", coaches.len()), 60);

    let rows: Vec<CoachListRow> = coaches
        .iter()
        .enumerate()
        .map(|(idx, c)| CoachListRow {
            number: (idx + 1).to_string(),
            coach: label(&c.name),
            games: c.games.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_leaderboard(coaches: &[&CoachRecord], min_games: u32) {
    section(&format!("🏆 Coach Leaderboard (min {} games)", min_games), 60);

    if coaches.is_empty() {
        println!("{}", "No coach meets the minimum number of games".yellow());
        return;
    }

    let rows: Vec<LeaderboardRow> = coaches
        .iter()
        .enumerate()
        .map(|(idx, c)| LeaderboardRow {
            rank: format!("#{}", idx + 1),
            coach: label(&c.name),
            games: c.games.to_string(),
            record: format!("{}W {}D {}L", c.wins, c.draws, c.losses),
            performance: format_performance(c.performance()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
