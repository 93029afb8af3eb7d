use super::coach_stats::{CoachRecord, CoachStatsTracker};
use super::formations::{FormationComparison, FormationCount, FormationTally};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CoachSummary {
    #[serde(flatten)]
    pub record: CoachRecord,
    pub performance: Option<f64>,
}

impl CoachSummary {
    pub fn new(record: &CoachRecord) -> Self {
        CoachSummary {
            record: record.clone(),
            performance: record.performance().map(|p| (p * 100.0).round() / 100.0),
        }
    }
}

/// Snapshot of one dashboard render, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub dataset: String,
    pub match_count: usize,
    pub coach_count: usize,
    pub coach: Option<CoachSummary>,
    pub home_total: usize,
    pub away_total: usize,
    pub home_top: Vec<FormationCount>,
    pub away_top: Vec<FormationCount>,
    pub comparison: Vec<FormationComparison>,
}

impl DashboardReport {
    pub fn build(
        dataset: &str,
        match_count: usize,
        coaches: &CoachStatsTracker,
        selected: Option<&CoachRecord>,
        formations: &FormationTally,
        top_n: usize,
    ) -> Self {
        DashboardReport {
            generated_at: Utc::now(),
            dataset: dataset.to_string(),
            match_count,
            coach_count: coaches.len(),
            coach: selected.map(CoachSummary::new),
            home_total: formations.home.total(),
            away_total: formations.away.total(),
            home_top: formations.home.top(top_n).to_vec(),
            away_top: formations.away.top(top_n).to_vec(),
            comparison: formations.comparison(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize report: {}", e)))
    }
}
