use crate::data::models::{MatchOutcome, MatchRecord};
use crate::error::AppError;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachRecord {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl CoachRecord {
    pub fn new(name: String) -> Self {
        CoachRecord {
            name,
            games: 0,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    /// Points won over points available, on a 0-100 scale (3 per win, 1 per draw).
    /// `None` when the coach has no games.
    pub fn performance(&self) -> Option<f64> {
        if self.games == 0 {
            None
        } else {
            Some(self.points() as f64 / self.available_points() as f64 * 100.0)
        }
    }

    pub fn points(&self) -> u64 {
        u64::from(self.wins) * 3 + u64::from(self.draws)
    }

    pub fn available_points(&self) -> u64 {
        u64::from(self.games) * 3
    }
}

/// Per-coach results, keyed by coach name in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachStatsTracker {
    coaches: Vec<CoachRecord>,
    index: HashMap<String, usize>,
}

impl CoachStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut tracker = Self::new();
        for record in matches {
            tracker.add_match(record);
        }
        tracing::debug!(matches = matches.len(), coaches = tracker.len(), "aggregated coach results");
        tracker
    }

    pub fn add_match(&mut self, record: &MatchRecord) {
        let home = self.entry(&record.home_coach);
        self.coaches[home].games += 1;
        let away = self.entry(&record.away_coach);
        self.coaches[away].games += 1;

        match record.outcome() {
            MatchOutcome::HomeWin => {
                self.coaches[home].wins += 1;
                self.coaches[away].losses += 1;
            }
            MatchOutcome::AwayWin => {
                self.coaches[away].wins += 1;
                self.coaches[home].losses += 1;
            }
            MatchOutcome::Draw => {
                self.coaches[home].draws += 1;
                self.coaches[away].draws += 1;
            }
        }
    }

    // Inserts a zeroed record on first sight
    fn entry(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.coaches.len();
        self.coaches.push(CoachRecord::new(name.to_string()));
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub fn get(&self, name: &str) -> Option<&CoachRecord> {
        self.index.get(name).map(|&idx| &self.coaches[idx])
    }

    pub fn coaches(&self) -> &[CoachRecord] {
        &self.coaches
    }

    pub fn len(&self) -> usize {
        self.coaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coaches.is_empty()
    }

    /// Resolve the coach picked by the caller.
    ///
    /// Exact names win; otherwise a single case-insensitive match is accepted.
    pub fn select(&self, selection: Option<&str>) -> Result<&CoachRecord, AppError> {
        let name = selection
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(AppError::NoCoachSelected)?;

        if let Some(coach) = self.get(name) {
            return Ok(coach);
        }

        let wanted = name.to_lowercase();
        let mut candidates = self
            .coaches
            .iter()
            .filter(|c| c.name.to_lowercase() == wanted);

        match (candidates.next(), candidates.next()) {
            (Some(coach), None) => Ok(coach),
            _ => Err(AppError::CoachNotFound(name.to_string())),
        }
    }

    /// Coaches with at least `min_games`, best performance first.
    pub fn leaderboard(&self, min_games: u32, top_n: usize) -> Vec<&CoachRecord> {
        let mut ranked: Vec<&CoachRecord> = self
            .coaches
            .iter()
            .filter(|c| c.games > 0 && c.games >= min_games)
            .collect();

        // Stable sort: equal records keep first-seen order
        ranked.sort_by(|a, b| {
            let pa = a.performance().unwrap_or(0.0);
            let pb = b.performance().unwrap_or(0.0);
            pb.partial_cmp(&pa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.games.cmp(&a.games))
        });
        ranked.truncate(top_n);

        ranked
    }
}
