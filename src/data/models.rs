use serde::{Deserialize, Serialize};

/// Columns every dataset must provide, as (source name, English name).
/// Either spelling is accepted in the header row.
pub const REQUIRED_COLUMNS: &[(&str, &str)] = &[
    ("mandante", "home_team"),
    ("visitante", "away_team"),
    ("tecnico_mandante", "home_coach"),
    ("tecnico_visitante", "away_coach"),
    ("vencedor", "winner"),
    ("formacao_mandante", "home_formation"),
    ("formacao_visitante", "away_formation"),
];

// One row of the match table; unknown columns are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(alias = "mandante")]
    pub home_team: String,
    #[serde(alias = "visitante")]
    pub away_team: String,
    #[serde(alias = "tecnico_mandante")]
    pub home_coach: String,
    #[serde(alias = "tecnico_visitante")]
    pub away_coach: String,
    #[serde(alias = "vencedor")]
    pub winner: String,
    #[serde(alias = "formacao_mandante")]
    pub home_formation: String,
    #[serde(alias = "formacao_visitante")]
    pub away_formation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchRecord {
    /// Any winner value naming neither side counts as a draw, and so does a
    /// missing one, even when a team name is missing too.
    pub fn outcome(&self) -> MatchOutcome {
        if self.winner.is_empty() {
            MatchOutcome::Draw
        } else if self.winner == self.home_team {
            MatchOutcome::HomeWin
        } else if self.winner == self.away_team {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }
}

#[cfg(test)]
pub(crate) fn record(
    home: &str,
    away: &str,
    home_coach: &str,
    away_coach: &str,
    winner: &str,
) -> MatchRecord {
    MatchRecord {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_coach: home_coach.to_string(),
        away_coach: away_coach.to_string(),
        winner: winner.to_string(),
        home_formation: "4-3-3".to_string(),
        away_formation: "4-4-2".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_winner_column() {
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "Flamengo").outcome(), MatchOutcome::HomeWin);
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "Santos").outcome(), MatchOutcome::AwayWin);
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "-").outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn unexpected_winner_falls_back_to_draw() {
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "").outcome(), MatchOutcome::Draw);
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "flamengo").outcome(), MatchOutcome::Draw);
        assert_eq!(record("Flamengo", "Santos", "X", "Y", "Palmeiras").outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn missing_winner_is_a_draw_even_with_missing_teams() {
        assert_eq!(record("", "Santos", "X", "Y", "").outcome(), MatchOutcome::Draw);
        assert_eq!(record("Flamengo", "", "X", "Y", "").outcome(), MatchOutcome::Draw);
        assert_eq!(record("", "", "X", "Y", "").outcome(), MatchOutcome::Draw);
    }
}
