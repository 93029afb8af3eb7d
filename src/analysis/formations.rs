use crate::data::models::MatchRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationCount {
    pub formation: String,
    pub count: usize,
}

/// Occurrences per formation, most used first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationFrequency {
    entries: Vec<FormationCount>,
}

impl FormationFrequency {
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<FormationCount> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for value in values {
            match index.get(value) {
                Some(&idx) => entries[idx].count += 1,
                None => {
                    index.insert(value, entries.len());
                    entries.push(FormationCount {
                        formation: value.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // Stable: ties stay in first-encountered order
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        FormationFrequency { entries }
    }

    pub fn entries(&self) -> &[FormationCount] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[FormationCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, formation: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.formation == formation)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    fn counts(&self) -> HashMap<&str, usize> {
        self.entries
            .iter()
            .map(|e| (e.formation.as_str(), e.count))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationComparison {
    pub formation: String,
    pub home: usize,
    pub away: usize,
}

impl FormationComparison {
    pub fn total(&self) -> usize {
        self.home + self.away
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationTally {
    pub home: FormationFrequency,
    pub away: FormationFrequency,
}

impl FormationTally {
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let tally = FormationTally {
            home: FormationFrequency::from_values(matches.iter().map(|m| m.home_formation.as_str())),
            away: FormationFrequency::from_values(matches.iter().map(|m| m.away_formation.as_str())),
        };
        tracing::debug!(
            home = tally.home.len(),
            away = tally.away.len(),
            "counted formations"
        );
        tally
    }

    /// Union of both sides; a formation missing on one side counts as zero there.
    pub fn comparison(&self) -> Vec<FormationComparison> {
        let away_counts = self.away.counts();

        let mut rows: Vec<FormationComparison> = self
            .home
            .entries()
            .iter()
            .map(|e| FormationComparison {
                formation: e.formation.clone(),
                home: e.count,
                away: away_counts.get(e.formation.as_str()).copied().unwrap_or(0),
            })
            .collect();

        let home_counts = self.home.counts();
        rows.extend(
            self.away
                .entries()
                .iter()
                .filter(|e| !home_counts.contains_key(e.formation.as_str()))
                .map(|e| FormationComparison {
                    formation: e.formation.clone(),
                    home: 0,
                    away: e.count,
                }),
        );

        rows.sort_by(|a, b| b.total().cmp(&a.total()));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_formations(home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            home_team: "A".into(),
            away_team: "B".into(),
            home_coach: "X".into(),
            away_coach: "Y".into(),
            winner: "A".into(),
            home_formation: home.into(),
            away_formation: away.into(),
        }
    }

    #[test]
    fn counts_each_formation_once() {
        let freq = FormationFrequency::from_values(["4-3-3", "4-4-2", "4-3-3"]);
        assert_eq!(
            freq.entries(),
            &[
                FormationCount { formation: "4-3-3".into(), count: 2 },
                FormationCount { formation: "4-4-2".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let freq = FormationFrequency::from_values(["3-5-2", "4-4-2", "4-3-3", "4-4-2", "3-5-2"]);
        let order: Vec<&str> = freq.entries().iter().map(|e| e.formation.as_str()).collect();
        assert_eq!(order, vec!["3-5-2", "4-4-2", "4-3-3"]);
    }

    #[test]
    fn top_is_bounded_by_available_entries() {
        let freq = FormationFrequency::from_values(["4-3-3", "4-4-2"]);
        assert_eq!(freq.top(5).len(), 2);
        assert_eq!(freq.top(1)[0].formation, "4-3-3");
        assert!(freq.top(0).is_empty());
    }

    #[test]
    fn sides_are_counted_independently() {
        let tally = FormationTally::from_matches(&[
            with_formations("4-3-3", "4-4-2"),
            with_formations("4-3-3", "3-5-2"),
        ]);
        assert_eq!(tally.home.get("4-3-3"), 2);
        assert_eq!(tally.home.get("4-4-2"), 0);
        assert_eq!(tally.away.get("4-4-2"), 1);
        assert_eq!(tally.away.get("3-5-2"), 1);
    }

    #[test]
    fn empty_input_gives_empty_tally() {
        let tally = FormationTally::from_matches(&[]);
        assert!(tally.home.is_empty());
        assert!(tally.away.is_empty());
        assert!(tally.comparison().is_empty());
    }

    #[test]
    fn comparison_fills_absent_sides_with_zero() {
        let tally = FormationTally {
            home: FormationFrequency::from_values(["4-3-3", "4-3-3"]),
            away: FormationFrequency::from_values(["4-4-2"]),
        };

        assert_eq!(
            tally.comparison(),
            vec![
                FormationComparison { formation: "4-3-3".into(), home: 2, away: 0 },
                FormationComparison { formation: "4-4-2".into(), home: 0, away: 1 },
            ]
        );
    }

    #[test]
    fn comparison_orders_by_combined_usage() {
        let tally = FormationTally {
            home: FormationFrequency::from_values(["4-3-3", "4-3-3", "4-4-2"]),
            away: FormationFrequency::from_values(["4-4-2", "4-4-2", "3-5-2", "4-4-2"]),
        };
        let rows = tally.comparison();
        let order: Vec<(&str, usize, usize)> = rows
            .iter()
            .map(|r| (r.formation.as_str(), r.home, r.away))
            .collect();
        assert_eq!(order, vec![("4-4-2", 1, 3), ("4-3-3", 2, 0), ("3-5-2", 0, 1)]);
    }

    proptest! {
        #[test]
        fn side_totals_match_record_count(
            pairs in prop::collection::vec((0..4usize, 0..4usize), 0..64)
        ) {
            let shapes = ["4-3-3", "4-4-2", "3-5-2", ""];
            let matches: Vec<MatchRecord> = pairs
                .iter()
                .map(|&(h, a)| with_formations(shapes[h], shapes[a]))
                .collect();

            let tally = FormationTally::from_matches(&matches);
            prop_assert_eq!(tally.home.total(), matches.len());
            prop_assert_eq!(tally.away.total(), matches.len());

            let combined: usize = tally.comparison().iter().map(|r| r.total()).sum();
            prop_assert_eq!(combined, 2 * matches.len());
        }
    }
}
