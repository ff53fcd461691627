use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::fixture::Fixture;
use crate::scoring::outcome::TipVerdict;

/// Tips made and tips correct within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub round: i32,
    pub tips: i32,
    pub correct: i32,
}

impl RoundScore {
    fn empty(round: i32) -> Self {
        Self { round, tips: 0, correct: 0 }
    }

    fn add(&mut self, verdict: TipVerdict) {
        self.tips += 1;
        if verdict == TipVerdict::Correct {
            self.correct += 1;
        }
    }
}

/// Build the per-round series for one user.
///
/// `fixtures` must already be ordered by round, then kickoff. The series has
/// one entry for every round from 1 to the highest round seen, including
/// rounds without fixtures or tips. `verdicts` maps fixture id to the user's
/// resolved tip on it; fixtures without a tip only move the round boundary.
pub fn round_series(fixtures: &[Fixture], verdicts: &HashMap<i32, TipVerdict>) -> Vec<RoundScore> {
    let mut series: Vec<RoundScore> = Vec::new();
    if fixtures.is_empty() {
        return series;
    }

    let mut current = RoundScore::empty(1);

    for fixture in fixtures {
        if fixture.round < 1 {
            tracing::warn!("Fixture {} has invalid round {}", fixture.fixture_id, fixture.round);
            continue;
        }

        // Flush on every boundary, zero-filling rounds nobody played
        while fixture.round > current.round {
            series.push(current);
            current = RoundScore::empty(current.round + 1);
        }

        let Some(&verdict) = verdicts.get(&fixture.fixture_id) else {
            continue;
        };

        if fixture.round == current.round {
            current.add(verdict);
        } else if let Some(earlier) = series.get_mut((fixture.round - 1) as usize) {
            // Out-of-order input; the round has already been flushed
            earlier.add(verdict);
        }
    }

    series.push(current);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::FixtureStatus;
    use crate::scoring::test_support::fixture;

    fn scores(series: &[RoundScore]) -> Vec<(i32, i32)> {
        series.iter().map(|r| (r.tips, r.correct)).collect()
    }

    #[test]
    fn no_fixtures_gives_empty_series() {
        assert!(round_series(&[], &HashMap::new()).is_empty());
    }

    #[test]
    fn missing_round_is_zero_filled() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::Finished, Some((1, 0))),
            fixture(2, 2, FixtureStatus::Finished, Some((1, 0))),
            fixture(3, 3, FixtureStatus::Finished, Some((1, 0))),
            fixture(5, 5, FixtureStatus::Finished, Some((1, 0))),
        ];
        let verdicts = HashMap::from([
            (1, TipVerdict::Correct),
            (2, TipVerdict::Incorrect),
            (3, TipVerdict::Correct),
            (5, TipVerdict::Correct),
        ]);

        let series = round_series(&fixtures, &verdicts);

        assert_eq!(series.len(), 5);
        assert_eq!(series[3], RoundScore { round: 4, tips: 0, correct: 0 });
        assert_eq!(scores(&series), vec![(1, 1), (1, 0), (1, 1), (0, 0), (1, 1)]);
    }

    #[test]
    fn untipped_rounds_still_appear() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::NotStarted, None),
            fixture(2, 1, FixtureStatus::NotStarted, None),
            fixture(3, 2, FixtureStatus::NotStarted, None),
            fixture(4, 3, FixtureStatus::NotStarted, None),
        ];
        let verdicts = HashMap::from([(3, TipVerdict::Unresolved)]);

        let series = round_series(&fixtures, &verdicts);

        assert_eq!(scores(&series), vec![(0, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn season_starting_after_round_one_is_padded() {
        let fixtures = vec![fixture(7, 3, FixtureStatus::Finished, Some((0, 2)))];
        let verdicts = HashMap::from([(7, TipVerdict::Correct)]);

        let series = round_series(&fixtures, &verdicts);

        assert_eq!(series.iter().map(|r| r.round).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(scores(&series), vec![(0, 0), (0, 0), (1, 1)]);
    }

    #[test]
    fn last_round_is_flushed() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::Finished, Some((2, 2))),
            fixture(2, 2, FixtureStatus::Finished, Some((2, 2))),
            fixture(3, 2, FixtureStatus::Finished, Some((2, 2))),
        ];
        let verdicts = HashMap::from([
            (2, TipVerdict::Correct),
            (3, TipVerdict::Correct),
        ]);

        let series = round_series(&fixtures, &verdicts);

        assert_eq!(scores(&series), vec![(0, 0), (2, 2)]);
    }
}
