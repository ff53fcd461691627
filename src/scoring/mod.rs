//! Tip scoring: outcome classification, per-user tallies and the per-round
//! series stored on each season result.

pub mod outcome;
pub mod rounds;
pub mod tally;

use std::collections::HashMap;

use crate::models::fixture::Fixture;
use crate::models::tip::Tip;
use rounds::{round_series, RoundScore};
use tally::{tally_tips, TipTally, VerdictUpdate};

/// Everything one aggregation run derives for a single user and season.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub tally: TipTally,
    pub rounds: Vec<RoundScore>,
    pub verdict_updates: Vec<VerdictUpdate>,
}

/// Score `tips` against the season's `fixtures` (ordered by round, then
/// kickoff). Pure; the caller persists verdicts and the result.
pub fn compute_user_result(fixtures: &[Fixture], tips: &[Tip]) -> UserResult {
    let fixtures_by_id: HashMap<i32, &Fixture> = fixtures
        .iter()
        .map(|fixture| (fixture.fixture_id, fixture))
        .collect();

    let (tally, verdicts, verdict_updates) = tally_tips(&fixtures_by_id, tips);
    let rounds = round_series(fixtures, &verdicts);

    UserResult {
        tally,
        rounds,
        verdict_updates,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::fixture::{Fixture, FixtureStatus};
    use crate::models::tip::Tip;
    use crate::scoring::outcome::{Outcome, TipVerdict};

    pub fn fixture(id: i32, round: i32, status: FixtureStatus, score: Option<(i32, i32)>) -> Fixture {
        let season_start = Utc.with_ymd_and_hms(2025, 8, 15, 19, 0, 0).unwrap();
        Fixture {
            fixture_id: id,
            season_id: 1,
            round,
            kickoff: season_start + Duration::days(7 * (round as i64 - 1)) + Duration::minutes(id as i64),
            status,
            home_team_id: 100 + id,
            away_team_id: 200 + id,
            home_score: score.map(|(home, _)| home),
            away_score: score.map(|(_, away)| away),
        }
    }

    pub fn tip(id: i32, fixture_id: i32, symbol: Outcome) -> Tip {
        Tip {
            id,
            fixture_id,
            symbol,
            correct: TipVerdict::Unresolved,
            user_id: Uuid::nil(),
            updated_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    pub fn index(fixtures: &[Fixture]) -> HashMap<i32, &Fixture> {
        fixtures.iter().map(|f| (f.fixture_id, f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::FixtureStatus;
    use crate::scoring::outcome::{Outcome, TipVerdict};
    use test_support::{fixture, tip};

    #[test]
    fn two_fixture_season() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::Finished, Some((2, 1))),
            fixture(2, 2, FixtureStatus::NotStarted, None),
        ];
        let tips = vec![tip(10, 1, Outcome::Home), tip(11, 2, Outcome::Draw)];

        let result = compute_user_result(&fixtures, &tips);

        assert_eq!(
            result.tally,
            TipTally { total: 2, finished: 1, correct: 1, incorrect: 0, tip_1: 1, tip_x: 1, tip_2: 0 }
        );
        let series: Vec<(i32, i32)> = result.rounds.iter().map(|r| (r.tips, r.correct)).collect();
        assert_eq!(series, vec![(1, 1), (1, 0)]);
        assert_eq!(result.verdict_updates, vec![VerdictUpdate { tip_id: 10, verdict: TipVerdict::Correct }]);
    }

    #[test]
    fn recomputation_is_stable() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::Finished, Some((0, 3))),
            fixture(2, 1, FixtureStatus::Finished, Some((1, 1))),
            fixture(3, 2, FixtureStatus::Postponed, None),
        ];
        let mut tips = vec![
            tip(10, 1, Outcome::Away),
            tip(11, 2, Outcome::Home),
            tip(12, 3, Outcome::Draw),
        ];

        let first = compute_user_result(&fixtures, &tips);
        // Apply the verdicts as the store would
        for update in &first.verdict_updates {
            if let Some(stored) = tips.iter_mut().find(|t| t.id == update.tip_id) {
                stored.correct = update.verdict;
            }
        }
        let second = compute_user_result(&fixtures, &tips);

        assert_eq!(first.tally, second.tally);
        assert_eq!(first.rounds, second.rounds);
        assert!(second.verdict_updates.is_empty());
    }

    #[test]
    fn tally_invariants_hold() {
        let fixtures: Vec<_> = (1..=12)
            .map(|id| {
                let status = if id % 3 == 0 { FixtureStatus::NotStarted } else { FixtureStatus::Finished };
                let score = if status.is_finished() { Some((id % 4, id % 3)) } else { None };
                fixture(id, (id + 1) / 2, status, score)
            })
            .collect();
        let symbols = [Outcome::Home, Outcome::Draw, Outcome::Away];
        let tips: Vec<_> = (1..=12)
            .filter(|id| id % 5 != 0)
            .map(|id| tip(100 + id, id, symbols[(id % 3) as usize]))
            .collect();

        let t = compute_user_result(&fixtures, &tips).tally;

        assert_eq!(t.correct + t.incorrect, t.finished);
        assert!(t.finished <= t.total);
        assert_eq!(t.tip_1 + t.tip_x + t.tip_2, t.total);
        assert_eq!(t.total, tips.len() as i32);
    }
}
