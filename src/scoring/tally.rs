use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::fixture::Fixture;
use crate::models::tip::Tip;
use crate::scoring::outcome::{resolve_verdict, Outcome, TipVerdict};

/// Per-user, per-season tip counters.
///
/// Always satisfies `correct + incorrect == finished`, `finished <= total`
/// and `tip_1 + tip_x + tip_2 == total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipTally {
    pub total: i32,
    pub finished: i32,
    pub correct: i32,
    pub incorrect: i32,
    pub tip_1: i32,
    pub tip_x: i32,
    pub tip_2: i32,
}

/// A tip whose stored correctness flag must be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictUpdate {
    pub tip_id: i32,
    pub verdict: TipVerdict,
}

impl TipTally {
    fn record(&mut self, symbol: Outcome, verdict: TipVerdict) {
        self.total += 1;
        match verdict {
            TipVerdict::Correct => {
                self.finished += 1;
                self.correct += 1;
            }
            TipVerdict::Incorrect => {
                self.finished += 1;
                self.incorrect += 1;
            }
            TipVerdict::Unresolved => {}
        }
        match symbol {
            Outcome::Home => self.tip_1 += 1,
            Outcome::Draw => self.tip_x += 1,
            Outcome::Away => self.tip_2 += 1,
        }
    }
}

/// Tally `tips` against the season's fixtures.
///
/// Tips whose fixture is not in `fixtures_by_id` belong to another season or
/// point at a fixture that no longer exists; they are not counted. Returns the
/// tally, the verdict of every counted tip keyed by fixture id, and the tips
/// whose stored flag differs from the freshly resolved verdict.
pub fn tally_tips(
    fixtures_by_id: &HashMap<i32, &Fixture>,
    tips: &[Tip],
) -> (TipTally, HashMap<i32, TipVerdict>, Vec<VerdictUpdate>) {
    let mut tally = TipTally::default();
    let mut verdicts = HashMap::with_capacity(tips.len());
    let mut updates = Vec::new();

    for tip in tips {
        let Some(fixture) = fixtures_by_id.get(&tip.fixture_id) else {
            tracing::debug!("Skipping tip {} for unknown fixture {}", tip.id, tip.fixture_id);
            continue;
        };

        if fixture.status.is_finished() && (fixture.home_score.is_none() || fixture.away_score.is_none()) {
            tracing::warn!("Fixture {} is finished but has no final score", fixture.fixture_id);
        }

        let verdict = resolve_verdict(fixture, tip);
        tally.record(tip.symbol, verdict);
        verdicts.insert(tip.fixture_id, verdict);

        // Only finished fixtures produce a verdict worth persisting
        if verdict.is_resolved() && verdict != tip.correct {
            updates.push(VerdictUpdate { tip_id: tip.id, verdict });
        }
    }

    (tally, verdicts, updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::FixtureStatus;
    use crate::scoring::test_support::{fixture, index, tip};

    #[test]
    fn counts_finished_and_pending_tips() {
        let fixtures = vec![
            fixture(1, 1, FixtureStatus::Finished, Some((2, 1))),
            fixture(2, 1, FixtureStatus::Finished, Some((0, 0))),
            fixture(3, 2, FixtureStatus::NotStarted, None),
        ];
        let tips = vec![
            tip(10, 1, Outcome::Home),
            tip(11, 2, Outcome::Away),
            tip(12, 3, Outcome::Draw),
        ];

        let (tally, verdicts, updates) = tally_tips(&index(&fixtures), &tips);

        assert_eq!(
            tally,
            TipTally { total: 3, finished: 2, correct: 1, incorrect: 1, tip_1: 1, tip_x: 1, tip_2: 1 }
        );
        assert_eq!(verdicts[&1], TipVerdict::Correct);
        assert_eq!(verdicts[&2], TipVerdict::Incorrect);
        assert_eq!(verdicts[&3], TipVerdict::Unresolved);
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn orphaned_tip_is_not_counted() {
        let fixtures = vec![fixture(1, 1, FixtureStatus::Finished, Some((1, 0)))];
        let tips = vec![tip(10, 1, Outcome::Home), tip(11, 999, Outcome::Away)];

        let (tally, verdicts, _) = tally_tips(&index(&fixtures), &tips);

        assert_eq!(tally.total, 1);
        assert_eq!(tally.tip_2, 0);
        assert!(!verdicts.contains_key(&999));
    }

    #[test]
    fn already_stored_verdicts_are_not_rewritten() {
        let fixtures = vec![fixture(1, 1, FixtureStatus::Finished, Some((1, 3)))];
        let mut stored = tip(10, 1, Outcome::Away);
        stored.correct = TipVerdict::Correct;

        let (tally, _, updates) = tally_tips(&index(&fixtures), &[stored]);

        assert_eq!(tally.correct, 1);
        assert!(updates.is_empty());
    }

    #[test]
    fn finished_without_score_stays_pending() {
        let fixtures = vec![fixture(1, 1, FixtureStatus::Finished, None)];
        let (tally, _, updates) = tally_tips(&index(&fixtures), &[tip(10, 1, Outcome::Draw)]);

        assert_eq!(tally.total, 1);
        assert_eq!(tally.finished, 0);
        assert!(updates.is_empty());
    }
}
