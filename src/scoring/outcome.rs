use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PoolError;
use crate::models::fixture::Fixture;
use crate::models::tip::Tip;

/// The three possible match outcomes a tip can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1")]
    Home,
    #[serde(rename = "X")]
    Draw,
    #[serde(rename = "2")]
    Away,
}

impl Outcome {
    /// Classify a final score. Integer comparison only.
    pub fn classify(home_score: i32, away_score: i32) -> Self {
        match home_score.cmp(&away_score) {
            Ordering::Greater => Outcome::Home,
            Ordering::Less => Outcome::Away,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// `None` while either side of the score is still unknown.
    pub fn from_score(home_score: Option<i32>, away_score: Option<i32>) -> Option<Self> {
        match (home_score, away_score) {
            (Some(home), Some(away)) => Some(Self::classify(home, away)),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Home => "1",
            Outcome::Draw => "X",
            Outcome::Away => "2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Outcome {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Outcome::Home),
            "X" => Ok(Outcome::Draw),
            "2" => Ok(Outcome::Away),
            other => Err(PoolError::Validation(format!(
                "Invalid tip '{}', expected one of 1, X or 2",
                other
            ))),
        }
    }
}

/// Stored correctness flag of a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipVerdict {
    Unresolved,
    Correct,
    Incorrect,
}

impl TipVerdict {
    pub fn as_i32(&self) -> i32 {
        match self {
            TipVerdict::Unresolved => 0,
            TipVerdict::Correct => 1,
            TipVerdict::Incorrect => -1,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, TipVerdict::Unresolved)
    }
}

impl From<i32> for TipVerdict {
    fn from(value: i32) -> Self {
        match value {
            1 => TipVerdict::Correct,
            -1 => TipVerdict::Incorrect,
            _ => TipVerdict::Unresolved,
        }
    }
}

impl From<bool> for TipVerdict {
    fn from(correct: bool) -> Self {
        if correct {
            TipVerdict::Correct
        } else {
            TipVerdict::Incorrect
        }
    }
}

/// Whether `tip` called the result of `fixture`. `None` until the fixture is
/// finished with both scores present.
pub fn is_correct(fixture: &Fixture, tip: &Tip) -> Option<bool> {
    if !fixture.status.is_finished() {
        return None;
    }
    Outcome::from_score(fixture.home_score, fixture.away_score).map(|outcome| outcome == tip.symbol)
}

/// Verdict for `tip` given the current state of its fixture.
pub fn resolve_verdict(fixture: &Fixture, tip: &Tip) -> TipVerdict {
    match is_correct(fixture, tip) {
        Some(correct) => TipVerdict::from(correct),
        None => TipVerdict::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::{fixture, tip};
    use crate::models::fixture::FixtureStatus;

    #[test]
    fn equal_scores_are_a_draw() {
        for goals in 0..8 {
            assert_eq!(Outcome::classify(goals, goals), Outcome::Draw);
        }
    }

    #[test]
    fn home_and_away_wins() {
        assert_eq!(Outcome::classify(2, 1), Outcome::Home);
        assert_eq!(Outcome::classify(7, 0), Outcome::Home);
        assert_eq!(Outcome::classify(0, 1), Outcome::Away);
        assert_eq!(Outcome::classify(3, 4), Outcome::Away);
    }

    #[test]
    fn extreme_scores_do_not_overflow() {
        assert_eq!(Outcome::classify(i32::MAX, -1), Outcome::Home);
        assert_eq!(Outcome::classify(i32::MIN, i32::MAX), Outcome::Away);
        assert_eq!(Outcome::classify(i32::MAX, i32::MAX), Outcome::Draw);
    }

    #[test]
    fn missing_score_has_no_outcome() {
        assert_eq!(Outcome::from_score(None, Some(1)), None);
        assert_eq!(Outcome::from_score(Some(1), None), None);
        assert_eq!(Outcome::from_score(Some(1), Some(1)), Some(Outcome::Draw));
    }

    #[test]
    fn parses_only_exact_symbols() {
        assert_eq!("1".parse::<Outcome>().unwrap(), Outcome::Home);
        assert_eq!("X".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert_eq!("2".parse::<Outcome>().unwrap(), Outcome::Away);
        assert!("x".parse::<Outcome>().is_err());
        assert!("3".parse::<Outcome>().is_err());
        assert!("".parse::<Outcome>().is_err());
    }

    #[test]
    fn verdict_round_trips_through_stored_flag() {
        for verdict in [TipVerdict::Unresolved, TipVerdict::Correct, TipVerdict::Incorrect] {
            assert_eq!(TipVerdict::from(verdict.as_i32()), verdict);
        }
    }

    #[test]
    fn unfinished_fixture_is_not_resolved() {
        let pending = fixture(1, 1, FixtureStatus::NotStarted, None);
        let postponed = fixture(2, 1, FixtureStatus::Postponed, None);
        assert_eq!(is_correct(&pending, &tip(1, 1, Outcome::Home)), None);
        assert_eq!(resolve_verdict(&postponed, &tip(2, 2, Outcome::Draw)), TipVerdict::Unresolved);
    }

    #[test]
    fn finished_fixture_resolves_tip() {
        let finished = fixture(1, 1, FixtureStatus::Finished, Some((2, 1)));
        assert_eq!(resolve_verdict(&finished, &tip(1, 1, Outcome::Home)), TipVerdict::Correct);
        assert_eq!(resolve_verdict(&finished, &tip(2, 1, Outcome::Draw)), TipVerdict::Incorrect);
    }
}
