use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

use crate::models::fixture::FixtureWithTeams;

/// Monday 00:00 to Sunday 23:59:59 of the week containing `now`, in UTC.
pub fn week_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_from_monday = now.weekday().num_days_from_monday() as i64;
    let monday = now.date_naive() - Duration::days(days_from_monday);
    let start = monday.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(7) - Duration::seconds(1);
    (start, end)
}

/// The fixture whose kickoff is closest to `now`, before or after.
pub fn nearest_fixture(fixtures: &[FixtureWithTeams], now: DateTime<Utc>) -> Option<&FixtureWithTeams> {
    fixtures
        .iter()
        .min_by_key(|f| (f.fixture.kickoff - now).num_seconds().abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::{Fixture, FixtureStatus};
    use chrono::TimeZone;

    fn listed(id: i32, kickoff: DateTime<Utc>) -> FixtureWithTeams {
        FixtureWithTeams {
            fixture: Fixture {
                fixture_id: id,
                season_id: 1,
                round: 1,
                kickoff,
                status: FixtureStatus::NotStarted,
                home_team_id: 1,
                away_team_id: 2,
                home_score: None,
                away_score: None,
            },
            home_team_name: "Home".into(),
            away_team_name: "Away".into(),
        }
    }

    #[test]
    fn week_runs_monday_to_sunday() {
        // Thursday
        let now = Utc.with_ymd_and_hms(2025, 10, 16, 15, 30, 0).unwrap();
        let (start, end) = week_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 10, 13, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 10, 19, 23, 59, 59).unwrap());
    }

    #[test]
    fn monday_is_start_of_its_own_week() {
        let now = Utc.with_ymd_and_hms(2025, 10, 13, 0, 0, 0).unwrap();
        assert_eq!(week_bounds(now).0, now);
    }

    #[test]
    fn nearest_fixture_looks_both_ways() {
        let now = Utc.with_ymd_and_hms(2025, 10, 16, 12, 0, 0).unwrap();
        let fixtures = vec![
            listed(1, now - Duration::days(3)),
            listed(2, now + Duration::hours(5)),
            listed(3, now + Duration::days(2)),
        ];
        assert_eq!(nearest_fixture(&fixtures, now).map(|f| f.fixture.fixture_id), Some(2));
        assert!(nearest_fixture(&[], now).is_none());
    }
}
