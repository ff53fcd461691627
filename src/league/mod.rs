pub mod fixtures;
pub mod seasons;
pub mod standings;
pub mod timing;

pub use fixtures::FixtureService;
pub use seasons::SeasonService;
pub use standings::StandingsService;
