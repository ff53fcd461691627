//! Small helpers shared by services that turn missing rows into
//! [`PoolError::NotFound`].

use sqlx::PgExecutor;

use crate::db::seasons::get_season;
use crate::error::PoolError;
use crate::models::season::Season;

/// Unwrap an optional record, failing with `NotFound` naming `what`.
pub fn require_record<T>(record: Option<T>, what: impl Into<String>) -> Result<T, PoolError> {
    record.ok_or_else(|| PoolError::NotFound(what.into()))
}

/// Look up a season by its year string.
pub async fn require_season<'e, E: PgExecutor<'e>>(executor: E, season: &str) -> Result<Season, PoolError> {
    let found = get_season(executor, season).await?;
    require_record(found, format!("Season {} does not exist", season))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_is_not_found() {
        let missing: Option<i32> = None;
        match require_record(missing, "User bob") {
            Err(PoolError::NotFound(message)) => assert_eq!(message, "User bob"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(require_record(Some(3), "x").unwrap(), 3);
    }
}
