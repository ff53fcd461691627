use sqlx::PgPool;

use crate::db::helpers::require_season;
use crate::db::seasons::{get_season, insert_season, list_seasons};
use crate::error::PoolError;
use crate::models::season::Season;

/// Service responsible for season management
#[derive(Debug, Clone)]
pub struct SeasonService {
    pool: PgPool,
}

impl SeasonService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a season from its starting year, e.g. "2025" -> "2025-26".
    pub async fn create_season(&self, year: &str) -> Result<Season, PoolError> {
        let year = validate_season_year(year)?;

        if get_season(&self.pool, &year).await?.is_some() {
            return Err(PoolError::Validation(format!("Season {} already exists", year)));
        }

        let season = insert_season(&self.pool, &year, &display_name(&year)?).await?;
        tracing::info!("Created season {} ({})", season.display_name, season.id);
        Ok(season)
    }

    pub async fn get_season(&self, year: &str) -> Result<Season, PoolError> {
        require_season(&self.pool, year).await
    }

    pub async fn list_seasons(&self) -> Result<Vec<Season>, PoolError> {
        Ok(list_seasons(&self.pool).await?)
    }
}

/// Trim and check a four digit season year starting with 1 or 2.
pub fn validate_season_year(input: &str) -> Result<String, PoolError> {
    let year = input.trim();
    let mut chars = year.chars();
    let valid = year.len() == 4
        && matches!(chars.next(), Some('1') | Some('2'))
        && chars.all(|c| c.is_ascii_digit());

    if !valid {
        return Err(PoolError::Validation(format!("Incorrect format for season: {}", year)));
    }
    Ok(year.to_string())
}

/// "2025" -> "2025-26"
pub fn display_name(year: &str) -> Result<String, PoolError> {
    let start: u32 = year
        .parse()
        .map_err(|_| PoolError::Validation(format!("Incorrect format for season: {}", year)))?;
    Ok(format!("{}-{:02}", start, (start + 1) % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digit_years() {
        assert_eq!(validate_season_year(" 2025 ").unwrap(), "2025");
        assert_eq!(validate_season_year("1999").unwrap(), "1999");
    }

    #[test]
    fn rejects_malformed_years() {
        for input in ["", "25", "20255", "3025", "20a5", "２０２５"] {
            assert!(matches!(validate_season_year(input), Err(PoolError::Validation(_))), "{input}");
        }
    }

    #[test]
    fn display_name_spans_two_years() {
        assert_eq!(display_name("2025").unwrap(), "2025-26");
        assert_eq!(display_name("2009").unwrap(), "2009-10");
        assert_eq!(display_name("1999").unwrap(), "1999-00");
    }
}
