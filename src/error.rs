use actix_web::HttpResponse;
use thiserror::Error as ThisError;

use crate::models::common::ApiResponse;

#[derive(Debug, ThisError)]
pub enum PoolError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Football API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PoolError {
    /// Short status message for clients. Internal failures are not echoed.
    pub fn public_message(&self) -> String {
        match self {
            PoolError::Parse(_) | PoolError::NotFound(_) | PoolError::Validation(_) => self.to_string(),
            PoolError::Database(_) => "Database error".to_string(),
            PoolError::Api(_) => "Football API request failed".to_string(),
            PoolError::Serialization(_) => "Failed to process data".to_string(),
        }
    }

    pub fn to_response(&self) -> HttpResponse {
        let body = ApiResponse::<()>::error(self.public_message());
        match self {
            PoolError::NotFound(_) => HttpResponse::NotFound().json(body),
            PoolError::Validation(_) | PoolError::Parse(_) => HttpResponse::BadRequest().json(body),
            PoolError::Api(_) => HttpResponse::BadGateway().json(body),
            PoolError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                HttpResponse::InternalServerError().json(body)
            }
            PoolError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(PoolError::NotFound("season 1999".into()).to_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(PoolError::Validation("bad".into()).to_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(PoolError::Parse("round".into()).to_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PoolError::Database(sqlx::Error::RowNotFound).to_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_details_are_not_exposed() {
        let err = PoolError::Database(sqlx::Error::Protocol("connection reset".into()));
        assert_eq!(err.public_message(), "Database error");
    }
}
