use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;

use crate::config::football_api::FootballApiSettings;
use crate::error::PoolError;
use crate::sync::payload::ApiEnvelope;

const RATE_LIMIT_HEADER: &str = "x-ratelimit-requests-remaining";

/// Raw items of one API call plus the request quota it reported.
#[derive(Debug)]
pub struct ApiFetch {
    pub items: Vec<Value>,
    pub remaining_requests: Option<i32>,
}

pub struct FootballApiClient {
    settings: FootballApiSettings,
    client: Client,
}

impl FootballApiClient {
    pub fn new(settings: FootballApiSettings) -> Result<Self, PoolError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { settings, client })
    }

    pub async fn fetch_fixtures(&self, season: &str) -> Result<ApiFetch, PoolError> {
        let timezone = self.settings.timezone.clone();
        self.fetch("fixtures", season, &[("timezone", timezone)]).await
    }

    pub async fn fetch_standings(&self, season: &str) -> Result<ApiFetch, PoolError> {
        self.fetch("standings", season, &[]).await
    }

    async fn fetch(
        &self,
        endpoint: &str,
        season: &str,
        extra: &[(&str, String)],
    ) -> Result<ApiFetch, PoolError> {
        let url = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), endpoint);
        let mut query = vec![
            ("season", season.to_string()),
            ("league", self.settings.league_id.to_string()),
        ];
        query.extend(extra.iter().map(|(k, v)| (*k, v.clone())));

        tracing::debug!("Calling football API at {} for season {}", url, season);

        let response = self
            .client
            .get(&url)
            .header("x-apisports-key", self.settings.api_key.expose_secret())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let remaining_requests = response
            .headers()
            .get(RATE_LIMIT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i32>().ok());

        let envelope: ApiEnvelope<Value> = response.json().await?;
        tracing::info!(
            "Football API returned {} {} items ({:?} requests left)",
            envelope.response.len(),
            endpoint,
            remaining_requests
        );

        Ok(ApiFetch {
            items: envelope.response,
            remaining_requests,
        })
    }
}
