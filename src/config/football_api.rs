use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct FootballApiSettings {
    pub base_url: String,
    pub api_key: SecretString,
    /// External competition id. The pool only ever follows one league.
    pub league_id: u32,
    pub timezone: String,
}
