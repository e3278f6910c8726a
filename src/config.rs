use crate::api::endpoints::DEFAULT_BASE_URL;
use crate::error::AppError;
use std::env;

const DEFAULT_SNAPSHOT_MAX_AGE_HOURS: u64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub snapshot_max_age_hours: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("OPENDOTA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let snapshot_max_age_hours = match env::var("DRAFT_GAP_SNAPSHOT_MAX_AGE") {
            Ok(value) => value.parse().map_err(|_| {
                AppError::ConfigError(
                    "DRAFT_GAP_SNAPSHOT_MAX_AGE must be a number of hours".to_string(),
                )
            })?,
            Err(_) => DEFAULT_SNAPSHOT_MAX_AGE_HOURS,
        };

        Ok(Config {
            base_url,
            snapshot_max_age_hours,
        })
    }
}
