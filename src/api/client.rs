use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::{Hero, Matchup};

// OpenDota free tier: 60 calls/min, 2000/day. The daily budget is tracked
// across runs by rate_limit::RequestLog; this limiter smooths bursts within
// a single run.
const CALLS_PER_MINUTE: u32 = 60;

pub struct StatsApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl StatsApiClient {
    pub fn new(config: Config) -> Self {
        let rate_limiter =
            RateLimiter::direct(Quota::per_minute(NonZeroU32::new(CALLS_PER_MINUTE).unwrap()));
        StatsApiClient {
            config,
            rate_limiter,
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(250));
        }

        let mut retry_count = 0;
        const MAX_RETRIES: u32 = 3;

        loop {
            let response = ureq::get(url)
                .set("User-Agent", "draft_gap/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    // Rate limited - wait and retry
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    println!("⏳ Rate limited, waiting {}ms before retry...", wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// Full hero roster with aggregate pick/win/ban statistics.
    pub fn get_hero_stats(&self) -> Result<Vec<Hero>, AppError> {
        let url = endpoints::hero_stats_url(&self.config.base_url);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    /// One hero's record against every opponent it has faced.
    pub fn get_matchups(&self, hero_id: u32) -> Result<Vec<Matchup>, AppError> {
        let url = endpoints::matchups_url(&self.config.base_url, hero_id);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }
}
