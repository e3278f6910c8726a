use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// OpenDota free tier budget
const MAX_REQUESTS_PER_DAY: u32 = 2000;
const MAX_REQUESTS_PER_MINUTE: u32 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestLog {
    pub requests_today: u32,
    pub requests_this_minute: u32,
    pub last_request: DateTime<Utc>,
    pub day_reset: DateTime<Utc>,
    pub minute_reset: DateTime<Utc>,
}

impl RequestLog {
    pub fn new() -> Self {
        let now = Utc::now();
        RequestLog {
            requests_today: 0,
            requests_this_minute: 0,
            last_request: now,
            day_reset: now + Duration::days(1),
            minute_reset: now + Duration::minutes(1),
        }
    }

    pub fn get_log_path() -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".draft_gap");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join("ratelimit.json")
    }

    pub fn load() -> Result<Self, AppError> {
        let path = Self::get_log_path();

        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut log: RequestLog = serde_json::from_str(&content)
                    .map_err(|e| AppError::JsonError(format!("Failed to parse rate limit log: {}", e)))?;

                // Reset if day has passed
                let now = Utc::now();
                if now > log.day_reset {
                    log.requests_today = 0;
                    log.day_reset = now + Duration::days(1);
                }

                // Reset if minute has passed
                if now > log.minute_reset {
                    log.requests_this_minute = 0;
                    log.minute_reset = now + Duration::minutes(1);
                }

                Ok(log)
            }
            Err(_) => Ok(RequestLog::new()),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::get_log_path();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize rate limit log: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::JsonError(format!("Failed to write rate limit log: {}", e)))?;

        Ok(())
    }

    pub fn can_make_request(&self) -> bool {
        self.requests_today < MAX_REQUESTS_PER_DAY
            && self.requests_this_minute < MAX_REQUESTS_PER_MINUTE
    }

    pub fn record_request(&mut self) {
        let now = Utc::now();
        if now > self.minute_reset {
            self.requests_this_minute = 0;
            self.minute_reset = now + Duration::minutes(1);
        }
        self.requests_today += 1;
        self.requests_this_minute += 1;
        self.last_request = now;
    }

    pub fn get_remaining(&self) -> u32 {
        MAX_REQUESTS_PER_DAY - self.requests_today.min(MAX_REQUESTS_PER_DAY)
    }

    pub fn display_status(&self) {
        println!("\n📊 OpenDota API Usage");
        println!(
            "   Daily:  {}/{} requests",
            self.requests_today, MAX_REQUESTS_PER_DAY
        );
        println!("   Remaining: {} requests today\n", self.get_remaining());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_allows_requests() {
        let log = RequestLog::new();
        assert!(log.can_make_request());
        assert_eq!(log.get_remaining(), MAX_REQUESTS_PER_DAY);
    }

    #[test]
    fn exhausted_daily_budget_blocks_requests() {
        let mut log = RequestLog::new();
        log.requests_today = MAX_REQUESTS_PER_DAY;
        assert!(!log.can_make_request());
        assert_eq!(log.get_remaining(), 0);
    }

    #[test]
    fn record_request_counts_both_windows() {
        let mut log = RequestLog::new();
        log.record_request();
        log.record_request();
        assert_eq!(log.requests_today, 2);
        assert_eq!(log.requests_this_minute, 2);
    }
}
