use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Hero not found: {0}")]
    HeroNotFound(String),

    #[error("{0} is already picked")]
    DuplicatePick(String),

    #[error("A team holds at most 5 heroes")]
    TeamFull,

    #[error("Invalid position: {0}. Use 1-5")]
    InvalidPosition(u8),

    #[error("No hero data in the local snapshot. Run with --refresh to download it.")]
    EmptySnapshot,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
