use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("players {0} and {1} have already played each other")]
    RematchNotAllowed(i64, i64),
    #[error("a match needs two distinct players")]
    InvalidMatchup,
    #[error("every registered player has already received a bye")]
    ByesExhausted,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
