pub mod database;
pub mod error;
pub mod models;
pub mod pairing;
pub mod standings;

pub use error::TournamentError;
pub use pairing::PairingEngine;
pub use standings::StandingsStore;
