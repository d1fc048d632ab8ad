pub mod count;
pub mod migrate;
pub mod pair;
pub mod register;
pub mod report;
pub mod reset;
pub mod simulate;
pub mod standings;

use anyhow::{Context, Result};
use clap::ValueEnum;
use sqlx::{postgres::Postgres, Pool};
use std::env;
use tournament_keeper_libs::database;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    Players,
    Matches,
    Byes,
}

/// Connection pool from the DATABASE_URL environment variable, shared
/// by every subcommand.
pub async fn connect_from_env() -> Result<Pool<Postgres>> {
    let database_url: String = env::var("DATABASE_URL").with_context(|| {
        let message = "DATABASE_URL must be configured.";
        tracing::error!(message);
        message
    })?;

    let pool = database::connect(&database_url).await.with_context(|| {
        let message = "Failed to create database connection pool.";
        tracing::error!(message);
        message
    })?;

    Ok(pool)
}
