use crate::error::Result;
use sqlx::{
    postgres::{PgPoolOptions, Postgres},
    Pool,
};

const MAX_CONNECTIONS: u32 = 5;

pub async fn connect(database_url: &str) -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Creates the tournament schema. Idempotent, so it is safe to run
/// against an already provisioned database.
///
/// The unique index over the unordered (winner, loser) pair is the
/// storage-level rematch guard; `report_match` also pre-checks so the
/// caller gets a typed error instead of a constraint violation.
pub async fn create_schema(pool: &Pool<Postgres>) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        "#,
    )
    .execute(&mut tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matches (
            winner_id BIGINT NOT NULL REFERENCES players (id),
            loser_id BIGINT NOT NULL REFERENCES players (id),
            reported_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CHECK (winner_id <> loser_id)
        );
        "#,
    )
    .execute(&mut tx)
    .await?;

    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS matches_unordered_pair
        ON matches (LEAST(winner_id, loser_id), GREATEST(winner_id, loser_id));
        "#,
    )
    .execute(&mut tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS byes (
            player_id BIGINT PRIMARY KEY REFERENCES players (id),
            awarded_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        "#,
    )
    .execute(&mut tx)
    .await?;

    tx.commit().await?;
    tracing::info!("Tournament schema is in place.");

    Ok(())
}
