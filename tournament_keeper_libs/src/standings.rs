use crate::{
    error::{Result, TournamentError},
    models::{Player, PlayerStanding},
};
use sqlx::{
    self,
    postgres::{PgRow, Postgres},
    Pool, Row,
};
use std::collections::HashSet;

/// Persistent record of players, matches and byes. Standings are
/// derived on every query, never cached, so they always reflect the
/// latest reported results.
pub struct StandingsStore<'a> {
    pool: &'a Pool<Postgres>,
}

impl<'a> StandingsStore<'a> {
    pub fn new(pool: &'a Pool<Postgres>) -> Self {
        StandingsStore { pool }
    }

    /// Registers a new player. Duplicate names are allowed; identity
    /// is the generated id.
    pub async fn register_player(&self, name: &str) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (name)
            VALUES ($1)
            RETURNING id, name, created_at;
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        tracing::info!("Player {} registered with id {}.", player.name, player.id);

        Ok(player)
    }

    pub async fn count_players(&self) -> Result<i64> {
        let count: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) FROM players;
            "#,
        )
        .map(|row: PgRow| row.get(0))
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Records a completed match. The unordered pair is checked first
    /// so a rematch comes back as `RematchNotAllowed` rather than a
    /// raw constraint violation; the unique index on the pair still
    /// backs this up at the storage layer.
    pub async fn report_match(&self, winner_id: i64, loser_id: i64) -> Result<()> {
        if winner_id == loser_id {
            return Err(TournamentError::InvalidMatchup);
        }

        let mut tx = self.pool.begin().await?;

        let played: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) FROM matches
            WHERE LEAST(winner_id, loser_id) = LEAST($1, $2)
              AND GREATEST(winner_id, loser_id) = GREATEST($1, $2);
            "#,
        )
        .bind(winner_id)
        .bind(loser_id)
        .map(|row: PgRow| row.get(0))
        .fetch_one(&mut tx)
        .await?;

        if played > 0 {
            tx.rollback().await?;
            return Err(TournamentError::RematchNotAllowed(winner_id, loser_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO matches (winner_id, loser_id)
            VALUES ($1, $2);
            "#,
        )
        .bind(winner_id)
        .bind(loser_id)
        .execute(&mut tx)
        .await;

        if let Err(e) = result {
            tracing::error!(
                "failed to record win for {} over {}: {:?}",
                winner_id,
                loser_id,
                e
            );
            tx.rollback().await?;
            return Err(TournamentError::Database(e));
        }

        tx.commit().await?;
        tracing::info!("Recorded win for {} over {}.", winner_id, loser_id);

        Ok(())
    }

    /// All registered players ordered by wins descending, registration
    /// order breaking ties. A bye counts as one win and one round
    /// played; players with no recorded activity appear with zeros.
    pub async fn player_standings(&self) -> Result<Vec<PlayerStanding>> {
        let standings = sqlx::query_as::<_, PlayerStanding>(
            r#"
            SELECT
                p.id,
                p.name,
                (SELECT COUNT(*) FROM matches m WHERE m.winner_id = p.id)
                    + (SELECT COUNT(*) FROM byes b WHERE b.player_id = p.id) AS wins,
                (SELECT COUNT(*) FROM matches m WHERE m.winner_id = p.id OR m.loser_id = p.id)
                    + (SELECT COUNT(*) FROM byes b WHERE b.player_id = p.id) AS matches
            FROM players p
            ORDER BY wins DESC, p.id ASC;
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(standings)
    }

    pub async fn players_with_byes(&self) -> Result<HashSet<i64>> {
        let awarded: HashSet<i64> = HashSet::from_iter(
            sqlx::query(
                r#"
                SELECT player_id FROM byes;
                "#,
            )
            .map(|row: PgRow| row.get(0))
            .fetch_all(self.pool)
            .await?,
        );

        Ok(awarded)
    }

    /// Records an automatic win for a player left without an opponent.
    /// The primary key on byes enforces at most one per player.
    pub async fn award_bye(&self, player_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO byes (player_id)
            VALUES ($1);
            "#,
        )
        .bind(player_id)
        .execute(self.pool)
        .await?;

        tracing::info!("Awarded a bye to player {}.", player_id);

        Ok(())
    }

    pub async fn delete_players(&self) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM players;
            "#,
        )
        .execute(self.pool)
        .await?;

        tracing::info!("Cleared {} player records.", result.rows_affected());

        Ok(())
    }

    pub async fn delete_matches(&self) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM matches;
            "#,
        )
        .execute(self.pool)
        .await?;

        tracing::info!("Cleared {} match records.", result.rows_affected());

        Ok(())
    }

    pub async fn delete_byes(&self) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM byes;
            "#,
        )
        .execute(self.pool)
        .await?;

        tracing::info!("Cleared {} bye records.", result.rows_affected());

        Ok(())
    }
}
