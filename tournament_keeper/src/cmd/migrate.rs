use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::database;

/// Create the tournament schema. Safe to rerun.
#[derive(Debug, Args)]
pub struct MigrateArgs {}

pub async fn run(_args: MigrateArgs) -> Result<()> {
    let pool = connect_from_env().await?;

    database::create_schema(&pool).await?;

    Ok(())
}
