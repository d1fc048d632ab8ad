use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::StandingsStore;

#[derive(Debug, Args)]
pub struct CountArgs {}

pub async fn run(_args: CountArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);

    println!("{}", store.count_players().await?);

    Ok(())
}
