use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::StandingsStore;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name; duplicates are allowed.
    name: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("player name must not be blank");
    }

    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);

    let player = store.register_player(name).await?;
    println!("{} registered with id {}", player.name, player.id);

    Ok(())
}
