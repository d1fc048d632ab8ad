use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::StandingsStore;

#[derive(Debug, Args)]
pub struct StandingsArgs {
    /// Emit the standings as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

pub async fn run(args: StandingsArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);

    let standings = store.player_standings().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    println!("{:>6}  {:<24} {:>4} {:>7}", "id", "name", "wins", "rounds");
    for row in &standings {
        println!(
            "{:>6}  {:<24} {:>4} {:>7}",
            row.id, row.name, row.wins, row.matches
        );
    }

    Ok(())
}
