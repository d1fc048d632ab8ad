use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::StandingsStore;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Id of the winning player.
    winner: i64,
    /// Id of the losing player.
    loser: i64,
}

pub async fn run(args: ReportArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);

    store.report_match(args.winner, args.loser).await?;
    println!("recorded win for {} over {}", args.winner, args.loser);

    Ok(())
}
