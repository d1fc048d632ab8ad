use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::{PairingEngine, StandingsStore};

#[derive(Debug, Args)]
pub struct PairArgs {
    /// Emit the pairings as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

pub async fn run(args: PairArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);
    let engine = PairingEngine::new(&store);

    let round = engine.swiss_pairings().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&round)?);
        return Ok(());
    }

    if let Some(bye) = &round.bye {
        println!("bye: {} ({})", bye.name, bye.id);
    }
    for pair in &round.pairs {
        println!(
            "{} ({}) vs {} ({})",
            pair.first_name, pair.first_id, pair.second_name, pair.second_id
        );
    }

    Ok(())
}
