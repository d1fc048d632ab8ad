use crate::cmd::connect_from_env;
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::{PairingEngine, StandingsStore};

/// Plays full rounds against the registered field: pair, then report
/// every pair with the higher-seeded side winning. Useful for driving
/// a populated database through a whole tournament.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Number of rounds to play.
    #[arg(long, default_value_t = 3)]
    rounds: u32,
}

pub async fn run(args: SimulateArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);
    let engine = PairingEngine::new(&store);

    for round in 1..=args.rounds {
        tracing::info!("Pairing round {}.", round);
        let pairings = engine.swiss_pairings().await?;

        if let Some(bye) = &pairings.bye {
            tracing::info!("{} ({}) receives a bye this round.", bye.name, bye.id);
        }

        for pair in &pairings.pairs {
            store.report_match(pair.first_id, pair.second_id).await?;
        }

        for row in store.player_standings().await? {
            tracing::info!(
                "{} ({}): {} wins over {} rounds.",
                row.name,
                row.id,
                row.wins,
                row.matches
            );
        }
    }

    Ok(())
}
