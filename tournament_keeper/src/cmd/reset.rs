use crate::cmd::{connect_from_env, ResetTarget};
use anyhow::Result;
use clap::Args;
use tournament_keeper_libs::StandingsStore;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Tables to clear; clears byes, matches and players when omitted.
    targets: Vec<ResetTarget>,
}

pub async fn run(args: ResetArgs) -> Result<()> {
    let pool = connect_from_env().await?;
    let store = StandingsStore::new(&pool);

    // Byes and matches reference players, so the full reset clears
    // them first. Partial resets take the targets as given and let a
    // foreign key violation surface unchanged.
    let targets = if args.targets.is_empty() {
        vec![ResetTarget::Byes, ResetTarget::Matches, ResetTarget::Players]
    } else {
        args.targets
    };

    for target in targets {
        match target {
            ResetTarget::Byes => store.delete_byes().await?,
            ResetTarget::Matches => store.delete_matches().await?,
            ResetTarget::Players => store.delete_players().await?,
        }
    }

    Ok(())
}
