mod cmd;

use crate::cmd::{
    count::{self, CountArgs},
    migrate::{self, MigrateArgs},
    pair::{self, PairArgs},
    register::{self, RegisterArgs},
    report::{self, ReportArgs},
    reset::{self, ResetArgs},
    simulate::{self, SimulateArgs},
    standings::{self, StandingsArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "tournament_keeper")]
#[command(about = "Swiss tournament keeper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Migrate(MigrateArgs),
    Register(RegisterArgs),
    Report(ReportArgs),
    Standings(StandingsArgs),
    Pair(PairArgs),
    Count(CountArgs),
    Reset(ResetArgs),
    Simulate(SimulateArgs),
}

fn main() {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .expect("couldn't parse specified log level")
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(OffsetTime::local_rfc_3339().unwrap());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let runtime = Builder::new_multi_thread().enable_all().build().unwrap();

    match Cli::parse().command {
        Commands::Migrate(args) => runtime.block_on(migrate::run(args)),
        Commands::Register(args) => runtime.block_on(register::run(args)),
        Commands::Report(args) => runtime.block_on(report::run(args)),
        Commands::Standings(args) => runtime.block_on(standings::run(args)),
        Commands::Pair(args) => runtime.block_on(pair::run(args)),
        Commands::Count(args) => runtime.block_on(count::run(args)),
        Commands::Reset(args) => runtime.block_on(reset::run(args)),
        Commands::Simulate(args) => runtime.block_on(simulate::run(args)),
    }
    .expect("command failed");
}
