//! Database-backed scenarios covering the standings store and the
//! pairing engine end to end.
//!
//! These tests need a reachable PostgreSQL instance and are ignored by
//! default. Run them with
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored --test-threads=1
//! ```
//!
//! All tests share one database and reset it on entry, hence the
//! single-threaded run.

use std::{collections::HashSet, env};

use sqlx::{postgres::Postgres, Pool};
use tournament_keeper_libs::{database, PairingEngine, StandingsStore, TournamentError};

async fn connect() -> Pool<Postgres> {
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let pool = database::connect(&database_url)
        .await
        .expect("failed to connect to the test database");
    database::create_schema(&pool)
        .await
        .expect("failed to create the tournament schema");

    pool
}

async fn reset(store: &StandingsStore<'_>) {
    store.delete_byes().await.unwrap();
    store.delete_matches().await.unwrap();
    store.delete_players().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn count_is_numeric_zero_after_full_reset() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    assert_eq!(store.count_players().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn players_can_be_registered_and_deleted() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    store.register_player("Markov Chaney").await.unwrap();
    store.register_player("Joe Malik").await.unwrap();
    store.register_player("Mao Tsu-hsi").await.unwrap();
    store.register_player("Atlanta Hope").await.unwrap();
    assert_eq!(store.count_players().await.unwrap(), 4);

    store.delete_players().await.unwrap();
    assert_eq!(store.count_players().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn new_players_appear_in_standings_with_no_activity() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    store.register_player("Melpomene Murray").await.unwrap();
    store.register_player("Randy Schwartz").await.unwrap();

    let standings = store.player_standings().await.unwrap();
    assert_eq!(standings.len(), 2);
    for row in &standings {
        assert_eq!(row.wins, 0);
        assert_eq!(row.matches, 0);
    }

    let names: HashSet<&str> = standings.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, HashSet::from(["Melpomene Murray", "Randy Schwartz"]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn standings_reflect_reported_matches() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    for name in ["Bruno Walton", "Boots O'Neal", "Cathy Burton", "Diane Grant"] {
        store.register_player(name).await.unwrap();
    }
    let ids: Vec<i64> = store
        .player_standings()
        .await
        .unwrap()
        .iter()
        .map(|row| row.id)
        .collect();

    store.report_match(ids[0], ids[1]).await.unwrap();
    store.report_match(ids[2], ids[3]).await.unwrap();

    for row in store.player_standings().await.unwrap() {
        assert_eq!(row.matches, 1);
        if row.id == ids[0] || row.id == ids[2] {
            assert_eq!(row.wins, 1);
        } else {
            assert_eq!(row.wins, 0);
        }
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn rematches_are_rejected_in_both_orders() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    let first = store.register_player("Shaquille O'Neal").await.unwrap();
    let second = store.register_player("Michael Jordan").await.unwrap();

    store.report_match(first.id, second.id).await.unwrap();

    let same_order = store.report_match(first.id, second.id).await;
    assert!(matches!(
        same_order,
        Err(TournamentError::RematchNotAllowed(_, _))
    ));

    let reversed = store.report_match(second.id, first.id).await;
    assert!(matches!(
        reversed,
        Err(TournamentError::RematchNotAllowed(_, _))
    ));

    let standings = store.player_standings().await.unwrap();
    assert_eq!(standings.iter().map(|row| row.wins).sum::<i64>(), 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn a_match_against_oneself_is_rejected() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    let player = store.register_player("Chandra Nalaar").await.unwrap();

    let result = store.report_match(player.id, player.id).await;
    assert!(matches!(result, Err(TournamentError::InvalidMatchup)));
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn players_with_one_win_are_paired_together() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    for name in ["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"] {
        store.register_player(name).await.unwrap();
    }
    let ids: Vec<i64> = store
        .player_standings()
        .await
        .unwrap()
        .iter()
        .map(|row| row.id)
        .collect();

    store.report_match(ids[0], ids[1]).await.unwrap();
    store.report_match(ids[2], ids[3]).await.unwrap();

    let engine = PairingEngine::new(&store);
    let round = engine.swiss_pairings().await.unwrap();

    assert!(round.bye.is_none());
    assert_eq!(round.pairs.len(), 2);

    let actual: HashSet<(i64, i64)> = round
        .pairs
        .iter()
        .map(|pair| {
            (
                pair.first_id.min(pair.second_id),
                pair.first_id.max(pair.second_id),
            )
        })
        .collect();
    let expected = HashSet::from([
        (ids[0].min(ids[2]), ids[0].max(ids[2])),
        (ids[1].min(ids[3]), ids[1].max(ids[3])),
    ]);
    assert_eq!(actual, expected);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn odd_field_rotates_the_bye_and_never_repeats_it() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    for name in [
        "Lionel Messi",
        "Cristiano Ronaldo",
        "Arjen Robben",
        "Zlatan Ibrahimovic",
        "Franz Beckenbauer",
        "Andres Iniesta",
        "James Rodriguez",
        "Manuel Neuer",
        "Sergio Ramos",
    ] {
        store.register_player(name).await.unwrap();
    }

    let engine = PairingEngine::new(&store);
    let mut recipients = HashSet::new();

    for round in 0..3 {
        let pairings = engine.swiss_pairings().await.unwrap();

        let bye = pairings.bye.expect("an odd field must produce a bye");
        assert!(
            recipients.insert(bye.id),
            "player {} received a second bye",
            bye.name
        );
        assert_eq!(pairings.pairs.len(), 4);

        if round == 0 {
            // Before any results the bye goes to the last registration,
            // which then tops the standings with its automatic win.
            assert_eq!(bye.name, "Sergio Ramos");
            let standings = store.player_standings().await.unwrap();
            assert_eq!(standings[0].name, "Sergio Ramos");
        }

        for pair in &pairings.pairs {
            store.report_match(pair.first_id, pair.second_id).await.unwrap();
        }
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn an_even_tournament_runs_for_three_rounds() {
    let pool = connect().await;
    let store = StandingsStore::new(&pool);
    reset(&store).await;

    for index in 1..=8 {
        store.register_player(&format!("P{}", index)).await.unwrap();
    }

    let engine = PairingEngine::new(&store);

    for _ in 0..3 {
        let pairings = engine.swiss_pairings().await.unwrap();
        assert!(pairings.bye.is_none());
        assert_eq!(pairings.pairs.len(), 4);

        for pair in &pairings.pairs {
            store.report_match(pair.first_id, pair.second_id).await.unwrap();
        }
    }

    let standings = store.player_standings().await.unwrap();
    assert_eq!(standings.iter().map(|row| row.wins).sum::<i64>(), 12);
    assert!(standings.iter().all(|row| row.matches == 3));
}
