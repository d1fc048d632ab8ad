use crate::{
    error::{Result, TournamentError},
    models::{ByeRecipient, Pairing, PlayerStanding, RoundPairings},
    standings::StandingsStore,
};
use itertools::Itertools;
use std::collections::HashSet;

/// Produces next-round pairings from the current standings.
pub struct PairingEngine<'a> {
    store: &'a StandingsStore<'a>,
}

impl<'a> PairingEngine<'a> {
    pub fn new(store: &'a StandingsStore<'a>) -> Self {
        PairingEngine { store }
    }

    /// Pairs adjacent players in standings order so roughly
    /// equal-strength opponents meet. With an odd field the
    /// lowest-ranked player without a prior bye is awarded one before
    /// the rest are paired; recording that bye is the only mutation
    /// this method performs.
    ///
    /// Pairing does not avoid rematches. A rematch produced here is
    /// rejected later, when the result is reported.
    pub async fn swiss_pairings(&self) -> Result<RoundPairings> {
        let mut standings = self.store.player_standings().await?;

        let bye = if standings.len() % 2 == 1 {
            let awarded = self.store.players_with_byes().await?;
            let position = select_bye_recipient(&standings, &awarded)?;
            let recipient = standings.remove(position);
            self.store.award_bye(recipient.id).await?;

            Some(ByeRecipient {
                id: recipient.id,
                name: recipient.name,
            })
        } else {
            None
        };

        Ok(RoundPairings {
            bye,
            pairs: pair_adjacent(standings),
        })
    }
}

/// Index of the lowest-ranked player who has not had a bye yet.
/// Errors when every player in the field already received one; a
/// second bye is never awarded.
fn select_bye_recipient(
    standings: &[PlayerStanding],
    awarded: &HashSet<i64>,
) -> Result<usize> {
    standings
        .iter()
        .rposition(|standing| !awarded.contains(&standing.id))
        .ok_or(TournamentError::ByesExhausted)
}

fn pair_adjacent(standings: Vec<PlayerStanding>) -> Vec<Pairing> {
    standings
        .into_iter()
        .tuples()
        .map(|(first, second)| Pairing {
            first_id: first.id,
            first_name: first.name,
            second_id: second.id,
            second_name: second.name,
        })
        .collect()
}
