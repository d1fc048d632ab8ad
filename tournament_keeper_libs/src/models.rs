use chrono::{DateTime, Local};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Local>,
}

/// One row of the derived standings: wins and rounds played both count
/// byes, so the recipient of a bye ranks ahead of players who have not
/// reported a result yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerStanding {
    pub id: i64,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first_id: i64,
    pub first_name: String,
    pub second_id: i64,
    pub second_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByeRecipient {
    pub id: i64,
    pub name: String,
}

/// Next-round assignment: the pairs in standings order, plus the bye
/// recipient when the field was odd.
#[derive(Debug, Serialize)]
pub struct RoundPairings {
    pub bye: Option<ByeRecipient>,
    pub pairs: Vec<Pairing>,
}
