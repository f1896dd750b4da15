use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub id: i32,
    pub account_id: i32,
    pub card_number: String,
    pub expiration_date: DateTime<Utc>,
    pub card_holder: String,
    pub cvv: String,
}

/// A card that has not been persisted yet. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub account_id: i32,
    pub card_number: String,
    pub expiration_date: DateTime<Utc>,
    pub card_holder: String,
    pub cvv: String,
}
