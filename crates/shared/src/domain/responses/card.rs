use crate::model::card::CardModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: i32,
    pub account_id: i32,
    pub card_number: String,
    pub expiration_date: String,
    pub card_holder: String,
    pub cvv: String,
}

impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            card_number: model.card_number,
            expiration_date: model.expiration_date.to_rfc3339(),
            card_holder: model.card_holder,
            cvv: model.cvv,
        }
    }
}
