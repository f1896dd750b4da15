mod api;
mod card;

pub use self::api::ApiResponse;
pub use self::card::CardResponse;
