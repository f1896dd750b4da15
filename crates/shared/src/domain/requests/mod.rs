pub mod card;
pub mod user;

pub use self::card::CreateCardRequest;
pub use self::user::CurrentUser;
