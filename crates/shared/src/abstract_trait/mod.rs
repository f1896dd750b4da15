pub mod card;
pub mod clock;
pub mod random;
pub mod user;
