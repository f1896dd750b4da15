mod expiration;
mod gracefull;
mod logs;
mod mark;
mod random_card_number;

pub use self::expiration::{CARD_VALIDITY_DAYS, compute_expiration};
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::random_card_number::{
    CARD_NUMBER_LENGTH, CVV_LENGTH, DIGITS, ThreadRandomSource, generate_digits,
};
