mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::{Config, DEFAULT_CARD_NUMBER_MAX_ATTEMPTS};
