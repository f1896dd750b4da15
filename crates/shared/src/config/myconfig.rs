use anyhow::{Context, Result, anyhow};

pub const DEFAULT_CARD_NUMBER_MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub card_number_max_attempts: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;

        let run_migrations = parse_bool("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let card_number_max_attempts = match std::env::var("CARD_NUMBER_MAX_ATTEMPTS") {
            Ok(raw) => parse_attempts(&raw)?,
            Err(_) => DEFAULT_CARD_NUMBER_MAX_ATTEMPTS,
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
            card_number_max_attempts,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_attempts(value: &str) -> Result<u32> {
    let attempts = value
        .parse::<u32>()
        .context("CARD_NUMBER_MAX_ATTEMPTS must be a valid u32 integer")?;

    if attempts == 0 {
        return Err(anyhow!("CARD_NUMBER_MAX_ATTEMPTS must be at least 1"));
    }

    Ok(attempts)
}
