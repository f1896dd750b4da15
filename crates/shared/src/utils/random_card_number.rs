use crate::abstract_trait::random::RandomSource;
use rand::{Rng, rng};

pub const DIGITS: &str = "0123456789";
pub const CARD_NUMBER_LENGTH: usize = 16;
pub const CVV_LENGTH: usize = 3;

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn digit(&self) -> u8 {
        rng().random_range(0..10)
    }
}

/// Builds an `n` character string, one independent draw per character.
pub fn generate_digits(n: usize, source: &dyn RandomSource) -> String {
    (0..n)
        .map(|_| char::from(b'0' + source.digit() % 10))
        .collect()
}
