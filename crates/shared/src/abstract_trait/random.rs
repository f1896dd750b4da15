use std::sync::Arc;

pub type DynRandomSource = Arc<dyn RandomSource>;

/// Source of uniformly distributed decimal digits.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..=9`.
    fn digit(&self) -> u8;
}
