//! Building blocks for issuing, resolving and removing cards.
//!
//! Every function takes its storage handles explicitly and performs at most
//! one or two repository round-trips. Randomness and time come from injected
//! sources so the results are reproducible under test.

use crate::{
    abstract_trait::{
        card::repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
        random::RandomSource,
        user::repository::query::DynUserQueryRepository,
    },
    domain::requests::CurrentUser,
    errors::{RepositoryError, ServiceError},
    model::{card::CardModel, user::UserModel},
    utils::{CARD_NUMBER_LENGTH, generate_digits, mask_card_number},
};
use tracing::{info, warn};

pub const CARD_NOT_FOUND: &str = "Card not found!";

/// Draws 16-digit candidates until one is not stored yet.
///
/// Each attempt costs exactly one read. Nothing is written, so a concurrent
/// issuer can still claim the same number before the caller inserts it; the
/// `cards_card_number_key` constraint is what finally rejects duplicates.
pub async fn allocate_unique_card_number(
    query: &DynCardQueryRepository,
    source: &dyn RandomSource,
    max_attempts: u32,
) -> Result<String, ServiceError> {
    for attempt in 1..=max_attempts {
        let candidate = generate_digits(CARD_NUMBER_LENGTH, source);

        match query.find_by_card_number(&candidate).await? {
            None => {
                info!(
                    "🎲 Allocated card number {} on attempt {attempt}",
                    mask_card_number(&candidate)
                );
                return Ok(candidate);
            }
            Some(_) => {
                warn!(
                    "🔁 Card number {} already issued, drawing again ({attempt}/{max_attempts})",
                    mask_card_number(&candidate)
                );
            }
        }
    }

    Err(ServiceError::RetryExhausted(max_attempts))
}

pub async fn get_card(id: i32, query: &DynCardQueryRepository) -> Result<CardModel, ServiceError> {
    match query.find_by_id(id).await? {
        Some(card) => Ok(card),
        None => {
            warn!("🔍 Card id={id} not found");
            Err(ServiceError::NotFound(CARD_NOT_FOUND.to_string()))
        }
    }
}

/// Resolves the card first; a missing id never reaches the command side.
pub async fn delete_card(
    id: i32,
    query: &DynCardQueryRepository,
    command: &DynCardCommandRepository,
) -> Result<CardModel, ServiceError> {
    let card = get_card(id, query).await?;

    command.delete(&card).await.map_err(|e| match e {
        RepositoryError::NotFound => {
            warn!("🔍 Card id={id} was removed before it could be deleted");
            ServiceError::NotFound(CARD_NOT_FOUND.to_string())
        }
        other => ServiceError::Repo(other),
    })?;

    info!("🧨 Card id={id} deleted");

    Ok(card)
}

/// `Ok(None)` when no user carries that username.
pub async fn get_user_fullname(
    current_user: &CurrentUser,
    users: &DynUserQueryRepository,
) -> Result<Option<UserModel>, ServiceError> {
    let user = users.find_by_username(&current_user.username).await?;

    if user.is_none() {
        warn!("👤 No user named {}", current_user.username);
    }

    Ok(user)
}
