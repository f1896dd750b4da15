use crate::{
    abstract_trait::{
        card::{
            repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
            service::command::CardCommandServiceTrait,
        },
        clock::DynClock,
        random::DynRandomSource,
        user::repository::query::DynUserQueryRepository,
    },
    domain::{
        requests::{CreateCardRequest, CurrentUser},
        responses::{ApiResponse, CardResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::card::NewCard,
    service::card::issuance::{allocate_unique_card_number, delete_card, get_user_fullname},
    utils::{CVV_LENGTH, compute_expiration, generate_digits, mask_card_number},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub const USER_NOT_FOUND: &str = "User not found!";

/// Inserts attempted when the unique constraint rejects a number that passed
/// the pre-check.
pub const CARD_INSERT_ATTEMPTS: u32 = 3;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
    user_query: DynUserQueryRepository,
    random: DynRandomSource,
    clock: DynClock,
    max_number_attempts: u32,
}

impl CardCommandService {
    pub fn new(
        query: DynCardQueryRepository,
        command: DynCardCommandRepository,
        user_query: DynUserQueryRepository,
        random: DynRandomSource,
        clock: DynClock,
        max_number_attempts: u32,
    ) -> Self {
        Self {
            query,
            command,
            user_query,
            random,
            clock,
            max_number_attempts,
        }
    }

    fn draft_card(&self, account_id: i32, card_number: String, card_holder: &str) -> NewCard {
        NewCard {
            account_id,
            card_number,
            expiration_date: compute_expiration(self.clock.as_ref()),
            card_holder: card_holder.to_string(),
            cvv: generate_digits(CVV_LENGTH, self.random.as_ref()),
        }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(
        &self,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("🆕 Issuing card for account_id={}", req.account_id);

        let current_user = CurrentUser::new(req.username.clone());

        let user = get_user_fullname(&current_user, &self.user_query)
            .await?
            .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.to_string()))?;

        for attempt in 1..=CARD_INSERT_ATTEMPTS {
            let card_number = allocate_unique_card_number(
                &self.query,
                self.random.as_ref(),
                self.max_number_attempts,
            )
            .await?;

            let draft = self.draft_card(req.account_id, card_number, &user.fullname);

            match self.command.create(&draft).await {
                Ok(card) => {
                    info!(
                        "✅ Card id={} issued as {}",
                        card.id,
                        mask_card_number(&card.card_number)
                    );

                    return Ok(ApiResponse {
                        status: "success".into(),
                        message: "✅ Card created successfully!".into(),
                        data: CardResponse::from(card),
                    });
                }
                Err(RepositoryError::AlreadyExists(constraint)) => {
                    warn!(
                        "🔁 Insert rejected by {constraint}, retrying ({attempt}/{CARD_INSERT_ATTEMPTS})"
                    );
                }
                Err(e) => {
                    error!(
                        "💥 Failed to create card for account_id {}: {e:?}",
                        req.account_id
                    );
                    return Err(ServiceError::Repo(e));
                }
            }
        }

        Err(ServiceError::RetryExhausted(CARD_INSERT_ATTEMPTS))
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🧨 Deleting card id={id}");

        delete_card(id, &self.query, &self.command).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "🧨 Card deleted!".into(),
            data: true,
        })
    }
}
