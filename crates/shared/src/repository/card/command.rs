use crate::{
    abstract_trait::card::repository::command::CardCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::card::{CardModel, NewCard},
    utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(&self, card: &NewCard) -> Result<CardModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let created = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (account_id, card_number, expiration_date, card_holder, cvv)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, account_id, card_number, expiration_date, card_holder, cvv
            "#,
        )
        .bind(card.account_id)
        .bind(&card.card_number)
        .bind(card.expiration_date)
        .bind(&card.card_holder)
        .bind(&card.cvv)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match RepositoryError::from(e) {
            RepositoryError::AlreadyExists(constraint) => {
                warn!(
                    "⚠️ Card number {} already taken ({constraint})",
                    mask_card_number(&card.card_number)
                );
                RepositoryError::AlreadyExists(constraint)
            }
            other => {
                error!(
                    "❌ Failed to insert card for account_id {}: {other:?}",
                    card.account_id
                );
                other
            }
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit card insert: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Card stored with id={}", created.id);

        Ok(created)
    }

    async fn delete(&self, card: &CardModel) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(card.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete card id {}: {e:?}", card.id);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            warn!("⚠️ Card id {} vanished before delete", card.id);
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit card delete: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(())
    }
}
