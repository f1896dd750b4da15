use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel, utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                c.id,
                c.account_id,
                c.card_number,
                c.expiration_date,
                c.card_holder,
                c.cvv
            FROM cards c
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card by ID {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                c.id,
                c.account_id,
                c.card_number,
                c.expiration_date,
                c.card_holder,
                c.cvv
            FROM cards c
            WHERE c.card_number = $1
            "#,
        )
        .bind(card_number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch card by number {}: {e:?}",
                mask_card_number(card_number)
            );
            RepositoryError::from(e)
        })
    }

    async fn find_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                c.id,
                c.account_id,
                c.card_number,
                c.expiration_date,
                c.card_holder,
                c.cvv
            FROM cards c
            WHERE c.account_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(account_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cards for account_id {account_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
