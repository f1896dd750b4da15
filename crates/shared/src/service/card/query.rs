use crate::{
    abstract_trait::card::{
        repository::query::DynCardQueryRepository, service::query::CardQueryServiceTrait,
    },
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
    service::card::issuance::get_card,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🔍 Fetching card id={id}");

        let card = get_card(id, &self.query).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card retrieved successfully".into(),
            data: CardResponse::from(card),
        })
    }

    async fn find_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<ApiResponse<Vec<CardResponse>>, ServiceError> {
        info!("🔍 Fetching cards for account_id={account_id}");

        let cards = self
            .query
            .find_by_account_id(account_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards for account_id={account_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("✅ Found {} cards for account_id={account_id}", cards.len());

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Cards retrieved successfully".into(),
            data: cards.into_iter().map(CardResponse::from).collect(),
        })
    }
}
