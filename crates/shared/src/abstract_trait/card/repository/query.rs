use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<CardModel>, RepositoryError>;
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError>;
    async fn find_by_account_id(&self, account_id: i32)
    -> Result<Vec<CardModel>, RepositoryError>;
}
