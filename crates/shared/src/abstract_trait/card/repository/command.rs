use crate::{
    errors::RepositoryError,
    model::card::{CardModel, NewCard},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardCommandRepositoryTrait {
    /// Inserts and commits. A duplicate card number surfaces as
    /// [`RepositoryError::AlreadyExists`].
    async fn create(&self, card: &NewCard) -> Result<CardModel, RepositoryError>;

    /// Deletes exactly this record and commits.
    async fn delete(&self, card: &CardModel) -> Result<(), RepositoryError>;
}
