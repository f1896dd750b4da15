use std::sync::Arc;

use anyhow::Result;
use mockable::DefaultClock;
use shared::{
    abstract_trait::{
        card::{
            repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
            service::{command::DynCardCommandService, query::DynCardQueryService},
        },
        clock::DynClock,
        random::DynRandomSource,
        user::repository::query::DynUserQueryRepository,
    },
    config::ConnectionPool,
    repository::{
        card::{command::CardCommandRepository, query::CardQueryRepository},
        user::query::UserQueryRepository,
    },
    service::card::{command::CardCommandService, query::CardQueryService},
    utils::ThreadRandomSource,
};

#[derive(Clone)]
pub struct CardQueryDeps {
    pub query: DynCardQueryRepository,
    pub service: DynCardQueryService,
}

impl CardQueryDeps {
    pub async fn new(db: ConnectionPool) -> Self {
        let query = Arc::new(CardQueryRepository::new(db)) as DynCardQueryRepository;
        let service = Arc::new(CardQueryService::new(query.clone())) as DynCardQueryService;
        Self { query, service }
    }
}

#[derive(Clone)]
pub struct CardCommandDeps {
    pub command: DynCardCommandRepository,
    pub service: DynCardCommandService,
}

impl CardCommandDeps {
    pub async fn new(
        db: ConnectionPool,
        query: DynCardQueryRepository,
        user_query: DynUserQueryRepository,
        card_number_max_attempts: u32,
    ) -> Self {
        let command = Arc::new(CardCommandRepository::new(db)) as DynCardCommandRepository;
        let random = Arc::new(ThreadRandomSource) as DynRandomSource;
        let clock = Arc::new(DefaultClock) as DynClock;

        let service = Arc::new(
            CardCommandService::new(
                query,
                command.clone(),
                user_query,
                random,
                clock,
                card_number_max_attempts,
            ),
        ) as DynCardCommandService;

        Self { command, service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: DynCardQueryService,
    pub card_command: DynCardCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("card_query", &"DynCardQueryService")
            .field("card_command", &"DynCardCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool, card_number_max_attempts: u32) -> Result<Self> {
        let user_query = Arc::new(UserQueryRepository::new(db.clone())) as DynUserQueryRepository;

        let card_query = CardQueryDeps::new(db.clone()).await;
        let card_command = CardCommandDeps::new(
            db,
            card_query.query.clone(),
            user_query,
            card_number_max_attempts,
        )
        .await;

        Ok(Self {
            card_query: card_query.service,
            card_command: card_command.service,
        })
    }
}
