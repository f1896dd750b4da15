//! Fixtures shared by the crate's tests.

use crate::{
    abstract_trait::{
        card::repository::{command::CardCommandRepositoryTrait, query::CardQueryRepositoryTrait},
        random::RandomSource,
    },
    errors::RepositoryError,
    model::{
        card::{CardModel, NewCard},
        user::UserModel,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use sqlx::error::{DatabaseError, ErrorKind};
use std::{
    borrow::Cow,
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock frozen at a fixed instant; defaults to [`fixture_timestamp`].
pub(crate) struct FixtureClock(pub(crate) DateTime<Utc>);

impl Default for FixtureClock {
    fn default() -> Self {
        Self(fixture_timestamp())
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Driver error carrying a SQLSTATE code and the violated constraint.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct FakeDatabaseError {
    message: String,
    code: &'static str,
    constraint: Option<&'static str>,
}

impl FakeDatabaseError {
    pub(crate) fn sqlx(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(Self {
            message: format!("violation {code}"),
            code,
            constraint,
        }))
    }
}

impl DatabaseError for FakeDatabaseError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        self.constraint
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            "23505" => ErrorKind::UniqueViolation,
            "23503" => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }
}

pub(crate) fn fixture_card(id: i32, card_number: &str) -> CardModel {
    CardModel {
        id,
        account_id: 1,
        card_number: card_number.to_string(),
        expiration_date: fixture_timestamp(),
        card_holder: "Dimitar Berbatov".to_string(),
        cvv: "123".to_string(),
    }
}

pub(crate) fn fixture_new_card(account_id: i32, card_number: &str) -> NewCard {
    NewCard {
        account_id,
        card_number: card_number.to_string(),
        expiration_date: fixture_timestamp(),
        card_holder: "Dimitar Berbatov".to_string(),
        cvv: "123".to_string(),
    }
}

pub(crate) fn fixture_user() -> UserModel {
    UserModel {
        id: 1,
        username: "testuser".to_string(),
        password: "User!234".to_string(),
        phone_number: "1234567891".to_string(),
        email: "email@email.com".to_string(),
        fullname: "Georgi Stoev".to_string(),
    }
}

/// Replays the digits of the given strings in order.
pub(crate) struct ScriptedDigits {
    digits: Mutex<VecDeque<u8>>,
}

impl ScriptedDigits {
    pub(crate) fn new(sequences: &[&str]) -> Self {
        let digits = sequences
            .iter()
            .flat_map(|s| s.bytes().map(|b| b - b'0'))
            .collect();
        Self {
            digits: Mutex::new(digits),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.digits.lock().unwrap().is_empty()
    }
}

impl RandomSource for ScriptedDigits {
    fn digit(&self) -> u8 {
        self.digits
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted digits ran out")
    }
}

/// Card table with the same uniqueness rule as the `cards_card_number_key`
/// constraint.
#[derive(Default)]
pub(crate) struct InMemoryCardStore {
    cards: Mutex<Vec<CardModel>>,
    next_id: AtomicUsize,
    pub(crate) lookups: AtomicUsize,
    pub(crate) inserts: AtomicUsize,
    pub(crate) deletes: AtomicUsize,
}

impl InMemoryCardStore {
    pub(crate) fn insert(&self, mut card: CardModel) -> CardModel {
        card.id = self.allocate_id();
        self.cards.lock().unwrap().push(card.clone());
        card
    }

    pub(crate) fn len(&self) -> usize {
        self.cards.lock().unwrap().len()
    }

    fn allocate_id(&self) -> i32 {
        i32::try_from(self.next_id.fetch_add(1, Ordering::SeqCst) + 1).expect("id overflow")
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for InMemoryCardStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<CardModel>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.cards.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.card_number == card_number)
            .cloned())
    }

    async fn find_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<CardModel>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for InMemoryCardStore {
    async fn create(&self, card: &NewCard) -> Result<CardModel, RepositoryError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        if self
            .cards
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.card_number == card.card_number)
        {
            return Err(RepositoryError::AlreadyExists(
                "cards_card_number_key".to_string(),
            ));
        }

        Ok(self.insert(CardModel {
            id: 0,
            account_id: card.account_id,
            card_number: card.card_number.clone(),
            expiration_date: card.expiration_date,
            card_holder: card.card_holder.clone(),
            cvv: card.cvv.clone(),
        }))
    }

    async fn delete(&self, card: &CardModel) -> Result<(), RepositoryError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        let mut cards = self.cards.lock().unwrap();
        let before = cards.len();
        cards.retain(|c| c.id != card.id);
        if cards.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
