//! Card repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::adapters::cards_sea as cards_adapter;
use crate::adapters::cards_sea::CardCreate;
use crate::domain::Card;
use crate::entities::cards;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A stored card in domain terms: the grid is parsed, not raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCard {
    pub id: String,
    pub event: String,
    pub sheet: i32,
    pub position: i32,
    pub grid: Card,
    pub round: i32,
    pub prize: String,
    pub used: bool,
}

impl StoredCard {
    fn try_from_model(model: cards::Model) -> Result<Self, DomainError> {
        let grid = Card::from_store_str(&model.grid)?;
        Ok(Self {
            id: model.id,
            event: model.event,
            sheet: model.sheet,
            position: model.position,
            grid,
            round: model.round,
            prize: model.prize,
            used: model.used,
        })
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: &str,
) -> Result<Option<StoredCard>, DomainError> {
    let model = cards_adapter::find_by_id(conn, card_id).await?;
    model.map(StoredCard::try_from_model).transpose()
}

pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<StoredCard, DomainError> {
    let model = cards_adapter::create_card(conn, dto).await?;
    StoredCard::try_from_model(model)
}

pub async fn save_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: Vec<CardCreate>,
) -> Result<u64, DomainError> {
    Ok(cards_adapter::create_cards(conn, dtos).await?)
}

pub async fn purge_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    event: &str,
) -> Result<u64, DomainError> {
    Ok(cards_adapter::purge_event(conn, event).await?)
}

pub async fn mark_used<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: &str,
) -> Result<(), DomainError> {
    cards_adapter::mark_used(conn, card_id)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => DomainError::not_found(
                NotFoundKind::Card,
                format!("Card '{card_id}' not found"),
            ),
            other => other.into(),
        })
}

/// Unused cards ordered by (sheet, position).
///
/// A row whose stored grid fails to parse is skipped with a diagnostic
/// instead of failing the whole listing; one corrupt card must not take a
/// round down.
pub async fn list_unused<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round: Option<i32>,
) -> Result<Vec<StoredCard>, DomainError> {
    let models = cards_adapter::list_unused(conn, round).await?;

    let mut out = Vec::with_capacity(models.len());
    for model in models {
        let id = model.id.clone();
        match StoredCard::try_from_model(model) {
            Ok(card) => out.push(card),
            Err(e) => warn!(card_id = %id, error = %e, "skipping card with unparsable grid"),
        }
    }
    Ok(out)
}

pub async fn list_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<String>, DomainError> {
    Ok(cards_adapter::list_events(conn).await?)
}
