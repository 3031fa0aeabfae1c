//! SeaORM adapter for the card store - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::cards;

pub mod dto;

pub use dto::CardCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: &str,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<cards::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let card_active = cards::ActiveModel {
        id: Set(dto.id),
        event: Set(dto.event),
        sheet: Set(dto.sheet),
        position: Set(dto.position),
        grid: Set(dto.grid),
        round: Set(dto.round),
        prize: Set(dto.prize),
        used: Set(false),
        created_at: Set(now),
    };

    card_active.insert(conn).await
}

/// Bulk insert for provisioning. A no-op for an empty batch.
pub async fn create_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: Vec<CardCreate>,
) -> Result<u64, sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(0);
    }

    let now = time::OffsetDateTime::now_utc();
    let count = dtos.len() as u64;
    let models = dtos.into_iter().map(|dto| cards::ActiveModel {
        id: Set(dto.id),
        event: Set(dto.event),
        sheet: Set(dto.sheet),
        position: Set(dto.position),
        grid: Set(dto.grid),
        round: Set(dto.round),
        prize: Set(dto.prize),
        used: Set(false),
        created_at: Set(now),
    });

    cards::Entity::insert_many(models).exec(conn).await?;
    Ok(count)
}

/// Delete every card of an event; returns the number of rows removed.
pub async fn purge_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    event: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = cards::Entity::delete_many()
        .filter(cards::Column::Event.eq(event))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Flip the used flag. RecordNotFound when the id does not exist.
pub async fn mark_used<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: &str,
) -> Result<(), sea_orm::DbErr> {
    let result = cards::Entity::update_many()
        .col_expr(cards::Column::Used, Expr::value(true))
        .filter(cards::Column::Id.eq(card_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "Card '{card_id}' not found"
        )));
    }
    Ok(())
}

/// Unused cards, optionally restricted to one round, ordered by sheet then
/// position (the order they appear on the printed pages).
pub async fn list_unused<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round: Option<i32>,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    let mut query = cards::Entity::find().filter(cards::Column::Used.eq(false));
    if let Some(round) = round {
        query = query.filter(cards::Column::Round.eq(round));
    }
    query
        .order_by_asc(cards::Column::Sheet)
        .order_by_asc(cards::Column::Position)
        .all(conn)
        .await
}

/// Distinct event names with at least one stored card.
pub async fn list_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<String>, sea_orm::DbErr> {
    cards::Entity::find()
        .select_only()
        .column(cards::Column::Event)
        .distinct()
        .order_by_asc(cards::Column::Event)
        .into_tuple::<String>()
        .all(conn)
        .await
}
