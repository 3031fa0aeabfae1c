//! Round lifecycle: hand unused cards to the host, check win conditions.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{evaluate, Card, DrawnNumbers, LabeledCard, WinResult};
use crate::errors::domain::DomainError;
use crate::repos::cards as cards_repo;

/// A card as handed to the game host when a round starts.
#[derive(Debug, Clone, Serialize)]
pub struct RoundCard {
    pub id: String,
    pub sheet: i32,
    pub position: i32,
    pub grid: Card,
}

/// Unused cards for a round, ordered by sheet then position.
pub async fn start_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round: i32,
) -> Result<Vec<RoundCard>, DomainError> {
    let stored = cards_repo::list_unused(conn, Some(round)).await?;
    Ok(stored
        .into_iter()
        .map(|card| RoundCard {
            id: card.id,
            sheet: card.sheet,
            position: card.position,
            grid: card.grid,
        })
        .collect())
}

/// A card submitted for win checking. The grid stays loosely typed so a
/// single malformed card can be isolated instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct CardSubmission {
    pub label: String,
    pub grid: serde_json::Value,
}

/// Evaluate the submitted cards against the drawn numbers.
///
/// Draw tokens must be numbers or strings; anything else rejects the whole
/// request. A card whose grid does not parse as 5x5 is skipped with a
/// diagnostic, mirroring the per-card isolation of round start.
pub fn check_winners(
    drawn_numbers: &[serde_json::Value],
    cards: &[CardSubmission],
) -> Result<WinResult, DomainError> {
    let drawn = DrawnNumbers::from_tokens(drawn_numbers)?;

    let mut valid = Vec::with_capacity(cards.len());
    for submission in cards {
        match Card::from_value(&submission.grid) {
            Ok(card) => valid.push(LabeledCard {
                label: submission.label.clone(),
                card,
            }),
            Err(e) => {
                warn!(label = %submission.label, error = %e, "skipping malformed card");
            }
        }
    }

    Ok(evaluate(&drawn, &valid))
}
