//! Event provisioning: purge, generate a unique card set, persist it.

use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::info;

use crate::adapters::cards_sea::CardCreate;
use crate::domain::generator;
use crate::errors::domain::DomainError;
use crate::repos::cards as cards_repo;

/// Background colors cycled across the positions of a sheet; the cycle
/// length also fixes how positions map to rounds.
pub const ROUND_COLORS: [&str; 6] = [
    "#90EE90", // light green
    "#FAA500", // orange
    "#ADD8E6", // light blue
    "#FFFF99", // yellow
    "#FFCCCB", // light red
    "#FFFFFF", // white
];

pub const MAX_CARDS_PER_SHEET: u32 = 6;
pub const DEFAULT_CARDS_PER_SHEET: u32 = 5;
pub const DEFAULT_SHEETS: u32 = 10;

/// What to provision for one event. Construction clamps the inputs the
/// same way the print layout does: 1..=6 cards per sheet, at least one
/// sheet.
#[derive(Debug, Clone)]
pub struct ProvisionSpec {
    pub event: String,
    pub cards_per_sheet: u32,
    pub sheets: u32,
    pub prize: String,
}

impl ProvisionSpec {
    pub fn new(event: impl Into<String>, cards_per_sheet: u32, sheets: u32) -> Self {
        Self {
            event: event.into(),
            cards_per_sheet: cards_per_sheet.clamp(1, MAX_CARDS_PER_SHEET),
            sheets: sheets.max(1),
            prize: String::new(),
        }
    }

    /// Prize label stamped on every card of the batch (empty by default).
    pub fn with_prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    pub fn total_cards(&self) -> u32 {
        self.sheets * self.cards_per_sheet
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionSummary {
    pub event: String,
    pub purged: u64,
    pub cards_created: u64,
    pub sheets: u32,
    pub cards_per_sheet: u32,
}

/// Card id: `{event}_F{sheet}C{position}`, both 1-based.
pub fn card_id(event: &str, sheet: u32, position: u32) -> String {
    format!("{event}_F{sheet}C{position}")
}

/// Round for a 1-based sheet position: positions cycle through the color
/// palette, one round per color. Position 0 is treated as position 1.
pub fn round_for_position(position: u32) -> i32 {
    (position.saturating_sub(1) % ROUND_COLORS.len() as u32 + 1) as i32
}

/// How many cards land on each printed row of a sheet: up to three cards
/// fit one row; beyond that the sheet splits into a row of three plus the
/// remainder.
pub fn sheet_rows(cards_per_sheet: u32) -> Vec<u32> {
    if cards_per_sheet <= 3 {
        vec![cards_per_sheet]
    } else {
        vec![3, cards_per_sheet - 3]
    }
}

/// Provision an event: remove its existing cards, generate a fresh unique
/// set, and store one row per (sheet, position).
pub async fn provision_event<C, R>(
    conn: &C,
    rng: &mut R,
    spec: &ProvisionSpec,
) -> Result<ProvisionSummary, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    R: Rng + ?Sized,
{
    let purged = cards_repo::purge_event(conn, &spec.event).await?;
    if purged > 0 {
        info!(event = %spec.event, purged, "removed existing cards before regeneration");
    }

    let total = spec.total_cards() as usize;
    let deck = generator::generate_unique_set(rng, total)?;

    let mut creates = Vec::with_capacity(total);
    for (idx, card) in deck.iter().enumerate() {
        let idx = idx as u32;
        let sheet = idx / spec.cards_per_sheet + 1;
        let position = idx % spec.cards_per_sheet + 1;

        creates.push(
            CardCreate::new(
                card_id(&spec.event, sheet, position),
                spec.event.clone(),
                sheet as i32,
                position as i32,
                card.to_store_string()?,
                round_for_position(position),
            )
            .with_prize(spec.prize.clone()),
        );
    }

    let cards_created = cards_repo::save_all(conn, creates).await?;
    info!(event = %spec.event, cards_created, sheets = spec.sheets, "event provisioned");

    Ok(ProvisionSummary {
        event: spec.event.clone(),
        purged,
        cards_created,
        sheets: spec.sheets,
        cards_per_sheet: spec.cards_per_sheet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_clamps_inputs() {
        let spec = ProvisionSpec::new("Festa", 9, 0);
        assert_eq!(spec.cards_per_sheet, MAX_CARDS_PER_SHEET);
        assert_eq!(spec.sheets, 1);

        let spec = ProvisionSpec::new("Festa", 0, 3);
        assert_eq!(spec.cards_per_sheet, 1);
        assert_eq!(spec.total_cards(), 3);
    }

    #[test]
    fn card_ids_encode_sheet_and_position() {
        assert_eq!(card_id("Festa Junina", 3, 2), "Festa Junina_F3C2");
    }

    #[test]
    fn rounds_cycle_through_the_palette() {
        assert_eq!(round_for_position(1), 1);
        assert_eq!(round_for_position(6), 6);
        assert_eq!(round_for_position(7), 1);
        // Out-of-contract position 0 clamps instead of underflowing
        assert_eq!(round_for_position(0), 1);
    }

    #[test]
    fn spec_carries_an_optional_prize() {
        let spec = ProvisionSpec::new("Festa", 5, 10);
        assert_eq!(spec.prize, "");

        let spec = ProvisionSpec::new("Festa", 5, 10).with_prize("Cesta básica");
        assert_eq!(spec.prize, "Cesta básica");
    }

    #[test]
    fn sheet_rows_split_after_three() {
        assert_eq!(sheet_rows(2), vec![2]);
        assert_eq!(sheet_rows(3), vec![3]);
        assert_eq!(sheet_rows(4), vec![3, 1]);
        assert_eq!(sheet_rows(6), vec![3, 3]);
    }
}
