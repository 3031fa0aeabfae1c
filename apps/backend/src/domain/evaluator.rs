//! Win-condition evaluation against a drawn-number set.
//!
//! Evaluation is a pure function of (drawn set, card list), recomputed from
//! scratch on every call. All structural checks are independent: one card
//! can be a corner winner, a row winner, and still not be full.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::card::{Card, Cell, GRID_SIZE};
use crate::errors::domain::{DomainError, ValidationKind};

/// Drawn numbers, normalized to canonical string tokens.
///
/// Drawn numbers may arrive as numeric or textual JSON tokens; both a cell
/// value and a drawn token are rendered to the same string form before
/// comparison, so `31` and `"31"` hit the same cell.
#[derive(Debug, Clone, Default)]
pub struct DrawnNumbers(HashSet<String>);

impl DrawnNumbers {
    /// Build from loose JSON tokens. Anything other than a number or a
    /// string is rejected as invalid draw input.
    pub fn from_tokens(tokens: &[serde_json::Value]) -> Result<Self, DomainError> {
        let mut set = HashSet::with_capacity(tokens.len());
        for token in tokens {
            match token {
                serde_json::Value::Number(n) => {
                    set.insert(n.to_string());
                }
                serde_json::Value::String(s) => {
                    set.insert(s.clone());
                }
                other => {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidDrawInput,
                        format!("drawn token is not a number or string: {other}"),
                    ));
                }
            }
        }
        Ok(Self(set))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// FREE always hits; numbers hit on canonical string equality.
    pub fn hits(&self, cell: Cell) -> bool {
        match cell.token() {
            None => true,
            Some(token) => self.0.contains(&token),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for DrawnNumbers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A card submitted for evaluation, tagged with the label the host uses to
/// announce winners (typically the sheet number).
#[derive(Debug, Clone)]
pub struct LabeledCard {
    pub label: String,
    pub card: Card,
}

/// A pattern win: which card, and where on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternHit {
    pub label: String,
    pub position: String,
}

/// Aggregate near-win counters. Mutually exclusive with each other and
/// with full cards: a card is hot (one short) or warm (two short), never
/// both, and never once full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearWinTally {
    #[serde(rename = "quentes")]
    pub hot: u32,
    #[serde(rename = "mornas")]
    pub warm: u32,
}

/// Classification of every supplied card into zero-or-more pattern
/// categories, in the round host's wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    #[serde(rename = "quatro_cantos")]
    pub four_corners: Vec<String>,
    #[serde(rename = "linhas")]
    pub rows: Vec<PatternHit>,
    #[serde(rename = "colunas")]
    pub columns: Vec<PatternHit>,
    #[serde(rename = "diagonais")]
    pub diagonals: Vec<PatternHit>,
    #[serde(rename = "cartela_cheia")]
    pub full_cards: Vec<String>,
    pub status: NearWinTally,
}

/// Label letter for column `col`.
///
/// Deliberately `'A' + index` ("Column A".."Column E"), not the B-I-N-G-O
/// letters: this preserves the behavior the game hosts already announce.
fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

fn all_hit(drawn: &DrawnNumbers, cells: &[Cell]) -> bool {
    cells.iter().all(|cell| drawn.hits(*cell))
}

/// Evaluate every card against the drawn set.
pub fn evaluate(drawn: &DrawnNumbers, cards: &[LabeledCard]) -> WinResult {
    let mut result = WinResult::default();

    for entry in cards {
        let card = &entry.card;
        let label = &entry.label;

        if all_hit(drawn, &card.corners()) {
            result.four_corners.push(label.clone());
        }

        for i in 0..GRID_SIZE {
            if all_hit(drawn, &card.row(i)) {
                result.rows.push(PatternHit {
                    label: label.clone(),
                    position: format!("Row {}", i + 1),
                });
            }
            if all_hit(drawn, &card.column(i)) {
                result.columns.push(PatternHit {
                    label: label.clone(),
                    position: format!("Column {}", column_letter(i)),
                });
            }
        }

        if all_hit(drawn, &card.main_diagonal()) {
            result.diagonals.push(PatternHit {
                label: label.clone(),
                position: "Main Diagonal".to_string(),
            });
        }
        if all_hit(drawn, &card.anti_diagonal()) {
            result.diagonals.push(PatternHit {
                label: label.clone(),
                position: "Secondary Diagonal".to_string(),
            });
        }

        let missing = card
            .cells()
            .filter(|cell| *cell != Cell::Free && !drawn.hits(*cell))
            .count();

        match missing {
            0 => result.full_cards.push(label.clone()),
            1 => result.status.hot += 1,
            2 => result.status.warm += 1,
            _ => {}
        }
    }

    result
}
