//! Uniqueness-constrained card generation.

use rand::seq::index;
use rand::Rng;

use super::card::{Card, Cell, COLUMN_SPAN, FREE_CELL, GRID_SIZE};
use crate::errors::domain::DomainError;

/// Duplicate-rejection budget: attempts allowed per requested card before
/// generation is reported as exhausted. The addressable space is vast
/// (column 2 alone has C(15,4) * 4! orderings), so this only trips for
/// pathological requests.
pub const ATTEMPTS_PER_CARD: usize = 1_000;

/// Generate one card: each column samples its range without replacement,
/// with FREE at row 2 of column 2. Rows are the transpose of the columns.
pub fn generate_card<R: Rng + ?Sized>(rng: &mut R) -> Card {
    let mut columns = [[Cell::Free; GRID_SIZE]; GRID_SIZE];

    for (c, column) in columns.iter_mut().enumerate() {
        let start = Card::column_range_start(c);
        if c == FREE_CELL.1 {
            let picks = index::sample(rng, COLUMN_SPAN as usize, GRID_SIZE - 1);
            let mut numbers = picks.into_iter().map(|i| start + i as u8);
            for (r, cell) in column.iter_mut().enumerate() {
                if r != FREE_CELL.0 {
                    // sample() yields exactly 4 picks for the 4 number slots
                    *cell = Cell::Number(numbers.next().unwrap_or(start));
                }
            }
        } else {
            let picks = index::sample(rng, COLUMN_SPAN as usize, GRID_SIZE);
            for (r, i) in picks.into_iter().enumerate() {
                column[r] = Cell::Number(start + i as u8);
            }
        }
    }

    Card::from_columns(columns)
}

/// Accumulate `count` pairwise-distinct cards, rejecting exact duplicates.
pub fn generate_unique_set<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Card>, DomainError> {
    generate_unique_set_with_budget(rng, count, count.saturating_mul(ATTEMPTS_PER_CARD))
}

/// Like [`generate_unique_set`], with an explicit total attempt ceiling.
/// Exceeding the ceiling yields `DomainError::GenerationExhausted` instead
/// of looping forever on a combinatorially unreachable target.
pub fn generate_unique_set_with_budget<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max_attempts: usize,
) -> Result<Vec<Card>, DomainError> {
    let mut cards: Vec<Card> = Vec::with_capacity(count);
    let mut attempts = 0usize;

    while cards.len() < count {
        if attempts >= max_attempts {
            return Err(DomainError::generation_exhausted(format!(
                "generated {} of {count} unique cards in {attempts} attempts",
                cards.len()
            )));
        }
        attempts += 1;

        let candidate = generate_card(rng);
        if !cards.contains(&candidate) {
            cards.push(candidate);
        }
    }

    Ok(cards)
}
