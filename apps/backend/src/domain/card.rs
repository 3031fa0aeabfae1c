//! Core card types: Cell and the 5x5 Card grid.

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

/// Side length of a card grid.
pub const GRID_SIZE: usize = 5;

/// Numbers per column range: column `i` draws from `[1 + 15i, 16 + 15i)`.
pub const COLUMN_SPAN: u8 = 15;

/// Grid coordinates of the FREE cell: row 2 of column 2.
pub const FREE_CELL: (usize, usize) = (2, 2);

/// A single grid cell: a number or the FREE sentinel.
///
/// FREE always counts as hit during evaluation and survives serialization
/// as the literal `"FREE"`, distinguishable from any integer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Free,
    Number(u8),
}

impl Cell {
    /// Canonical string form used for hit comparison against drawn tokens.
    pub fn token(&self) -> Option<String> {
        match self {
            Cell::Free => None,
            Cell::Number(n) => Some(n.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Free => write!(f, "FREE"),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A 5x5 bingo card, stored row-major.
///
/// Equality is grid-for-grid: two cards are the same card iff every cell
/// matches, including the FREE placement.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    rows: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Card {
    /// Inclusive lower bound of column `col`'s number range.
    pub fn column_range_start(col: usize) -> u8 {
        1 + COLUMN_SPAN * col as u8
    }

    /// Build a card from row-major cells, validating the 5x5 shape.
    ///
    /// Only shape is checked here; column-range constraints are a property
    /// of the generator, not of externally supplied cards.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DomainError> {
        if rows.len() != GRID_SIZE || rows.iter().any(|r| r.len() != GRID_SIZE) {
            return Err(DomainError::validation(
                ValidationKind::MalformedCard,
                format!(
                    "card grid must be {GRID_SIZE}x{GRID_SIZE}, got {} row(s)",
                    rows.len()
                ),
            ));
        }

        let mut grid = [[Cell::Free; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                grid[r][c] = cell;
            }
        }
        Ok(Self { rows: grid })
    }

    /// Build a card from column-major samples, transposing into rows.
    /// The generator produces columns; the printed card reads in rows.
    pub(crate) fn from_columns(columns: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut rows = [[Cell::Free; GRID_SIZE]; GRID_SIZE];
        for (c, column) in columns.iter().enumerate() {
            for (r, cell) in column.iter().enumerate() {
                rows[r][c] = *cell;
            }
        }
        Self { rows }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> [Cell; GRID_SIZE] {
        self.rows[row]
    }

    pub fn column(&self, col: usize) -> [Cell; GRID_SIZE] {
        let mut out = [Cell::Free; GRID_SIZE];
        for (r, cell) in out.iter_mut().enumerate() {
            *cell = self.rows[r][col];
        }
        out
    }

    pub fn corners(&self) -> [Cell; 4] {
        let last = GRID_SIZE - 1;
        [
            self.rows[0][0],
            self.rows[0][last],
            self.rows[last][0],
            self.rows[last][last],
        ]
    }

    /// Cells (i, i) for i in 0..5.
    pub fn main_diagonal(&self) -> [Cell; GRID_SIZE] {
        let mut out = [Cell::Free; GRID_SIZE];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = self.rows[i][i];
        }
        out
    }

    /// Cells (i, 4 - i) for i in 0..5.
    pub fn anti_diagonal(&self) -> [Cell; GRID_SIZE] {
        let mut out = [Cell::Free; GRID_SIZE];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = self.rows[i][GRID_SIZE - 1 - i];
        }
        out
    }

    /// Iterate all cells row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Serialized textual form used by the store (round-trippable JSON).
    pub fn to_store_string(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| {
            DomainError::infra(format!("failed to serialize card grid: {e}"))
        })
    }

    /// Parse the store's textual form back into a card.
    pub fn from_store_str(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| {
            DomainError::validation(
                ValidationKind::MalformedCard,
                format!("unparsable card grid: {e}"),
            )
        })
    }

    /// Parse a card out of loosely typed JSON (per-card isolation point for
    /// evaluation requests).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DomainError> {
        let rows: Vec<Vec<Cell>> = serde_json::from_value(value.clone()).map_err(|e| {
            DomainError::validation(
                ValidationKind::MalformedCard,
                format!("unparsable card grid: {e}"),
            )
        })?;
        Self::from_rows(rows)
    }
}
