//! Serialization and deserialization for card types.
//!
//! A cell serializes as a bare integer or the literal `"FREE"`; a card as
//! five rows of five cells. This is both the wire form and the store's
//! textual form, so round-trip fidelity (FREE included) is load-bearing.

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::card::{Card, Cell, GRID_SIZE};

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Free => serializer.serialize_str("FREE"),
            Cell::Number(n) => serializer.serialize_u8(*n),
        }
    }
}

struct CellVisitor;

impl Visitor<'_> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a card number or the string \"FREE\"")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Cell, E>
    where
        E: serde::de::Error,
    {
        u8::try_from(v)
            .map(Cell::Number)
            .map_err(|_| E::custom(format!("card number out of range: {v}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Cell, E>
    where
        E: serde::de::Error,
    {
        u8::try_from(v)
            .map(Cell::Number)
            .map_err(|_| E::custom(format!("card number out of range: {v}")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Cell, E>
    where
        E: serde::de::Error,
    {
        if v == "FREE" {
            Ok(Cell::Free)
        } else {
            Err(E::custom(format!("invalid cell token: {v:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellVisitor)
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(GRID_SIZE))?;
        for r in 0..GRID_SIZE {
            let row: Vec<Cell> = self.row(r).to_vec();
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

struct CardVisitor;

impl<'de> Visitor<'de> for CardVisitor {
    type Value = Card;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {GRID_SIZE}x{GRID_SIZE} grid of cells")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Card, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(GRID_SIZE);
        while let Some(row) = seq.next_element::<Vec<Cell>>()? {
            rows.push(row);
        }
        Card::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CardVisitor)
    }
}
