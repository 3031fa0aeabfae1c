//! Write DTOs for the cards adapter.

/// Everything needed to insert one card row.
#[derive(Debug, Clone)]
pub struct CardCreate {
    pub id: String,
    pub event: String,
    pub sheet: i32,
    pub position: i32,
    pub grid: String,
    pub round: i32,
    pub prize: String,
}

impl CardCreate {
    pub fn new(
        id: impl Into<String>,
        event: impl Into<String>,
        sheet: i32,
        position: i32,
        grid: impl Into<String>,
        round: i32,
    ) -> Self {
        Self {
            id: id.into(),
            event: event.into(),
            sheet,
            position,
            grid: grid.into(),
            round,
            prize: String::new(),
        }
    }

    pub fn with_prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }
}
