use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    #[default]
    Available,
    Sold,
}

impl SeatState {
    /// Обозначение места на схеме зала
    pub fn marker(self) -> char {
        match self {
            SeatState::Available => 'S',
            SeatState::Sold => 'B',
        }
    }

    pub fn is_sold(self) -> bool {
        self == SeatState::Sold
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Снимок схемы зала: ряды по порядку, в каждом ряду места по порядку.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    rows: Vec<Vec<SeatState>>,
}

impl SeatMap {
    pub(crate) fn new(rows: Vec<Vec<SeatState>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<SeatState>] {
        &self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Состояние места по номерам с единицы
    pub fn get(&self, row: i32, seat: i32) -> Option<SeatState> {
        let row = usize::try_from(row).ok()?.checked_sub(1)?;
        let seat = usize::try_from(seat).ok()?.checked_sub(1)?;
        self.rows.get(row)?.get(seat).copied()
    }
}
