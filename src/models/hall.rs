use serde::Serialize;
use validator::Validate;

use crate::error::LedgerError;

/// Наибольшее допустимое число мест в зале
pub const MAX_TOTAL_SEATS: u32 = 1_000_000;

/// Размеры зала. Не меняются после создания.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Validate)]
pub struct Hall {
    #[validate(range(min = 1))]
    rows: i32,
    #[validate(range(min = 1))]
    seats_per_row: i32,
    #[serde(skip)]
    total_seats: u32,
}

impl Hall {
    pub fn new(rows: i32, seats_per_row: i32) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidConfiguration { rows, seats_per_row };

        let mut hall = Hall { rows, seats_per_row, total_seats: 0 };
        hall.validate().map_err(|_| invalid())?;

        let total = rows.checked_mul(seats_per_row).ok_or_else(invalid)?;
        let total = u32::try_from(total).map_err(|_| invalid())?;
        if total > MAX_TOTAL_SEATS {
            return Err(invalid());
        }

        hall.total_seats = total;
        Ok(hall)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> i32 {
        self.seats_per_row
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Передние ряды: 1..=rows/2
    pub fn front_rows(&self) -> i32 {
        self.rows / 2
    }

    pub fn back_rows(&self) -> i32 {
        self.rows - self.front_rows()
    }

    pub fn is_front_row(&self, row: i32) -> bool {
        row <= self.front_rows()
    }

    pub fn contains(&self, row: i32, seat: i32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.seats_per_row).contains(&seat)
    }
}
