//! ledger.rs
//!
//! Состояние зала: схема мест, продажа билетов и статистика продаж.
//!
//! Место переходит из `Available` в `Sold` только через успешный
//! `book_seat` и обратно уже не возвращается.

use tracing::{debug, info};

use crate::error::LedgerError;
use crate::models::{Hall, SeatMap, SeatState, SoldTickets, Statistics};
use crate::services::pricing;

#[derive(Debug, Clone)]
pub struct SeatLedger {
    hall: Hall,
    // Места построчно, индекс (row - 1) * seats_per_row + (seat - 1)
    seats: Vec<SeatState>,
}

impl SeatLedger {
    pub fn new(rows: i32, seats_per_row: i32) -> Result<Self, LedgerError> {
        let hall = Hall::new(rows, seats_per_row)?;
        let seats = vec![SeatState::Available; hall.total_seats() as usize];

        info!(rows, seats_per_row, total_seats = hall.total_seats(), "Hall created");
        Ok(Self { hall, seats })
    }

    pub fn hall(&self) -> &Hall {
        &self.hall
    }

    /// Снимок схемы зала для отображения
    pub fn seat_map(&self) -> SeatMap {
        let per_row = self.seats_per_row();
        SeatMap::new(self.seats.chunks(per_row).map(<[SeatState]>::to_vec).collect())
    }

    /// Продает билет на место и возвращает его цену.
    ///
    /// Сначала проверяются границы зала, затем занятость места.
    /// При ошибке схема зала не меняется.
    pub fn book_seat(&mut self, row: i32, seat: i32) -> Result<u32, LedgerError> {
        let index = self.index(row, seat).inspect_err(|e| debug!(%e, "Booking rejected"))?;

        if self.seats[index].is_sold() {
            let err = LedgerError::SeatAlreadySold { row, seat };
            debug!(%err, "Booking rejected");
            return Err(err);
        }

        self.seats[index] = SeatState::Sold;
        let price = pricing::ticket_price(&self.hall, row);

        info!(row, seat, price, "Ticket sold");
        Ok(price)
    }

    /// Цена билета в ряду, без продажи
    pub fn ticket_price(&self, row: i32) -> Result<u32, LedgerError> {
        if !(1..=self.hall.rows()).contains(&row) {
            return Err(LedgerError::RowOutOfRange { row });
        }
        Ok(pricing::ticket_price(&self.hall, row))
    }

    pub fn sold_tickets(&self) -> SoldTickets {
        let mut sold = SoldTickets::default();
        let front_rows = self.hall.front_rows() as usize;

        for (row_index, row) in self.seats.chunks(self.seats_per_row()).enumerate() {
            let count = row.iter().filter(|s| s.is_sold()).count() as u32;
            if row_index < front_rows {
                sold.front += count;
            } else {
                sold.back += count;
            }
        }

        sold.total = sold.front + sold.back;
        sold
    }

    pub fn statistics(&self) -> Statistics {
        let tickets = self.sold_tickets();

        Statistics {
            tickets,
            percentage_sold: percentage(tickets.total, self.hall.total_seats()),
            current_income: pricing::current_income(&self.hall, &tickets),
            total_income: pricing::total_income(&self.hall),
        }
    }

    fn seats_per_row(&self) -> usize {
        self.hall.seats_per_row() as usize
    }

    fn index(&self, row: i32, seat: i32) -> Result<usize, LedgerError> {
        if !self.hall.contains(row, seat) {
            return Err(LedgerError::SeatOutOfRange { row, seat });
        }
        Ok((row - 1) as usize * self.seats_per_row() + (seat - 1) as usize)
    }
}

/// `sold * 100 / total` с двумя знаками, половина округляется вверх
fn percentage(sold: u32, total: u32) -> String {
    let scaled = u64::from(sold) * 10_000;
    let total = u64::from(total);

    let mut hundredths = scaled / total;
    if (scaled % total) * 2 >= total {
        hundredths += 1;
    }
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
