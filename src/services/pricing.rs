//! pricing.rs
//!
//! Ценовая политика зала.
//!
//! - Малый зал (не больше 60 мест): все билеты по одной цене.
//! - Большой зал: передние ряды дороже задних.
//!
//! Функции чистые и зависят только от размеров зала.

use crate::models::{Hall, SoldTickets};

pub const SMALL_HALL_SEATS: u32 = 60;
pub const SMALL_HALL_TICKET_PRICE: u32 = 10;
pub const FRONT_ROW_TICKET_PRICE: u32 = 10;
pub const BACK_ROW_TICKET_PRICE: u32 = 8;

pub fn is_small_hall(hall: &Hall) -> bool {
    hall.total_seats() <= SMALL_HALL_SEATS
}

/// Цена билета в ряду `row`. Границы ряда здесь не проверяются.
pub fn ticket_price(hall: &Hall, row: i32) -> u32 {
    if is_small_hall(hall) {
        SMALL_HALL_TICKET_PRICE
    } else if hall.is_front_row(row) {
        FRONT_ROW_TICKET_PRICE
    } else {
        BACK_ROW_TICKET_PRICE
    }
}

/// Выручка с уже проданных билетов
pub fn current_income(hall: &Hall, sold: &SoldTickets) -> u64 {
    if is_small_hall(hall) {
        u64::from(sold.total) * u64::from(SMALL_HALL_TICKET_PRICE)
    } else {
        u64::from(sold.front) * u64::from(FRONT_ROW_TICKET_PRICE)
            + u64::from(sold.back) * u64::from(BACK_ROW_TICKET_PRICE)
    }
}

/// Выручка, если будут проданы все места зала
pub fn total_income(hall: &Hall) -> u64 {
    if is_small_hall(hall) {
        return u64::from(hall.total_seats()) * u64::from(SMALL_HALL_TICKET_PRICE);
    }

    // Ряды и места после валидации зала всегда положительные
    let seats_per_row = u64::from(hall.seats_per_row().unsigned_abs());
    let front_rows = u64::from(hall.front_rows().unsigned_abs());
    let back_rows = u64::from(hall.back_rows().unsigned_abs());

    seats_per_row
        * (front_rows * u64::from(FRONT_ROW_TICKET_PRICE)
            + back_rows * u64::from(BACK_ROW_TICKET_PRICE))
}
