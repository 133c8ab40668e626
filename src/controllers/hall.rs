//! hall.rs
//!
//! Запрос размеров зала при старте.

use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use tracing::{info, warn};

use super::console::{Console, NumberInput};
use crate::config::HallPreset;
use crate::services::SeatLedger;

pub const INVALID_NUMBER: &str = "Invalid number, please enter a valid number";
pub const NOT_POSITIVE: &str = "Rows and seats must be greater than 0";
pub const HALL_TOO_LARGE: &str = "The hall is too large, please enter smaller numbers";

/// Создает зал по заданным в конфигурации размерам или спрашивает их.
///
/// `None` - ввод закончился раньше, чем были получены размеры.
pub async fn request_hall<R, W>(
    console: &mut Console<R, W>,
    preset: &HallPreset,
) -> io::Result<Option<SeatLedger>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some((rows, seats_per_row)) = preset.dimensions() {
        match SeatLedger::new(rows, seats_per_row) {
            Ok(ledger) => {
                info!(rows, seats_per_row, "Using hall size from configuration");
                return Ok(Some(ledger));
            }
            Err(e) => {
                warn!(%e, "Ignoring hall size from configuration");
            }
        }
    }

    loop {
        console.print("Enter the number of rows: ")?;
        let rows = match console.read_number().await? {
            None => return Ok(None),
            Some(NumberInput::Invalid) => {
                console.notice(INVALID_NUMBER)?;
                continue;
            }
            Some(NumberInput::Number(n)) if n <= 0 => {
                console.notice(NOT_POSITIVE)?;
                continue;
            }
            Some(NumberInput::Number(n)) => n,
        };

        console.print("Enter the number of seats in each row: ")?;
        let seats_per_row = match console.read_number().await? {
            None => return Ok(None),
            Some(NumberInput::Invalid) => {
                console.notice(INVALID_NUMBER)?;
                continue;
            }
            Some(NumberInput::Number(n)) if n <= 0 => {
                console.notice(NOT_POSITIVE)?;
                continue;
            }
            Some(NumberInput::Number(n)) => n,
        };

        // Размеры положительные, значит ошибка может быть только от переполнения
        match SeatLedger::new(rows, seats_per_row) {
            Ok(ledger) => return Ok(Some(ledger)),
            Err(e) => {
                warn!(%e, "Hall rejected");
                console.notice(HALL_TOO_LARGE)?;
            }
        }
    }
}
