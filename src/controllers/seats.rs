use std::io::{self, Write};
use tokio::io::AsyncBufRead;

use super::console::{Console, NumberInput};
use super::hall::{INVALID_NUMBER, NOT_POSITIVE};
use crate::error::LedgerError;
use crate::models::SeatMap;
use crate::services::SeatLedger;

pub const WRONG_INPUT: &str = "Wrong input!";
pub const ALREADY_PURCHASED: &str = "That ticket has already been purchased!";

/* ---------- SHOW SEATS ---------- */

/// Текстовая схема зала: заголовок с номерами мест, затем ряды
pub fn render_seat_map(map: &SeatMap) -> String {
    let mut out = String::from("Cinema:\n ");
    for seat in 1..=map.seats_per_row() {
        out.push_str(&format!(" {}", seat));
    }
    out.push('\n');

    for (index, row) in map.rows().iter().enumerate() {
        out.push_str(&(index + 1).to_string());
        for state in row {
            out.push(' ');
            out.push(state.marker());
        }
        out.push('\n');
    }
    out
}

pub fn show_seats<R, W>(console: &mut Console<R, W>, ledger: &SeatLedger) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.println("")?;
    console.print(&render_seat_map(&ledger.seat_map()))
}

/* ---------- BUY TICKET ---------- */

/// Спрашивает ряд и место, пока билет не будет куплен или не закончится ввод.
pub async fn buy_ticket<R, W>(
    console: &mut Console<R, W>,
    ledger: &mut SeatLedger,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some((row, seat)) = request_seat(console).await? else {
            return Ok(());
        };

        match ledger.book_seat(row, seat) {
            Ok(price) => return console.notice(&format!("Ticket price: ${}", price)),
            Err(LedgerError::SeatAlreadySold { .. }) => console.notice(ALREADY_PURCHASED)?,
            Err(_) => console.notice(WRONG_INPUT)?,
        }
    }
}

// Номера ряда и места; повторяет запрос при нечисловом или отрицательном вводе
async fn request_seat<R, W>(console: &mut Console<R, W>) -> io::Result<Option<(i32, i32)>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    'prompt: loop {
        console.println("")?;
        let mut numbers = [0; 2];
        for (slot, prompt) in numbers
            .iter_mut()
            .zip(["Enter a row number: ", "Enter a seat number in that row: "])
        {
            console.print(prompt)?;
            match console.read_number().await? {
                None => return Ok(None),
                Some(NumberInput::Invalid) => {
                    console.notice(INVALID_NUMBER)?;
                    continue 'prompt;
                }
                Some(NumberInput::Number(n)) if n < 0 => {
                    console.notice(NOT_POSITIVE)?;
                    continue 'prompt;
                }
                Some(NumberInput::Number(n)) => *slot = n,
            }
        }
        return Ok(Some((numbers[0], numbers[1])));
    }
}
