use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use tracing::debug;

use super::analytics::show_statistics;
use super::console::{Console, NumberInput};
use super::seats::{buy_ticket, show_seats};
use crate::services::SeatLedger;

pub const INVALID_COMMAND: &str = "Invalid command, please enter a valid option";

const MENU: &str = "1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowSeats,
    BuyTicket,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ShowSeats),
            2 => Some(MenuChoice::BuyTicket),
            3 => Some(MenuChoice::Statistics),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Главный цикл меню. Завершается по пункту 0 или по концу ввода.
pub async fn run<R, W>(console: &mut Console<R, W>, ledger: &mut SeatLedger) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        console.println("")?;
        console.print(MENU)?;

        let Some(choice) = read_choice(console).await? else {
            return Ok(());
        };
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ShowSeats => show_seats(console, ledger)?,
            MenuChoice::BuyTicket => buy_ticket(console, ledger).await?,
            MenuChoice::Statistics => show_statistics(console, ledger)?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}

// Меню заново не печатается, повторяется только чтение выбора
async fn read_choice<R, W>(console: &mut Console<R, W>) -> io::Result<Option<MenuChoice>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        match console.read_number().await? {
            None => return Ok(None),
            Some(NumberInput::Number(n)) => {
                if let Some(choice) = MenuChoice::from_number(n) {
                    return Ok(Some(choice));
                }
            }
            Some(NumberInput::Invalid) => {}
        }
        console.notice(INVALID_COMMAND)?;
    }
}
