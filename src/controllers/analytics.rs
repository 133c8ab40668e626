//! analytics.rs
//!
//! Вывод статистики продаж: количество билетов, процент заполнения,
//! текущая и максимальная выручка.

use std::io::{self, Write};
use tokio::io::AsyncBufRead;

use super::console::Console;
use crate::models::Statistics;
use crate::services::SeatLedger;

pub fn render_statistics(stats: &Statistics) -> String {
    format!(
        "Number of purchased tickets: {}\nPercentage: {}%\nCurrent income: ${}\nTotal income: ${}\n",
        stats.tickets.total, stats.percentage_sold, stats.current_income, stats.total_income
    )
}

pub fn show_statistics<R, W>(console: &mut Console<R, W>, ledger: &SeatLedger) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let stats = ledger.statistics();
    tracing::debug!(
        "Statistics: {} sold ({} front, {} back), income {} of {}",
        stats.tickets.total, stats.tickets.front, stats.tickets.back,
        stats.current_income, stats.total_income
    );

    console.println("")?;
    console.print(&render_statistics(&stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_report() {
        let mut ledger = SeatLedger::new(10, 9).unwrap();
        ledger.book_seat(1, 1).unwrap();
        ledger.book_seat(10, 1).unwrap();

        assert_eq!(
            render_statistics(&ledger.statistics()),
            "Number of purchased tickets: 2\nPercentage: 2.22%\nCurrent income: $18\nTotal income: $810\n"
        );
    }
}
