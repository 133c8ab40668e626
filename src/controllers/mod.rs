pub mod analytics;
pub mod console;
pub mod hall;
pub mod menu;
pub mod seats;

pub use console::Console;

use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use tracing::info;

use crate::config::HallPreset;

/// Полный сеанс: размеры зала, затем меню до выхода.
pub async fn run_session<R, W>(console: &mut Console<R, W>, preset: &HallPreset) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(mut ledger) = hall::request_hall(console, preset).await? else {
        info!("Input closed before the hall was configured");
        return Ok(());
    };

    menu::run(console, &mut ledger).await
}
