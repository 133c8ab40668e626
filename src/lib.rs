pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

pub use error::LedgerError;
pub use models::{Hall, SeatMap, SeatState, SoldTickets, Statistics};
pub use services::SeatLedger;
