pub mod ledger;
pub mod pricing;

pub use ledger::SeatLedger;
