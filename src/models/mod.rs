pub mod hall;
pub mod seat;
pub mod statistics;

pub use hall::Hall;
pub use seat::{SeatMap, SeatState};
pub use statistics::{SoldTickets, Statistics};
