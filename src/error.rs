use thiserror::Error;

/// Ошибки операций над залом и местами.
///
/// Все варианты - локальные ошибки валидации: после любой из них
/// состояние зала остается прежним, и вызывающая сторона может повторить ввод.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("invalid hall configuration: {rows} rows x {seats_per_row} seats")]
    InvalidConfiguration { rows: i32, seats_per_row: i32 },

    #[error("seat {seat} in row {row} is outside the hall")]
    SeatOutOfRange { row: i32, seat: i32 },

    #[error("row {row} is outside the hall")]
    RowOutOfRange { row: i32 },

    #[error("seat {seat} in row {row} has already been sold")]
    SeatAlreadySold { row: i32, seat: i32 },
}
