use serde::Serialize;

/// Количество проданных билетов: всего, в передних и в задних рядах.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SoldTickets {
    pub total: u32,
    pub front: u32,
    pub back: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub tickets: SoldTickets,
    /// Процент проданных мест, ровно два знака после запятой
    pub percentage_sold: String,
    pub current_income: u64,
    pub total_income: u64,
}
