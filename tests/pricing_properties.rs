use cinema::{LedgerError, SeatLedger};
use proptest::prelude::*;

fn hall_size() -> impl Strategy<Value = (i32, i32)> {
    (1..=20i32, 1..=20i32)
}

proptest! {
    #[test]
    fn small_halls_charge_flat_rate(
        (rows, seats) in (1..=60i32).prop_flat_map(|rows| (Just(rows), 1..=60 / rows)),
    ) {
        let ledger = SeatLedger::new(rows, seats).unwrap();
        for row in 1..=rows {
            prop_assert_eq!(ledger.ticket_price(row), Ok(10));
        }
    }

    #[test]
    fn large_halls_charge_less_for_back_rows((rows, seats) in hall_size()) {
        prop_assume!(rows * seats > 60);
        let ledger = SeatLedger::new(rows, seats).unwrap();
        for row in 1..=rows {
            let expected = if row <= rows / 2 { 10 } else { 8 };
            prop_assert_eq!(ledger.ticket_price(row), Ok(expected));
        }
    }

    #[test]
    fn total_income_is_sum_of_all_prices((rows, seats) in hall_size()) {
        let mut ledger = SeatLedger::new(rows, seats).unwrap();
        let expected = ledger.statistics().total_income;

        let mut sum = 0u64;
        for row in 1..=rows {
            for seat in 1..=seats {
                sum += u64::from(ledger.book_seat(row, seat).unwrap());
            }
        }

        prop_assert_eq!(sum, expected);
        let stats = ledger.statistics();
        prop_assert_eq!(stats.current_income, expected);
        prop_assert_eq!(stats.percentage_sold, "100.00");
    }

    #[test]
    fn current_income_is_sum_of_sold_prices(
        (rows, seats) in hall_size(),
        picks in prop::collection::vec((1..=20i32, 1..=20i32), 0..40),
    ) {
        let mut ledger = SeatLedger::new(rows, seats).unwrap();
        let mut sum = 0u64;
        let mut sold = 0u32;

        for (row, seat) in picks {
            let before = ledger.seat_map();
            match ledger.book_seat(row, seat) {
                Ok(price) => {
                    sum += u64::from(price);
                    sold += 1;
                }
                Err(LedgerError::SeatOutOfRange { .. }) => {
                    prop_assert!(row > rows || seat > seats);
                    prop_assert_eq!(ledger.seat_map(), before);
                }
                Err(LedgerError::SeatAlreadySold { .. }) => {
                    prop_assert_eq!(ledger.seat_map(), before);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        let stats = ledger.statistics();
        prop_assert_eq!(stats.current_income, sum);
        prop_assert_eq!(stats.tickets.total, sold);
        prop_assert_eq!(stats.tickets.front + stats.tickets.back, sold);
    }
}
