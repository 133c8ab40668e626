use cinema::config::HallPreset;
use cinema::controllers::{self, Console};

async fn session(input: &str, preset: HallPreset) -> String {
    session_bytes(input.as_bytes(), preset).await
}

async fn session_bytes(input: &[u8], preset: HallPreset) -> String {
    let mut console = Console::new(input, Vec::new());
    controllers::run_session(&mut console, &preset).await.unwrap();
    String::from_utf8(console.into_inner()).unwrap()
}

#[tokio::test]
async fn full_session_with_rejected_bookings() {
    let input = "4\n9\n2\n1\n1\n2\n1\n1\n5\n1\n2\n2\n1\n3\n0\n";
    let output = session(input, HallPreset::default()).await;

    assert!(output.starts_with(
        "Enter the number of rows: Enter the number of seats in each row: \n1. Show the seats\n"
    ));
    assert!(output.contains("Ticket price: $10\n"));
    assert!(output.contains("\nThat ticket has already been purchased!\n"));
    assert!(output.contains("\nWrong input!\n"));
    assert!(output.contains("\nCinema:\n  1 2 3 4 5 6 7 8 9\n1 B S S S S S S S S\n2 S B S"));
    assert!(output.ends_with(
        "Number of purchased tickets: 2\nPercentage: 5.56%\nCurrent income: $20\nTotal income: $360\n\n1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit\n"
    ));
}

#[tokio::test]
async fn hall_prompt_repeats_on_bad_input() {
    let input = "abc\n0\n-2\n3\n-1\n3\n3\n0\n";
    let output = session(input, HallPreset::default()).await;

    assert_eq!(output.matches("Invalid number, please enter a valid number").count(), 1);
    assert_eq!(output.matches("Rows and seats must be greater than 0").count(), 3);
    assert_eq!(output.matches("Enter the number of rows: ").count(), 5);
    assert!(output.contains("1. Show the seats"));
}

#[tokio::test]
async fn menu_rejects_unknown_commands() {
    let input = "2\n2\nx\n7\n3\n0\n";
    let output = session(input, HallPreset::default()).await;

    assert_eq!(output.matches("Invalid command, please enter a valid option").count(), 2);
    assert!(output.contains("Number of purchased tickets: 0\nPercentage: 0.00%"));
    // Меню печатается только перед каждым новым выбором
    assert_eq!(output.matches("0. Exit").count(), 2);
}

#[tokio::test]
async fn preset_skips_hall_prompt() {
    let preset = HallPreset { rows: Some(10), seats_per_row: Some(9) };
    let input = "2\n10\n1\n3\n0\n";
    let output = session(input, preset).await;

    assert!(!output.contains("Enter the number of rows"));
    assert!(output.contains("Ticket price: $8\n"));
    assert!(output.contains("Current income: $8\nTotal income: $810\n"));
}

#[tokio::test]
async fn invalid_preset_falls_back_to_prompt() {
    let preset = HallPreset { rows: Some(0), seats_per_row: Some(9) };
    let output = session("2\n2\n0\n", preset).await;

    assert!(output.starts_with("Enter the number of rows: "));
}

#[tokio::test]
async fn end_of_input_ends_session() {
    let output = session("", HallPreset::default()).await;
    assert_eq!(output, "Enter the number of rows: ");

    let output = session("3\n3\n2\n1\n", HallPreset::default()).await;
    assert!(output.ends_with("Enter a seat number in that row: \n1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit\n"));
}

#[tokio::test]
async fn buy_prompt_repeats_on_bad_numbers() {
    let input = "3\n3\n2\nrow\n-1\n2\n2\n3\n0\n";
    let output = session(input, HallPreset::default()).await;

    assert!(output.contains("\nInvalid number, please enter a valid number\n"));
    assert!(output.contains("\nRows and seats must be greater than 0\n"));
    assert_eq!(output.matches("Enter a row number: ").count(), 3);
    assert!(output.contains("Number of purchased tickets: 1\nPercentage: 11.11%"));
}

#[tokio::test]
async fn non_utf8_input_is_an_invalid_number() {
    let input = b"3\n3\n2\n\xff\xfe\n1\n1\n0\n";
    let output = session_bytes(input, HallPreset::default()).await;

    assert!(output.contains(
        "Enter a row number: \nInvalid number, please enter a valid number\n\nEnter a row number: "
    ));
    assert!(output.contains("Ticket price: $10\n"));
}

#[tokio::test]
async fn crlf_line_endings_are_accepted() {
    let output = session("3\r\n3\r\n2\r\n1\r\n1\r\n0\r\n", HallPreset::default()).await;
    assert!(output.contains("Ticket price: $10\n"));
}

#[tokio::test]
async fn oversized_hall_is_rejected() {
    let input = "46340\n46340\n3\n3\n0\n";
    let output = session(input, HallPreset::default()).await;

    assert_eq!(
        output.matches("The hall is too large, please enter smaller numbers").count(),
        1
    );
    assert_eq!(output.matches("Enter the number of rows: ").count(), 2);
    assert!(output.contains("1. Show the seats"));
}
