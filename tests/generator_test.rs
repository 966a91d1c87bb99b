use orderfsm::domain::command::OrderCommand;
use orderfsm::interfaces::csv::command_reader::CommandReader;
use std::fs::File;

mod common;

#[test]
fn test_generate_simple_log() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("simple.csv");
    common::write_log(
        &output_path,
        &[(1, "CUSTOMER", "PLACE"), (1, "SYSTEM", "EXPIRE")],
    )
    .expect("Failed to write log");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 2 rows = 3 lines
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_generated_log_is_readable_and_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let finals = common::generate_log(&first, 20, 12, 42).expect("Failed to generate log");
    common::generate_log(&second, 20, 12, 42).expect("Failed to generate log");
    assert_eq!(finals.len(), 20);
    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );

    let commands: Vec<OrderCommand> = CommandReader::new(File::open(&first).unwrap())
        .commands()
        .collect::<Result<_, _>>()
        .expect("Generated log should parse");
    assert!(!commands.is_empty());
    assert!(commands.iter().all(|command| (1..=20).contains(&command.order)));
}
