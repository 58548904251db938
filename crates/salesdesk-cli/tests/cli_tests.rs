use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with plain output and paths inside
/// the test directory
fn salesdesk_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let export_path = temp_dir.path().join("exports/report.txt");

    let mut cmd = Command::cargo_bin("salesdesk").expect("Failed to find salesdesk binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .arg("--export-file")
        .arg(export_path);
    cmd
}

#[test]
fn test_cli_exit_from_main_menu() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== MAIN MENU ==="))
        .stdout(predicate::str::contains("1.  Reports"))
        .stdout(predicate::str::contains("Choose an option: "));

    assert!(temp_dir.path().join("cli_test.db").exists());
}

#[test]
fn test_cli_closed_input_exits_cleanly() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== REPORTS MENU ==="));
}

#[test]
fn test_cli_invalid_choice() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn test_cli_add_and_list_salesman() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("2\n2\nIvanov\n\n\n1\nn\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salesman added. ID=1"))
        .stdout(predicate::str::contains("(1, Ivanov, None, true)"));
}

#[test]
fn test_cli_data_persists_between_runs() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("2\n6\nAcme\n\n\n\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer added. ID=1"));

    salesdesk_cmd(&temp_dir)
        .write_stdin("2\n5\nn\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1, Acme, None, None, true)"));
}

#[test]
fn test_cli_empty_report_and_save() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("1\n1\ny\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All sales\n---------\nNo data."))
        .stdout(predicate::str::contains("Result saved to"));

    let saved = std::fs::read_to_string(temp_dir.path().join("exports/report.txt"))
        .expect("Failed to read export");
    assert_eq!(saved, "All sales\n---------\nNo data.");
}

#[test]
fn test_cli_store_error_does_not_end_session() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .write_stdin("2\n10\n5\n6\n10\n2026-02-15\n\n9\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: "))
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn test_cli_rejects_unknown_arguments() {
    let temp_dir = create_cli_test_environment();

    salesdesk_cmd(&temp_dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("serve"));
}
