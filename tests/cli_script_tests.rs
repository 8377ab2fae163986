use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneylog").expect("binary builds");
    cmd.env("MONEYLOG_SCRIPT", "1")
        .env("MONEYLOG_HOME", home.path());
    cmd
}

#[test]
fn records_entries_and_reports_balance() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 5000000 salary\nexpense 150000 lunch\nbalance\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Recorded income of 5,000,000.00."))
        .stdout(contains("Recorded expense of 150,000.00."))
        .stdout(contains("Current balance: 4,850,000.00"))
        .stdout(contains("Transaction History"))
        .stdout(contains("lunch"));

    let json = std::fs::read_to_string(home.path().join("transactions.json"))
        .expect("store file written");
    assert!(json.contains("\"type\": \"Income\""));
    assert!(json.contains("\"description\": \"salary\""));
}

#[test]
fn delete_removes_the_numbered_entry() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 5000000 salary\nexpense 150000 lunch\ndelete 1\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Deleted Income of 5,000,000.00."))
        .stdout(contains("Current balance: -150,000.00"));
}

#[test]
fn delete_out_of_range_is_reported_and_recovered() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 100 seed\ndelete 9\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("No transaction number 9."))
        .stdout(contains("Current balance: 100.00"));
}

#[test]
fn invalid_amount_skips_just_that_command() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income abc groceries\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("is not a number"))
        .stdout(contains("Current balance: 0.00"));
}

#[test]
fn clear_requires_explicit_confirmation() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 100 seed\nclear\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled"))
        .stdout(contains("Current balance: 100.00"));

    script_cmd(&home)
        .write_stdin("clear yes\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("All transactions deleted."))
        .stdout(contains("Current balance: 0.00"));
}

#[test]
fn ledger_persists_across_process_runs() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 2500 paycheck\nexit\n")
        .assert()
        .success();

    script_cmd(&home)
        .write_stdin("balance\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Current balance: 2,500.00"))
        .stdout(contains("paycheck"));
}

#[test]
fn empty_ledger_lists_a_distinct_message() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(contains("No transactions recorded."));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("incom 100 typo\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `incom`."))
        .stdout(contains("Did you mean `income`?"));
}

#[test]
fn corrupt_store_aborts_startup() {
    let home = TempDir::new().expect("temp home");
    std::fs::create_dir_all(home.path()).expect("home dir");
    std::fs::write(home.path().join("transactions.json"), "{broken")
        .expect("write corrupt store");

    script_cmd(&home)
        .write_stdin("balance\nexit\n")
        .assert()
        .failure()
        .stderr(contains("Serialization error"));
}

#[test]
fn quoted_descriptions_survive_tokenization() {
    let home = TempDir::new().expect("temp home");
    script_cmd(&home)
        .write_stdin("income 1000 \"monthly salary\"\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("monthly salary"));
}
