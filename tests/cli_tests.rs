mod support;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cartwise() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cartwise"));
    cmd.env_remove("CARTWISE_ORDERS_PATH")
        .env_remove("CARTWISE_PORT")
        .env_remove("FLASK_RUN_PORT")
        .env_remove("RUST_LOG");
    cmd
}

const ORDERS: &[(&str, &str)] = &[
    ("1", "iPhone 14"),
    ("1", "Lightning Charging Cable"),
    ("2", "iPhone 14"),
    ("2", "Lightning Charging Cable"),
    ("3", "iPhone 14"),
    ("3", "Wired Headphones"),
];

#[test]
fn cli_help_lists_commands() {
    cartwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("add-order"));
}

#[test]
fn cli_fails_on_missing_config() {
    let dir = tempdir().unwrap();
    cartwise()
        .args(["--config", dir.path().join("absent.toml").to_str().unwrap(), "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn cli_check_reports_dataset() {
    let dir = tempdir().unwrap();
    let orders = support::orders_csv(dir.path(), ORDERS);
    let config = support::config_for(dir.path(), &orders);

    cartwise()
        .args(["--config", config.to_str().unwrap(), "--json", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""orders":3"#))
        .stdout(predicate::str::contains(r#""products":3"#));
}

#[test]
fn cli_recommend_resolves_typos() {
    let dir = tempdir().unwrap();
    let orders = support::orders_csv(dir.path(), ORDERS);
    let config = support::config_for(dir.path(), &orders);

    cartwise()
        .args(["--config", config.to_str().unwrap(), "--json", "recommend", "iphoen 14"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""matched_product":"iPhone 14""#))
        .stdout(predicate::str::contains("Lightning Charging Cable"));
}

#[test]
fn cli_recommend_on_empty_history_fails() {
    let dir = tempdir().unwrap();
    let config = support::config_for(dir.path(), &dir.path().join("none.csv"));

    cartwise()
        .args(["--config", config.to_str().unwrap(), "recommend", "anything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("model is still loading"));
}

#[test]
fn cli_add_order_appends_to_csv() {
    let dir = tempdir().unwrap();
    let orders = support::orders_csv(dir.path(), ORDERS);
    let config = support::config_for(dir.path(), &orders);

    cartwise()
        .args([
            "--config",
            config.to_str().unwrap(),
            "add-order",
            "--id",
            "4",
            "--product",
            "Google Phone",
            "--product",
            "USB-C Charging Cable",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order 4 added"));

    let content = fs::read_to_string(&orders).unwrap();
    assert!(content.contains("4,Google Phone"));
    assert!(content.contains("4,USB-C Charging Cable"));
    assert_eq!(content.matches("Order ID").count(), 1);
}

#[test]
fn cli_rules_prints_table() {
    let dir = tempdir().unwrap();
    let orders = support::orders_csv(dir.path(), ORDERS);
    let config = support::config_for(dir.path(), &orders);

    cartwise()
        .args(["--config", config.to_str().unwrap(), "rules", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Antecedent"))
        .stdout(predicate::str::contains("Lift"));
}
