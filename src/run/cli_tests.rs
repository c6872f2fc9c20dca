#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::storage::MemoryStore;
use crate::store::{FixedClock, StatusMode};

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn cli(parts: &[&str]) -> Vec<String> {
    let mut all = vec!["budgie".to_string()];
    all.extend(args(parts));
    all
}

fn test_store() -> BudgetStore<MemoryStore, FixedClock> {
    BudgetStore::new(
        MemoryStore::default(),
        FixedClock::on(2025, 1, 15),
        StatusMode::Live,
    )
}

// ── flag_value / positionals ──────────────────────────────────

#[test]
fn test_flag_value_found() {
    let a = args(&["Groceries", "--due", "2025-02-01"]);
    assert_eq!(flag_value(&a, "--due"), Some("2025-02-01"));
}

#[test]
fn test_flag_value_missing() {
    let a = args(&["Groceries", "--due"]);
    assert_eq!(flag_value(&a, "--due"), None);
    assert_eq!(flag_value(&a, "--notes"), None);
}

#[test]
fn test_positionals_skip_flag_values() {
    let a = args(&["Rent", "--notes", "monthly", "1200", "--force", "rent"]);
    assert_eq!(positionals(&a), vec!["Rent", "1200", "rent"]);
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id(&args(&["42", "--force"])).unwrap(), 42);
    assert!(parse_id(&args(&[])).is_err());
    assert!(parse_id(&args(&["abc"])).is_err());
}

// ── parse_filter ──────────────────────────────────────────────

#[test]
fn test_parse_filter_empty() {
    assert!(parse_filter(&args(&[])).unwrap().is_empty());
}

#[test]
fn test_parse_filter_all_fields() {
    let f = parse_filter(&args(&[
        "--search", "gro", "--category", "food", "--status", "UPCOMING", "--due", "2025-03-01",
    ]))
    .unwrap();
    assert_eq!(f.search.as_deref(), Some("gro"));
    assert_eq!(f.category.as_deref(), Some("Food"));
    assert_eq!(f.status, Some(Status::Upcoming));
    assert_eq!(f.due_date, chrono::NaiveDate::from_ymd_opt(2025, 3, 1));
}

#[test]
fn test_parse_filter_other_category() {
    let f = parse_filter(&args(&["--category", "other"])).unwrap();
    assert_eq!(f.category.as_deref(), Some("Other"));
}

#[test]
fn test_parse_filter_rejects_unknown_status() {
    let err = parse_filter(&args(&["--status", "paused"])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("paused"));
    assert!(msg.contains("active, upcoming, expired"));
}

#[test]
fn test_parse_filter_keeps_custom_category() {
    let f = parse_filter(&args(&["--category", "Travel"])).unwrap();
    assert_eq!(f.category.as_deref(), Some("Travel"));
}

#[test]
fn test_parse_filter_blank_search_ignored() {
    let f = parse_filter(&args(&["--search", ""])).unwrap();
    assert!(f.search.is_none());
}

// ── commands ──────────────────────────────────────────────────

#[test]
fn test_add_creates_budget() {
    let mut store = test_store();
    as_cli(
        &cli(&["add", "Groceries", "₦1,500", "food", "--notes", "weekly"]),
        &mut store,
    )
    .unwrap();

    let all = store.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Groceries");
    assert_eq!(all[0].amount, dec!(1500));
    assert_eq!(all[0].category, Some(Category::Food));
    assert_eq!(all[0].notes.as_deref(), Some("weekly"));
    assert_eq!(all[0].status, Status::Active);
}

#[test]
fn test_add_requires_three_positionals() {
    let mut store = test_store();
    assert!(as_cli(&cli(&["add", "Groceries", "100"]), &mut store).is_err());
    assert!(store.list_all().is_empty());
}

#[test]
fn test_add_rejects_bad_amount() {
    let mut store = test_store();
    let err = as_cli(&cli(&["add", "Rent", "-5", "rent"]), &mut store).unwrap_err();
    assert!(err.to_string().contains("invalid budget"));
    assert!(store.list_all().is_empty());
}

#[test]
fn test_edit_updates_spent() {
    let mut store = test_store();
    as_cli(&cli(&["add", "Rent", "1000", "rent"]), &mut store).unwrap();
    let id = store.list_all()[0].id.to_string();

    as_cli(&cli(&["edit", &id, "--spent", "250"]), &mut store).unwrap();
    let b = &store.list_all()[0];
    assert_eq!(b.spent, dec!(250));
    assert_eq!(b.remaining(), dec!(750));
}

#[test]
fn test_edit_without_changes_fails() {
    let mut store = test_store();
    as_cli(&cli(&["add", "Rent", "1000", "rent"]), &mut store).unwrap();
    let id = store.list_all()[0].id.to_string();
    let err = as_cli(&cli(&["edit", &id]), &mut store).unwrap_err();
    assert!(err.to_string().contains("Nothing to change"));
}

#[test]
fn test_edit_unknown_id_hints_list() {
    let mut store = test_store();
    let err = as_cli(&cli(&["edit", "7", "--spent", "1"]), &mut store).unwrap_err();
    assert!(err.to_string().contains("budgie list"));
}

#[test]
fn test_edit_expired_needs_force() {
    let mut store = test_store();
    as_cli(
        &cli(&["add", "Power", "300", "utilities", "--due", "2025-01-10"]),
        &mut store,
    )
    .unwrap();
    let id = store.list_all()[0].id.to_string();
    assert_eq!(store.list_all()[0].status, Status::Expired);

    let err = as_cli(&cli(&["edit", &id, "--spent", "100"]), &mut store).unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert_eq!(store.list_all()[0].spent, dec!(0));

    as_cli(&cli(&["edit", &id, "--spent", "100", "--force"]), &mut store).unwrap();
    assert_eq!(store.list_all()[0].spent, dec!(100));
}

#[test]
fn test_delete_removes_budget() {
    let mut store = test_store();
    as_cli(&cli(&["add", "Fun", "50", "entertainment"]), &mut store).unwrap();
    let id = store.list_all()[0].id.to_string();
    as_cli(&cli(&["rm", &id]), &mut store).unwrap();
    assert!(store.list_all().is_empty());
}

#[test]
fn test_delete_unknown_id_is_ok() {
    let mut store = test_store();
    assert!(as_cli(&cli(&["delete", "12345"]), &mut store).is_ok());
}

#[test]
fn test_read_commands_succeed_on_empty_store() {
    let mut store = test_store();
    let commands: [&[&str]; 7] = [
        &["dashboard"],
        &["list"],
        &["list", "--category", "food"],
        &["analytics"],
        &["categories"],
        &["help"],
        &["version"],
    ];
    for cmd in commands {
        assert!(as_cli(&cli(cmd), &mut store).is_ok(), "{cmd:?}");
    }
    assert!(as_cli(&cli(&[]), &mut store).is_ok());
}

#[test]
fn test_show_unknown_id_fails() {
    let mut store = test_store();
    assert!(as_cli(&cli(&["show", "1"]), &mut store).is_err());
}

#[test]
fn test_unknown_command_fails() {
    let mut store = test_store();
    let err = as_cli(&cli(&["frobnicate"]), &mut store).unwrap_err();
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn test_export_writes_filtered_csv() {
    let mut store = test_store();
    as_cli(&cli(&["add", "Groceries", "200", "food"]), &mut store).unwrap();
    as_cli(&cli(&["add", "Rent", "1000", "rent"]), &mut store).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let path_arg = path.to_str().unwrap();
    as_cli(&cli(&["export", path_arg, "--category", "rent"]), &mut store).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Name,Category,Amount,Spent,Remaining,Due Date");
    assert_eq!(lines[1], "Rent,Rent,1000,0,1000,");
}

// ── shellexpand ───────────────────────────────────────────────

#[test]
fn test_shellexpand_plain_path() {
    assert_eq!(shellexpand("/tmp/out.csv"), "/tmp/out.csv");
    assert_eq!(shellexpand("out.csv"), "out.csv");
}
