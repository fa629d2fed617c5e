// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerclip::{
    engine,
    error::EngineError,
    models::{AccountFilter, BudgetPeriod, Period},
    store,
};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

// Loose copy of the event tables, without the CHECK constraints, so tests
// can plant the malformed rows a real store would refuse.
fn setup_loose() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE accounts(id INTEGER PRIMARY KEY, owner_id INTEGER NOT NULL, name TEXT NOT NULL, is_default INTEGER NOT NULL DEFAULT 0);
        CREATE TABLE income_events(id INTEGER PRIMARY KEY, owner_id INTEGER NOT NULL, account_id INTEGER, amount TEXT NOT NULL, date TEXT NOT NULL, period TEXT NOT NULL, note TEXT);
        CREATE TABLE expense_events(id INTEGER PRIMARY KEY, owner_id INTEGER NOT NULL, account_id INTEGER, amount TEXT NOT NULL, date TEXT NOT NULL, category TEXT NOT NULL, payment_note TEXT);
        CREATE TABLE budgets(id INTEGER PRIMARY KEY, owner_id INTEGER NOT NULL, category TEXT NOT NULL, limit_amount TEXT NOT NULL, period TEXT NOT NULL);
        CREATE TABLE savings_goals(id INTEGER PRIMARY KEY, owner_id INTEGER NOT NULL, name TEXT NOT NULL, target_amount TEXT NOT NULL, current_amount TEXT NOT NULL DEFAULT '0', deadline TEXT);
        "#,
    )
    .unwrap();
    conn
}

#[test]
fn listing_parses_strict_types() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO income_events(owner_id, account_id, amount, date, period, note)
         VALUES (9, NULL, '1250.75', '2025-02-14', 'monthly', 'salary')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO budgets(owner_id, category, limit_amount, period) VALUES (9, 'Food', '500', 'weekly')",
        [],
    )
    .unwrap();

    let incomes = store::list_income_events(&conn, 9, AccountFilter::Any).unwrap();
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].amount, Decimal::new(1250_75, 2));
    assert_eq!(incomes[0].period, Period::Monthly);
    assert_eq!(incomes[0].note.as_deref(), Some("salary"));

    let budgets = store::list_budgets(&conn, 9).unwrap();
    assert_eq!(budgets[0].period, BudgetPeriod::Weekly);
}

#[test]
fn malformed_period_tag_is_rejected() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO income_events(owner_id, amount, date, period) VALUES (9, '100', '2025-02-14', 'quarterly')",
        [],
    )
    .unwrap();
    let err = store::list_income_events(&conn, 9, AccountFilter::Any).unwrap_err();
    assert_eq!(
        err.downcast_ref::<EngineError>(),
        Some(&EngineError::InvalidPeriod("quarterly".into()))
    );
}

#[test]
fn negative_amount_is_rejected_at_the_boundary() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO expense_events(owner_id, amount, date, category) VALUES (9, '-4', '2025-02-14', 'Food')",
        [],
    )
    .unwrap();
    let err = store::list_expense_events(&conn, 9, AccountFilter::Any).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::InvalidAmount(_))
    ));
}

#[test]
fn unparsable_date_is_rejected_at_the_boundary() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO income_events(owner_id, amount, date, period) VALUES (9, '100', '2025-13-40', 'monthly')",
        [],
    )
    .unwrap();
    let err = store::list_income_events(&conn, 9, AccountFilter::Any).unwrap_err();
    assert_eq!(
        err.downcast_ref::<EngineError>(),
        Some(&EngineError::InvalidDate("2025-13-40".into()))
    );
}

#[test]
fn one_bad_owner_does_not_block_another() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO income_events(owner_id, amount, date, period) VALUES (4, '100', '2025-02-14', 'quarterly')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO income_events(owner_id, amount, date, period) VALUES (9, '100', '2025-02-14', 'monthly')",
        [],
    )
    .unwrap();
    assert!(store::list_income_events(&conn, 4, AccountFilter::Any).is_err());
    // owner 9's computation is unaffected by owner 4's bad record
    let bal = engine::remaining_balance(&conn, 9, AccountFilter::Any, 2025, 2).unwrap();
    assert_eq!(bal, Decimal::from(100));
}

#[test]
fn goals_round_trip_and_adjust() {
    let conn = setup_loose();
    conn.execute(
        "INSERT INTO savings_goals(owner_id, name, target_amount, current_amount, deadline)
         VALUES (9, 'Vacation', '3000', '450', '2026-06-01')",
        [],
    )
    .unwrap();
    let goals = store::list_savings_goals(&conn, 9).unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].current_amount, Decimal::from(450));
    assert!(goals[0].deadline.is_some());

    let drained = engine::adjust_savings_goal(&goals[0], Decimal::from(-500));
    assert_eq!(drained.current_amount, Decimal::ZERO);
    // the original record is untouched; persistence stays with the caller
    assert_eq!(goals[0].current_amount, Decimal::from(450));
}

#[test]
fn open_at_initializes_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledgerclip.sqlite");
    let conn = store::open_at(&path).unwrap();
    conn.execute(
        "INSERT INTO accounts(owner_id, name, is_default) VALUES (9, 'Main wallet', 1)",
        params![],
    )
    .unwrap();
    let accounts = store::list_accounts(&conn, 9).unwrap();
    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].is_default);
}
