// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::models::{
    Account, AccountFilter, Budget, BudgetPeriod, Category, ExpenseEvent, IncomeEvent, Period,
    SavingsGoal, DEFAULT_CATEGORIES,
};
use crate::utils::{parse_amount, parse_date};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Ledgerclip", "ledgerclip"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledgerclip.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    open_at(&path)
}

/// Open (and initialize) the event store at an explicit path.
pub fn open_at(path: &Path) -> Result<Connection> {
    let mut conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS accounts(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        is_default INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        UNIQUE(owner_id, name)
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        UNIQUE(owner_id, name)
    );

    CREATE TABLE IF NOT EXISTS income_events(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        account_id INTEGER,
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        period TEXT NOT NULL CHECK(period IN ('monthly','yearly')),
        note TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY(account_id) REFERENCES accounts(id) ON DELETE SET NULL
    );
    CREATE INDEX IF NOT EXISTS idx_income_events_date ON income_events(date);

    CREATE TABLE IF NOT EXISTS expense_events(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        account_id INTEGER,
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        payment_note TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY(account_id) REFERENCES accounts(id) ON DELETE SET NULL
    );
    CREATE INDEX IF NOT EXISTS idx_expense_events_date ON expense_events(date);

    CREATE TABLE IF NOT EXISTS budgets(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        category TEXT NOT NULL,
        limit_amount TEXT NOT NULL,
        period TEXT NOT NULL CHECK(period IN ('weekly','monthly','yearly')),
        UNIQUE(owner_id, category, period)
    );

    CREATE TABLE IF NOT EXISTS savings_goals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        target_amount TEXT NOT NULL,
        current_amount TEXT NOT NULL DEFAULT '0',
        deadline TEXT
    );
    "#,
    )?;
    Ok(())
}

/// Seed the fixed default category set for a fresh owner. Existing names
/// are left alone; user-defined categories live in the same table.
pub fn seed_default_categories(conn: &Connection, owner_id: i64) -> Result<()> {
    for name in DEFAULT_CATEGORIES {
        conn.execute(
            "INSERT OR IGNORE INTO categories(owner_id, name) VALUES (?1, ?2)",
            params![owner_id, name],
        )?;
    }
    Ok(())
}

pub fn list_categories(conn: &Connection, owner_id: i64) -> Result<Vec<Category>> {
    let mut stmt =
        conn.prepare("SELECT id, owner_id, name FROM categories WHERE owner_id=?1 ORDER BY name")?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok(Category {
            id: r.get(0)?,
            owner_id: r.get(1)?,
            name: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn list_accounts(conn: &Connection, owner_id: i64) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, name, is_default FROM accounts WHERE owner_id=?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok(Account {
            id: r.get(0)?,
            owner_id: r.get(1)?,
            name: r.get(2)?,
            is_default: r.get::<_, i64>(3)? != 0,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn list_income_events(
    conn: &Connection,
    owner_id: i64,
    filter: AccountFilter,
) -> Result<Vec<IncomeEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, account_id, amount, date, period, note
         FROM income_events WHERE owner_id=?1 ORDER BY date, id",
    )?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, Option<i64>>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, owner, account_id, amount_s, date_s, period_s, note) = row?;
        if !filter.matches(account_id) {
            continue;
        }
        out.push(IncomeEvent {
            id,
            owner_id: owner,
            account_id,
            amount: parse_amount(&amount_s)
                .with_context(|| format!("Invalid amount in income event {}", id))?,
            date: parse_date(&date_s)
                .with_context(|| format!("Invalid date in income event {}", id))?,
            period: Period::from_str(&period_s)
                .with_context(|| format!("Invalid period in income event {}", id))?,
            note,
        });
    }
    Ok(out)
}

pub fn list_expense_events(
    conn: &Connection,
    owner_id: i64,
    filter: AccountFilter,
) -> Result<Vec<ExpenseEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, account_id, amount, date, category, payment_note
         FROM expense_events WHERE owner_id=?1 ORDER BY date, id",
    )?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, Option<i64>>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, owner, account_id, amount_s, date_s, category, payment_note) = row?;
        if !filter.matches(account_id) {
            continue;
        }
        out.push(ExpenseEvent {
            id,
            owner_id: owner,
            account_id,
            amount: parse_amount(&amount_s)
                .with_context(|| format!("Invalid amount in expense event {}", id))?,
            date: parse_date(&date_s)
                .with_context(|| format!("Invalid date in expense event {}", id))?,
            category,
            payment_note,
        });
    }
    Ok(out)
}

pub fn list_budgets(conn: &Connection, owner_id: i64) -> Result<Vec<Budget>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, category, limit_amount, period
         FROM budgets WHERE owner_id=?1 ORDER BY category",
    )?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, owner, category, limit_s, period_s) = row?;
        out.push(Budget {
            id,
            owner_id: owner,
            category,
            limit: parse_amount(&limit_s)
                .with_context(|| format!("Invalid limit in budget {}", id))?,
            period: BudgetPeriod::from_str(&period_s)
                .with_context(|| format!("Invalid period in budget {}", id))?,
        });
    }
    Ok(out)
}

pub fn list_savings_goals(conn: &Connection, owner_id: i64) -> Result<Vec<SavingsGoal>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, name, target_amount, current_amount, deadline
         FROM savings_goals WHERE owner_id=?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![owner_id], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, owner, name, target_s, current_s, deadline_s) = row?;
        out.push(SavingsGoal {
            id,
            owner_id: owner,
            name,
            target_amount: parse_amount(&target_s)
                .with_context(|| format!("Invalid target in savings goal {}", id))?,
            current_amount: parse_amount(&current_s)
                .with_context(|| format!("Invalid current amount in savings goal {}", id))?,
            deadline: deadline_s
                .map(|s| parse_date(&s))
                .transpose()
                .with_context(|| format!("Invalid deadline in savings goal {}", id))?,
        });
    }
    Ok(out)
}

/// Fetch the full event set for one owner before any calculator runs.
/// The engine is only ever handed a complete snapshot, never a mid-fetch one.
pub fn load_snapshot(
    conn: &Connection,
    owner_id: i64,
    filter: AccountFilter,
) -> Result<crate::engine::Snapshot> {
    let accounts = list_accounts(conn, owner_id)?;
    let incomes = list_income_events(conn, owner_id, filter)?;
    let expenses = list_expense_events(conn, owner_id, filter)?;
    let budgets = list_budgets(conn, owner_id)?;
    debug!(
        owner_id,
        incomes = incomes.len(),
        expenses = expenses.len(),
        budgets = budgets.len(),
        "loaded ledger snapshot"
    );
    let snap = crate::engine::Snapshot::assemble(owner_id, &accounts, incomes, expenses, budgets)?;
    Ok(snap)
}
