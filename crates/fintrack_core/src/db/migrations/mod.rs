//! Ordered schema migrations for the key-value storage table.
//!
//! # Invariants
//! - `version` values strictly increase down the list.
//! - All pending migrations commit in one transaction or not at all.
//! - Concurrent openers serialize on the write lock; the loser sees the
//!   winner's version and applies nothing.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, TransactionBehavior};

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_kv_records.sql"),
}];

/// Highest schema version this binary can write.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies every migration newer than the connection's `user_version`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let supported = latest_version();
    if check_version(conn, supported)? == supported {
        return Ok(());
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let found = check_version(&tx, supported)?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > found) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    if found < supported {
        info!("event=db_migrate module=db status=ok from_version={found} to_version={supported}");
    }
    Ok(())
}

fn check_version(conn: &Connection, supported: u32) -> DbResult<u32> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > supported {
        return Err(DbError::UnsupportedSchemaVersion { found, supported });
    }
    Ok(found)
}
