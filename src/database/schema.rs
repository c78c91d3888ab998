/*!
 * Database schema definitions and migrations.
 *
 * This module contains the SQL schema for the translations table
 * and handles schema migrations for version upgrades.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Check current schema version
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        // Fresh database - create all tables
        info!("Initializing database schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        // Need to migrate
        info!(
            "Migrating database schema from v{} to v{}",
            current_version, SCHEMA_VERSION
        );
        migrate_schema(conn, current_version)?;
    } else {
        debug!("Database schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    // Check if the schema_version table exists
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    // Enable WAL mode for better concurrency and crash recovery
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Enable foreign keys
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    // Create schema version table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    // Create translations table.
    //
    // One row per (owner, field, locale). The owner reference is polymorphic:
    // owner_type discriminates which kind of record owner_id points at, so a
    // single table serves every translatable entity. text is nullable; a NULL
    // translation behaves like a missing one at resolution time.
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL,
            owner_type TEXT NOT NULL,
            field TEXT NOT NULL,
            locale TEXT NOT NULL,
            text TEXT,
            UNIQUE(owner_id, owner_type, field, locale)
        );

        CREATE INDEX IF NOT EXISTS idx_translations_owner ON translations(owner_id, owner_type);
        CREATE INDEX IF NOT EXISTS idx_translations_locale ON translations(locale);
        "#,
    )?;

    info!("Database schema created successfully");
    Ok(())
}

/// Migrate the schema from one version to another
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
    let mut current = from_version;

    while current < SCHEMA_VERSION {
        match current {
            // Add migration steps here as schema evolves
            // Example:
            // 1 => {
            //     migrate_v1_to_v2(conn)?;
            //     current = 2;
            // }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown schema version: {}. Cannot migrate.",
                    current
                ));
            }
        }
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    info!("Schema migration completed to v{}", SCHEMA_VERSION);
    Ok(())
}

/// Drop all tables (for testing purposes only)
#[cfg(test)]
pub fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS translations;
        DROP TABLE IF EXISTS schema_version;
        "#,
    )?;
    Ok(())
}
