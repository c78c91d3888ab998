/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for all translation table
 * operations, abstracting away the SQL details and providing type-safe
 * access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::DatabaseConnection;
use super::models::{NewTranslationRecord, TranslationRecord};

/// Repository for translation table operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    // =========================================================================
    // Lookup Operations
    // =========================================================================

    /// Find the translation record for a single (owner, field, locale) tuple
    pub async fn find_translation(
        &self,
        owner_id: i64,
        owner_type: &str,
        field: &str,
        locale: &str,
    ) -> Result<Option<TranslationRecord>> {
        let owner_type = owner_type.to_string();
        let field = field.to_string();
        let locale = locale.to_string();

        self.db
            .execute_async(move |conn| {
                Self::find_translation_sync(conn, owner_id, &owner_type, &field, &locale)
            })
            .await
    }

    /// Find a translation record (synchronous version for use within transactions)
    pub fn find_translation_sync(
        conn: &Connection,
        owner_id: i64,
        owner_type: &str,
        field: &str,
        locale: &str,
    ) -> Result<Option<TranslationRecord>> {
        let result = conn
            .query_row(
                r#"
                SELECT id, owner_id, owner_type, field, locale, text
                FROM translations
                WHERE owner_id = ?1 AND owner_type = ?2 AND field = ?3 AND locale = ?4
                "#,
                params![owner_id, owner_type, field, locale],
                Self::parse_translation_row,
            )
            .optional()?;

        Ok(result)
    }

    /// Get all translation records for an owner, ordered by field then locale
    pub async fn list_for_owner(
        &self,
        owner_id: i64,
        owner_type: &str,
    ) -> Result<Vec<TranslationRecord>> {
        let owner_type = owner_type.to_string();

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, owner_id, owner_type, field, locale, text
                    FROM translations
                    WHERE owner_id = ?1 AND owner_type = ?2
                    ORDER BY field, locale
                    "#,
                )?;

                let rows = stmt.query_map(params![owner_id, owner_type], Self::parse_translation_row)?;

                let records: Vec<TranslationRecord> = rows.filter_map(|r| r.ok()).collect();
                Ok(records)
            })
            .await
    }

    /// Count the translation records held by an owner
    pub async fn count_for_owner(&self, owner_id: i64, owner_type: &str) -> Result<i64> {
        let owner_type = owner_type.to_string();

        self.db
            .execute_async(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM translations WHERE owner_id = ?1 AND owner_type = ?2",
                    params![owner_id, owner_type],
                    |row| row.get(0),
                )?;
                Ok(count)
            })
            .await
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Update the text of an existing translation record in place.
    ///
    /// One persistence call per record; callers invoke this eagerly for every
    /// record that already exists.
    pub async fn update_text(&self, id: i64, text: Option<String>) -> Result<()> {
        self.db
            .execute_async(move |conn| {
                conn.execute(
                    "UPDATE translations SET text = ?1 WHERE id = ?2",
                    params![text, id],
                )?;
                Ok(())
            })
            .await
    }

    /// Insert staged translation records in a single batched transaction.
    ///
    /// The insert is keyed on the unique (owner_id, owner_type, field, locale)
    /// tuple: if another writer created the same tuple between the caller's
    /// existence check and this call, the conflicting row is updated instead
    /// of raising a duplicate-row error. Last write wins.
    pub async fn insert_translations(&self, records: Vec<NewTranslationRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        debug!("Batch inserting {} translation records", records.len());

        self.db
            .transaction_async(move |tx| {
                for record in records {
                    tx.execute(
                        r#"
                        INSERT INTO translations (owner_id, owner_type, field, locale, text)
                        VALUES (?1, ?2, ?3, ?4, ?5)
                        ON CONFLICT(owner_id, owner_type, field, locale)
                        DO UPDATE SET text = excluded.text
                        "#,
                        params![
                            record.owner_id,
                            record.owner_type,
                            record.field,
                            record.locale,
                            record.text,
                        ],
                    )?;
                }
                Ok(())
            })
            .await
    }

    /// Delete all translation records belonging to an owner.
    ///
    /// Returns the number of deleted records.
    pub async fn delete_for_owner(&self, owner_id: i64, owner_type: &str) -> Result<i64> {
        let owner_type = owner_type.to_string();

        self.db
            .execute_async(move |conn| Self::delete_for_owner_sync(conn, owner_id, &owner_type))
            .await
    }

    /// Delete an owner's translations (synchronous version for use within
    /// transactions).
    ///
    /// Callers whose owner rows live in the same database can run this inside
    /// their own `DatabaseConnection::transaction` so the owner and its
    /// translations are removed atomically.
    pub fn delete_for_owner_sync(
        conn: &Connection,
        owner_id: i64,
        owner_type: &str,
    ) -> Result<i64> {
        let deleted = conn.execute(
            "DELETE FROM translations WHERE owner_id = ?1 AND owner_type = ?2",
            params![owner_id, owner_type],
        )?;

        debug!(
            "Deleted {} translation records for {}#{}",
            deleted, owner_type, owner_id
        );
        Ok(deleted as i64)
    }

    // =========================================================================
    // Row Parsing
    // =========================================================================

    fn parse_translation_row(row: &rusqlite::Row) -> rusqlite::Result<TranslationRecord> {
        Ok(TranslationRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            owner_type: row.get(2)?,
            field: row.get(3)?,
            locale: row.get(4)?,
            text: row.get(5)?,
        })
    }
}
