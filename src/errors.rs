/*!
 * Error types for the translatable library.
 *
 * This module contains custom error types for the translation store,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Absence of a translation is never an error: resolution falls back to the
 * entity's own attribute instead. The variants here cover the failures the
 * persistence layer can actually surface.
 */

use thiserror::Error;

/// Errors that can occur when working with the translation store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two records collided on the unique (owner, field, locale) tuple
    #[error("duplicate translation for {owner_type}#{owner_id} field '{field}' locale '{locale}'")]
    ConstraintViolation {
        /// Owner type discriminator
        owner_type: String,
        /// Owner identifier
        owner_id: i64,
        /// Translated attribute name
        field: String,
        /// Locale code
        locale: String,
    },

    /// The underlying database could not be opened or reached
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A locale code is not a valid ISO 639-1 code
    #[error("invalid locale code: {0}")]
    InvalidLocale(String),
}

impl StoreError {
    /// Check whether a rusqlite error is a unique-constraint violation.
    ///
    /// Used by the repository to turn a duplicate-tuple insert race into a
    /// typed `ConstraintViolation` instead of an opaque SQLite error.
    pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
