/*!
 * Database module for persistent storage of translations.
 *
 * This module provides SQLite-based persistence for:
 * - Translation records keyed by (owner_id, owner_type, field, locale)
 * - Owner-scoped lookups and cascade deletes
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::DatabaseConnection;
pub use repository::Repository;
