/*!
 * Database row models.
 *
 * These structures map directly to the translations table and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

/// A stored translation record.
///
/// One row per (owner_id, owner_type, field, locale); the tuple is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Database ID
    pub id: i64,
    /// Identifier of the owning record
    pub owner_id: i64,
    /// Discriminator for the owning record's kind
    pub owner_type: String,
    /// Name of the translated attribute
    pub field: String,
    /// 2-letter locale code
    pub locale: String,
    /// Translated content; NULL behaves like a missing translation
    pub text: Option<String>,
}

/// A translation staged for insertion (no database ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTranslationRecord {
    /// Identifier of the owning record
    pub owner_id: i64,
    /// Discriminator for the owning record's kind
    pub owner_type: String,
    /// Name of the translated attribute
    pub field: String,
    /// 2-letter locale code
    pub locale: String,
    /// Translated content
    pub text: Option<String>,
}

impl NewTranslationRecord {
    /// Create a new staged translation record
    pub fn new(
        owner_id: i64,
        owner_type: String,
        field: String,
        locale: String,
        text: Option<String>,
    ) -> Self {
        Self {
            owner_id,
            owner_type,
            field,
            locale,
            text,
        }
    }
}
