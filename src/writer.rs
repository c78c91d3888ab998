/*!
 * Translation upserts and cascade purge.
 *
 * The writer applies a batch of submitted translations to an entity with a
 * two-phase write: records that already exist are updated in place, one
 * persistence call each, while new records are staged and inserted in a
 * single batched call after all fields are processed. There is no deletion
 * path; an absent locale never removes a stored translation.
 *
 * The writer also owns the cascade hook: when an owning record is deleted,
 * `purge_translations` removes every translation it holds.
 */

use std::collections::HashMap;

use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::database::models::NewTranslationRecord;
use crate::database::Repository;
use crate::entity::Translatable;

/// Submitted translations: field name -> locale -> nullable text.
///
/// Deserializes directly from request-style JSON payloads such as
/// `{"name": {"en": "Chair", "fr": "Chaise"}}`.
pub type SubmittedTranslations = HashMap<String, HashMap<String, Option<String>>>;

/// Parse submitted translations from a JSON value
pub fn submitted_from_json(value: serde_json::Value) -> Result<SubmittedTranslations> {
    let submitted = SubmittedTranslations::deserialize(value)?;
    Ok(submitted)
}

/// Upsert service for translation writes
#[derive(Clone)]
pub struct TranslationWriter {
    /// Repository for translation writes
    repo: Repository,
}

impl TranslationWriter {
    /// Create a writer over the given repository
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Apply a batch of submitted translations to an entity.
    ///
    /// Fields not declared translatable for the entity are skipped silently.
    /// For each accepted (locale, text) pair, an existing record is updated
    /// in place immediately; missing records are staged and persisted in one
    /// batched call at the end.
    pub async fn save_translations<E: Translatable>(
        &self,
        entity: &E,
        submitted: &SubmittedTranslations,
    ) -> Result<()> {
        let owner_id = entity.owner_id();
        let owner_type = entity.owner_kind();

        let mut staged: Vec<NewTranslationRecord> = Vec::new();

        for (field, locales) in submitted {
            if !entity.is_translatable_attribute(field) {
                debug!(
                    "Skipping non-translatable field '{}' for {}#{}",
                    field, owner_type, owner_id
                );
                continue;
            }

            for (locale, text) in locales {
                let existing = self
                    .repo
                    .find_translation(owner_id, owner_type, field, locale)
                    .await?;

                // Update if exists
                if let Some(record) = existing {
                    self.repo.update_text(record.id, text.clone()).await?;
                    continue;
                }

                // Stage new
                staged.push(NewTranslationRecord::new(
                    owner_id,
                    owner_type.to_string(),
                    field.clone(),
                    locale.clone(),
                    text.clone(),
                ));
            }
        }

        // Save all new
        self.repo.insert_translations(staged).await
    }

    /// Remove every translation record belonging to an entity.
    ///
    /// The cascade hook made explicit: call this when the owning record is
    /// deleted so no orphaned translation rows remain. Returns the number of
    /// deleted records.
    pub async fn purge_translations<E: Translatable>(&self, entity: &E) -> Result<u64> {
        let deleted = self
            .repo
            .delete_for_owner(entity.owner_id(), entity.owner_kind())
            .await?;

        Ok(deleted as u64)
    }
}
