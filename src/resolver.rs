/*!
 * Translation resolution with base-attribute fallback.
 *
 * The resolver computes the effective value of an entity's field for a
 * locale: the stored translation when one exists with non-NULL text, the
 * entity's own attribute value otherwise. Absence is never an error.
 *
 * The locale used when a caller passes none is explicit resolver
 * configuration rather than process-global state, so resolution stays
 * deterministic under test.
 */

use anyhow::Result;
use log::debug;
use serde_json::Value;

use crate::database::Repository;
use crate::entity::Translatable;
use crate::store_config::StoreConfig;

/// Resolution service for translated field values
#[derive(Clone)]
pub struct TranslationResolver {
    /// Repository for translation lookups
    repo: Repository,
    /// Locale used when the caller does not request one
    default_locale: String,
}

impl TranslationResolver {
    /// Create a resolver with an explicit default locale
    pub fn new(repo: Repository, default_locale: impl Into<String>) -> Self {
        Self {
            repo,
            default_locale: default_locale.into(),
        }
    }

    /// Create a resolver configured from a store configuration
    pub fn with_config(repo: Repository, config: &StoreConfig) -> Self {
        Self::new(repo, config.default_locale.clone())
    }

    /// The locale used when callers do not pass one explicitly
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Get the stored translation text for a field, if any.
    ///
    /// Returns `None` when no record exists for the tuple or when the stored
    /// text is NULL. No fallback is applied.
    pub async fn translation_value<E: Translatable>(
        &self,
        entity: &E,
        field: &str,
        locale: Option<&str>,
    ) -> Result<Option<String>> {
        let locale = locale.unwrap_or(&self.default_locale);

        let record = self
            .repo
            .find_translation(entity.owner_id(), entity.owner_kind(), field, locale)
            .await?;

        Ok(record.and_then(|r| r.text))
    }

    /// Get the effective value of a field for a locale.
    ///
    /// Falls back to the entity's own stored attribute when no translation
    /// exists; the base value is the original-language content.
    pub async fn get_translation<E: Translatable>(
        &self,
        entity: &E,
        field: &str,
        locale: Option<&str>,
    ) -> Result<Option<String>> {
        if let Some(text) = self.translation_value(entity, field, locale).await? {
            return Ok(Some(text));
        }

        debug!(
            "No translation for {}#{} field '{}', falling back to base attribute",
            entity.owner_kind(),
            entity.owner_id(),
            field
        );
        Ok(entity.base_attribute(field))
    }

    /// Resolve an attribute the way an interception hook would.
    ///
    /// When the entity's auto-translation toggle is on and the field is
    /// declared translatable, the read routes through `get_translation` at
    /// the default locale. Otherwise the raw stored value is returned,
    /// regardless of the field.
    pub async fn resolve_attribute<E: Translatable>(
        &self,
        entity: &E,
        field: &str,
    ) -> Result<Option<String>> {
        if entity.auto_translations() && entity.is_translatable_attribute(field) {
            return self.get_translation(entity, field, None).await;
        }

        Ok(entity.base_attribute(field))
    }

    /// Convert an entity to its external representation.
    ///
    /// With auto-translation enabled, every declared translatable field is
    /// replaced by its resolved value at the default locale. With it
    /// disabled, the raw representation is returned unchanged.
    pub async fn to_external<E: Translatable>(&self, entity: &E) -> Result<Value> {
        let mut attributes = entity.raw_representation();

        if !entity.auto_translations() {
            return Ok(Value::Object(attributes));
        }

        for field in entity.translatable_attributes() {
            let resolved = self.get_translation(entity, field, None).await?;
            attributes.insert(field.clone(), resolved.map_or(Value::Null, Value::String));
        }

        Ok(Value::Object(attributes))
    }
}
