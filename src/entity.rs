/*!
 * The Translatable trait implemented by owning records.
 *
 * An entity that wants per-field translations declares which of its
 * attributes are translatable, exposes its polymorphic owner key, and
 * provides access to its own stored attribute values (the fallback content
 * when no translation exists).
 *
 * There is no implicit attribute interception: callers resolve translated
 * values through `TranslationResolver` explicitly.
 */

use serde_json::{Map, Value};

/// A record that can carry per-field, per-locale translations.
pub trait Translatable {
    /// Identifier of this record in its own storage
    fn owner_id(&self) -> i64;

    /// Discriminator naming this record's kind.
    ///
    /// Together with `owner_id` this forms the polymorphic owner key: one
    /// translations table serves every kind implementing this trait.
    fn owner_kind(&self) -> &str;

    /// The set of attribute names declared translatable
    fn translatable_attributes(&self) -> &[String];

    /// Whether resolution and serialization should substitute translations.
    ///
    /// The toggle is per-instance: flipping it on one entity value never
    /// affects another.
    fn auto_translations(&self) -> bool;

    /// Set the auto-translation toggle for this instance
    fn set_auto_translations(&mut self, enabled: bool);

    /// The record's own stored value for an attribute.
    ///
    /// This is the original-language content, used as the fallback whenever
    /// no translation exists for a requested locale.
    fn base_attribute(&self, field: &str) -> Option<String>;

    /// The record's raw external representation, before any translation
    /// substitution.
    fn raw_representation(&self) -> Map<String, Value>;

    /// Check if the attribute is translatable
    fn is_translatable_attribute(&self, field: &str) -> bool {
        let attributes = self.translatable_attributes();
        !attributes.is_empty() && attributes.iter().any(|a| a == field)
    }

    /// Enable auto translations
    fn enable_auto_translations(&mut self) {
        self.set_auto_translations(true);
    }

    /// Disable auto translations
    fn disable_auto_translations(&mut self) {
        self.set_auto_translations(false);
    }
}
