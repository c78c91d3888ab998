/*!
 * Tests for the translation resolution service
 */

use crate::common::{in_memory_store, init_logging, Product};
use serde_json::json;
use translatable::Translatable;
use translatable::writer::submitted_from_json;

/// Test that a stored translation wins over the base attribute
#[tokio::test]
async fn test_getTranslation_withStoredTranslation_shouldReturnIt() {
    let (_repo, resolver, writer) = in_memory_store();
    let product = Product::new(1);

    let submitted = submitted_from_json(json!({"name": {"fr": "Chaise"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    let value = resolver
        .get_translation(&product, "name", Some("fr"))
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("Chaise"));
}

/// Test fallback to the base attribute for a locale with no translation
#[tokio::test]
async fn test_getTranslation_withUnknownLocale_shouldFallBackToBase() {
    let (_repo, resolver, writer) = in_memory_store();
    let product = Product::new(1);

    let submitted = submitted_from_json(json!({"name": {"fr": "Chaise"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    let value = resolver
        .get_translation(&product, "name", Some("de"))
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("Chair"));
}

/// Test that a non-translatable field resolves to its raw value for any locale
#[tokio::test]
async fn test_getTranslation_withNonTranslatableField_shouldReturnRawValue() {
    let (_repo, resolver, _writer) = in_memory_store();
    let product = Product::new(1);

    for locale in ["en", "fr", "de"] {
        let value = resolver
            .get_translation(&product, "price", Some(locale))
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("49"));
    }
}

/// Test that lookup does not re-check the declared set
#[tokio::test]
async fn test_getTranslation_withFieldRemovedFromSet_shouldStillReturnStoredText() {
    let (_repo, resolver, writer) = in_memory_store();
    let mut product = Product::new(1);

    let submitted = submitted_from_json(json!({"name": {"fr": "Chaise"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    // The declared set changed after the record was written; resolution is a
    // plain lookup and still finds it
    product.translatable.retain(|f| f != "name");

    let value = resolver
        .get_translation(&product, "name", Some("fr"))
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("Chaise"));
}

/// Test the raw lookup without fallback
#[tokio::test]
async fn test_translationValue_withMissingRecord_shouldReturnNone() {
    let (_repo, resolver, _writer) = in_memory_store();
    let product = Product::new(1);

    let value = resolver
        .translation_value(&product, "name", Some("fr"))
        .await
        .unwrap();
    assert!(value.is_none());
}

/// Test that an omitted locale resolves at the configured default
#[tokio::test]
async fn test_getTranslation_withOmittedLocale_shouldUseDefault() {
    let (_repo, resolver, writer) = in_memory_store();
    let product = Product::new(1);

    let submitted =
        submitted_from_json(json!({"name": {"en": "Armchair", "fr": "Chaise"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    assert_eq!(resolver.default_locale(), "en");
    let value = resolver.get_translation(&product, "name", None).await.unwrap();
    assert_eq!(value.as_deref(), Some("Armchair"));
}

/// Test attribute interception with the toggle on and off
#[tokio::test]
async fn test_resolveAttribute_shouldHonorAutoTranslationsToggle() {
    init_logging();
    let (_repo, resolver, writer) = in_memory_store();
    let mut product = Product::new(1);

    let submitted = submitted_from_json(json!({"name": {"en": "Armchair"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    // Toggle on: translatable reads route through resolution
    let value = resolver.resolve_attribute(&product, "name").await.unwrap();
    assert_eq!(value.as_deref(), Some("Armchair"));

    // Non-translatable reads stay raw either way
    let value = resolver.resolve_attribute(&product, "price").await.unwrap();
    assert_eq!(value.as_deref(), Some("49"));

    // Toggle off: raw value always
    product.disable_auto_translations();
    let value = resolver.resolve_attribute(&product, "name").await.unwrap();
    assert_eq!(value.as_deref(), Some("Chair"));
}

/// Test serialization substitution with auto-translation enabled
#[tokio::test]
async fn test_toExternal_withAutoEnabled_shouldSubstituteTranslatableFields() {
    let (_repo, resolver, writer) = in_memory_store();
    let product = Product::new(1);

    let submitted = submitted_from_json(json!({
        "name": {"en": "Armchair"},
        "description": {"en": "A comfortable armchair"}
    }))
    .unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    let external = resolver.to_external(&product).await.unwrap();

    assert_eq!(external["name"], "Armchair");
    assert_eq!(external["description"], "A comfortable armchair");
    // Non-translatable fields pass through untouched
    assert_eq!(external["id"], 1);
    assert_eq!(external["price"], 49);
}

/// Test that untranslated fields serialize with their base values
#[tokio::test]
async fn test_toExternal_withNoTranslations_shouldUseBaseValues() {
    let (_repo, resolver, _writer) = in_memory_store();
    let product = Product::new(1);

    let external = resolver.to_external(&product).await.unwrap();

    assert_eq!(external["name"], "Chair");
    assert_eq!(external["description"], "A wooden chair");
}

/// Test that disabling auto-translation returns the raw representation
#[tokio::test]
async fn test_toExternal_withAutoDisabled_shouldReturnRawRepresentation() {
    let (_repo, resolver, writer) = in_memory_store();
    let mut product = Product::new(1);

    let submitted = submitted_from_json(json!({"name": {"en": "Armchair"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    product.disable_auto_translations();
    let external = resolver.to_external(&product).await.unwrap();

    assert_eq!(external["name"], "Chair");
    assert_eq!(
        external,
        serde_json::Value::Object(product.raw_representation())
    );
}

/// Test substitution for a declared field the raw representation omits
#[tokio::test]
async fn test_toExternal_withDeclaredFieldMissingFromRaw_shouldInsertResolvedValue() {
    let (_repo, resolver, writer) = in_memory_store();
    let mut product = Product::new(1);
    product.translatable.push("tagline".to_string());

    let submitted = submitted_from_json(json!({"tagline": {"en": "Sit well"}})).unwrap();
    writer.save_translations(&product, &submitted).await.unwrap();

    let external = resolver.to_external(&product).await.unwrap();
    assert_eq!(external["tagline"], "Sit well");

    // With no translation and no base value the field serializes as null
    let (_repo2, resolver2, _writer2) = in_memory_store();
    let external = resolver2.to_external(&product).await.unwrap();
    assert_eq!(external["tagline"], serde_json::Value::Null);
}
