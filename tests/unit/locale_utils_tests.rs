/*!
 * Tests for locale code utility functions
 */

use translatable::locale_utils::{locale_name, validate_locale};
use translatable::StoreError;

/// Test validation of ISO 639-1 locale codes
#[test]
fn test_validate_locale_withValidCodes_shouldNormalize() {
    assert_eq!(validate_locale("en").unwrap(), "en");
    assert_eq!(validate_locale("fr").unwrap(), "fr");
    assert_eq!(validate_locale("de").unwrap(), "de");
    assert_eq!(validate_locale("ja").unwrap(), "ja");

    // Whitespace and case tests
    assert_eq!(validate_locale(" EN ").unwrap(), "en");
    assert_eq!(validate_locale("Fr").unwrap(), "fr");
    assert_eq!(validate_locale("DE").unwrap(), "de");
}

/// Test rejection of codes that are not 2-letter ISO 639-1
#[test]
fn test_validate_locale_withInvalidCodes_shouldError() {
    // Unassigned 2-letter combinations
    assert!(validate_locale("xx").is_err());
    assert!(validate_locale("zz").is_err());

    // Wrong lengths
    assert!(validate_locale("e").is_err());
    assert!(validate_locale("eng").is_err());
    assert!(validate_locale("").is_err());

    // Non-alphabetic
    assert!(validate_locale("12").is_err());
}

/// Test that invalid codes surface the typed InvalidLocale error
#[test]
fn test_validate_locale_withInvalidCode_shouldReturnTypedError() {
    let err = validate_locale("q9").unwrap_err();
    let store_err = err
        .downcast_ref::<StoreError>()
        .expect("Should be a StoreError");
    assert!(matches!(store_err, StoreError::InvalidLocale(code) if code == "q9"));
}

/// Test retrieval of language names from locale codes
#[test]
fn test_locale_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(locale_name("en").unwrap(), "English");
    assert_eq!(locale_name("fr").unwrap(), "French");
    assert_eq!(locale_name("de").unwrap(), "German");

    // Normalization applies before lookup
    assert_eq!(locale_name(" FR ").unwrap(), "French");
}

/// Test that invalid codes have no language name
#[test]
fn test_locale_name_withInvalidCodes_shouldError() {
    assert!(locale_name("xx").is_err());
    assert!(locale_name("french").is_err());
}
