use anyhow::Result;
use isolang::Language;

use crate::errors::StoreError;

/// Locale utilities for ISO 639-1 code handling
///
/// The translations table stores locales as 2-letter ISO 639-1 codes. This
/// module provides functions for validating and normalizing those codes and
/// for resolving their human-readable language names.
/// Validate a locale code and normalize it to lowercase 2-letter form
pub fn validate_locale(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(normalized_code);
    }

    Err(StoreError::InvalidLocale(code.to_string()).into())
}

/// Get the English language name for a locale code
pub fn locale_name(code: &str) -> Result<String> {
    let normalized_code = validate_locale(code)?;

    let language = Language::from_639_1(&normalized_code)
        .ok_or_else(|| StoreError::InvalidLocale(code.to_string()))?;

    Ok(language.to_name().to_string())
}
