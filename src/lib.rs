/*!
 * # Translatable - per-field, per-locale translations for stored records
 *
 * A Rust library that attaches text translations to database-backed records,
 * one row per (owner, field, locale), with transparent fallback to the
 * record's own stored attribute.
 *
 * ## Features
 *
 * - Polymorphic translation storage: one SQLite table serves any number of
 *   entity kinds, discriminated by an owner-type tag
 * - Resolution with fallback: a missing or NULL translation yields the
 *   entity's base attribute value, never an error
 * - Batched upserts: existing translations are updated in place, new ones
 *   are inserted in a single batch
 * - Explicit serialization substitution for API output
 * - Per-instance auto-translation toggle
 * - Cascade purge of all translations when an owning record is deleted
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `store_config`: Configuration management
 * - `entity`: The `Translatable` trait implemented by owning records
 * - `database`: SQLite persistence layer:
 *   - `database::schema`: Table definitions and migrations
 *   - `database::connection`: Thread-safe connection management
 *   - `database::models`: Row structs
 *   - `database::repository`: Typed query/write API
 * - `resolver`: Translation resolution with base-attribute fallback
 * - `writer`: Translation upserts and cascade purge
 * - `locale_utils`: ISO 639-1 locale code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod database;
pub mod entity;
pub mod errors;
pub mod locale_utils;
pub mod resolver;
pub mod store_config;
pub mod writer;

// Re-export main types for easier usage
pub use database::{DatabaseConnection, Repository};
pub use entity::Translatable;
pub use errors::StoreError;
pub use locale_utils::{locale_name, validate_locale};
pub use resolver::TranslationResolver;
pub use store_config::StoreConfig;
pub use writer::{SubmittedTranslations, TranslationWriter};
