//! Libellés generator - spreadsheet libellés merged into YAML locales
//!
//! This library reads the "Widgets" sheet of a survey spreadsheet and merges
//! its French and English libellés into `<locales>/<language>/<section>.yml`
//! translation files.
//!
//! # Features
//!
//! - Existing translations are kept unless an overwrite is requested
//! - Lightweight notations (`**bold**`, `__oblique__`, `_green_..._green_`,
//!   `_red_..._red_`) rewritten to HTML
//! - `[nom]` placeholder replaced with the `{{nickname}}` template token
//! - Only files that received a translation are rewritten
//!
//! # Example
//!
//! ```no_run
//! use libelles_generator::generate_libelles;
//!
//! generate_libelles("survey.xlsx", "locales", false, None)?;
//! # Ok::<(), libelles_generator::error::LibellesError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod generator;
pub mod index;
pub mod markup;
pub mod parser;
pub mod store;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{LibellesError, LibellesResult};
pub use generator::{generate_libelles, LocalesGenerator};
pub use index::TranslationIndex;
pub use store::LanguageSectionStore;
pub use types::{GenerationSummary, GeneratorOptions, StoreKey, TranslationValue, YamlStyle};
