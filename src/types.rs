use std::fmt;
use std::path::{Path, PathBuf};

//==============================================================================
// Store keys
//==============================================================================

/// Composite (language, section) key identifying one translation file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreKey {
    pub language: String,
    pub section: String,
}

impl StoreKey {
    pub fn new(language: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            section: section.into(),
        }
    }

    /// File bound to this key: `<locales_root>/<language>/<section>.yml`
    pub fn file_path(&self, locales_root: &Path) -> PathBuf {
        locales_root
            .join(&self.language)
            .join(format!("{}.{}", self.section, TRANSLATION_FILE_EXTENSION))
    }

    /// Check that both parts can be used as a single file name component
    pub fn validate(&self) -> Result<(), String> {
        for (label, part) in [("language", &self.language), ("section", &self.section)] {
            if part.trim().is_empty() {
                return Err(format!("{} is empty", label));
            }
            if part == "." || part == ".." || part.contains(['/', '\\']) {
                return Err(format!("{} '{}' is not a valid file name", label, part));
            }
        }
        Ok(())
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.section)
    }
}

/// Extension of the translation files under the locales root
pub const TRANSLATION_FILE_EXTENSION: &str = "yml";

//==============================================================================
// Translation values
//==============================================================================

/// A value stored under one translation path
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    /// Text libellé, written inline or folded depending on its content
    Text(String),
    /// Anything else found in an existing file (nested mapping, sequence,
    /// number...), kept verbatim
    Structured(serde_yaml::Value),
}

impl TranslationValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::Structured(_) => None,
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Text(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Text(text)
    }
}

/// On-disk representation of a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    Inline,
    Folded,
}

impl ScalarStyle {
    /// Multi-line or longer than `inline_limit` characters → folded
    pub fn for_text(text: &str, inline_limit: usize) -> Self {
        if text.contains('\n') || text.chars().count() > inline_limit {
            ScalarStyle::Folded
        } else {
            ScalarStyle::Inline
        }
    }
}

//==============================================================================
// Configuration
//==============================================================================

/// Formatting used when a translation file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YamlStyle {
    /// Indentation of block content and nested values
    pub indent: usize,
    /// Soft wrap column for folded scalars
    pub width: usize,
    /// Longest text (in characters) still written inline
    pub inline_limit: usize,
}

impl Default for YamlStyle {
    fn default() -> Self {
        Self {
            indent: 4,
            width: 80,
            inline_limit: 76,
        }
    }
}

/// Options for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Spreadsheet holding the "Widgets" sheet
    pub input_file: PathBuf,
    /// Root of the `<language>/<section>.yml` tree
    pub locales_path: PathBuf,
    /// Replace translations that already exist
    pub overwrite: bool,
    /// Accepted for callers that pass a section; no filtering is applied
    pub section: Option<String>,
}

impl GeneratorOptions {
    pub fn new(input_file: impl Into<PathBuf>, locales_path: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            locales_path: locales_path.into(),
            overwrite: false,
            section: None,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files_loaded: usize,
    pub rows_read: usize,
    pub translations_applied: usize,
    pub files_written: usize,
}
