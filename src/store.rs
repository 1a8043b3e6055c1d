//! One translation file: a single language × section

use crate::error::LibellesResult;
use crate::markup;
use crate::parser::parse_translation_file;
use crate::types::{TranslationValue, YamlStyle};
use crate::writer::write_translation_file;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Placeholder authors type in the spreadsheet for the respondent's name
pub const NICKNAME_PLACEHOLDER: &str = "[nom]";

/// Template token the placeholder is replaced with
pub const NICKNAME_TOKEN: &str = "{{nickname}}";

/// Ordered translations of one `<language>/<section>.yml` file
#[derive(Debug, Clone)]
pub struct LanguageSectionStore {
    file: PathBuf,
    entries: Vec<(String, TranslationValue)>,
    positions: HashMap<String, usize>,
    plain_keys: HashSet<String>,
    modified: bool,
}

impl LanguageSectionStore {
    /// Create an empty store bound to `file`
    pub fn new<P: AsRef<Path>>(file: P) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
            entries: Vec::new(),
            positions: HashMap::new(),
            plain_keys: HashSet::new(),
            modified: false,
        }
    }

    /// Create a store bound to `file` and load its current translations
    pub fn open<P: AsRef<Path>>(file: P) -> LibellesResult<Self> {
        let mut store = Self::new(file);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory translations with the content of the bound file
    pub fn load(&mut self) -> LibellesResult<()> {
        let parsed = parse_translation_file(&self.file)?;
        debug!(file = %self.file.display(), count = parsed.entries.len(), "Loaded translations");

        self.entries.clear();
        self.positions.clear();
        for (path, value) in parsed.entries {
            self.set(path, value);
        }
        self.plain_keys = parsed.plain_keys;
        Ok(())
    }

    /// Add or replace the translation stored under `path`.
    ///
    /// An existing translation is kept unless `overwrite` is set. The
    /// `[nom]` placeholder becomes `{{nickname}}`, then notations are
    /// rewritten to HTML unless `keep_markdown` is set.
    pub fn add_translation(
        &mut self,
        path: &str,
        value: &str,
        overwrite: bool,
        keep_markdown: bool,
    ) {
        if !overwrite && self.positions.contains_key(path) {
            return;
        }

        let value = value.replace(NICKNAME_PLACEHOLDER, NICKNAME_TOKEN);
        let value = if keep_markdown {
            value
        } else {
            markup::rewrite(&value)
        };

        self.set(path.to_string(), TranslationValue::Text(value));
        self.modified = true;
    }

    /// Write the file if anything was added. Returns whether it was written.
    ///
    /// The store stays modified afterwards; saving again rewrites the same
    /// content.
    pub fn save(&self, style: &YamlStyle) -> LibellesResult<bool> {
        if !self.modified {
            return Ok(false);
        }

        write_translation_file(&self.file, &self.entries, &self.plain_keys, style)?;
        info!(
            "Generate {} successfully",
            self.file.display().to_string().replace('\\', "/")
        );
        Ok(true)
    }

    pub fn get(&self, path: &str) -> Option<&TranslationValue> {
        self.positions.get(path).map(|&index| &self.entries[index].1)
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translations in file order
    pub fn entries(&self) -> &[(String, TranslationValue)] {
        &self.entries
    }

    /// Insert keeping the original position of an existing key
    fn set(&mut self, path: String, value: TranslationValue) {
        match self.positions.get(&path) {
            Some(&index) => self.entries[index].1 = value,
            None => {
                self.positions.insert(path.clone(), self.entries.len());
                self.entries.push((path, value));
            }
        }
    }
}
