//! All translation stores of a run, keyed by (language, section)

use crate::error::{LibellesError, LibellesResult};
use crate::store::LanguageSectionStore;
use crate::types::{StoreKey, YamlStyle};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Routes translations to the store of their language and section
#[derive(Debug, Clone)]
pub struct TranslationIndex {
    locales_path: PathBuf,
    style: YamlStyle,
    stores: BTreeMap<StoreKey, LanguageSectionStore>,
}

impl TranslationIndex {
    pub fn new<P: AsRef<Path>>(locales_path: P) -> Self {
        Self::with_style(locales_path, YamlStyle::default())
    }

    pub fn with_style<P: AsRef<Path>>(locales_path: P, style: YamlStyle) -> Self {
        Self {
            locales_path: locales_path.as_ref().to_path_buf(),
            style,
            stores: BTreeMap::new(),
        }
    }

    /// Register an already loaded store, replacing any store with the same key
    pub fn add_translations(&mut self, language: &str, section: &str, store: LanguageSectionStore) {
        let key = StoreKey::new(language, section);
        if let Some(previous) = self.stores.insert(key.clone(), store) {
            warn!(
                key = %key,
                replaced = %previous.file().display(),
                "Two translation files map to the same language and section"
            );
        }
    }

    /// Add one translation, creating the store of `language`/`section` on
    /// first use
    pub fn add_translation(
        &mut self,
        language: &str,
        section: &str,
        path: &str,
        value: &str,
        overwrite: bool,
        keep_markdown: bool,
    ) -> LibellesResult<()> {
        let key = StoreKey::new(language, section);
        if let Err(message) = key.validate() {
            error!(language, section, path, %message, "Exception occurred while adding translation");
            return Err(LibellesError::row_import(language, section, path, message));
        }

        let store = match self.stores.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let file = entry.key().file_path(&self.locales_path);
                entry.insert(LanguageSectionStore::new(file))
            }
        };
        store.add_translation(path, value, overwrite, keep_markdown);
        Ok(())
    }

    /// Save every store. Clean stores are skipped; returns the number of
    /// files written.
    pub fn save(&self) -> LibellesResult<usize> {
        let mut written = 0;
        for (key, store) in &self.stores {
            match store.save(&self.style) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(e) => {
                    error!(key = %key, error = %e, "Failed to save translations");
                    return Err(e);
                }
            }
        }
        Ok(written)
    }

    pub fn get(&self, language: &str, section: &str) -> Option<&LanguageSectionStore> {
        self.stores.get(&StoreKey::new(language, section))
    }

    pub fn keys(&self) -> impl Iterator<Item = &StoreKey> {
        self.stores.keys()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn locales_path(&self) -> &Path {
        &self.locales_path
    }
}
