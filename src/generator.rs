//! Libellés generation - spreadsheet rows merged into the locales tree
//!
//! A run loads every existing `<language>/<section>.yml` file, routes the
//! French and English values of each Widgets row to the matching store, then
//! rewrites the stores that changed. Files nobody touched keep their bytes
//! and timestamps.
//!
//! There is no rollback: when a save fails, files written before the failure
//! keep their new content.

use crate::error::{LibellesError, LibellesResult};
use crate::excel::WidgetsImporter;
use crate::index::TranslationIndex;
use crate::store::LanguageSectionStore;
use crate::types::{GenerationSummary, GeneratorOptions, YamlStyle, TRANSLATION_FILE_EXTENSION};
use std::path::Path;
use tracing::{debug, error, info};
use walkdir::WalkDir;

/// Drives one generation run over a locales tree
#[derive(Debug)]
pub struct LocalesGenerator {
    options: GeneratorOptions,
    translations: TranslationIndex,
    summary: GenerationSummary,
}

impl LocalesGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_style(options, YamlStyle::default())
    }

    pub fn with_style(options: GeneratorOptions, style: YamlStyle) -> Self {
        let translations = TranslationIndex::with_style(&options.locales_path, style);
        Self {
            options,
            translations,
            summary: GenerationSummary::default(),
        }
    }

    /// Load every `*.yml` file under the locales root.
    ///
    /// The language is the name of the file's parent directory and the
    /// section is its file stem.
    pub fn load_current_translations(&mut self) -> LibellesResult<()> {
        let root = &self.options.locales_path;
        if !root.exists() {
            debug!(root = %root.display(), "Locales directory does not exist yet");
            return Ok(());
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        for entry in walker {
            let entry = entry.map_err(|e| {
                LibellesError::load(e.path().unwrap_or(root), e.to_string())
            })?;
            if !entry.file_type().is_file() || !is_translation_file(entry.path()) {
                continue;
            }

            let (language, section) = language_and_section(entry.path());
            let store = LanguageSectionStore::open(entry.path())?;
            self.translations.add_translations(&language, &section, store);
            self.summary.files_loaded += 1;
        }

        debug!(count = self.summary.files_loaded, "Loaded current translations");
        Ok(())
    }

    /// Merge the Widgets sheet into the loaded translations
    pub fn add_translations_from_excel(&mut self) -> LibellesResult<()> {
        let rows = WidgetsImporter::new(&self.options.input_file)
            .import()
            .inspect_err(|e| error!(error = %e, "Exception occurred in add_translations_from_excel"))?;

        // Column L of the Widgets sheet once carried this flag; it is not read.
        let keep_markdown = false;

        for row in &rows {
            self.summary.rows_read += 1;
            for (language, value) in row.translations() {
                let (Some(section), Some(path)) = (&row.section, &row.path) else {
                    let e = LibellesError::row_import(
                        language,
                        row.section.as_deref().unwrap_or_default(),
                        row.path.as_deref().unwrap_or_default(),
                        format!("row {} has a translation but no section or path", row.row),
                    );
                    error!(row = row.row, error = %e, "Exception occurred in add_translations_from_excel");
                    return Err(e);
                };

                self.translations.add_translation(
                    language,
                    section,
                    path,
                    value,
                    self.options.overwrite,
                    keep_markdown,
                )?;
                self.summary.translations_applied += 1;
            }
        }

        Ok(())
    }

    /// Write every store that received a translation
    pub fn save_all_translations(&mut self) -> LibellesResult<()> {
        self.summary.files_written += self.translations.save()?;
        Ok(())
    }

    /// Load, merge and save, in that order
    pub fn run(mut self) -> LibellesResult<GenerationSummary> {
        if let Some(section) = &self.options.section {
            debug!(section = %section, "Section filter is accepted but not applied");
        }

        self.load_current_translations()?;
        self.add_translations_from_excel()?;
        self.save_all_translations()?;

        info!("Generate translations successfully");
        Ok(self.summary)
    }

    pub fn translations(&self) -> &TranslationIndex {
        &self.translations
    }

    pub fn summary(&self) -> GenerationSummary {
        self.summary
    }
}

/// Generate the locales libellés files from the Widgets sheet of `input_file`.
///
/// `section` is accepted for callers that pass one; every section is
/// generated regardless.
pub fn generate_libelles<P, Q>(
    input_file: P,
    locales_path: Q,
    overwrite: bool,
    section: Option<&str>,
) -> LibellesResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let options = GeneratorOptions::new(input_file.as_ref(), locales_path.as_ref())
        .with_overwrite(overwrite)
        .with_section(section.map(str::to_string));

    LocalesGenerator::new(options)
        .run()
        .map(|_| ())
        .inspect_err(|e| error!(error = %e, "An error occurred while generating libellés"))
}

fn is_translation_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == TRANSLATION_FILE_EXTENSION)
}

/// `<root>/<language>/<section>.yml` → (language, section)
fn language_and_section(path: &Path) -> (String, String) {
    let language = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let section = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    (language, section)
}
