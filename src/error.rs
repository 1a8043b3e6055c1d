use std::path::PathBuf;
use thiserror::Error;

pub type LibellesResult<T> = Result<T, LibellesError>;

#[derive(Error, Debug)]
pub enum LibellesError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error loading translation yaml file {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("Error importing translation {language} {section} {path}: {message}")]
    RowImport {
        language: String,
        section: String,
        path: String,
        message: String,
    },

    #[error("Error reading spreadsheet: {0}")]
    SourceRead(String),

    #[error("Error saving translation yaml file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LibellesError {
    /// Build a `Load` error for `path`
    pub fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        LibellesError::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Build a `RowImport` error carrying the translation coordinates
    pub fn row_import(language: &str, section: &str, path: &str, message: impl ToString) -> Self {
        LibellesError::RowImport {
            language: language.to_string(),
            section: section.to_string(),
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}
