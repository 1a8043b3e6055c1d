//! Shared fixtures for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const HEADER: &str = "# This file was automatically generated by the Evolution Generator.
# The Evolution Generator is used to automate the creation of consistent, reliable code.
# Any changes made to this file will be overwritten.

";

/// Columns A-C hold widget metadata that the generator ignores
const HEADER_ROW: [&str; 7] = ["Id", "Type", "Label", "Section", "Path", "FR", "EN"];

/// Write a workbook whose Widgets sheet holds `rows` as
/// `[section, path, french, english]`; empty strings leave the cell blank.
pub fn write_widgets(path: &Path, rows: &[[&str; 4]]) {
    write_sheet(path, "Widgets", rows);
}

pub fn write_sheet(path: &Path, sheet_name: &str, rows: &[[&str; 4]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();

    for (col, header) in HEADER_ROW.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (index, row) in rows.iter().enumerate() {
        let row_number = (index + 1) as u32;
        sheet.write_string(row_number, 0, format!("W{}", row_number)).unwrap();
        for (offset, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet
                    .write_string(row_number, 3 + offset as u16, *value)
                    .unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Write an existing translation file below `root`
pub fn write_locale(root: &Path, language: &str, section: &str, content: &str) -> PathBuf {
    let dir = root.join(language);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(format!("{}.yml", section));
    fs::write(&file, content).unwrap();
    file
}

pub fn read_locale(root: &Path, language: &str, section: &str) -> String {
    fs::read_to_string(root.join(language).join(format!("{}.yml", section))).unwrap()
}

/// Every file below `root`, as sorted `/`-separated relative paths
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}
