//! Spreadsheet import for the Widgets sheet
//!
//! Only cached cell values are read: a workbook saved by Excel or LibreOffice
//! carries the last computed result of every formula.

mod importer;

pub use importer::{
    WidgetRow, WidgetsImporter, ENGLISH, ENGLISH_COLUMN, FRENCH, FRENCH_COLUMN, PATH_COLUMN,
    SECTION_COLUMN, WIDGETS_SHEET,
};
