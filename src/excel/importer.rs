//! Widgets sheet reader - spreadsheet (.xlsx/.xls/.ods) → translation rows

use crate::error::{LibellesError, LibellesResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Sheet holding the widget libellés
pub const WIDGETS_SHEET: &str = "Widgets";

/// Zero-based column positions in the Widgets sheet (D, E, F, G)
pub const SECTION_COLUMN: u32 = 3;
pub const PATH_COLUMN: u32 = 4;
pub const FRENCH_COLUMN: u32 = 5;
pub const ENGLISH_COLUMN: u32 = 6;

/// Language codes the French and English columns are written to
pub const FRENCH: &str = "fr";
pub const ENGLISH: &str = "en";

/// One data row of the Widgets sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetRow {
    /// 1-based row number as shown in the spreadsheet
    pub row: u32,
    pub section: Option<String>,
    pub path: Option<String>,
    pub french: Option<String>,
    pub english: Option<String>,
}

impl WidgetRow {
    /// Present translations as `(language, value)` pairs, French first
    pub fn translations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [(FRENCH, &self.french), (ENGLISH, &self.english)]
            .into_iter()
            .filter_map(|(language, value)| value.as_deref().map(|v| (language, v)))
    }
}

/// Reads the Widgets sheet of a spreadsheet
pub struct WidgetsImporter {
    path: std::path::PathBuf,
}

impl WidgetsImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read every row after the header.
    ///
    /// Cells hold their last computed values; formulas are not evaluated.
    pub fn import(&self) -> LibellesResult<Vec<WidgetRow>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            LibellesError::SourceRead(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let range = workbook.worksheet_range(WIDGETS_SHEET).map_err(|e| {
            LibellesError::SourceRead(format!(
                "Failed to read sheet '{}' in {}: {}",
                WIDGETS_SHEET,
                self.path.display(),
                e
            ))
        })?;

        self.read_rows(&range)
    }

    /// Convert the sheet range to rows, skipping the header row
    fn read_rows(&self, range: &Range<Data>) -> LibellesResult<Vec<WidgetRow>> {
        let Some((last_row, _)) = range.end() else {
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        for row in 1..=last_row {
            rows.push(WidgetRow {
                row: row + 1,
                section: self.cell_text(range, row, SECTION_COLUMN)?,
                path: self.cell_text(range, row, PATH_COLUMN)?,
                french: self.cell_text(range, row, FRENCH_COLUMN)?,
                english: self.cell_text(range, row, ENGLISH_COLUMN)?,
            });
        }
        Ok(rows)
    }

    /// Text of a cell at an absolute position; empty cells are `None`
    fn cell_text(&self, range: &Range<Data>, row: u32, col: u32) -> LibellesResult<Option<String>> {
        match range.get_value((row, col)) {
            None | Some(Data::Empty) => Ok(None),
            Some(Data::String(s)) if s.is_empty() => Ok(None),
            Some(Data::String(s)) => Ok(Some(s.clone())),
            Some(Data::Error(e)) => Err(LibellesError::SourceRead(format!(
                "Error value {:?} in cell {}{} of sheet '{}'",
                e,
                column_letter(col),
                row + 1,
                WIDGETS_SHEET
            ))),
            Some(other) => Ok(Some(other.to_string())),
        }
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
fn column_letter(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    fn sheet(cells: &[((u32, u32), Data)]) -> Range<Data> {
        let cells: Vec<calamine::Cell<Data>> = cells
            .iter()
            .map(|(pos, value)| calamine::Cell::new(*pos, value.clone()))
            .collect();
        Range::from_sparse(cells)
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(3), "D");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
    }

    #[test]
    fn test_read_rows_skips_header() {
        let range = sheet(&[
            ((0, 3), text("Section")),
            ((0, 4), text("Path")),
            ((1, 3), text("home")),
            ((1, 4), text("title")),
            ((1, 5), text("Bienvenue")),
            ((1, 6), text("Welcome")),
        ]);
        let rows = WidgetsImporter::new("w.xlsx").read_rows(&range).unwrap();
        assert_eq!(
            rows,
            vec![WidgetRow {
                row: 2,
                section: Some("home".to_string()),
                path: Some("title".to_string()),
                french: Some("Bienvenue".to_string()),
                english: Some("Welcome".to_string()),
            }]
        );
    }

    #[test]
    fn test_missing_and_empty_cells() {
        let range = sheet(&[
            ((0, 0), text("header")),
            ((1, 3), text("home")),
            ((1, 4), text("title")),
            ((1, 5), text("")),
            ((1, 6), text("Welcome")),
        ]);
        let rows = WidgetsImporter::new("w.xlsx").read_rows(&range).unwrap();
        assert_eq!(rows[0].french, None);
        let translations: Vec<_> = rows[0].translations().collect();
        assert_eq!(translations, vec![(ENGLISH, "Welcome")]);
    }

    #[test]
    fn test_numeric_cells_become_text() {
        let range = sheet(&[
            ((0, 0), text("header")),
            ((1, 3), text("scores")),
            ((1, 4), Data::Int(10)),
            ((1, 5), Data::Float(2.5)),
            ((1, 6), Data::Bool(true)),
        ]);
        let rows = WidgetsImporter::new("w.xlsx").read_rows(&range).unwrap();
        assert_eq!(rows[0].path.as_deref(), Some("10"));
        assert_eq!(rows[0].french.as_deref(), Some("2.5"));
        assert_eq!(rows[0].english.as_deref(), Some("true"));
    }

    #[test]
    fn test_error_cell_is_source_error() {
        let range = sheet(&[
            ((0, 0), text("header")),
            ((1, 5), Data::Error(CellErrorType::Ref)),
        ]);
        let err = WidgetsImporter::new("w.xlsx").read_rows(&range).unwrap_err();
        assert!(err.to_string().contains("F2"), "{err}");
    }

    #[test]
    fn test_empty_sheet() {
        let range: Range<Data> = Range::empty();
        let rows = WidgetsImporter::new("w.xlsx").read_rows(&range).unwrap();
        assert!(rows.is_empty());
    }
}
