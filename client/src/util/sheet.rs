//! Minimal tabular workbook model with an xlsx codec.
//!
//! A [`Workbook`] is an ordered list of named [`Sheet`]s and encodes to a
//! single `.xlsx` file (one worksheet per sheet, with column widths and
//! cell notes). Decoding reads the first worksheet of an xlsx/xls/ods
//! upload, or a plain CSV document, and yields header-keyed records.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

use std::collections::BTreeMap;
use std::io::Cursor;

use calamine::Reader;

/// MIME type of the encoded workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Author shown on cell notes.
const NOTE_AUTHOR: &str = "Clinic Queue";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0";

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("workbook encode failed: {0}")]
    Encode(String),
    #[error("workbook decode failed: {0}")]
    Decode(String),
    #[error("sheet has no header row")]
    MissingHeader,
}

/// Hover note attached to one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellNote {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// One grid of cells. Rows may be ragged; empty cells are left blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
    /// Column widths in characters, from column A onward.
    pub column_widths: Vec<u16>,
    pub notes: Vec<CellNote>,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned(), ..Self::default() }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn add_note(&mut self, row: usize, col: usize, text: &str) {
        self.notes.push(CellNote { row, col, text: text.to_owned() });
    }

    pub fn note_at(&self, row: usize, col: usize) -> Option<&str> {
        self.notes.iter().find(|n| n.row == row && n.col == col).map(|n| n.text.as_str())
    }

    fn write_to(&self, worksheet: &mut rust_xlsxwriter::Worksheet) -> Result<(), SheetError> {
        worksheet.set_name(&self.name).map_err(encode_error)?;
        for (col, width) in self.column_widths.iter().enumerate() {
            worksheet.set_column_width(col_index(col)?, f64::from(*width)).map_err(encode_error)?;
        }
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate().filter(|(_, cell)| !cell.is_empty()) {
                worksheet.write_string(row_index(row)?, col_index(col)?, cell).map_err(encode_error)?;
            }
        }
        for note in &self.notes {
            let cell_note = rust_xlsxwriter::Note::new(&note.text).set_author(NOTE_AUTHOR);
            worksheet
                .insert_note(row_index(note.row)?, col_index(note.col)?, &cell_note)
                .map_err(encode_error)?;
        }
        Ok(())
    }
}

/// Ordered collection of sheets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Encode every sheet into one `.xlsx` file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Encode`] for invalid sheet names, grids too large
    /// for the format, or a writer failure.
    pub fn to_xlsx(&self) -> Result<Vec<u8>, SheetError> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for sheet in &self.sheets {
            sheet.write_to(workbook.add_worksheet())?;
        }
        workbook.save_to_buffer().map_err(encode_error)
    }
}

fn encode_error(e: rust_xlsxwriter::XlsxError) -> SheetError {
    SheetError::Encode(e.to_string())
}

fn row_index(row: usize) -> Result<u32, SheetError> {
    u32::try_from(row).map_err(|_| SheetError::Encode(format!("row {row} out of range")))
}

fn col_index(col: usize) -> Result<u16, SheetError> {
    u16::try_from(col).map_err(|_| SheetError::Encode(format!("column {col} out of range")))
}

/// A data row keyed by header text. Missing cells are absent.
pub type Record = BTreeMap<String, String>;

/// Decode an uploaded sheet into header-keyed records.
///
/// Spreadsheet files (xlsx, xls, ods) are recognized by their signature and
/// only the first worksheet is read; anything else is read as CSV. Header
/// and cell values are trimmed, a UTF-8 BOM is ignored, and rows whose cells
/// are all empty are skipped.
///
/// # Errors
///
/// Returns [`SheetError::MissingHeader`] for an empty sheet and
/// [`SheetError::Decode`] for unreadable input.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, SheetError> {
    if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
        records_from_grid(spreadsheet_rows(bytes)?)
    } else {
        records_from_grid(csv_rows(bytes)?)
    }
}

fn spreadsheet_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, SheetError> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| SheetError::Decode(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::MissingHeader)?
        .map_err(|e| SheetError::Decode(e.to_string()))?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_owned()).collect())
        .collect())
}

fn csv_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, SheetError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes)
        .records()
        .map(|row| {
            row.map(|row| row.iter().map(str::to_owned).collect())
                .map_err(|e| SheetError::Decode(e.to_string()))
        })
        .collect()
}

fn records_from_grid(grid: Vec<Vec<String>>) -> Result<Vec<Record>, SheetError> {
    let mut rows = grid.into_iter();
    let header = rows.next().ok_or(SheetError::MissingHeader)?;
    let records = rows
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|row| {
            header
                .iter()
                .zip(row)
                .filter(|(key, value)| !key.is_empty() && !value.is_empty())
                .map(|(key, value)| (key.clone(), value))
                .collect::<Record>()
        })
        .collect();
    Ok(records)
}
