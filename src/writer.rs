//! Roster workbook writer

use crate::error::{Error, Result};
use crate::types::{HEADERS, Record};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// Write `records` to a single-sheet workbook at `path`.
///
/// Row 0 holds [`HEADERS`]; each record follows on its own row with every
/// cell written as plain text. An existing file at `path` is replaced.
pub fn write_workbook(records: &[Record], sheet_name: &str, path: &Path) -> Result<()> {
    build_and_save(records, sheet_name, path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

fn build_and_save(
    records: &[Record],
    sheet_name: &str,
    path: &Path,
) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        sheet.write_string(0, col, header)?;
    }

    for (row, record) in (1u32..).zip(records) {
        for (col, value) in (0u16..).zip(record.cells()) {
            sheet.write_string(row, col, value)?;
        }
    }

    workbook.save(path)
}
