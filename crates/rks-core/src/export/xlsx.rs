use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::score::ScoreTable;

/// Typed view of a text cell as it lands in a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    Empty,
    Number(f64),
    Boolean(bool),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    pub fn classify(text: &'a str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Self::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Self::Boolean(false);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(text),
        }
    }
}

/// Write the table to a single-sheet workbook with a bold header row.
pub fn write_xlsx(table: &ScoreTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (row_index, row) in table.rows().iter().enumerate() {
        let row_num = (row_index + 1) as u32;
        for (col, text) in row.iter().enumerate() {
            let col = col as u16;
            match CellValue::classify(text) {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet.write_number(row_num, col, n)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(row_num, col, b)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
