use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::score::ScoreTable;

/// Write the table as comma-separated text with a header row.
pub fn write_csv(table: &ScoreTable, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
