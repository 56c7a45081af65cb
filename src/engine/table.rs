use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

/// The complete parsed upload: header row plus every data row in input order.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>
}

impl RawTable {
    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }
}

/// Reads a comma separated table with a header row.
///
/// Cells and headers are trimmed, ragged rows are kept as they are and blank
/// lines are skipped. An empty input yields an empty header row.
pub fn read_table<R: Read>(source: R) -> Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    Ok(RawTable { headers, rows })
}
