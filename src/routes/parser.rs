// CSV routing table parser

use super::{RouteEntry, RouteTable};
use crate::error::{AppError, AppResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_route_table(path: &Path) -> AppResult<RouteTable> {
    let file = File::open(path)?;
    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("routing-table")
        .to_string();
    parse_route_table(file, source)
}

fn parse_route_table<R: Read>(reader: R, source: String) -> AppResult<RouteTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize() {
        let entry: RouteEntry = result.map_err(|e| AppError::RouteTableParse(e.to_string()))?;
        entries.push(entry);
    }

    let timestamp = chrono::Utc::now().to_rfc3339();

    Ok(RouteTable {
        source,
        entries,
        timestamp,
    })
}
