// File: crates/hazard-core/src/loader.rs
// Summary: CSV ingestion: `Year,value` rows into a validated HazardSeries.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::series::{HazardRecord, HazardSeries};

const YEAR_COLUMN: &str = "Year";
const VALUE_COLUMN: &str = "value";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load one hazard series from a headed CSV file with `Year` and `value`
/// columns. Every field is parsed explicitly; a malformed date or a
/// non-finite value fails the load with the offending row number instead of
/// leaking NaN into scale domains.
pub fn load_series(path: impl AsRef<Path>, title: impl Into<String>) -> Result<HazardSeries, ChartError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|source| ChartError::Load { path: path.into(), source })?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|source| ChartError::Csv { path: path.into(), source })?
        .clone();

    let column = |name: &'static str| -> Result<usize, ChartError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(ChartError::MissingColumn { path: path.into(), column: name })
    };
    let i_year = column(YEAR_COLUMN)?;
    let i_value = column(VALUE_COLUMN)?;

    let mut records = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|source| ChartError::Csv { path: path.into(), source })?;
        // Row numbers are 1-based and account for the header line.
        let row = n + 2;

        let year_text = rec.get(i_year).unwrap_or("").trim();
        let year = NaiveDate::parse_from_str(year_text, DATE_FORMAT).map_err(|_| {
            ChartError::ParseDate { path: path.into(), row, text: year_text.to_string() }
        })?;

        let value_text = rec.get(i_value).unwrap_or("").trim();
        let value = value_text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ChartError::ParseValue {
                path: path.into(),
                row,
                text: value_text.to_string(),
            })?;

        records.push(HazardRecord::new(year, value));
    }

    HazardSeries::new(title, records)
}
