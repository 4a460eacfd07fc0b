/// Inventory loader: reads semicolon-delimited files into tables.
///
/// Fatal problems (unreadable file, bad header, missing columns) abort the
/// load with a [`LoadError`]. A malformed row only drops that row: it is
/// logged with `warn!` and kept in [`SignageTable::skipped`].
pub mod parse;
pub mod schema;

use crate::analysis::classifier::ClassifierRules;
use crate::error::{LoadError, RecordError};
use crate::model::{GeoPoint, Geometry, RawRecord, SignageKind, SignageRecord, SignageTable, SkippedRow};
use parse::{parse_date, parse_decimal, split_photos};
use schema::ColumnIndex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Field delimiter used by both inventories.
pub const DELIMITER: u8 = b';';

/// Load the vertical inventory from `path`.
pub fn load_vertical(path: &Path, rules: &ClassifierRules) -> Result<SignageTable, LoadError> {
    load_table(path, SignageKind::Vertical, rules)
}

/// Load the horizontal inventory from `path`.
pub fn load_horizontal(path: &Path, rules: &ClassifierRules) -> Result<SignageTable, LoadError> {
    load_table(path, SignageKind::Horizontal, rules)
}

/// Load an inventory file of the given kind.
pub fn load_table(
    path: &Path,
    kind: SignageKind,
    rules: &ClassifierRules,
) -> Result<SignageTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, kind, rules)?;
    info!(
        "Loaded {} {} records from {} ({} skipped)",
        table.len(),
        kind.label().to_lowercase(),
        path.display(),
        table.skipped.len()
    );
    Ok(table)
}

/// Read an inventory from any reader.
pub fn read_table<R: Read>(
    reader: R,
    kind: SignageKind,
    rules: &ClassifierRules,
) -> Result<SignageTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers().map_err(LoadError::Header)?);
    let missing = columns.missing(kind);
    if !missing.is_empty() {
        return Err(LoadError::SchemaMismatch { missing });
    }

    let mut table = SignageTable::new(kind);
    for (i, result) in csv_reader.records().enumerate() {
        // Header is line 1; used when the CSV layer reports no position.
        let fallback_line = i as u64 + 2;
        let parsed = match result {
            Ok(row) => {
                let line = row.position().map_or(fallback_line, |p| p.line());
                parse_row(&row, &columns, kind).map_err(|e| (line, e))
            }
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line());
                Err((line, RecordError::Unreadable(e.to_string())))
            }
        };

        match parsed {
            Ok(raw) => table.records.push(SignageRecord::new(raw, rules)),
            Err((line, error)) => {
                warn!("Skipping {} row at line {line}: {error}", kind.label().to_lowercase());
                table.skipped.push(SkippedRow { line, error });
            }
        }
    }

    Ok(table)
}

/// Cell accessor bound to one row.
struct Row<'r> {
    record: &'r csv::StringRecord,
    columns: &'r ColumnIndex,
}

impl<'r> Row<'r> {
    /// Raw cell text, `None` when the column or cell is absent.
    fn cell(&self, column: &str) -> Option<&'r str> {
        self.columns
            .position(column)
            .and_then(|pos| self.record.get(pos))
    }

    /// Cell text, empty when absent.
    fn text(&self, column: &str) -> String {
        self.cell(column).unwrap_or_default().to_string()
    }

    /// Non-blank cell text.
    fn required(&self, column: &'static str) -> Result<&'r str, RecordError> {
        match self.cell(column) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(RecordError::MissingField { column }),
        }
    }

    fn date(&self, column: &'static str) -> Result<chrono::NaiveDate, RecordError> {
        let value = self.required(column)?;
        parse_date(value).ok_or_else(|| RecordError::InvalidDate {
            column,
            value: value.to_string(),
        })
    }

    fn number(&self, column: &'static str) -> Result<f64, RecordError> {
        let value = self.required(column)?;
        parse_decimal(value).ok_or_else(|| RecordError::InvalidNumber {
            column,
            value: value.to_string(),
        })
    }

    fn point(&self, lat: &'static str, lon: &'static str) -> Result<GeoPoint, RecordError> {
        Ok(GeoPoint::new(self.number(lat)?, self.number(lon)?))
    }
}

fn parse_row(
    record: &csv::StringRecord,
    columns: &ColumnIndex,
    kind: SignageKind,
) -> Result<RawRecord, RecordError> {
    use schema::*;

    let row = Row { record, columns };

    let identifier = row.required(COL_IDENTIFIER)?.to_string();
    let date = row.date(COL_DATE)?;
    let (geometry, category) = match kind {
        SignageKind::Vertical => {
            let category = row
                .cell(COL_CATEGORY)
                .filter(|c| !c.trim().is_empty())
                .map(str::to_string);
            (Geometry::Point(row.point(COL_LAT, COL_LON)?), category)
        }
        SignageKind::Horizontal => (
            Geometry::Segment {
                start: row.point(COL_LAT_START, COL_LON_START)?,
                end: row.point(COL_LAT_END, COL_LON_END)?,
            },
            None,
        ),
    };
    let photos = columns
        .photo()
        .and_then(|pos| record.get(pos))
        .map(split_photos)
        .unwrap_or_default();

    Ok(RawRecord {
        identifier,
        date,
        lane: row.text(COL_LANE),
        sign_type: row.text(COL_TYPE),
        material: row.text(COL_MATERIAL),
        category,
        condition: row.text(condition_column(kind)),
        geometry,
        photos,
    })
}
