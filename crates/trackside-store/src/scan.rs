//! Row mapper — execute a built query and materialize domain records.
//!
//! Columns are read positionally in descriptor order. Stored timestamps are
//! coerced to UTC before use: the database does not reliably keep zone
//! metadata, so a zone-less value is treated as already-UTC rather than
//! local time.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Connection;
use rusqlite::types::Type;

use crate::errors::Result;
use crate::query::SqlQuery;

/// Positional row-to-record mapping for one resource.
///
/// `now` is the evaluation instant for status derivation, captured once per
/// scan so every record in one list call agrees on it.
pub trait FromRow: Sized {
    /// Map one result row, reading columns in the resource's fixed order.
    fn from_row(row: &rusqlite::Row<'_>, now: DateTime<Utc>) -> rusqlite::Result<Self>;
}

/// Execute `query` and map every result row, preserving database row order.
///
/// The prepared statement and its row cursor are dropped on every exit path;
/// one call reflects exactly one query execution.
pub fn scan_rows<R: FromRow>(
    conn: &Connection,
    query: &SqlQuery,
    now: DateTime<Utc>,
) -> Result<Vec<R>> {
    let mut stmt = conn.prepare(&query.sql)?;
    let params = query.param_refs();
    let records = stmt
        .query_map(params.as_slice(), |row| R::from_row(row, now))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Read a timestamp column and coerce it to UTC.
///
/// Accepts RFC 3339 text (offset honored, result converted to UTC) and the
/// zone-less `YYYY-MM-DD HH:MM:SS[.fff]` shapes, which are taken as UTC.
pub fn read_utc(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_utc(&raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
    })
}

fn parse_utc(raw: &str) -> chrono::ParseResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    // Re-run the strict parse to surface its error.
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}
