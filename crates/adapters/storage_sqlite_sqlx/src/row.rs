//! Column decoding helpers shared by the row wrappers.

use std::error::Error;
use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hbnb_domain::time::{Timestamp, parse_rfc3339};

fn decode_error(err: impl Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Read a text column and parse it as a typed id.
pub(crate) fn id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;
    raw.parse().map_err(decode_error)
}

/// Read an RFC 3339 text column.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_rfc3339(&raw).map_err(decode_error)
}

/// Convert a `COUNT(*)` result.
pub(crate) fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
