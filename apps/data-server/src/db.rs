use std::path::{Path, PathBuf};

use serde_json::{Number, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row, TypeInfo, ValueRef};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::TestRow;

/// File-scheme marker accepted in front of a store path.
const SQLITE_SCHEME: &str = "sqlite:///";

const FETCH_FIRST_ROW: &str = "SELECT * FROM test;";

/// Turns the configured store location into a filesystem path.
///
/// `sqlite:///tmp/test.db` resolves to `/tmp/test.db`; the third slash is the
/// root of the path. Anything without the marker is taken verbatim. The path
/// is not checked for existence.
pub fn resolve_database_path(url: &str) -> PathBuf {
    match url.strip_prefix(SQLITE_SCHEME) {
        Some(rest) => PathBuf::from(format!("/{rest}")),
        None => PathBuf::from(url),
    }
}

/// Opens a fresh read-only connection. A missing file is an error, never
/// created.
pub async fn open_connection(path: &Path) -> Result<SqliteConnection, AppError> {
    debug!("Opening SQLite store at {}", path.display());

    let conn = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .connect()
        .await?;

    Ok(conn)
}

/// Reads the first row of `test`, or `None` if the table is empty.
///
/// The connection lives only for this call and is closed whether or not the
/// query succeeds.
pub async fn fetch_first_row(path: &Path) -> Result<Option<TestRow>, AppError> {
    let mut conn = open_connection(path).await?;

    let result = query_first_row(&mut conn).await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close SQLite store at {}: {e}", path.display());
    }

    result
}

async fn query_first_row(conn: &mut SqliteConnection) -> Result<Option<TestRow>, AppError> {
    let row = sqlx::query(FETCH_FIRST_ROW).fetch_optional(conn).await?;

    row.map(|row| {
        Ok(TestRow {
            id: column_to_json(&row, 0)?,
            data: column_to_json(&row, 1)?,
        })
    })
    .transpose()
}

/// Carries a column across by its runtime storage class; SQLite columns are
/// dynamically typed, so the declared type is not consulted.
fn column_to_json(row: &SqliteRow, index: usize) -> Result<Value, AppError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => {
            // Infinities have no JSON form; NaN is stored by SQLite as NULL.
            let real = row.try_get_unchecked::<f64, _>(index)?;
            let number = Number::from_f64(real).ok_or_else(|| AppError::UnsupportedValue {
                column: index,
                type_name,
            })?;
            Value::Number(number)
        }
        "TEXT" => Value::from(row.try_get_unchecked::<String, _>(index)?),
        _ => {
            return Err(AppError::UnsupportedValue {
                column: index,
                type_name,
            })
        }
    };

    Ok(value)
}
