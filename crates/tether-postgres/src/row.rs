use chrono::{DateTime, Utc};
use thiserror::Error;

/// Driver-level failure while reading one column of a positioned row.
///
/// Raised when the column is missing from the projection or its type does not
/// match the requested one; SQL NULL is not an error and is reported as
/// `Ok(None)` by [`ResultRow`] reads.
#[derive(Debug, Error)]
#[error("column {column}: {source}")]
pub struct CursorError {
    pub column: String,
    #[source]
    pub source: anyhow::Error,
}

impl CursorError {
    pub fn new(column: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self {
            column: column.into(),
            source: source.into(),
        }
    }
}

/// One positioned row of a query result.
///
/// Reads are by column name and never advance the underlying cursor; the
/// query-execution layer owns positioning and lifetime. `Ok(None)` reports
/// SQL NULL.
pub trait ResultRow {
    fn try_string(&self, column: &str) -> Result<Option<String>, CursorError>;

    fn try_timestamp(&self, column: &str) -> Result<Option<DateTime<Utc>>, CursorError>;
}

impl ResultRow for tokio_postgres::Row {
    fn try_string(&self, column: &str) -> Result<Option<String>, CursorError> {
        self.try_get::<_, Option<String>>(column)
            .map_err(|e| CursorError::new(column, e))
    }

    fn try_timestamp(&self, column: &str) -> Result<Option<DateTime<Utc>>, CursorError> {
        self.try_get::<_, Option<DateTime<Utc>>>(column)
            .map_err(|e| CursorError::new(column, e))
    }
}
