use thiserror::Error;

use crate::options::DatabaseId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unknown database: {0}")]
    UnknownDatabase(DatabaseId),

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported sql for this backend: {0}")]
    UnsupportedSql(String),

    #[error("statement parameter not bound: @{0}")]
    UnboundParam(String),

    #[error("no current row (call advance first)")]
    NoCurrentRow,

    #[error("column index out of range: {0}")]
    InvalidColumn(usize),
}
