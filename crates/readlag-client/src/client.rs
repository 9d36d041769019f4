use std::sync::Arc;

use crate::bound::TimestampBound;
use crate::errors::ClientError;
use crate::options::ConnectOptions;
use crate::statement::Statement;

/// Established client session against one database.
///
/// Handles are externally owned, safe to share across threads, and are
/// only ever used to open single-use read-only transactions.
pub trait DatabaseClient: Send + Sync {
    /// Execute `statement` in a single-use read-only transaction at `bound`.
    ///
    /// The transaction is scoped to exactly this query; there is no
    /// commit/rollback surface. The returned stream is released by drop.
    fn single_use_query(
        &self,
        bound: TimestampBound,
        statement: &Statement,
    ) -> Result<Box<dyn RowStream + '_>, ClientError>;
}

/// Forward-only cursor over the rows of one query.
pub trait RowStream {
    /// Move to the next row. Returns `false` once the stream is exhausted.
    fn advance(&mut self) -> Result<bool, ClientError>;

    /// Read `column` of the current row as a string.
    ///
    /// Fails with [`ClientError::NoCurrentRow`] before the first `advance`
    /// or after exhaustion.
    fn get_string(&self, column: usize) -> Result<String, ClientError>;
}

/// Resolves raw connection parameters into a ready-to-use client handle.
pub trait Connector: Send + Sync {
    fn connect(&self, options: &ConnectOptions) -> Result<Arc<dyn DatabaseClient>, ClientError>;
}
