use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::bound::TimestampBound;
use crate::client::{Connector, DatabaseClient, RowStream};
use crate::errors::ClientError;
use crate::options::{ConnectOptions, DatabaseId};
use crate::statement::Statement;

/// In-memory database backend.
///
/// Rows carry their commit timestamp, so timestamp-bounded reads behave
/// like they do against a real deployment: a query at
/// [`TimestampBound::ExactStaleness`] observes the snapshot as of
/// `now - offset` and nothing committed after it.
///
/// Only the single-column point-lookup subset of SQL is executable
/// (`SELECT c FROM t WHERE c = @p`); anything else fails with
/// [`ClientError::UnsupportedSql`].
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Table name -> committed rows, in commit order.
    tables: HashMap<String, Vec<VersionedRow>>,
    /// Injected failure consumed by the next query.
    fail_next: Option<String>,
}

#[derive(Debug)]
struct VersionedRow {
    value: String,
    committed_at: SystemTime,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a row now.
    pub fn insert(&self, table: impl Into<String>, value: impl Into<String>) {
        self.insert_at(table, value, SystemTime::now());
    }

    /// Commit a row at an explicit timestamp.
    ///
    /// Backdating lets callers place rows on either side of a staleness
    /// horizon.
    pub fn insert_at(
        &self,
        table: impl Into<String>,
        value: impl Into<String>,
        committed_at: SystemTime,
    ) {
        let mut inner = self.inner.write().unwrap();
        inner.tables.entry(table.into()).or_default().push(VersionedRow {
            value: value.into(),
            committed_at,
        });
    }

    /// Make the next query fail with [`ClientError::Unavailable`].
    pub fn fail_next(&self, reason: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.fail_next = Some(reason.into());
    }

    /// Number of committed rows in `table`, regardless of timestamp.
    pub fn row_count(&self, table: &str) -> usize {
        let inner = self.inner.read().unwrap();
        inner.tables.get(table).map_or(0, Vec::len)
    }
}

impl DatabaseClient for MemoryDatabase {
    fn single_use_query(
        &self,
        bound: TimestampBound,
        statement: &Statement,
    ) -> Result<Box<dyn RowStream + '_>, ClientError> {
        let mut inner = self.inner.write().unwrap();
        if let Some(reason) = inner.fail_next.take() {
            return Err(ClientError::Unavailable(reason));
        }

        let (table, param) = parse_point_lookup(statement.sql())?;
        let key = statement
            .param(param)
            .ok_or_else(|| ClientError::UnboundParam(param.to_string()))?;

        let horizon = read_horizon(bound);
        let rows: Vec<String> = inner
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.committed_at <= horizon)
                    .filter(|row| row.value == key)
                    .map(|row| row.value.clone())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Box::new(MemoryRows::new(rows)))
    }
}

/// Latest commit timestamp a read at `bound` is allowed to observe.
fn read_horizon(bound: TimestampBound) -> SystemTime {
    let now = SystemTime::now();
    match bound {
        TimestampBound::Strong => now,
        // Staleness reaching past the clock floors at the epoch.
        TimestampBound::ExactStaleness(offset) => now.checked_sub(offset).unwrap_or(UNIX_EPOCH),
    }
}

/// Extract `(table, param)` from `SELECT c FROM t WHERE c = @p`.
fn parse_point_lookup(sql: &str) -> Result<(&str, &str), ClientError> {
    let unsupported = || ClientError::UnsupportedSql(sql.to_string());
    let tokens: Vec<&str> = sql.split_whitespace().collect();

    let keyword =
        |index: usize, expected: &str| tokens.get(index).is_some_and(|t| t.eq_ignore_ascii_case(expected));
    if tokens.len() != 8
        || !keyword(0, "select")
        || !keyword(2, "from")
        || !keyword(4, "where")
        || tokens[6] != "="
    {
        return Err(unsupported());
    }
    // Selected column and predicate column must be the same single column.
    if !tokens[5].eq_ignore_ascii_case(tokens[1]) {
        return Err(unsupported());
    }
    let param = tokens[7].strip_prefix('@').ok_or_else(unsupported)?;

    Ok((tokens[3], param))
}

/// Forward-only cursor over materialized single-column rows.
struct MemoryRows {
    rows: std::vec::IntoIter<String>,
    current: Option<String>,
}

impl MemoryRows {
    fn new(rows: Vec<String>) -> Self {
        Self {
            rows: rows.into_iter(),
            current: None,
        }
    }
}

impl RowStream for MemoryRows {
    fn advance(&mut self) -> Result<bool, ClientError> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn get_string(&self, column: usize) -> Result<String, ClientError> {
        let value = self.current.as_ref().ok_or(ClientError::NoCurrentRow)?;
        if column != 0 {
            return Err(ClientError::InvalidColumn(column));
        }
        Ok(value.clone())
    }
}

/// Registry of in-memory databases, keyed by [`DatabaseId`].
#[derive(Debug, Default)]
pub struct MemoryConnector {
    databases: RwLock<HashMap<DatabaseId, MemoryDatabase>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: DatabaseId, database: MemoryDatabase) {
        let mut databases = self.databases.write().unwrap();
        databases.insert(id, database);
    }
}

impl Connector for MemoryConnector {
    fn connect(&self, options: &ConnectOptions) -> Result<Arc<dyn DatabaseClient>, ClientError> {
        let databases = self.databases.read().unwrap();
        let database = databases
            .get(&options.database)
            .cloned()
            .ok_or_else(|| ClientError::UnknownDatabase(options.database.clone()))?;
        Ok(Arc::new(database))
    }
}
