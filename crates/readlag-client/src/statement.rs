use std::collections::BTreeMap;

/// Parameterized SQL statement.
///
/// Values reach the database through named parameters (`@name`), never by
/// splicing into the SQL text, so the text stays cacheable and caller
/// input cannot change the statement shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: BTreeMap<String, String>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind `value` to the parameter `@name`. Rebinding replaces.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_stores_named_param() {
        let statement = Statement::new("SELECT a FROM t WHERE a = @key").bind("key", "row-42");

        assert_eq!(statement.sql(), "SELECT a FROM t WHERE a = @key");
        assert_eq!(statement.param("key"), Some("row-42"));
        assert_eq!(statement.param("other"), None);
        assert_eq!(statement.param_count(), 1);
    }

    #[test]
    fn rebind_replaces_value() {
        let statement = Statement::new("SELECT a FROM t WHERE a = @key")
            .bind("key", "first")
            .bind("key", "second");

        assert_eq!(statement.param("key"), Some("second"));
        assert_eq!(statement.param_count(), 1);
    }

    #[test]
    fn sql_significant_input_stays_in_params() {
        let hostile = "x'; DROP TABLE t; --";
        let statement = Statement::new("SELECT a FROM t WHERE a = @key").bind("key", hostile);

        // The text is untouched; the hostile input only exists as a bound value.
        assert_eq!(statement.sql(), "SELECT a FROM t WHERE a = @key");
        assert_eq!(statement.param("key"), Some(hostile));
    }
}
