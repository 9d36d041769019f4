use tracing::debug;

use readlag_client::Statement;

/// Table every task reads from.
pub const TABLE: &str = "table1";
/// Primary-key column; also the only column the lookup returns.
pub const KEY_COLUMN: &str = "pk_field";

const KEY_PARAM: &str = "key_field";

/// Build the parameterized point lookup for `key`.
///
/// The key only ever travels as a bound parameter; the SQL text is
/// constant across all tasks, so the database can reuse the plan.
pub fn key_lookup(key: &str) -> Statement {
    let statement = Statement::new(format!(
        "SELECT {KEY_COLUMN} FROM {TABLE} WHERE {KEY_COLUMN} = @{KEY_PARAM}"
    ))
    .bind(KEY_PARAM, key);
    debug!("statement created");
    statement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_binds_key_as_param() {
        let statement = key_lookup("row-42");

        assert_eq!(
            statement.sql(),
            "SELECT pk_field FROM table1 WHERE pk_field = @key_field"
        );
        assert_eq!(statement.param("key_field"), Some("row-42"));
        assert_eq!(statement.param_count(), 1);
    }

    #[test]
    fn sql_text_is_independent_of_key() {
        let quiet = key_lookup("row-42");
        let hostile = key_lookup("x'; DROP TABLE table1; --");

        assert_eq!(quiet.sql(), hostile.sql());
        assert_eq!(hostile.param("key_field"), Some("x'; DROP TABLE table1; --"));
    }

    #[test]
    fn empty_key_is_bound_like_any_other() {
        let statement = key_lookup("");
        assert_eq!(statement.param("key_field"), Some(""));
    }
}
