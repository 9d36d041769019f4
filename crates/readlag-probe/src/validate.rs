use readlag_client::RowStream;

use crate::errors::ValidateError;

/// Confirm the stream holds the expected row.
///
/// Rows are compared by their first column. The first mismatch fails
/// immediately; a match ends iteration successfully without asserting
/// that it is the only row. An empty stream is an error: the key is
/// expected to exist in the backing dataset.
pub(crate) fn confirm_match(
    expected: &str,
    rows: &mut dyn RowStream,
) -> Result<(), ValidateError> {
    while rows.advance().map_err(ValidateError::Read)? {
        let actual = rows.get_string(0).map_err(ValidateError::Read)?;
        if actual == expected {
            return Ok(());
        }
        return Err(ValidateError::RecordMismatch {
            expected: expected.to_string(),
            actual,
        });
    }

    Err(ValidateError::NoRows {
        key: expected.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use readlag_client::ClientError;

    /// Scripted stream: `Ok` values become rows, `Err` aborts the stream.
    struct ScriptedRows {
        rows: std::vec::IntoIter<Result<String, String>>,
        current: Option<String>,
        reads: usize,
    }

    impl ScriptedRows {
        fn new(rows: Vec<Result<&str, &str>>) -> Self {
            Self {
                rows: rows
                    .into_iter()
                    .map(|row| row.map(str::to_string).map_err(str::to_string))
                    .collect::<Vec<_>>()
                    .into_iter(),
                current: None,
                reads: 0,
            }
        }
    }

    impl RowStream for ScriptedRows {
        fn advance(&mut self) -> Result<bool, ClientError> {
            match self.rows.next() {
                Some(Ok(row)) => {
                    self.reads += 1;
                    self.current = Some(row);
                    Ok(true)
                }
                Some(Err(reason)) => Err(ClientError::Unavailable(reason)),
                None => {
                    self.current = None;
                    Ok(false)
                }
            }
        }

        fn get_string(&self, column: usize) -> Result<String, ClientError> {
            let value = self.current.as_ref().ok_or(ClientError::NoCurrentRow)?;
            if column != 0 {
                return Err(ClientError::InvalidColumn(column));
            }
            Ok(value.clone())
        }
    }

    #[test]
    fn matching_row_succeeds() {
        let mut rows = ScriptedRows::new(vec![Ok("row-42")]);
        assert!(confirm_match("row-42", &mut rows).is_ok());
    }

    #[test]
    fn match_short_circuits_remaining_rows() {
        let mut rows = ScriptedRows::new(vec![Ok("row-42"), Ok("something-else")]);
        assert!(confirm_match("row-42", &mut rows).is_ok());
        assert_eq!(rows.reads, 1);
    }

    #[test]
    fn first_mismatch_fails_without_scanning_further() {
        let mut rows = ScriptedRows::new(vec![Ok("other"), Ok("row-42")]);

        let err = confirm_match("row-42", &mut rows).unwrap_err();
        assert!(matches!(
            err,
            ValidateError::RecordMismatch { ref expected, ref actual }
                if expected == "row-42" && actual == "other"
        ));
        assert_eq!(rows.reads, 1);
    }

    #[test]
    fn empty_stream_is_no_rows_error() {
        let mut rows = ScriptedRows::new(vec![]);

        let err = confirm_match("ghost", &mut rows).unwrap_err();
        assert!(matches!(err, ValidateError::NoRows { ref key } if key == "ghost"));
    }

    #[test]
    fn stream_failure_is_carried_as_read_error() {
        let mut rows = ScriptedRows::new(vec![Err("connection reset")]);

        let err = confirm_match("row-42", &mut rows).unwrap_err();
        assert!(matches!(err, ValidateError::Read(_)));
    }
}
