//! Bulk loading of table rows from delimited text.
//!
//! Input is headerless: every record is a row, fields may be quoted, and
//! each record's field count must match the target table's column count.

use std::io::Read;
use std::path::Path;

use crate::error::StorageError;
use crate::table::Table;

/// Loads every record of the delimited-text file at `path` into `table`,
/// returning the number of rows inserted.
///
/// # Errors
///
/// Returns [`StorageError::Io`]/[`StorageError::Csv`] for file and parse
/// failures, and [`StorageError::RowWidthMismatch`] if a record's field
/// count does not match the table. Rows inserted before a failing record
/// remain in the table.
pub fn load_csv(table: &Table, path: impl AsRef<Path>) -> Result<usize, StorageError> {
    let reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;
    load_records(table, reader)
}

/// Loads every record of the delimited text in `input` into `table`,
/// returning the number of rows inserted.
///
/// # Errors
///
/// Same conditions as [`load_csv`].
pub fn load_csv_from<R: Read>(table: &Table, input: R) -> Result<usize, StorageError> {
    let reader = csv::ReaderBuilder::new().has_headers(false).from_reader(input);
    load_records(table, reader)
}

fn load_records<R: Read>(table: &Table, mut reader: csv::Reader<R>) -> Result<usize, StorageError> {
    let mut loaded = 0;
    for record in reader.records() {
        let record = record?;
        table.insert(record.iter().map(str::to_string).collect())?;
        loaded += 1;
    }
    Ok(loaded)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use trellisdb_core::ColumnNames;

    use super::*;

    fn user_table() -> Table {
        Table::new("user", ColumnNames::new(["user_id", "username", "birth_date"])).unwrap()
    }

    #[test]
    fn loads_quoted_records() {
        let table = user_table();
        let input = "\"1\",\"ada\",\"1815/12/10\"\n\"2\",\"greta\",\"1906/12/09\"\n";
        let loaded = load_csv_from(&table, input.as_bytes()).unwrap();
        assert_eq!(loaded, 2);
        let rows = table.snapshot().unwrap();
        assert_eq!(rows[0].value("username"), Ok("ada"));
        assert_eq!(rows[1].value("birth_date"), Ok("1906/12/09"));
    }

    #[test]
    fn loads_unquoted_records() {
        let table = user_table();
        let loaded = load_csv_from(&table, "1,ada,1815/12/10\n".as_bytes()).unwrap();
        assert_eq!(loaded, 1);
    }

    #[test]
    fn rejects_wrong_width_record() {
        let table = user_table();
        let err = load_csv_from(&table, "1,ada\n".as_bytes()).unwrap_err();
        // The csv reader checks record lengths against the first record of
        // the stream, not against the table, so a short first record reaches
        // the table and fails there.
        assert!(matches!(err, StorageError::RowWidthMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn loads_from_a_file() {
        let table = user_table();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\"1\",\"ada\",\"1815/12/10\"").unwrap();
        file.flush().unwrap();
        let loaded = load_csv(&table, file.path()).unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(table.row_count().unwrap(), 1);
    }

    #[test]
    fn empty_input_loads_nothing() {
        let table = user_table();
        assert_eq!(load_csv_from(&table, "".as_bytes()).unwrap(), 0);
    }
}
