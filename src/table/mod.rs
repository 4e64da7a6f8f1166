use crate::error::{EtlError, Result};

/// The unified record table: one row per client-campaign-contact event,
/// concatenated across every parsed source file.
#[derive(Debug, Default)]
pub struct RecordTable {
    /// Column names, the superset across all appended source tables.
    pub headers: Vec<String>,
    /// Each data row, one String per field. Fields a source file did not
    /// carry hold the empty-string null marker.
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Index of the named column, or `MissingColumn` if no parsed input
    /// carried it.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| EtlError::MissingColumn(name.to_string()))
    }

    /// Append one parsed source table, unioning its columns into the
    /// superset. Existing rows gain empty fields for columns they lack;
    /// incoming rows are re-ordered to the unified column order.
    pub fn append(&mut self, headers: &[String], rows: Vec<Vec<String>>) {
        for header in headers {
            if !self.headers.iter().any(|h| h == header) {
                self.headers.push(header.clone());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }

        let mapping: Vec<Option<usize>> = self
            .headers
            .iter()
            .map(|unified| headers.iter().position(|h| h == unified))
            .collect();

        for source_row in rows {
            let row = mapping
                .iter()
                .map(|m| {
                    m.and_then(|i| source_row.get(i))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            self.rows.push(row);
        }
    }

    /// Rewrite headers: trim, lowercase, collapse internal whitespace runs
    /// to a single underscore. Running this on already-normalized headers
    /// leaves them unchanged.
    pub fn normalize_headers(&mut self) {
        for header in &mut self.headers {
            let collapsed: Vec<&str> = header.split_whitespace().collect();
            *header = collapsed.join("_").to_lowercase();
        }
    }

    /// Insert a surrogate `client_id` column on the left with values
    /// `0..n` in current row order. No-op when the column already exists.
    pub fn ensure_client_id(&mut self) {
        if self.headers.iter().any(|h| h == "client_id") {
            return;
        }
        self.headers.insert(0, "client_id".to_string());
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.insert(0, i.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn append_unions_differing_schemas() {
        let mut table = RecordTable::default();
        table.append(&strings(&["a", "b"]), vec![strings(&["1", "2"])]);
        table.append(&strings(&["b", "c"]), vec![strings(&["3", "4"])]);

        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        // first row gains an empty "c", second an empty "a"
        assert_eq!(table.rows[0], strings(&["1", "2", ""]));
        assert_eq!(table.rows[1], strings(&["", "3", "4"]));
    }

    #[test]
    fn append_preserves_total_row_count() {
        let mut table = RecordTable::default();
        table.append(&strings(&["x"]), vec![strings(&["1"]), strings(&["2"])]);
        table.append(&strings(&["x"]), vec![strings(&["3"])]);
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn normalize_headers_trims_lowercases_and_underscores() {
        let mut table = RecordTable::default();
        table.headers = strings(&["  Age ", "Cons  Price   Idx", "JOB"]);
        table.normalize_headers();
        assert_eq!(table.headers, vec!["age", "cons_price_idx", "job"]);
    }

    #[test]
    fn normalize_headers_is_idempotent() {
        let mut table = RecordTable::default();
        table.headers = strings(&[" Credit Default", "euribor_three_months"]);
        table.normalize_headers();
        let once = table.headers.clone();
        table.normalize_headers();
        assert_eq!(table.headers, once);
    }

    #[test]
    fn ensure_client_id_synthesizes_contiguous_sequence() {
        let mut table = RecordTable::default();
        table.append(
            &strings(&["age"]),
            vec![strings(&["30"]), strings(&["41"]), strings(&["25"])],
        );
        table.ensure_client_id();

        assert_eq!(table.headers[0], "client_id");
        let ids: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn ensure_client_id_keeps_existing_column() {
        let mut table = RecordTable::default();
        table.append(
            &strings(&["client_id", "age"]),
            vec![strings(&["99", "30"])],
        );
        table.ensure_client_id();

        assert_eq!(table.headers, vec!["client_id", "age"]);
        assert_eq!(table.rows[0][0], "99");
    }

    #[test]
    fn column_lookup_reports_missing() {
        let table = RecordTable::with_headers(&["age"]);
        assert!(table.column("age").is_ok());
        match table.column("job") {
            Err(EtlError::MissingColumn(name)) => assert_eq!(name, "job"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
