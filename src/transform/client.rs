use crate::error::Result;
use crate::table::RecordTable;

pub const COLUMNS: [&str; 7] = [
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
];

/// Project the client demographics table. Row count is preserved exactly.
pub fn project(table: &RecordTable) -> Result<RecordTable> {
    let idx: Vec<usize> = COLUMNS
        .iter()
        .map(|c| table.column(c))
        .collect::<Result<_>>()?;

    let mut out = RecordTable::with_headers(&COLUMNS);
    for row in &table.rows {
        let get = |i: usize| row.get(idx[i]).map(String::as_str).unwrap_or("");
        out.rows.push(vec![
            get(0).to_string(),
            get(1).to_string(),
            recode_job(get(2)),
            get(3).to_string(),
            recode_education(get(4)),
            super::binary_flag(get(5), "yes"),
            super::binary_flag(get(6), "yes"),
        ]);
    }
    Ok(out)
}

fn recode_job(value: &str) -> String {
    value.replace('.', "").replace('-', "_")
}

/// `.` becomes `_`; a resulting `unknown` becomes the null marker.
fn recode_education(value: &str) -> String {
    let value = value.replace('.', "_");
    if value.eq_ignore_ascii_case("unknown") {
        String::new()
    } else {
        value
    }
}
