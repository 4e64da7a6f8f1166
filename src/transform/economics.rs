use crate::error::Result;
use crate::table::RecordTable;

pub const COLUMNS: [&str; 3] = ["client_id", "cons_price_idx", "euribor_three_months"];

/// Project the macroeconomic indicators table, verbatim, no recoding.
pub fn project(table: &RecordTable) -> Result<RecordTable> {
    let idx: Vec<usize> = COLUMNS
        .iter()
        .map(|c| table.column(c))
        .collect::<Result<_>>()?;

    let mut out = RecordTable::with_headers(&COLUMNS);
    for row in &table.rows {
        out.rows.push(
            idx.iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect(),
        );
    }
    Ok(out)
}
