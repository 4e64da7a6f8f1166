use crate::error::{EtlError, Result};
use crate::table::RecordTable;
use crate::transform::date;

pub const COLUMNS: [&str; 7] = [
    "client_id",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "last_contact_date",
];

/// Source columns consumed by the projection; `day` and `month` are folded
/// into `last_contact_date` and do not appear in the output.
const SELECTED: [&str; 8] = [
    "client_id",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "day",
    "month",
];

/// Project the campaign interaction table. Row count is preserved exactly.
pub fn project(table: &RecordTable) -> Result<RecordTable> {
    let idx: Vec<usize> = SELECTED
        .iter()
        .map(|c| table.column(c))
        .collect::<Result<_>>()?;

    let mut out = RecordTable::with_headers(&COLUMNS);
    for row in &table.rows {
        let get = |i: usize| row.get(idx[i]).map(String::as_str).unwrap_or("");

        let day: u32 = get(6)
            .trim()
            .parse()
            .map_err(|_| EtlError::InvalidValue {
                column: "day".to_string(),
                value: get(6).to_string(),
            })?;

        out.rows.push(vec![
            get(0).to_string(),
            get(1).to_string(),
            get(2).to_string(),
            get(3).to_string(),
            super::binary_flag(get(4), "success"),
            super::binary_flag(get(5), "yes"),
            date::format_contact_date(day, get(7)),
        ]);
    }
    Ok(out)
}
