use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EtlError, Result};
use crate::table::RecordTable;

pub const CLIENT_FILE: &str = "client.csv";
pub const CAMPAIGN_FILE: &str = "campaign.csv";
pub const ECONOMICS_FILE: &str = "economics.csv";

/// Write the three projected tables under `out_dir`, creating the directory
/// if absent and overwriting any previous output.
pub fn write_outputs<P: AsRef<Path>>(
    out_dir: P,
    client: &RecordTable,
    campaign: &RecordTable,
    economics: &RecordTable,
) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    write_table(client, &out_dir.join(CLIENT_FILE))?;
    write_table(campaign, &out_dir.join(CAMPAIGN_FILE))?;
    write_table(economics, &out_dir.join(ECONOMICS_FILE))?;
    Ok(())
}

/// Serialize one table as comma-separated UTF-8 with a header row and no
/// index column.
pub fn write_table(table: &RecordTable, path: &Path) -> Result<()> {
    let werr = |e: csv::Error| EtlError::Write {
        file: path.display().to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_path(path).map_err(werr)?;
    writer.write_record(&table.headers).map_err(werr)?;
    for row in &table.rows {
        writer.write_record(row).map_err(werr)?;
    }
    writer.flush()?;

    info!(file = %path.display(), rows = table.rows.len(), "wrote table");
    Ok(())
}
