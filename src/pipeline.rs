use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::extract;
use crate::output;
use crate::transform::{campaign, client, economics};

/// Run the full ETL pass: read every bundle under `input_dir` into the
/// unified record table, normalize it, project the three output tables,
/// and write them under `output_dir`. Fully sequential; any error aborts
/// the run.
#[tracing::instrument(level = "info", skip_all, fields(
    input = %input_dir.as_ref().display(),
    output = %output_dir.as_ref().display(),
))]
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input_dir: P, output_dir: Q) -> Result<()> {
    let mut table = extract::load_input_dir(input_dir)?;
    table.normalize_headers();
    table.ensure_client_id();
    info!(rows = table.rows.len(), "unified table normalized");

    let client = client::project(&table)?;
    let campaign = campaign::project(&table)?;
    let economics = economics::project(&table)?;

    output::write_outputs(output_dir, &client, &campaign, &economics)?;
    info!("pipeline complete");
    Ok(())
}
