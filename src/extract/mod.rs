use csv::ReaderBuilder;
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{EtlError, Result};
use crate::table::RecordTable;

/// Discover every `.zip` bundle under `input_dir` (directory listing order)
/// and concatenate all contained tabular files into one unified table.
/// Entries are parsed straight from in-memory buffers; nothing is extracted
/// to disk.
#[tracing::instrument(level = "info", skip(input_dir), fields(dir = %input_dir.as_ref().display()))]
pub fn load_input_dir<P: AsRef<Path>>(input_dir: P) -> Result<RecordTable> {
    let mut table = RecordTable::default();

    for entry in fs::read_dir(input_dir.as_ref())? {
        let path = entry?.path();
        let is_zip = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if !path.is_file() || !is_zip {
            continue;
        }
        info!(bundle = %path.display(), "reading bundle");
        load_bundle(&path, &mut table)?;
    }

    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "unified table assembled"
    );
    Ok(table)
}

/// Parse every file entry of one ZIP bundle, in archive order, appending
/// each to the unified table.
fn load_bundle(zip_path: &Path, table: &mut RecordTable) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    // Buffer each entry into memory first so the archive handle can be
    // dropped before parsing begins.
    let mut buffers: Vec<(String, Vec<u8>)> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_string();
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf)?;
        buffers.push((name, buf));
    }
    drop(archive);

    for (entry_name, data) in buffers {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .from_reader(Cursor::new(data));

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| EtlError::Parse {
                file: entry_name.clone(),
                source: e,
            })?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| EtlError::Parse {
                file: entry_name.clone(),
                source: e,
            })?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        debug!(entry = %entry_name, rows = rows.len(), "parsed entry");
        table.append(&headers, rows);
    }

    Ok(())
}
