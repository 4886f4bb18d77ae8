use crate::{compose::ComputationResult, config::Config, table::ResultTable, util::ensure_dir};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `table` as comma-separated UTF-8 with a header row.
///
/// The header is written even when there are no rows. Missing parent directories are
/// created; any I/O failure is returned with the path attached.
pub fn write_csv(cfg: &Config, path: &Path, table: &ResultTable) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let file =
        File::create(path).with_context(|| format!("create export CSV: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    if cfg.export.utf8_bom {
        out.write_all(UTF8_BOM)
            .with_context(|| format!("write BOM: {}", path.display()))?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(ComputationResult::COLUMNS)
        .with_context(|| format!("write CSV header: {}", path.display()))?;
    for row in &table.rows {
        let written = if cfg.export.normalize_names {
            wtr.serialize(normalized(row))
        } else {
            wtr.serialize(row)
        };
        written.with_context(|| format!("write CSV row for {}", row.name))?;
    }
    wtr.flush()
        .with_context(|| format!("flush export CSV: {}", path.display()))?;

    debug!(rows = table.rows.len(), path = %path.display(), "csv written");
    Ok(())
}

fn normalized(row: &ComputationResult) -> ComputationResult {
    ComputationResult {
        name: row.name.nfc().collect(),
        ..row.clone()
    }
}
