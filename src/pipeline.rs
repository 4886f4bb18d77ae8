use crate::{
    compose::{compose_true_pass_rate, ComputationResult, ScoreTier},
    config::Config,
    dataset::{self, ProfessionRecord},
    export,
    report::format_breakdown,
    table::ResultTable,
    util::{hash_file, now_rfc3339},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct Pipeline<'a> {
    cfg: Config,
    records: &'a [ProfessionRecord],
}

/// In-memory outcome of one pass over the dataset.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub tier: ScoreTier,
    pub table: ResultTable,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub name: String,
    pub prerequisite: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunIndex {
    pub started: String,
    pub finished: String,
    pub csv: PathBuf,
    pub csv_sha256: String,
    pub rows: usize,
    pub tier: ScoreTier,
    pub skipped: Vec<SkippedRecord>,
}

impl<'a> Pipeline<'a> {
    pub fn new(cfg: &Config, records: &'a [ProfessionRecord]) -> Self {
        Self {
            cfg: cfg.clone(),
            records,
        }
    }

    /// Compose every record without a prerequisite license, in declaration order,
    /// writing a breakdown block per record to `out` when enabled, then rank.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunOutput> {
        let tier = self.cfg.report.tier;

        for issue in dataset::validate(self.records) {
            warn!("dataset: {issue}");
        }

        let mut results = Vec::with_capacity(self.records.len());
        let mut skipped = Vec::new();

        for record in self.records {
            if let Some(base) = record.prerequisite_license {
                debug!(name = record.name, prerequisite = base, "skipping dependent license");
                skipped.push(SkippedRecord {
                    name: record.name.to_string(),
                    prerequisite: base.to_string(),
                });
                continue;
            }

            if tier.score_of(record).is_none() {
                warn!(
                    name = record.name,
                    %tier,
                    "no admission score for tier; using {}",
                    dataset::DEFAULT_ADMISSION_SCORE
                );
            }

            let result = compose_true_pass_rate(record, tier);
            debug!(
                name = record.name,
                probability = result.true_pass_probability,
                one_in_n = result.one_in_n,
                "composed"
            );

            if self.cfg.report.print_breakdowns {
                writeln!(out, "{}", format_breakdown(record, &result, tier))
                    .with_context(|| "writing breakdown")?;
            }
            results.push(result);
        }

        let table = ResultTable::ranked(results);
        info!(rows = table.len(), skipped = skipped.len(), %tier, "ranked");

        Ok(RunOutput {
            tier,
            table,
            skipped,
        })
    }

    /// Every primary record composed at each score tier.
    pub fn tier_spread(&self) -> Vec<(&'a str, [ComputationResult; 3])> {
        self.records
            .iter()
            .filter(|r| !r.is_dependent())
            .map(|r| {
                let by_tier = ScoreTier::ALL.map(|tier| compose_true_pass_rate(r, tier));
                (r.name, by_tier)
            })
            .collect()
    }
}

/// Ranked table plus skipped records, as printed after the breakdowns.
pub fn format_summary(run: &RunOutput, cfg: &Config) -> String {
    let mut out = String::new();
    let rule = "=".repeat(100);

    if cfg.report.print_table {
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!(
            "True pass rate ranking ({} admission score)\n",
            run.tier
        ));
        out.push_str(&format!("{rule}\n"));
        out.push_str(&run.table.render());
        out.push('\n');
        out.push_str(&format!("{rule}\n"));
    }

    if cfg.report.print_skipped && !run.skipped.is_empty() {
        out.push_str("\nNot ranked (requires a prior license):\n");
        for s in &run.skipped {
            out.push_str(&format!("  - {} (requires {})\n", s.name, s.prerequisite));
        }
    }

    out
}

/// Write the CSV and, when enabled, the run index next to it.
pub fn export_run(cfg: &Config, run: &RunOutput, csv_path: &Path, started: &str) -> Result<()> {
    export::write_csv(cfg, csv_path, &run.table)?;
    info!("wrote {} rows to {}", run.table.len(), csv_path.display());

    if cfg.export.write_index_json {
        let index = RunIndex {
            started: started.to_string(),
            finished: now_rfc3339(),
            csv: csv_path.to_path_buf(),
            csv_sha256: hash_file(csv_path)?,
            rows: run.table.len(),
            tier: run.tier,
            skipped: run.skipped.clone(),
        };
        let index_path = cfg.index_path(csv_path);
        std::fs::write(&index_path, serde_json::to_string_pretty(&index)?)
            .with_context(|| format!("write run index: {}", index_path.display()))?;
    }

    Ok(())
}
