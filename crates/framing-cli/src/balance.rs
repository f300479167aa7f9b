//! The `balance` command: ingest raw collector CSVs, run the balancing
//! pipeline, and write the dataset plus its audit report.

use framing_balance::{BalanceOptions, BalanceResult};
use framing_core::AppConfig;
use framing_corpus::IngestSummary;
use serde::Serialize;

/// Everything written to `balance_audit.json`: ingest provenance plus the
/// balancing decision trail.
#[derive(Debug, Serialize)]
struct AuditReport {
    ingest: IngestSummary,
    balance: framing_balance::BalanceAudit,
}

pub(crate) fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let registry = framing_core::load_sources(&config.sources_path)?;
    tracing::info!(
        outlets = registry.len(),
        sources_path = %config.sources_path.display(),
        "loaded source registry"
    );

    let corpus = framing_corpus::load_raw_corpus(
        &config.raw_data_dir,
        &registry,
        config.year_min,
        config.year_max,
    )?;

    let options = BalanceOptions {
        min_token_count: config.min_token_count,
        random_seed: config.random_seed,
    };
    let result = framing_balance::run_balance(&options, corpus.records)?;

    print_summary(&result);

    if dry_run {
        println!(
            "dry-run: would write {} records to {}",
            result.records.len(),
            config.output_dir.display()
        );
        return Ok(());
    }

    let dataset_path = config.output_dir.join("balanced_dataset.csv");
    let audit_path = config.output_dir.join("balance_audit.json");
    framing_corpus::write_dataset_file(&dataset_path, &result.records)?;

    let report = AuditReport {
        ingest: corpus.summary,
        balance: result.audit,
    };
    framing_corpus::write_audit_file(&audit_path, &report)?;

    println!("dataset: {}", dataset_path.display());
    println!("audit:   {}", audit_path.display());
    Ok(())
}

fn print_summary(result: &BalanceResult) {
    println!("year-stratified sampling:");
    for cell in &result.audit.years {
        println!(
            "  {}: {} per category (Chinese had {}, Western had {})",
            cell.year, cell.sampled_per_category, cell.chinese_available, cell.western_available
        );
    }
    for warning in &result.audit.warnings {
        println!("  warning: {warning}");
    }
    println!(
        "balanced dataset: {} of {} filtered records ({} input)",
        result.audit.balanced_count, result.audit.filtered_count, result.audit.input_count
    );
}
