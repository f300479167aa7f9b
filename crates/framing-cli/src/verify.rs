//! The `verify` command: re-check the invariants of a written dataset.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;

use framing_core::SourceCategory;

pub(crate) fn run(dataset: &Path, min_token_count: i64) -> anyhow::Result<()> {
    let records = framing_corpus::read_dataset_file(dataset)?;

    let mut per_year: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    let mut seen_urls = HashSet::new();
    let mut violations: Vec<String> = Vec::new();

    for record in &records {
        let entry = per_year.entry(record.year).or_default();
        match record.category {
            SourceCategory::ChineseStateMedia => entry.0 += 1,
            SourceCategory::WesternMedia => entry.1 += 1,
        }
        if !seen_urls.insert(record.url.as_str()) {
            violations.push(format!("duplicate URL: {}", record.url));
        }
        if record.token_count < min_token_count {
            violations.push(format!(
                "record {} has token_count {} < {min_token_count}",
                record.url, record.token_count
            ));
        }
    }

    println!("{}: {} records", dataset.display(), records.len());
    println!("year  chinese  western");
    for (year, (chinese, western)) in &per_year {
        println!("{year}  {chinese:7}  {western:7}");
        if chinese != western {
            violations.push(format!(
                "year {year} is unbalanced: {chinese} Chinese vs {western} Western"
            ));
        }
    }

    if records.len() % 2 != 0 {
        violations.push(format!("total count {} is odd", records.len()));
    }

    if violations.is_empty() {
        println!("ok: dataset is balanced for every year");
        Ok(())
    } else {
        for violation in &violations {
            tracing::error!(%violation, "invariant violated");
        }
        anyhow::bail!(
            "{} invariant violation(s):\n{}",
            violations.len(),
            violations.join("\n")
        )
    }
}
