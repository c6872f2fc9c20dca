use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::BudgetRecord;

const HEADER: [&str; 6] = ["Name", "Category", "Amount", "Spent", "Remaining", "Due Date"];

/// Write budgets as CSV, one row per record, and return the row count.
/// Remaining is computed here from amount and spent.
pub(crate) fn write_csv<W: Write>(records: &[BudgetRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)
        .context("Failed to write CSV header")?;

    for record in records {
        let due = record
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let amount = record.amount.normalize().to_string();
        let spent = record.spent.normalize().to_string();
        let remaining = record.remaining().normalize().to_string();
        wtr.write_record([
            record.name.as_str(),
            record.category_label(),
            amount.as_str(),
            spent.as_str(),
            remaining.as_str(),
            due.as_str(),
        ])
        .with_context(|| format!("Failed to write CSV row for budget {}", record.id))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}

pub(crate) fn export_to_path(records: &[BudgetRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(records, file)
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod tests;
