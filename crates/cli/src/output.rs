//! Report rendering: plain-text table and the timestamped CSV artifact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use vaultchain_core::models::report::{format_quantity, ReportTable};

/// Print the valuation table. Unresolved rows are marked explicitly so a
/// failed asset is never mistaken for a worthless one.
pub fn print_table(table: &ReportTable) {
    if table.is_empty() {
        println!("No data to display.");
        return;
    }

    println!(
        "{:<12} {:>14} {:>16} {:>14}  {}",
        "Asset", "Quantity", "Price(USD)", "Value(USD)", "Source"
    );
    for row in &table.rows {
        let source = match row.source {
            Some(source) => source.to_string(),
            None => "unresolved".to_string(),
        };
        println!(
            "{:<12} {:>14} {:>16.6} {:>14.2}  {}",
            row.symbol,
            format_quantity(row.quantity),
            row.unit_price_usd,
            row.value_usd,
            source
        );
    }
    println!(
        "{:<12} {:>14} {:>16} {:>14.2}",
        "Total", "-", "-", table.total_usd
    );

    let unresolved = table.unresolved_count();
    if unresolved > 0 {
        println!("\nCouldn't price {unresolved} asset(s); they count as 0 in the total.");
    }
    if table.rate_limited {
        println!("A provider rate limit was hit — wait a while before retrying.");
    }
}

/// Export the report to `vaultchain_portfolio_<stamp>.csv` in `directory`.
/// Returns the path written, or `None` for an empty report.
pub fn export_csv(table: &ReportTable, directory: &Path) -> Result<Option<PathBuf>> {
    if table.is_empty() {
        println!("Nothing to export: portfolio is empty.");
        return Ok(None);
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = directory.join(format!("vaultchain_portfolio_{stamp}.csv"));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer.write_record(ReportTable::CSV_HEADERS)?;
    for row in table.csv_rows() {
        writer.write_record(&row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Some(path))
}
