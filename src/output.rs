//! Output rendering
//!
//! Table output follows collection order; unset fields render as empty cells.

use crate::resource::{ResourceRecord, ScanReport};
use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

/// Skipped ARNs listed individually before summarizing the rest
const MAX_LISTED_SKIPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render records as a table with Region, Service, Product, ID (and ARN) columns
pub fn render_table(records: &[ResourceRecord], show_arn: bool) -> Table {
    let mut header = vec![
        Cell::new("Region"),
        Cell::new("Service"),
        Cell::new("Product"),
        Cell::new("ID"),
    ];
    if show_arn {
        header.push(Cell::new("ARN"));
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for record in records {
        let mut row = vec![
            Cell::new(&record.region),
            Cell::new(&record.service),
            Cell::new(record.product_display()),
            Cell::new(&record.identifier),
        ];
        if show_arn {
            row.push(Cell::new(&record.arn));
        }
        table.add_row(row);
    }

    table
}

/// Render records as a pretty-printed JSON array
pub fn render_json(records: &[ResourceRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render in the requested format
pub fn render(records: &[ResourceRecord], format: OutputFormat, show_arn: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records, show_arn).to_string()),
        OutputFormat::Json => render_json(records),
    }
}

/// Warning shown when the output is missing resources
pub fn skipped_warning(report: &ScanReport) -> Option<String> {
    if report.is_complete() {
        return None;
    }

    let mut lines = vec![format!(
        "warning: {} resource(s) could not be classified and are not shown:",
        report.skipped.len()
    )];
    for skipped in report.skipped.iter().take(MAX_LISTED_SKIPS) {
        lines.push(format!("  - {}", skipped.error));
    }
    if report.skipped.len() > MAX_LISTED_SKIPS {
        lines.push(format!(
            "  ... and {} more (see log)",
            report.skipped.len() - MAX_LISTED_SKIPS
        ));
    }

    Some(lines.join("\n"))
}
