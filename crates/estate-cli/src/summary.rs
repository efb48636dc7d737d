//! Console rendering of run reports and validation results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use estate_model::{SummaryReport, ValidationResult, Violation};

const RULE_WIDTH: usize = 60;

/// Plain-text report: one `key: value` line per entry, statistics left out.
pub fn render_plain(report: &SummaryReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![rule.clone(), "PROCESSING REPORT".to_string(), rule];
    lines.extend(
        report
            .plain_entries()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}")),
    );
    lines.join("\n")
}

pub fn print_report(report: &SummaryReport) {
    println!();
    println!("{}", render_plain(report));
    if let Some(table) = message_table(&report.violations) {
        println!();
        println!("Violations:");
        println!("{table}");
    }
}

/// Table of violation messages from the last validation pass, if any.
pub fn message_table(messages: &[String]) -> Option<Table> {
    if messages.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Violation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, message) in messages.iter().enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(message)]);
    }
    Some(table)
}

/// Per-check table for a validation result.
pub fn validation_table(result: &ValidationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for violation in &result.violations {
        table.add_row(vec![
            Cell::new(check_label(violation)).fg(Color::Red),
            Cell::new(violation.column()),
            Cell::new(violation.count())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(violation.message()),
        ]);
    }
    if let Some(outliers) = result.outliers {
        let count_cell = if outliers.count > 0 {
            Cell::new(outliers.count).fg(Color::Yellow)
        } else {
            dim_cell(outliers.count)
        };
        table.add_row(vec![
            Cell::new("outliers").fg(Color::Yellow),
            Cell::new("precio"),
            count_cell,
            dim_cell(format!(
                "outside [{:.2}, {:.2}] (informational)",
                outliers.lower_bound, outliers.upper_bound
            )),
        ]);
    }
    table
}

pub fn print_validation(result: &ValidationResult) {
    let status = if result.passed {
        "PASSED"
    } else {
        "FAILED"
    };
    println!("Validation: {status}");
    if !result.violations.is_empty() || result.outliers.is_some() {
        println!("{}", validation_table(result));
    }
}

fn check_label(violation: &Violation) -> &'static str {
    match violation {
        Violation::NullValues { .. } => "null values",
        Violation::NegativePrices { .. } => "negative prices",
        Violation::DuplicateRecords { .. } => "duplicates",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
