use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ectd_model::ContextStatus;
use ectd_package::{ContentSource, DocumentSummary};

use crate::types::{GenerateResult, ValidateReport, VerifyResult};

pub fn print_generate_summary(result: &GenerateResult) {
    let output = &result.output;
    if result.dry_run {
        println!("Dry run: output was built in a staging area and discarded.");
    } else {
        println!("Submission package generated.");
        println!("Directory: {}", output.paths.sequence_dir.display());
        println!("submissionunit.xml: {}", output.manifest_path.display());
        println!("sha256.txt: {}", output.digest_manifest_path.display());
    }
    println!("Content files: {}", output.generated_file_count());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Module"),
        header_cell("Type"),
        header_cell("Title"),
        header_cell("Section"),
        header_cell("Status"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for document in &output.documents {
        table.add_row(vec![
            Cell::new(document.index),
            Cell::new(document.module)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&document.doc_type),
            Cell::new(&document.title),
            section_cell(document),
            status_cell(document.status),
            file_cell(document),
        ]);
    }
    println!("{table}");

    if !output.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &output.warnings {
            eprintln!("- {warning}");
        }
    }

    if let Some(tree) = &result.tree {
        println!();
        println!("Directory structure:");
        print!("{tree}");
    }
}

pub fn print_validate_report(report: &ValidateReport) {
    if !report.issues.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Location"), header_cell("Message")]);
        apply_table_style(&mut table);
        for issue in &report.issues {
            let location = if issue.location.is_empty() {
                "<root>"
            } else {
                issue.location.as_str()
            };
            table.add_row(vec![
                Cell::new(location).fg(Color::Yellow),
                Cell::new(&issue.message),
            ]);
        }
        eprintln!("Configuration validation failed:");
        eprintln!("{table}");
        return;
    }

    if let Some(error) = &report.resolution_error {
        eprintln!("Configuration is structurally valid but cannot be built:");
        eprintln!("- {error}");
        if let Some(suggestion) = report.suggestion {
            eprintln!("  {suggestion}");
        }
        return;
    }

    println!(
        "Configuration is valid ({} document(s)).",
        report.document_count
    );
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
}

pub fn print_verification(result: &VerifyResult) {
    let verification = &result.verification;
    println!("Directory: {}", result.dir.display());
    println!("Verified: {}", verification.verified);
    if verification.is_valid() {
        println!("All listed files match sha256.txt.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for path in &verification.mismatched {
        table.add_row(vec![
            Cell::new(path),
            Cell::new("digest mismatch").fg(Color::Red),
        ]);
    }
    for path in &verification.missing {
        table.add_row(vec![Cell::new(path), Cell::new("missing").fg(Color::Red)]);
    }
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn section_cell(document: &DocumentSummary) -> Cell {
    let label = format!("{} {}", document.section_key, document.section_name);
    if document.section_defaulted {
        Cell::new(format!("{label} (default)")).fg(Color::Yellow)
    } else {
        Cell::new(label)
    }
}

fn status_cell(status: ContextStatus) -> Cell {
    match status {
        ContextStatus::Active => Cell::new(status).fg(Color::Green),
        ContextStatus::Suspended => Cell::new(status).fg(Color::DarkGrey),
    }
}

fn file_cell(document: &DocumentSummary) -> Cell {
    match (&document.file, &document.source) {
        (Some(file), Some(ContentSource::Copied(_))) => Cell::new(format!("{file} (copied)")),
        (Some(file), _) => Cell::new(file),
        (None, _) => dim_cell("-"),
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
