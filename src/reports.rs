use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use opensweep::sweep::{EvaluationRow, ResultTable};

/// Prints the leading `head` rows of the result table.
pub fn table_head(table: &ResultTable, head: usize) {
    let Some(first) = table.rows().first() else {
        println!("\n(empty result table)");
        return;
    };

    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Thresh").add_attribute(Attribute::Bold)];
    for (name, _) in first.series_entries() {
        header.push(Cell::new(format!("{} N", name)));
        header.push(Cell::new(format!("{} hits", name)));
        header.push(Cell::new(format!("{} %", name)).fg(Color::Cyan));
    }
    for (name, _) in first.derived_entries() {
        header.push(Cell::new(name).fg(Color::Green).add_attribute(Attribute::Bold));
    }
    let num_cols = header.len();
    out.add_row(header);

    for i in 1..num_cols {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in table.rows().iter().take(head) {
        let mut cells = vec![Cell::new(format!("{:.4}", row.threshold)).add_attribute(Attribute::Bold)];
        for (_, stats) in row.series_entries() {
            cells.push(Cell::new(format!("{}", stats.n)));
            cells.push(Cell::new(format!("{}", stats.n_correct)));
            cells.push(Cell::new(format!("{:.3}", stats.pct)).fg(Color::Cyan));
        }
        for (_, value) in row.derived_entries() {
            cells.push(Cell::new(format!("{:.4}", value)).fg(Color::Green));
        }
        out.add_row(cells);
    }

    if table.len() > head {
        println!("\nShowing {} of {} thresholds:", head.min(table.len()), table.len());
    }
    println!("{}", out);
}

/// Prints a single row as a compact best-threshold report.
pub fn best_row(title: &str, row: &EvaluationRow) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new(title).add_attribute(Attribute::Bold)];
    let mut cells = vec![Cell::new(format!("t = {:.4}", row.threshold))
        .fg(Color::Yellow)
        .add_attribute(Attribute::Bold)];

    for (name, stats) in row.series_entries() {
        header.push(Cell::new(name));
        cells.push(Cell::new(format!("{}/{} ({:.3})", stats.n_correct, stats.n, stats.pct)));
    }
    for (name, value) in row.derived_entries() {
        header.push(Cell::new(name).fg(Color::Green).add_attribute(Attribute::Bold));
        cells.push(Cell::new(format!("{:.4}", value)).fg(Color::Green));
    }

    let num_cols = header.len();
    out.add_row(header);
    out.add_row(cells);

    for i in 1..num_cols {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n{}", out);
}
