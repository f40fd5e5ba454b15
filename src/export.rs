use crate::error::OswResult;
use crate::sweep::ResultTable;
use std::io::Write;

/// Writes the result table as delimited text, one record per threshold.
///
/// Columns: `threshold`, then per series `{name}_N`, `{name}_N_corr`,
/// `{name}_pct`, then one column per derived metric. Header order is taken
/// from the first row, so the layout is stable across calls and downstream
/// column selection needs no negotiation.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> OswResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let Some(first) = table.rows().first() else {
        wtr.flush()?;
        return Ok(());
    };

    let mut header = vec!["threshold".to_string()];
    for (name, _) in first.series_entries() {
        header.push(format!("{}_N", name));
        header.push(format!("{}_N_corr", name));
        header.push(format!("{}_pct", name));
    }
    for (name, _) in first.derived_entries() {
        header.push(name.clone());
    }
    wtr.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![format!("{}", row.threshold)];
        for (_, stats) in row.series_entries() {
            record.push(format!("{}", stats.n));
            record.push(format!("{}", stats.n_correct));
            record.push(format!("{}", stats.pct));
        }
        for (_, value) in row.derived_entries() {
            record.push(format!("{}", value));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
