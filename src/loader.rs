use crate::error::{OpenSweepError, OswResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads a one-dimensional score sequence from disk.
///
/// Two formats are accepted: `.csv` with one score in the first field of
/// each record (no header), and `.json` holding a flat array of numbers.
/// Blank records and non-finite values are skipped rather than fatal.
pub fn load_scores<P: AsRef<Path>>(path: P) -> OswResult<Vec<f32>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let scores = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(OpenSweepError::Validation(format!(
                "unsupported score file extension '{}' for {}",
                other,
                path.display()
            )))
        }
    };

    info!("Loaded {} scores from {}", scores.len(), path.display());
    Ok(scores)
}

fn load_csv(path: &Path) -> OswResult<Vec<f32>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(file);

    let mut scores = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records().flatten() {
        let Some(field) = result.get(0) else {
            continue;
        };
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        match field.parse::<f32>() {
            Ok(v) if v.is_finite() => scores.push(v),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} unparseable records in {}", skipped, path.display());
    }
    Ok(scores)
}

fn load_json(path: &Path) -> OswResult<Vec<f32>> {
    let mut file = File::open(path)?;
    let mut raw = String::new();
    file.read_to_string(&mut raw)?;

    let values: Vec<f32> = serde_json::from_str(&raw)?;
    Ok(values.into_iter().filter(|v| v.is_finite()).collect())
}
