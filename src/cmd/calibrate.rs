use crate::reports;
use clap::Args;
use opensweep::config::ReportParams;
use opensweep::error::{OpenSweepError, OswResult};
use opensweep::export::write_csv;
use opensweep::grid::ThresholdGrid;
use opensweep::loader::load_scores;
use opensweep::series::{Direction, ScoreSeries};
use opensweep::sweep::{
    derive_table_metrics, select_best, sweep, CompositePair, DEFAULT_BETA,
};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    #[command(flatten)]
    pub report: ReportParams,

    /// Outlier scores of the validation set.
    #[arg(long)]
    pub valid: PathBuf,

    /// Outlier scores of the OOD training set.
    #[arg(long)]
    pub ood: PathBuf,

    /// Outlier scores of the crops probe.
    #[arg(long)]
    pub crops: Option<PathBuf>,

    /// Outlier scores of the random-noise probe.
    #[arg(long)]
    pub random: Option<PathBuf>,

    /// Interval for the threshold grid search.
    #[arg(long, default_value_t = 0.5)]
    pub by: f32,

    /// Path where the results are stored as CSV.
    #[arg(long, default_value = "results.csv")]
    pub out: PathBuf,
}

pub fn run(args: CalibrateArgs) -> OswResult<()> {
    // Outlier scores grow with distance from the training manifold:
    // validation samples are correct below the threshold, OOD above it.
    let valid = ScoreSeries::new("validation", load_scores(&args.valid)?, Direction::Below);
    let ood = ScoreSeries::new("ood", load_scores(&args.ood)?, Direction::Above);

    let crops = args
        .crops
        .as_ref()
        .map(|p| load_scores(p))
        .transpose()?
        .map(|v| ScoreSeries::new("crops", v, Direction::Above));
    let random = args
        .random
        .as_ref()
        .map(|p| load_scores(p))
        .transpose()?
        .map(|v| ScoreSeries::new("random", v, Direction::Above));

    // The union of every OOD-like source, evaluated as one series. It also
    // fixes the grid's upper bound.
    let mut ood_like: Vec<&ScoreSeries> = Vec::new();
    if let Some(r) = &random {
        ood_like.push(r);
    }
    if let Some(c) = &crops {
        ood_like.push(c);
    }
    ood_like.push(&ood);
    let all = ScoreSeries::concat("all", Direction::Above, &ood_like);

    let max_score = all.max_value().ok_or_else(|| {
        OpenSweepError::Validation("no finite OOD scores to bound the grid".to_string())
    })?;

    let has_additional = crops.is_some() || random.is_some();

    let mut series = vec![valid];
    if let Some(c) = crops {
        series.push(c);
    }
    series.push(ood);
    if has_additional {
        series.push(all);
    }

    let grid = ThresholdGrid::data_driven(max_score, args.by)?;
    info!(
        "Sweeping {} thresholds up to max score {:.4} over {} series",
        grid.len(),
        max_score,
        series.len()
    );

    let mut table = sweep(&series, &grid)?;

    let mut pairs = vec![CompositePair::new("W", "validation", "ood", DEFAULT_BETA)];
    if has_additional {
        pairs.push(CompositePair::new("AW", "validation", "all", DEFAULT_BETA));
    }
    derive_table_metrics(&mut table, &pairs)?;

    let file = File::create(&args.out)?;
    write_csv(&table, file)?;
    info!("Results saved to {}", args.out.display());

    reports::table_head(&table, args.report.head);

    let best = select_best(&table, &args.report.rank_metric)?;
    reports::best_row(&format!("Best ({})", args.report.rank_metric), best);

    if has_additional {
        let best_aw = select_best(&table, "AW")?;
        reports::best_row("Best (AW)", best_aw);
    }

    Ok(())
}
