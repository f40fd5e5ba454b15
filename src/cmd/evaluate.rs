use crate::reports;
use clap::Args;
use opensweep::config::ReportParams;
use opensweep::error::OswResult;
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
pub struct EvaluateArgs {
    #[command(flatten)]
    pub report: ReportParams,

    /// Discriminator scores for the in-distribution validation holdout.
    #[arg(long)]
    pub valid: PathBuf,

    /// Discriminator scores for the open (OOD) holdout.
    #[arg(long)]
    pub open: PathBuf,

    /// Discriminator scores for the crops probe.
    #[arg(long)]
    pub crops: Option<PathBuf>,

    /// Discriminator scores for the random-noise probe.
    #[arg(long)]
    pub random: Option<PathBuf>,

    /// Increment used for sweeping the [0, 1] axis.
    #[arg(long, default_value_t = 0.05)]
    pub by: f32,

    /// Path where the performance table is saved as CSV.
    #[arg(long, default_value = "performance.csv")]
    pub out: PathBuf,
}

pub fn run(args: EvaluateArgs) -> OswResult<()> {
    // Discriminator outputs are probabilities of being real: validation
    // samples are correct above the threshold, OOD samples below it.
    let valid = ScoreSeries::new("valid", load_scores(&args.valid)?, Direction::Above);
    let open = ScoreSeries::new("open", load_scores(&args.open)?, Direction::Below);

    let crops = args
        .crops
        .as_ref()
        .map(|p| load_scores(p))
        .transpose()?
        .map(|v| ScoreSeries::new("crops", v, Direction::Below));
    let random = args
        .random
        .as_ref()
        .map(|p| load_scores(p))
        .transpose()?
        .map(|v| ScoreSeries::new("random", v, Direction::Below));

    let additional = match (&random, &crops) {
        (Some(r), Some(c)) => Some(ScoreSeries::concat("additional", Direction::Below, &[r, c])),
        (Some(r), None) => Some(ScoreSeries::concat("additional", Direction::Below, &[r])),
        (None, Some(c)) => Some(ScoreSeries::concat("additional", Direction::Below, &[c])),
        (None, None) => None,
    };

    let mut series = vec![valid, open];
    if let Some(add) = additional {
        series.push(add);
    }

    let grid = ThresholdGrid::fixed_domain(args.by)?;
    info!("Sweeping {} thresholds over {} series", grid.len(), series.len());

    let mut table = sweep(&series, &grid)?;

    let mut pairs = vec![CompositePair::new("W", "valid", "open", DEFAULT_BETA)];
    if series.iter().any(|s| s.name() == "additional") {
        pairs.push(CompositePair::new("AW", "valid", "additional", DEFAULT_BETA));
    }
    derive_table_metrics(&mut table, &pairs)?;

    let file = File::create(&args.out)?;
    write_csv(&table, file)?;
    info!("Performance table saved to {}", args.out.display());

    reports::table_head(&table, args.report.head);

    let best = select_best(&table, &args.report.rank_metric)?;
    reports::best_row(&format!("Best ({})", args.report.rank_metric), best);

    if pairs.len() > 1 {
        let best_aw = select_best(&table, "AW")?;
        reports::best_row("Best (additional)", best_aw);
    }

    Ok(())
}
