use clap::Args;
use serde::{Deserialize, Serialize};

/// Reporting parameters shared by both subcommands. The sweep increment
/// lives with each command since the two score domains use different
/// defaults (0.05 for bounded probabilities, 0.5 for outlier distances).
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct ReportParams {
    /// How many leading result rows to print to the console.
    #[arg(long, default_value_t = 10)]
    pub head: usize,

    /// Derived metric used to rank rows when reporting the best threshold.
    #[arg(long, default_value = "W")]
    pub rank_metric: String,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            head: 10,
            rank_metric: "W".to_string(),
        }
    }
}
