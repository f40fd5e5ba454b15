use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep the [0, 1] probability domain of discriminator outputs.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Sweep a data-driven grid over unbounded outlier scores.
    Calibrate(cmd::calibrate::CalibrateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args),
        Commands::Calibrate(args) => cmd::calibrate::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
