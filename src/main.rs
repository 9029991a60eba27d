// Entry point: one-shot run — build the sweep, evaluate every pair,
// render the figure.
use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use accdisc::cli::Args;
use accdisc::config::AppConfig;
use accdisc::core::logspace::LogSweep;
use accdisc::core::tradeoff::{self, TermWeights};
use accdisc::render;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    args.apply_to(&mut cfg);

    let sweep = LogSweep::new(cfg.sweep.start_exp, cfg.sweep.end_exp, cfg.sweep.count)?;
    let weights = TermWeights {
        alpha: cfg.terms.alpha,
        beta: cfg.terms.beta,
        gamma: cfg.terms.gamma,
    };
    let curves = tradeoff::evaluate_curves(&weights, &cfg.eps_pairs, &sweep)?;

    let out_path = Path::new(&cfg.plot.output);
    render::render_tradeoff_plot(out_path, &sweep, &curves, (cfg.plot.width, cfg.plot.height))?;
    info!("saved plot to {}", out_path.display());

    if let Some(csv_path) = cfg.plot.csv.as_deref() {
        render::write_curves_csv(Path::new(csv_path), &sweep, &curves)?;
        info!("saved curves to {csv_path}");
    }

    Ok(())
}
