use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "accdisc.toml")]
    pub config: String,

    /// Output image path (overrides config)
    #[arg(long)]
    pub out: Option<String>,

    /// Write evaluated curves as CSV to this path (overrides config)
    #[arg(long)]
    pub csv: Option<String>,

    /// Sweep start decade exponent (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub start_exp: Option<f64>,

    /// Sweep end decade exponent (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub end_exp: Option<f64>,

    /// Number of sweep samples (overrides config)
    #[arg(long)]
    pub samples: Option<usize>,
}

impl Args {
    /// Fold CLI overrides into a loaded config. Flags win over the file.
    pub fn apply_to(&self, cfg: &mut AppConfig) {
        if let Some(out) = &self.out {
            cfg.plot.output = out.clone();
        }
        if let Some(csv) = &self.csv {
            cfg.plot.csv = Some(csv.clone());
        }
        if let Some(start_exp) = self.start_exp {
            cfg.sweep.start_exp = start_exp;
        }
        if let Some(end_exp) = self.end_exp {
            cfg.sweep.end_exp = end_exp;
        }
        if let Some(samples) = self.samples {
            cfg.sweep.count = samples;
        }
    }
}
