use std::fs;
use std::path::PathBuf;

use accdisc::cli::Args;
use accdisc::config::{AppConfig, PlotConfig, SweepConfig, TermsConfig};
use accdisc::core::tradeoff::EpsPair;
use clap::Parser;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "accdisc_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn assert_close(a: f64, b: f64, label: &str) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-12, "{label} mismatch: {a} vs {b}");
}

#[test]
fn custom_config_round_trips_through_file() {
    let path = unique_path("roundtrip.toml");
    let path_str = path.to_string_lossy().to_string();

    let expected = AppConfig {
        sweep: SweepConfig {
            start_exp: -9.0,
            end_exp: 2.0,
            count: 128,
        },
        terms: TermsConfig {
            alpha: 0.25,
            beta: 4.0,
            gamma: 1.0,
        },
        eps_pairs: vec![
            EpsPair {
                eps_a: 6e-8,
                eps_b: 1e-16,
            },
            EpsPair {
                eps_a: 1e-7,
                eps_b: 1e-7,
            },
        ],
        plot: PlotConfig {
            output: "roundtrip.png".to_string(),
            width: 640,
            height: 480,
            csv: None,
        },
    };
    fs::write(&path, toml::to_string_pretty(&expected).unwrap()).unwrap();

    let actual = AppConfig::load_or_default(&path_str);
    assert_close(
        actual.sweep.start_exp,
        expected.sweep.start_exp,
        "sweep.start_exp",
    );
    assert_close(actual.sweep.end_exp, expected.sweep.end_exp, "sweep.end_exp");
    assert_eq!(actual.sweep.count, expected.sweep.count);
    assert_close(actual.terms.alpha, expected.terms.alpha, "terms.alpha");
    assert_close(actual.terms.beta, expected.terms.beta, "terms.beta");
    assert_close(actual.terms.gamma, expected.terms.gamma, "terms.gamma");
    assert_eq!(actual.eps_pairs, expected.eps_pairs);
    assert_eq!(actual.plot.output, expected.plot.output);
    assert_eq!(actual.plot.width, expected.plot.width);
    assert_eq!(actual.plot.height, expected.plot.height);

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_overrides_win_over_config() {
    let mut cfg = AppConfig::default();
    let args = Args::parse_from([
        "accdisc",
        "--out",
        "override.png",
        "--csv",
        "override.csv",
        "--start-exp",
        "-8",
        "--end-exp",
        "1",
        "--samples",
        "32",
    ]);
    args.apply_to(&mut cfg);

    assert_eq!(cfg.plot.output, "override.png");
    assert_eq!(cfg.plot.csv.as_deref(), Some("override.csv"));
    assert_eq!(cfg.sweep.start_exp, -8.0);
    assert_eq!(cfg.sweep.end_exp, 1.0);
    assert_eq!(cfg.sweep.count, 32);
}

#[test]
fn partial_cli_leaves_config_untouched() {
    let mut cfg = AppConfig::default();
    let args = Args::parse_from(["accdisc", "--samples", "16"]);
    args.apply_to(&mut cfg);

    assert_eq!(cfg.sweep.count, 16);
    assert_eq!(cfg.sweep.start_exp, -11.0);
    assert_eq!(cfg.sweep.end_exp, 0.0);
    assert_eq!(cfg.plot.output, "acc_disc_vs_dt.png");
    assert!(cfg.plot.csv.is_none());
}
