//! render.rs — log-log figure rendering and CSV export.

use std::error::Error;
use std::fs::write;
use std::io;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::core::logspace::LogSweep;
use crate::core::tradeoff::TradeoffCurve;

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// Draw one log-log line per curve on a shared chart and write the
/// figure to `out_path` (overwriting any existing file).
pub fn render_tradeoff_plot(
    out_path: &Path,
    sweep: &LogSweep,
    curves: &[TradeoffCurve],
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let x_min = sweep.first();
    let x_max = sweep.last();

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for curve in curves {
        sweep.assert_curve_len(&curve.values);
        for &v in &curve.values {
            if v.is_finite() && v > 0.0 {
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 1e-1;
        y_max = 1.0;
    }
    // Multiplicative padding keeps the margins even on the log axis.
    let y_lo = y_min * 0.5;
    let y_hi = y_max * 2.0;
    debug!(y_lo, y_hi, "plot y range");

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Piecewise max function vs dt", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("dt")
        .y_desc("max(alpha*dt, beta*eps_a, gamma*eps_b/dt)")
        .light_line_style(BLACK.mix(0.15))
        .draw()?;

    for (i, curve) in curves.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let points = sweep
            .samples
            .iter()
            .copied()
            .zip(curve.values.iter().copied());
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(curve.pair.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Write the sweep and every curve as CSV: a dt column plus one column
/// per pair.
pub fn write_curves_csv(
    out_path: &Path,
    sweep: &LogSweep,
    curves: &[TradeoffCurve],
) -> io::Result<()> {
    let mut csv = String::from("dt");
    for curve in curves {
        sweep.assert_curve_len(&curve.values);
        csv.push(',');
        // The pair label holds a comma; flatten it for the header cell.
        csv.push_str(&curve.pair.label().replace(", ", " "));
    }
    csv.push('\n');

    for (i, &dt) in sweep.samples.iter().enumerate() {
        csv.push_str(&format!("{dt:e}"));
        for curve in curves {
            csv.push_str(&format!(",{:e}", curve.values[i]));
        }
        csv.push('\n');
    }

    write(out_path, csv)
}
