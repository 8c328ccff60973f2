//! SVG line chart of league average, tallest player and champion starters.

use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::analysis::SeasonSummaryRow;
use crate::{HeightsError, Result};

const CHART_SIZE: (u32, u32) = (1100, 600);
/// Y range used when no row has any value.
const FALLBACK_Y_RANGE: (f64, f64) = (70.0, 90.0);

fn chart_err<E: Display>(e: E) -> HeightsError {
    HeightsError::Chart {
        message: e.to_string(),
    }
}

/// `(season_end_year, value)` for rows where `value` is present.
fn series_points<F>(rows: &[SeasonSummaryRow], value: F) -> Vec<(i32, f64)>
where
    F: Fn(&SeasonSummaryRow) -> Option<f64>,
{
    rows.iter()
        .filter_map(|r| value(r).map(|v| (i32::from(r.season_end_year), v)))
        .collect()
}

/// Padded `(min, max)` over all points, or the fallback range.
fn y_bounds(series: &[&[(i32, f64)]]) -> (f64, f64) {
    let values = series.iter().flat_map(|s| s.iter().map(|(_, v)| *v));
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        return FALLBACK_Y_RANGE;
    }
    (lo.floor() - 2.0, hi.ceil() + 2.0)
}

fn x_bounds(rows: &[SeasonSummaryRow]) -> (i32, i32) {
    let years = rows.iter().map(|r| i32::from(r.season_end_year));
    let lo = years.clone().min().unwrap_or(1980);
    let hi = years.max().unwrap_or(lo);
    (lo, hi.max(lo + 1))
}

/// Render the three height series against season end-year to `path`.
///
/// A season missing a value is left out of that series only.
pub fn render_chart(rows: &[SeasonSummaryRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let average = series_points(rows, |r| r.avg_height_in);
    let tallest = series_points(rows, |r| r.tallest_height_in);
    let champions = series_points(rows, |r| r.champ_starter_avg);

    let (x_lo, x_hi) = x_bounds(rows);
    let (y_lo, y_hi) = y_bounds(&[
        average.as_slice(),
        tallest.as_slice(),
        champions.as_slice(),
    ]);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("NBA Heights by Season", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Season end year (1980 = 1979-80)")
        .y_desc("Height (inches)")
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(chart_err)?;

    let series = [
        (average, "Average height", BLUE),
        (tallest, "Tallest player", RED),
        (champions, "Champion starters (top 5 minutes)", GREEN),
    ];
    for (points, label, color) in series {
        if points.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(chart_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    debug!("Rendered chart with {} seasons to {}", rows.len(), path.display());
    Ok(())
}
