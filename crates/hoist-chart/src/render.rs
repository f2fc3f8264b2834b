//! Dual-axis comparison chart rendering.
//!
//! Gear ratio on X, linear speed on the left axis, output torque on the
//! right, with a dashed reference line at the demand torque.  The renderer
//! consumes a precomputed [`ComparisonSeries`] and never touches the
//! sizing math itself.

use std::path::Path;

use plotters::chart::{ChartBuilder, LabelAreaPosition, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{Circle, PathElement, TriangleMarker};
use plotters::prelude::{BitMapBackend, DashedLineSeries, DrawingBackend, LineSeries, SVGBackend};
use plotters::style::{BLACK, BLUE, Color, GREEN, RED, WHITE};
use thiserror::Error;
use tracing::debug;

use crate::series::ComparisonSeries;

/// Canvas size in pixels.
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Headroom factor above the tallest point on each Y axis.
const AXIS_HEADROOM: f64 = 1.15;

/// Padding on either side of the catalog ratios on the X axis.
const X_PADDING: f64 = 1.0;

// ---------------------------------------------------------------------------
// ChartError
// ---------------------------------------------------------------------------

/// Chart rendering errors.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Cannot render an empty series")]
    EmptySeries,
}

// ---------------------------------------------------------------------------
// render_comparison
// ---------------------------------------------------------------------------

/// Render `series` as a dual-axis comparison chart at `path`.
///
/// `.svg` paths use the SVG backend; anything else is rasterized through
/// the bitmap backend (PNG for `.png` paths).
pub fn render_comparison(series: &ComparisonSeries, path: &Path) -> Result<(), ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    debug!(points = series.len(), path = %path.display(), "rendering comparison chart");

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
            draw(&root, series).map_err(|e| ChartError::Render(e.to_string()))
        }
        _ => {
            let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
            draw(&root, series).map_err(|e| ChartError::Render(e.to_string()))
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &ComparisonSeries,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    // Ratios are held ascending, so the X extent is the first/last member.
    let x_min = series.ratios[0] - X_PADDING;
    let x_max = series.ratios[series.ratios.len() - 1] + X_PADDING;
    let speed_top = axis_top(&series.linear_speeds, 0.0);
    // The torque axis must also fit the demand reference line.
    let torque_top = axis_top(&series.output_torques, series.required_torque);

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption("Gear Ratio Comparison", ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..speed_top)?
        .set_secondary_coord(x_min..x_max, 0.0..torque_top);

    chart
        .configure_mesh()
        .x_desc("Gear Ratio")
        .y_desc("Linear Speed (m/s)")
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.1))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Output Torque (Nm)")
        .draw()?;

    let speed_points: Vec<(f64, f64)> = series
        .ratios
        .iter()
        .copied()
        .zip(series.linear_speeds.iter().copied())
        .collect();
    chart
        .draw_series(LineSeries::new(speed_points.clone(), &BLUE))?
        .label("Linear Speed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(
        speed_points
            .iter()
            .map(|&point| Circle::new(point, 4, BLUE.filled())),
    )?;

    let torque_points: Vec<(f64, f64)> = series
        .ratios
        .iter()
        .copied()
        .zip(series.output_torques.iter().copied())
        .collect();
    chart
        .draw_secondary_series(LineSeries::new(torque_points.clone(), &RED))?
        .label("Output Torque")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart.draw_secondary_series(
        torque_points
            .iter()
            .map(|&point| TriangleMarker::new(point, 5, RED.filled())),
    )?;

    let demand = series.required_torque;
    chart
        .draw_secondary_series(DashedLineSeries::new(
            vec![(x_min, demand), (x_max, demand)],
            8,
            6,
            GREEN.stroke_width(2),
        ))?
        .label(format!(
            "Required Torque for {}kg: {:.2}Nm",
            series.load_mass, demand
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn axis_top(values: &[f64], floor: f64) -> f64 {
    values.iter().copied().fold(floor, f64::max) * AXIS_HEADROOM
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hoist_sizing::gearing::RatioCatalog;
    use hoist_sizing::load::LiftLoad;
    use hoist_sizing::motor::Motor;

    fn reference_series() -> ComparisonSeries {
        let load = LiftLoad::new(2.0, 0.01);
        let motor = Motor::new(0.17, 6000.0);
        ComparisonSeries::compute(&load, &motor, &RatioCatalog::standard(), 0.85).unwrap()
    }

    #[test]
    fn renders_svg_chart() {
        let dir = std::env::temp_dir().join("hoist_test_chart_svg");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("comparison.svg");

        render_comparison(&reference_series(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        // Cleanup
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn renders_png_chart() {
        let dir = std::env::temp_dir().join("hoist_test_chart_png");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("comparison.png");

        render_comparison(&reference_series(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        // Cleanup
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn empty_series_rejected() {
        let series = ComparisonSeries {
            ratios: Vec::new(),
            linear_speeds: Vec::new(),
            output_torques: Vec::new(),
            max_masses: Vec::new(),
            required_torque: 0.24,
            load_mass: 2.0,
        };
        let err = render_comparison(&series, Path::new("unused.png")).unwrap_err();
        assert!(matches!(err, ChartError::EmptySeries));
    }

    #[test]
    fn axis_top_covers_reference_value() {
        // The demand line must stay inside the torque axis even when it
        // exceeds every catalog point.
        assert!(axis_top(&[1.0, 2.0], 5.0) > 5.0);
        assert!(axis_top(&[1.0, 2.0], 0.0) > 2.0);
    }
}
