// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot calibration curves. There is one panel per antenna; the x and
//! y polarizations are drawn in different colours.

use std::path::Path;

use log::debug;
use plotters::{coord::Shift, prelude::*};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    antenna::Polarization,
    calibration::{AntennaCurves, CalibrationCurve, ResolvedCalibration},
    ephem::linspace,
};

/// The number of X pixels on the plots.
const X_PIXELS: u32 = 1600;
/// The number of Y pixels for each row of panels.
const ROW_PIXELS: u32 = 450;
/// The maximum number of panels in a row.
const MAX_COLS: usize = 4;

#[derive(Error, Debug)]
pub(crate) enum DrawError {
    #[error("While plotting antenna {antenna}: {err}")]
    Chart { antenna: String, err: String },

    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),
}

fn pol_colour(pol: Polarization) -> RGBColor {
    match pol {
        Polarization::X => BLUE,
        Polarization::Y => RED,
    }
}

/// Evaluate a curve at `num_points` evenly spaced inputs across its valid
/// range. Points that don't evaluate to a finite number are dropped.
pub(super) fn sample_curve(curve: &CalibrationCurve, num_points: usize) -> Vec<(f64, f64)> {
    linspace(curve.low_bound, curve.high_bound, num_points)
        .into_iter()
        .map(|x| (x, curve.eval(x)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// The smallest and largest values, widened if they're equal. Without any
/// values, the range is 0 to 1.
pub(super) fn plot_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min > max {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

pub(super) fn plot_curves(
    resolved: &ResolvedCalibration,
    file: &Path,
    num_points: usize,
) -> Result<(), DrawError> {
    let num_panels = resolved.curves.len().max(1);
    let num_cols = num_panels.min(MAX_COLS);
    let num_rows = num_panels.div_ceil(num_cols);
    debug!("Plotting {num_panels} antennas in {num_rows} rows and {num_cols} columns");

    let root_area =
        BitMapBackend::new(file, (X_PIXELS, ROW_PIXELS * num_rows as u32)).into_drawing_area();
    root_area
        .fill(&WHITE)
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;
    let root_area = root_area
        .titled("Calibration curves", ("sans-serif", 40).into_font())
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;
    let panels = root_area.split_evenly((num_rows, num_cols));

    for ((antenna, curves), panel) in resolved.curves.iter().zip(panels.iter()) {
        let caption = if resolved.was_filled(antenna) {
            format!("{antenna} (from {})", resolved.default_antenna)
        } else {
            antenna.to_string()
        };
        plot_antenna(panel, &caption, curves, num_points).map_err(|err| DrawError::Chart {
            antenna: antenna.to_string(),
            err,
        })?;
    }

    root_area
        .present()
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;
    Ok(())
}

/// For a single drawing area, plot both polarizations of an antenna.
fn plot_antenna<DB: DrawingBackend>(
    drawing_area: &DrawingArea<DB, Shift>,
    caption: &str,
    curves: &AntennaCurves,
    num_points: usize,
) -> Result<(), String> {
    let samples = Polarization::iter()
        .map(|pol| (pol, sample_curve(curves.get(pol), num_points)))
        .collect::<Vec<_>>();
    let (x_min, x_max) = plot_range(samples.iter().flat_map(|(_, s)| s.iter().map(|p| p.0)));
    let (y_min, y_max) = plot_range(samples.iter().flat_map(|(_, s)| s.iter().map(|p| p.1)));

    let mut cc = ChartBuilder::on(drawing_area)
        .caption(caption, ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| e.to_string())?;

    cc.configure_mesh()
        .light_line_style(WHITE)
        .x_desc("detector")
        .draw()
        .map_err(|e| e.to_string())?;

    for (pol, points) in samples {
        let colour = pol_colour(pol);
        cc.draw_series(PointSeries::of_element(
            points,
            2,
            ShapeStyle::from(&colour).filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))
        .map_err(|e| e.to_string())?
        .label(pol.to_string())
        .legend(move |(x, y)| Circle::new((x, y), 4, colour.filled()));
    }

    cc.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    Ok(())
}
