// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resolve, report and plot the calibration polynomials of antennas.

mod error;
#[cfg(feature = "plotting")]
mod plot;

pub(crate) use error::CalPolysPlotError;

use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::info;
use strum::IntoEnumIterator;

use super::common::{display_warnings, CalInputArgs, InfoPrinter, CAL_OUTPUT_HELP};
use crate::{
    antenna::Polarization,
    calibration::{resolve_calibration, CalibrationCurve, ResolvedCalibration},
    config::ArrayConfig,
    io::{can_write_to_file, write_text_file, TextFormat},
    AtaToolsError,
};

#[derive(Parser, Debug)]
pub(super) struct CalPolysArgs {
    #[clap(flatten)]
    input: CalInputArgs,

    /// Evaluate every calibration curve at this detector value.
    #[clap(short, long, allow_hyphen_values = true)]
    detector: Option<f64>,

    #[clap(short, long, help = CAL_OUTPUT_HELP.as_str(), parse(from_os_str))]
    output: Option<PathBuf>,
}

impl CalPolysArgs {
    pub(super) fn run(self, config: &ArrayConfig, dry_run: bool) -> Result<(), AtaToolsError> {
        let CalPolysArgs {
            input,
            detector,
            output,
        } = self;

        let (antennas, store) = input.parse(config)?;
        if let Some(output) = output.as_deref() {
            TextFormat::from_path(output)?;
            can_write_to_file(output)?;
        }
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let resolved = resolve_calibration(&store, &antennas, config)?;
        display_calibration(&resolved, detector);

        if let Some(output) = output {
            write_text_file(&resolved, &output)?;
            info!("Wrote {}", output.display());
        }

        Ok(())
    }
}

#[derive(Parser, Debug)]
pub(super) struct CalPolysPlotArgs {
    #[clap(flatten)]
    input: CalInputArgs,

    /// The PNG file to write the plot to.
    #[clap(short, long, default_value = "cal_polys.png", parse(from_os_str))]
    output: PathBuf,

    /// The number of points to sample each curve at, across its valid range.
    #[clap(long, default_value = "200")]
    num_points: usize,
}

impl CalPolysPlotArgs {
    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self, _config: &ArrayConfig, _dry_run: bool) -> Result<(), AtaToolsError> {
        Err(AtaToolsError::from(CalPolysPlotError::NoPlottingFeature))
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self, config: &ArrayConfig, dry_run: bool) -> Result<(), AtaToolsError> {
        let CalPolysPlotArgs {
            input,
            output,
            num_points,
        } = self;

        let (antennas, store) = input.parse(config)?;
        let is_png = output
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return Err(CalPolysPlotError::NotPng {
                file: output.display().to_string(),
            }
            .into());
        }
        can_write_to_file(&output)?;
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let resolved = resolve_calibration(&store, &antennas, config)?;
        plot::plot_curves(&resolved, &output, num_points).map_err(CalPolysPlotError::from)?;
        info!("Wrote {}", output.display());

        Ok(())
    }
}

/// One line describing a curve, and optionally its value at `detector`.
fn curve_summary(pol: Polarization, curve: &CalibrationCurve, detector: Option<f64>) -> String {
    let mut s = format!(
        "{pol}: {:?}, valid over [{}, {}]",
        curve.coefficients, curve.low_bound, curve.high_bound
    );
    if !curve.is_coherent {
        s.push_str(" (uncertain)");
    }
    match detector.map(|d| (d, curve.eval_in_range(d))) {
        Some((d, Some(v))) => s.push_str(&format!("; {pol}({d}) = {v}")),
        Some((d, None)) => s.push_str(&format!("; {d} is out of range")),
        None => (),
    }
    s
}

fn display_calibration(resolved: &ResolvedCalibration, detector: Option<f64>) {
    let mut printer = InfoPrinter::new("Calibration curves (highest degree first)".into());
    for (antenna, curves) in resolved.curves.iter() {
        let mut block: Vec<Cow<'static, str>> = Vec::with_capacity(3);
        if resolved.was_filled(antenna) {
            block.push(
                format!(
                    "{antenna} (no measurements; using {}'s curves)",
                    resolved.default_antenna
                )
                .into(),
            );
        } else {
            block.push(antenna.to_string().into());
        }
        for pol in Polarization::iter() {
            block.push(curve_summary(pol, curves.get(pol), detector).into());
        }
        printer.push_block(block);
    }
    printer.display();
}
