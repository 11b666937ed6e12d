// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Write ephemeris tables that swivel the antennas along azimuth or elevation.

use std::path::PathBuf;

use clap::{Args, Parser};
use log::info;

use super::common::{display_warnings, InfoPrinter};
use crate::{
    ephem::{ata_tai_now, az_swivel, el_swivel, ephem_to_file, EphemError, EphemerisRow},
    io::can_write_to_file,
    AtaToolsError,
};

#[derive(Args, Debug)]
struct EphemTimeArgs {
    /// The start time of the swivel [ATA TAI seconds, i.e. Unix time + 37 s].
    #[clap(long)]
    start: Option<f64>,

    /// Start the swivel this many seconds from now. This is the default, with
    /// 0 seconds, if --start isn't given.
    #[clap(long)]
    start_in: Option<f64>,

    /// How long the swivel takes [seconds].
    #[clap(long)]
    span: f64,

    /// The number of rows in the ephemeris.
    #[clap(long)]
    steps: usize,

    /// The inverse radius of the source.
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    inv_radius: f64,

    /// The text file to write the ephemeris to.
    #[clap(short, long, default_value = "ephem.txt", parse(from_os_str))]
    output: PathBuf,
}

impl EphemTimeArgs {
    /// The start time in ATA TAI seconds.
    fn start_time(&self) -> Result<f64, AtaToolsError> {
        match (self.start, self.start_in) {
            (Some(_), Some(_)) => Err(AtaToolsError::Ephemeris(
                "Only one of --start and --start-in may be given".to_string(),
            )),
            (Some(start), None) => Ok(start),
            (None, start_in) => Ok(ata_tai_now()? + start_in.unwrap_or(0.0)),
        }
    }

    /// Check the arguments, then generate and write the ephemeris.
    fn write<F>(self, title: String, dry_run: bool, generate: F) -> Result<(), AtaToolsError>
    where
        F: FnOnce(f64, f64, usize, f64) -> Result<Vec<EphemerisRow>, EphemError>,
    {
        let start = self.start_time()?;
        can_write_to_file(&self.output)?;

        let mut printer = InfoPrinter::new(title.into());
        printer.push_block(vec![
            format!("Start: {start} s (ATA TAI)").into(),
            format!("Span: {} s over {} steps", self.span, self.steps).into(),
        ]);
        printer.push_line(format!("Inverse radius: {}", self.inv_radius).into());
        printer.push_line(format!("Output: {}", self.output.display()).into());
        printer.display();
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let rows = generate(start, self.span, self.steps, self.inv_radius)?;
        ephem_to_file(&rows, &self.output)?;
        info!("Wrote {} rows to {}", rows.len(), self.output.display());
        Ok(())
    }
}

/// Swivel along azimuth at a fixed elevation.
#[derive(Parser, Debug)]
pub(super) struct AzSwivelArgs {
    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    az_start: f64,

    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    az_end: f64,

    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    el: f64,

    #[clap(flatten)]
    time: EphemTimeArgs,
}

impl AzSwivelArgs {
    pub(super) fn run(self, dry_run: bool) -> Result<(), AtaToolsError> {
        let AzSwivelArgs {
            az_start,
            az_end,
            el,
            time,
        } = self;
        let title = format!("Azimuth swivel {az_start}° to {az_end}° at elevation {el}°");
        time.write(title, dry_run, |start, span, steps, inv_radius| {
            az_swivel(az_start, az_end, el, start, span, steps, inv_radius)
        })
    }
}

/// Swivel along elevation at a fixed azimuth.
#[derive(Parser, Debug)]
pub(super) struct ElSwivelArgs {
    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    az: f64,

    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    el_start: f64,

    /// [degrees]
    #[clap(long, allow_hyphen_values = true)]
    el_end: f64,

    #[clap(flatten)]
    time: EphemTimeArgs,
}

impl ElSwivelArgs {
    pub(super) fn run(self, dry_run: bool) -> Result<(), AtaToolsError> {
        let ElSwivelArgs {
            az,
            el_start,
            el_end,
            time,
        } = self;
        let title = format!("Elevation swivel {el_start}° to {el_end}° at azimuth {az}°");
        time.write(title, dry_run, |start, span, steps, inv_radius| {
            el_swivel(az, el_start, el_end, start, span, steps, inv_radius)
        })
    }
}
