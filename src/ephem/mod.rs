// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ephemeris tables that swivel the antennas along one axis.
//!
//! An ephemeris is a list of (time, azimuth, elevation, inverse radius) rows.
//! Times are "ATA TAI" nanoseconds; ATA TAI is Unix time plus
//! [`ATA_TAI_OFFSET_S`] seconds.

mod error;

pub use error::EphemError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use hifitime::Epoch;
use log::debug;

use crate::constants::ATA_TAI_OFFSET_S;

/// One row of an ephemeris table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisRow {
    /// ATA TAI time \[nanoseconds\]
    pub tai_ns: i64,

    /// \[degrees\]
    pub az_deg: f64,

    /// \[degrees\]
    pub el_deg: f64,

    /// The inverse radius of the source.
    pub inv_radius: f64,
}

/// The current ATA TAI time \[seconds\].
pub fn ata_tai_now() -> Result<f64, EphemError> {
    let now = Epoch::now().map_err(|e| EphemError::Clock(e.to_string()))?;
    Ok(now.to_unix_seconds() + ATA_TAI_OFFSET_S)
}

/// `num` evenly spaced values from `start` to `end`, both inclusive. A single
/// value is just `start`.
pub(crate) fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut v: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            // Don't let accumulated rounding miss the end point.
            v[num - 1] = end;
            v
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), EphemError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EphemError::NonFinite { name, value })
    }
}

/// Sample times for an ephemeris, rounded to the nearest nanosecond (halves go
/// to even).
fn swivel_times(t_start_s: f64, t_span_s: f64, steps: usize) -> Result<Vec<i64>, EphemError> {
    if steps == 0 {
        return Err(EphemError::NoSteps);
    }
    check_finite("start time", t_start_s)?;
    if !t_span_s.is_finite() || t_span_s < 0.0 {
        return Err(EphemError::BadTimeSpan(t_span_s));
    }

    let t_end_s = t_start_s + t_span_s;
    for t in [t_start_s, t_end_s] {
        // Nanosecond times must fit in an i64.
        if (t * 1e9).abs() >= i64::MAX as f64 {
            return Err(EphemError::TimeOutOfRange(t));
        }
    }

    let times = linspace(t_start_s * 1e9, t_end_s * 1e9, steps)
        .into_iter()
        .map(|t| t.round_ties_even() as i64)
        .collect();
    Ok(times)
}

/// Sweep the azimuth from `az_start` to `az_end` at a fixed elevation. The
/// start time is in ATA TAI seconds and the span in seconds; there will be
/// `steps` rows.
pub fn az_swivel(
    az_start: f64,
    az_end: f64,
    el: f64,
    t_start_s: f64,
    t_span_s: f64,
    steps: usize,
    inv_radius: f64,
) -> Result<Vec<EphemerisRow>, EphemError> {
    check_finite("azimuth start", az_start)?;
    check_finite("azimuth end", az_end)?;
    check_finite("elevation", el)?;
    check_finite("inverse radius", inv_radius)?;
    let times = swivel_times(t_start_s, t_span_s, steps)?;
    debug!("Azimuth swivel {az_start}..{az_end} deg at elevation {el} deg, {steps} steps");

    Ok(times
        .into_iter()
        .zip(linspace(az_start, az_end, steps))
        .map(|(tai_ns, az_deg)| EphemerisRow {
            tai_ns,
            az_deg,
            el_deg: el,
            inv_radius,
        })
        .collect())
}

/// Sweep the elevation from `el_start` to `el_end` at a fixed azimuth. The
/// start time is in ATA TAI seconds and the span in seconds; there will be
/// `steps` rows.
pub fn el_swivel(
    az: f64,
    el_start: f64,
    el_end: f64,
    t_start_s: f64,
    t_span_s: f64,
    steps: usize,
    inv_radius: f64,
) -> Result<Vec<EphemerisRow>, EphemError> {
    check_finite("azimuth", az)?;
    check_finite("elevation start", el_start)?;
    check_finite("elevation end", el_end)?;
    check_finite("inverse radius", inv_radius)?;
    let times = swivel_times(t_start_s, t_span_s, steps)?;
    debug!("Elevation swivel {el_start}..{el_end} deg at azimuth {az} deg, {steps} steps");

    Ok(times
        .into_iter()
        .zip(linspace(el_start, el_end, steps))
        .map(|(tai_ns, el_deg)| EphemerisRow {
            tai_ns,
            az_deg: az,
            el_deg,
            inv_radius,
        })
        .collect())
}

/// Format a number in scientific notation like C's `%.<precision>E`, i.e. with
/// a signed exponent of at least two digits (`1.5000E-07`).
pub(crate) fn format_sci(x: f64, precision: usize) -> String {
    let s = format!("{x:.precision$E}");
    match s.split_once('E') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}E{sign}{:02}", exp.abs())
            }
            Err(_) => s,
        },
        // inf and NaN.
        None => s,
    }
}

impl EphemerisRow {
    /// The text form of this row, e.g.
    /// `1700000000000000000  10.00000  45.00000  1.0000000000E-10`.
    pub fn to_line(&self) -> String {
        format!(
            "{}  {:.5}  {:.5}  {}",
            self.tai_ns,
            self.az_deg,
            self.el_deg,
            format_sci(self.inv_radius, 10)
        )
    }
}

/// Write an ephemeris as text, one row per line.
pub fn write_ephem<W: Write>(rows: &[EphemerisRow], mut w: W) -> Result<(), EphemError> {
    for row in rows {
        writeln!(w, "{}", row.to_line())?;
    }
    w.flush()?;
    Ok(())
}

/// Write an ephemeris to a text file.
pub fn ephem_to_file(rows: &[EphemerisRow], path: &Path) -> Result<(), EphemError> {
    debug!("Writing {} ephemeris rows to {}", rows.len(), path.display());
    let f = BufWriter::new(File::create(path)?);
    write_ephem(rows, f)
}
