// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calibration polynomials for antennas, with fallback to a default antenna.
//!
//! Each antenna's feed has a polynomial for each of its two polarizations,
//! fitted from continuous-wave measurements, along with the input range over
//! which the polynomial is valid. Antennas without measurements borrow the
//! curves of the configured default antenna.

mod error;

pub use error::CalibrationError;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use vec1::Vec1;

use crate::{
    antenna::{AntennaId, Polarization},
    config::ArrayConfig,
    constants::NUM_POLY_COEFFS,
    store::{MeasurementRow, MeasurementStore, StoreConnection},
};

/// A calibration polynomial and the input domain it's valid over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCurve {
    /// Polynomial coefficients, highest degree first.
    pub coefficients: [f64; NUM_POLY_COEFFS],

    /// The lowest input this curve is valid for.
    pub low_bound: f64,

    /// The highest input this curve is valid for.
    pub high_bound: f64,

    /// Was the measurement behind this curve coherent? Incoherent
    /// measurements are usable, but less trustworthy.
    pub is_coherent: bool,
}

impl CalibrationCurve {
    /// Evaluate the polynomial at `x` with Horner's method. The bounds are not
    /// checked.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn in_range(&self, x: f64) -> bool {
        (self.low_bound..=self.high_bound).contains(&x)
    }

    /// Evaluate the polynomial at `x`, but only if `x` is within the curve's
    /// bounds.
    pub fn eval_in_range(&self, x: f64) -> Option<f64> {
        if self.in_range(x) {
            Some(self.eval(x))
        } else {
            None
        }
    }
}

impl From<&MeasurementRow> for CalibrationCurve {
    fn from(row: &MeasurementRow) -> Self {
        let mut coefficients = row.coefficients;
        // Stored lowest degree first.
        coefficients.reverse();
        CalibrationCurve {
            coefficients,
            low_bound: row.low_bound,
            high_bound: row.high_bound,
            is_coherent: row.is_coherent,
        }
    }
}

/// The curves of both polarizations of one antenna.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaCurves {
    pub x: CalibrationCurve,
    pub y: CalibrationCurve,
}

impl AntennaCurves {
    pub fn get(&self, pol: Polarization) -> &CalibrationCurve {
        match pol {
            Polarization::X => &self.x,
            Polarization::Y => &self.y,
        }
    }
}

/// Calibration curves keyed by antenna and polarization. Every antenna in the
/// set has both polarizations. Antennas are kept in the order they were
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationSet(IndexMap<AntennaId, AntennaCurves>);

impl CalibrationSet {
    pub fn get(&self, antenna: &AntennaId, pol: Polarization) -> Option<&CalibrationCurve> {
        self.0.get(antenna).map(|c| c.get(pol))
    }

    pub fn antenna(&self, antenna: &AntennaId) -> Option<&AntennaCurves> {
        self.0.get(antenna)
    }

    pub fn contains(&self, antenna: &AntennaId) -> bool {
        self.0.contains_key(antenna)
    }

    /// The number of antennas.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn antennas(&self) -> impl Iterator<Item = &AntennaId> {
        self.0.keys()
    }

    /// Iterate over antennas and their pair of curves.
    pub fn iter(&self) -> impl Iterator<Item = (&AntennaId, &AntennaCurves)> {
        self.0.iter()
    }

    /// Iterate over every (antenna, polarization) pair and its curve.
    pub fn iter_pols(
        &self,
    ) -> impl Iterator<Item = ((&AntennaId, Polarization), &CalibrationCurve)> {
        self.0.iter().flat_map(|(a, c)| {
            [
                ((a, Polarization::X), &c.x),
                ((a, Polarization::Y), &c.y),
            ]
        })
    }

    fn bounds<F: Fn(&CalibrationCurve) -> f64>(
        &self,
        f: F,
    ) -> IndexMap<(AntennaId, Polarization), f64> {
        self.iter_pols()
            .map(|((a, pol), c)| ((a.clone(), pol), f(c)))
            .collect()
    }
}

/// The result of a calibration resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCalibration {
    /// The antenna that unmeasured antennas took their curves from.
    pub default_antenna: AntennaId,

    /// The requested antennas that had no measurements, and so were given the
    /// default antenna's curves.
    pub filled_from_default: Vec<AntennaId>,

    pub curves: CalibrationSet,
}

impl ResolvedCalibration {
    /// The lower bound of every curve.
    pub fn lower_bounds(&self) -> IndexMap<(AntennaId, Polarization), f64> {
        self.curves.bounds(|c| c.low_bound)
    }

    /// The upper bound of every curve.
    pub fn upper_bounds(&self) -> IndexMap<(AntennaId, Polarization), f64> {
        self.curves.bounds(|c| c.high_bound)
    }

    pub fn was_filled(&self, antenna: &AntennaId) -> bool {
        self.filled_from_default.contains(antenna)
    }
}

/// Curves as they come out of the store; either polarization may be absent.
#[derive(Debug, Default)]
struct PartialCurves {
    x: Option<CalibrationCurve>,
    y: Option<CalibrationCurve>,
}

impl PartialCurves {
    fn complete(self, antenna: &AntennaId) -> Result<AntennaCurves, CalibrationError> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Ok(AntennaCurves { x, y }),
            (None, _) => Err(CalibrationError::MissingPolarization {
                antenna: antenna.clone(),
                pol: Polarization::X,
            }),
            (_, None) => Err(CalibrationError::MissingPolarization {
                antenna: antenna.clone(),
                pol: Polarization::Y,
            }),
        }
    }
}

/// Group store rows by antenna and polarization. If a key appears more than
/// once, the later row wins. Incoherent measurements are warned about.
fn group_rows(rows: Vec<MeasurementRow>) -> IndexMap<AntennaId, PartialCurves> {
    let mut grouped: IndexMap<AntennaId, PartialCurves> = IndexMap::new();
    for row in rows {
        if !row.is_coherent {
            warn!(
                "Antenna {}{}'s part {} is marked as having an uncertain measurement",
                row.antenna, row.polarization, row.part_serial
            );
        }
        let curve = CalibrationCurve::from(&row);
        let entry = grouped.entry(row.antenna).or_default();
        let slot = match row.polarization {
            Polarization::X => &mut entry.x,
            Polarization::Y => &mut entry.y,
        };
        if slot.is_some() {
            debug!(
                "Part {} replaces an earlier {} measurement",
                row.part_serial, row.polarization
            );
        }
        *slot = Some(curve);
    }
    grouped
}

/// Get the curves of the default antenna with a query of its own.
fn query_default(
    conn: &mut dyn StoreConnection,
    default: &AntennaId,
) -> Result<AntennaCurves, CalibrationError> {
    info!("The default antenna isn't amongst the measured antennas; querying {default}");
    let rows = conn.query_cw(std::slice::from_ref(default))?;
    group_rows(rows)
        .shift_remove(default)
        .unwrap_or_default()
        .complete(default)
}

/// Get calibration curves for every requested antenna.
///
/// Antennas with measurements in the store get their own curves; both
/// polarizations must be present. Antennas without any measurements are given
/// the curves of the configured default antenna, which is queried separately
/// if it wasn't requested. Any missing polarization (including the default
/// antenna's) fails the whole resolution.
///
/// One store connection is used for the whole call, for at most two queries.
pub fn resolve_calibration<S: MeasurementStore + ?Sized>(
    store: &S,
    antennas: &Vec1<AntennaId>,
    config: &ArrayConfig,
) -> Result<ResolvedCalibration, CalibrationError> {
    config.check_antennas(antennas)?;
    let requested: IndexSet<&AntennaId> = antennas.iter().collect();
    let default = &config.default_antenna;

    info!("Connecting to the measurement store");
    let mut conn = store.connect()?;
    let query = requested.iter().map(|&a| a.clone()).collect::<Vec<_>>();
    let mut grouped = group_rows(conn.query_cw(&query)?);

    // Complete measured antennas in request order; the first antenna with a
    // missing polarization fails everything.
    let mut measured: IndexMap<&AntennaId, AntennaCurves> = IndexMap::new();
    for &antenna in &requested {
        if let Some(partial) = grouped.shift_remove(antenna) {
            measured.insert(antenna, partial.complete(antenna)?);
        }
    }
    if !grouped.is_empty() {
        debug!(
            "Ignoring rows for unrequested antennas: {}",
            grouped.keys().join(", ")
        );
    }

    let missing = requested
        .iter()
        .filter(|a| !measured.contains_key(**a))
        .map(|&a| a.clone())
        .collect::<Vec<_>>();

    let default_curves = if missing.is_empty() {
        None
    } else {
        info!("Missing measurements for antennas: {}", missing.iter().join(", "));
        match measured.get(default) {
            Some(c) => Some(c.clone()),
            None => Some(query_default(conn.as_mut(), default)?),
        }
    };
    drop(conn);

    let curves = requested
        .iter()
        .filter_map(|&antenna| {
            let c = measured.shift_remove(antenna).or_else(|| {
                warn!("Antenna {antenna} has no measurements; using the curves of default antenna {default}");
                default_curves.clone()
            })?;
            Some((antenna.clone(), c))
        })
        .collect();

    Ok(ResolvedCalibration {
        default_antenna: default.clone(),
        filled_from_default: missing,
        curves: CalibrationSet(curves),
    })
}
