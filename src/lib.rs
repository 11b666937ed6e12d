// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Operational utilities for the Allen Telescope Array (ATA) radio telescope.

The core is [`resolve_calibration`], which gets the calibration polynomials of
antennas from a measurement store and substitutes the default antenna's
polynomials for antennas without measurements. Ephemeris tables that swivel
the antennas are generated in [`ephem`].
 */

pub mod antenna;
pub mod calibration;
mod cli;
pub mod config;
pub mod constants;
pub mod ephem;
pub mod io;
pub mod store;

// Re-exports.
pub use antenna::{AntennaId, Polarization};
pub use calibration::{
    resolve_calibration, AntennaCurves, CalibrationCurve, CalibrationError, CalibrationSet,
    ResolvedCalibration,
};
pub use cli::{AtaTools, AtaToolsError};
pub use config::ArrayConfig;
pub use store::{MeasurementStore, StoreConnection, StoreError, TableFileStore};
