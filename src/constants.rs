// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

These are the built-in values of the array configuration; see
[`crate::config::ArrayConfig`] to override them at run time.
 */

/// The antenna whose calibration curves are substituted for any requested
/// antenna without its own measurements.
pub const DEFAULT_ANTENNA: &str = "1c";

/// Every antenna on the array, in short form.
pub const VALID_ANTENNAS: [&str; 42] = [
    "1a", "1b", "1c", "1d", "1e", "1f", "1g", "1h", "1j", "1k", //
    "2a", "2b", "2c", "2d", "2e", "2f", "2g", "2h", "2j", "2k", "2l", "2m", //
    "3c", "3d", "3e", "3f", "3g", "3h", "3j", "3l", //
    "4e", "4f", "4g", "4h", "4j", "4k", "4l", //
    "5b", "5c", "5e", "5g", "5h",
];

/// Only continuous-wave measurements produce calibration polynomials.
pub const CW_MEASUREMENT_TYPE: &str = "cw";

/// The number of polynomial coefficients stored per calibration curve (i.e.
/// the maximum degree is one less than this).
pub const NUM_POLY_COEFFS: usize = 6;

/// "ATA TAI" is Unix time plus this many seconds.
pub const ATA_TAI_OFFSET_S: f64 = 37.0;
