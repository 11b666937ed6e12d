// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all ata-tools-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::cal_polys::CalPolysPlotError;
use crate::{
    antenna::AntennaError,
    calibration::CalibrationError,
    config::ConfigError,
    ephem::EphemError,
    io::TextFormatError,
    store::StoreError,
};

/// The *only* publicly visible error from ata-tools. Most messages carry a
/// hint on how to fix the problem.
#[derive(Error, Debug)]
pub enum AtaToolsError {
    /// An error related to antenna names.
    #[error("{0}\n\nAntennas are given as a comma-separated list, e.g. \"1a,ant2b,3c\"")]
    Antenna(String),

    /// An error related to resolving calibration curves.
    #[error("{0}\n\nEvery measured antenna (and the default antenna, when it's needed) must have both x and y continuous-wave measurements")]
    Calibration(String),

    /// An error related to the measurement store.
    #[error("{0}\n\nThe measurement table needs 'feed_parts' (antenna, part_serial) and 'measurements' (part_serial, polarization, type, is_coherent, low_bound, high_bound, p0..p5)")]
    Store(String),

    /// An error related to ephemeris generation.
    #[error("{0}")]
    Ephemeris(String),

    /// An error related to the array configuration.
    #[error("{0}\n\nThe array configuration needs 'default_antenna' and a non-empty 'valid_antennas' list")]
    Config(String),

    /// An error related to structured text files.
    #[error("{0}")]
    FileFormat(String),

    /// An error related to plotting.
    #[error("{0}")]
    Plot(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<AntennaError> for AtaToolsError {
    fn from(e: AntennaError) -> Self {
        Self::Antenna(e.to_string())
    }
}

impl From<CalibrationError> for AtaToolsError {
    fn from(e: CalibrationError) -> Self {
        match e {
            CalibrationError::InvalidAntenna(e) => Self::from(e),
            CalibrationError::MissingPolarization { .. } => Self::Calibration(e.to_string()),
            CalibrationError::Store(e) => Self::from(e),
        }
    }
}

impl From<StoreError> for AtaToolsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Connect(_) | StoreError::Query(_) => Self::Store(e.to_string()),
            // IO problems aren't about the table's layout.
            StoreError::Table(TextFormatError::IO(_)) => Self::Generic(e.to_string()),
            StoreError::Table(_) => Self::Store(e.to_string()),
        }
    }
}

impl From<EphemError> for AtaToolsError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::NoSteps
            | EphemError::BadTimeSpan(_)
            | EphemError::NonFinite { .. }
            | EphemError::TimeOutOfRange(_)
            | EphemError::Clock(_) => Self::Ephemeris(e.to_string()),
            EphemError::IO(e) => Self::from(e),
        }
    }
}

impl From<ConfigError> for AtaToolsError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::DefaultNotValid { .. } | ConfigError::File(TextFormatError::Decode { .. }) => {
                Self::Config(e.to_string())
            }
            ConfigError::File(e) => Self::from(e),
        }
    }
}

impl From<TextFormatError> for AtaToolsError {
    fn from(e: TextFormatError) -> Self {
        match e {
            TextFormatError::IO(e) => Self::from(e),
            _ => Self::FileFormat(e.to_string()),
        }
    }
}

impl From<CalPolysPlotError> for AtaToolsError {
    fn from(e: CalPolysPlotError) -> Self {
        match e {
            CalPolysPlotError::IO(e) => Self::from(e),
            _ => Self::Plot(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AtaToolsError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<log::SetLoggerError> for AtaToolsError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(format!("Couldn't set up logging: {e}"))
    }
}
