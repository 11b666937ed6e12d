// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array configuration: which antennas exist, and which antenna's calibration
//! stands in for antennas without their own measurements.
//!
//! The configuration is read-only once constructed. The built-in values come
//! from [`crate::constants`]; a TOML, JSON or YAML file may be used instead.

mod error;

pub use error::ConfigError;

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use vec1::Vec1;

use crate::{
    antenna::{AntennaError, AntennaId},
    constants::{DEFAULT_ANTENNA, VALID_ANTENNAS},
    io::read_text_file,
};

lazy_static::lazy_static! {
    /// The built-in array configuration.
    pub static ref BUILTIN_CONFIG: ArrayConfig = ArrayConfig::default();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// The antenna whose calibration is substituted for unmeasured antennas.
    pub default_antenna: AntennaId,

    /// Every antenna on the array, in short form.
    pub valid_antennas: Vec1<AntennaId>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        let mut valid_antennas = Vec1::new(AntennaId::new(VALID_ANTENNAS[0]));
        valid_antennas.extend(VALID_ANTENNAS[1..].iter().map(|&a| AntennaId::new(a)));
        ArrayConfig {
            default_antenna: AntennaId::new(DEFAULT_ANTENNA),
            valid_antennas,
        }
    }
}

impl ArrayConfig {
    /// Make a new configuration, checking that the default antenna is itself
    /// a valid antenna.
    pub fn new(
        default_antenna: AntennaId,
        valid_antennas: Vec1<AntennaId>,
    ) -> Result<ArrayConfig, ConfigError> {
        let config = ArrayConfig {
            default_antenna,
            valid_antennas,
        };
        config.verify()?;
        Ok(config)
    }

    /// Read a configuration from a file. The file type is determined by the
    /// extension.
    pub fn from_file(path: &Path) -> Result<ArrayConfig, ConfigError> {
        debug!("Reading the array configuration from {}", path.display());
        let config: ArrayConfig = read_text_file(path)?;
        config.verify()?;
        Ok(config)
    }

    fn verify(&self) -> Result<(), ConfigError> {
        if !self.is_valid(&self.default_antenna) {
            return Err(ConfigError::DefaultNotValid {
                antenna: self.default_antenna.to_string(),
            });
        }
        Ok(())
    }

    pub fn is_valid(&self, antenna: &AntennaId) -> bool {
        self.valid_antennas.contains(antenna)
    }

    /// Turn a short-form antenna name into an [`AntennaId`], if it's on the
    /// whitelist.
    pub fn check_antenna(&self, name: &str) -> Result<AntennaId, AntennaError> {
        let antenna = AntennaId::new(name);
        if self.is_valid(&antenna) {
            Ok(antenna)
        } else {
            debug!("Antenna '{name}' is not on the whitelist");
            Err(AntennaError::InvalidAntenna {
                name: name.to_string(),
            })
        }
    }

    /// Check that all of the antennas are on the whitelist. The first
    /// offending antenna is reported.
    pub fn check_antennas<'a, I>(&self, antennas: I) -> Result<(), AntennaError>
    where
        I: IntoIterator<Item = &'a AntennaId>,
    {
        match antennas.into_iter().find(|a| !self.is_valid(a)) {
            Some(a) => Err(AntennaError::InvalidAntenna {
                name: a.to_string(),
            }),
            None => Ok(()),
        }
    }
}
