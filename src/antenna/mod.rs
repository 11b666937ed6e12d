// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Antenna names and polarizations.
//!
//! Antennas are referred to by their short form (e.g. "3c"). Users are allowed
//! to give the long form ("ant3c"); [`parse_antennas`] normalises either into
//! short-form [`AntennaId`]s and checks them against the array's whitelist.

mod error;

pub use error::AntennaError;

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use vec1::Vec1;

use crate::config::ArrayConfig;

/// A short-form antenna name, e.g. "1c".
///
/// Constructing one does not check the name against the whitelist; that is
/// the job of [`ArrayConfig::check_antenna`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AntennaId(String);

impl AntennaId {
    pub fn new<S: Into<String>>(name: S) -> AntennaId {
        AntennaId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AntennaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AntennaId {
    fn from(s: &str) -> Self {
        AntennaId::new(s)
    }
}

/// One of the two orthogonal signal channels of an antenna feed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Polarization {
    #[strum(serialize = "x")]
    X,

    #[strum(serialize = "y")]
    Y,
}

/// Remove every occurrence of "ant" from a user-supplied antenna string, so
/// that long-form names ("ant1c") become short-form names ("1c").
pub fn clean_antenna_string(s: &str) -> String {
    s.replace("ant", "")
}

/// Split an already-cleaned, comma-separated antenna string and validate each
/// token against the whitelist. The first unknown token is reported.
pub fn split_antenna_string(
    s: &str,
    config: &ArrayConfig,
) -> Result<Vec1<AntennaId>, AntennaError> {
    if s.trim().is_empty() {
        return Err(AntennaError::Empty);
    }

    let antennas = s
        .split(',')
        .map(|token| config.check_antenna(token.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    trace!("Antennas from '{s}': {antennas:?}");
    // There was at least one token, because the string wasn't empty.
    Vec1::try_from_vec(antennas).map_err(|_| AntennaError::Empty)
}

/// Normalise a comma-separated list of antenna names (long and short forms may
/// be mixed). Returns the cleaned string along with the validated antennas.
///
/// # Examples
///
/// ```
/// # use ata_tools::{antenna::parse_antennas, ArrayConfig};
/// let (s, antennas) = parse_antennas("ant1a,2b", &ArrayConfig::default()).unwrap();
/// assert_eq!(s, "1a,2b");
/// assert_eq!(antennas.len(), 2);
/// ```
pub fn parse_antennas(
    arg: &str,
    config: &ArrayConfig,
) -> Result<(String, Vec1<AntennaId>), AntennaError> {
    let cleaned = clean_antenna_string(arg);
    let antennas = split_antenna_string(&cleaned, config)?;
    Ok((cleaned, antennas))
}
