// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AntennaError {
    #[error("Antenna '{name}' is not a valid antenna name")]
    InvalidAntenna { name: String },

    #[error("No antennas were specified")]
    Empty,
}
