// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{
    antenna::{AntennaError, AntennaId, Polarization},
    store::StoreError,
};

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error(transparent)]
    InvalidAntenna(#[from] AntennaError),

    #[error("Missing polarization for antenna {antenna}: there is no '{pol}' calibration curve")]
    MissingPolarization {
        antenna: AntennaId,
        pol: Polarization,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
