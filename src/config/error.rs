// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::io::TextFormatError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The default antenna '{antenna}' is not one of the valid antennas")]
    DefaultNotValid { antenna: String },

    #[error(transparent)]
    File(#[from] TextFormatError),
}
