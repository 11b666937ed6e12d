// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::io::TextFormatError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Couldn't connect to the measurement store: {0}")]
    Connect(String),

    #[error("Measurement store query failed: {0}")]
    Query(String),

    #[error("Couldn't read the measurement table: {0}")]
    Table(#[from] TextFormatError),
}
