// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CalPolysPlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("ata-tools was not compiled with the \"plotting\" feature.\nYou need to compile ata-tools from source with this feature to plot calibration curves.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Plots can only be written as PNG files; got '{file}'")]
    NotPng { file: String },

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Draw(#[from] super::plot::DrawError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
