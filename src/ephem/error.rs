// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EphemError {
    #[error("An ephemeris needs at least one step")]
    NoSteps,

    #[error("The ephemeris time span must be a finite, non-negative number of seconds; got {0}")]
    BadTimeSpan(f64),

    #[error("The ephemeris time {0} s is too far from the epoch to hold in nanoseconds; is it in seconds?")]
    TimeOutOfRange(f64),

    #[error("The ephemeris {name} must be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Couldn't get the current time: {0}")]
    Clock(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
