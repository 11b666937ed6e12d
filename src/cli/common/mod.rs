// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. The `cal-polys` and
//! `cal-polys-plot` subcommands both resolve calibration curves, so they share
//! the same input arguments.

mod printers;
#[cfg(test)]
mod tests;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::path::PathBuf;

use clap::Args;
use itertools::Itertools;
use log::debug;
use vec1::Vec1;

use super::AtaToolsError;
use crate::{
    antenna::{parse_antennas, AntennaId},
    config::ArrayConfig,
    io::{TextFormat, TEXT_FORMATS_COMMA_SEPARATED},
    store::TableFileStore,
};

lazy_static::lazy_static! {
    pub(super) static ref TABLE_HELP: String =
        format!("A snapshot of the feed-part and measurement tables. Supported formats: {}", *TEXT_FORMATS_COMMA_SEPARATED);

    pub(super) static ref CAL_OUTPUT_HELP: String =
        format!("Write the resolved calibration curves to this file. Supported formats: {}", *TEXT_FORMATS_COMMA_SEPARATED);
}

#[derive(Args, Debug, Clone)]
pub(super) struct CalInputArgs {
    /// The antennas to get calibration curves for, comma separated. Short
    /// ("1a") and long ("ant1a") forms may be mixed.
    #[clap(name = "ANTENNAS")]
    pub(super) antennas: String,

    #[clap(short, long, help = TABLE_HELP.as_str(), parse(from_os_str))]
    pub(super) table: PathBuf,
}

impl CalInputArgs {
    /// Validate the antennas and the measurement table's file type.
    pub(super) fn parse(
        self,
        config: &ArrayConfig,
    ) -> Result<(Vec1<AntennaId>, TableFileStore), AtaToolsError> {
        let CalInputArgs { antennas, table } = self;

        let (cleaned, antennas) = parse_antennas(&antennas, config)?;
        debug!("Antenna string after cleaning: {cleaned}");
        TextFormat::from_path(&table)?;
        let store = TableFileStore::new(table);
        store.check()?;

        let mut printer = InfoPrinter::new("Calibration input".into());
        printer.push_line(format!("Antennas: {}", antennas.iter().join(",")).into());
        printer.push_line(format!("Measurement table: {}", store.path().display()).into());
        printer.push_line(format!("Default antenna: {}", config.default_antenna).into());
        printer.display();

        Ok((antennas, store))
    }
}
