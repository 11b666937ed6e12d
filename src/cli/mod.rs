// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `ata-tools`
//! subcommands are contained in modules.
//!
//! Only 3 things should be public in this module: `AtaTools`,
//! `AtaTools::run`, and `AtaToolsError`.

mod cal_polys;
mod common;
mod ephem;
mod error;

pub(crate) use common::Warn;
pub use error::AtaToolsError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

use crate::config::{ArrayConfig, BUILTIN_CONFIG};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Utilities for the Allen Telescope Array (ATA): antenna calibration polynomials and swivel ephemerides"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct AtaTools {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,

    /// An array configuration file (default antenna and valid antennas).
    /// Supported formats: toml, json, yaml. If not given, the built-in ATA
    /// configuration is used.
    #[clap(long, parse(from_os_str))]
    #[clap(global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "cal-poly")]
    #[clap(about = "Get the calibration polynomials of antennas. Antennas without measurements are given the default antenna's polynomials.")]
    CalPolys(cal_polys::CalPolysArgs),

    #[clap(alias = "plot-cal-polys")]
    #[clap(
        about = r#"Plot the calibration polynomials of antennas. Only available if compiled with the "plotting" feature."#
    )]
    CalPolysPlot(cal_polys::CalPolysPlotArgs),

    #[clap(about = "Write an ephemeris that swivels along azimuth at a fixed elevation.")]
    EphemAzSwivel(ephem::AzSwivelArgs),

    #[clap(about = "Write an ephemeris that swivels along elevation at a fixed azimuth.")]
    EphemElSwivel(ephem::ElSwivelArgs),
}

impl AtaTools {
    pub fn run(self) -> Result<(), AtaToolsError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            config,
        } = self.global_opts;
        setup_logging(verbosity)?;

        // Print the version of ata-tools and its build-time information.
        let sub_command = match &self.command {
            Command::CalPolys(_) => "cal-polys",
            Command::CalPolysPlot(_) => "cal-polys-plot",
            Command::EphemAzSwivel(_) => "ephem-az-swivel",
            Command::EphemElSwivel(_) => "ephem-el-swivel",
        };
        info!("ata-tools {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        let config = match config {
            Some(file) => ArrayConfig::from_file(&file)?,
            None => BUILTIN_CONFIG.clone(),
        };

        match self.command {
            Command::CalPolys(args) => args.run(&config, dry_run)?,
            Command::CalPolysPlot(args) => args.run(&config, dry_run)?,
            Command::EphemAzSwivel(args) => args.run(dry_run)?,
            Command::EphemElSwivel(args) => args.run(dry_run)?,
        }

        info!("ata-tools {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => info!("Compiled on git commit hash: {hash}{dirty}"),
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {hr}");
    }
    info!("            {BUILT_TIME_UTC}");
    info!("         with compiler {RUSTC_VERSION}");
    info!("");
}
