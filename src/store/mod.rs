// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read-only access to the calibration measurement store.
//!
//! The store is a relational database with a measurement table (one row per
//! part, polarization and measurement type, holding the fitted polynomial) and
//! a part table (which antenna each part is installed on). The only query
//! needed is
//!
//! ```text
//! SELECT antenna, part_serial, polarization, is_coherent, low_bound, high_bound, p0..p5
//! FROM <measurement_table> JOIN <part_table> ON part_serial
//! WHERE type = 'cw' AND antenna IN (<requested set>)
//! ```
//!
//! which is expressed by [`StoreConnection::query_cw`]. [`MeasurementTables`]
//! is a snapshot of both tables that answers the same query, and
//! [`TableFileStore`] reads such a snapshot from disk every time a connection
//! is opened.

mod error;

pub use error::StoreError;

use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    antenna::{AntennaId, Polarization},
    constants::{CW_MEASUREMENT_TYPE, NUM_POLY_COEFFS},
    io::read_text_file,
};

/// One row of the measurement/part join.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub antenna: AntennaId,
    pub part_serial: String,
    pub polarization: Polarization,
    pub is_coherent: bool,
    pub low_bound: f64,
    pub high_bound: f64,
    /// The polynomial coefficients as stored, lowest degree first (p0..p5).
    pub coefficients: [f64; NUM_POLY_COEFFS],
}

/// Something that measurement-store connections can be opened on.
pub trait MeasurementStore {
    /// Open a connection. The connection is closed when it is dropped.
    fn connect(&self) -> Result<Box<dyn StoreConnection + '_>, StoreError>;
}

pub trait StoreConnection {
    /// Get all continuous-wave measurements for the parts installed on the
    /// given antennas.
    fn query_cw(&mut self, antennas: &[AntennaId]) -> Result<Vec<MeasurementRow>, StoreError>;
}

/// A row of the part table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPart {
    pub antenna: AntennaId,
    pub part_serial: String,
}

/// A row of the measurement table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub part_serial: String,
    pub polarization: Polarization,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_coherent: bool,
    pub low_bound: f64,
    pub high_bound: f64,
    pub p0: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
}

/// A snapshot of the part and measurement tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementTables {
    #[serde(default)]
    pub feed_parts: Vec<FeedPart>,

    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl MeasurementTables {
    /// Join the measurement table onto the part table, keeping only
    /// continuous-wave measurements of parts on the requested antennas. Rows
    /// come out in measurement-table order.
    pub fn join_cw(&self, antennas: &[AntennaId]) -> Vec<MeasurementRow> {
        let parts_by_serial = self
            .feed_parts
            .iter()
            .filter(|p| antennas.contains(&p.antenna))
            .map(|p| (p.part_serial.as_str(), p))
            .into_group_map();

        let rows = self
            .measurements
            .iter()
            .filter(|m| m.kind == CW_MEASUREMENT_TYPE)
            .flat_map(|m| {
                parts_by_serial
                    .get(m.part_serial.as_str())
                    .into_iter()
                    .flatten()
                    .map(move |p| MeasurementRow {
                        antenna: p.antenna.clone(),
                        part_serial: m.part_serial.clone(),
                        polarization: m.polarization,
                        is_coherent: m.is_coherent,
                        low_bound: m.low_bound,
                        high_bound: m.high_bound,
                        coefficients: [m.p0, m.p1, m.p2, m.p3, m.p4, m.p5],
                    })
            })
            .collect::<Vec<_>>();
        trace!(
            "cw query for [{}] matched {} rows",
            antennas.iter().join(", "),
            rows.len()
        );
        rows
    }
}

impl StoreConnection for &MeasurementTables {
    fn query_cw(&mut self, antennas: &[AntennaId]) -> Result<Vec<MeasurementRow>, StoreError> {
        Ok(self.join_cw(antennas))
    }
}

impl StoreConnection for MeasurementTables {
    fn query_cw(&mut self, antennas: &[AntennaId]) -> Result<Vec<MeasurementRow>, StoreError> {
        Ok(self.join_cw(antennas))
    }
}

impl MeasurementStore for MeasurementTables {
    fn connect(&self) -> Result<Box<dyn StoreConnection + '_>, StoreError> {
        Ok(Box::new(self))
    }
}

/// A measurement-table snapshot on disk (TOML, JSON or YAML). The file is
/// re-read for every connection, so each resolution sees the current state of
/// the file.
#[derive(Debug, Clone)]
pub struct TableFileStore {
    path: PathBuf,
}

impl TableFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> TableFileStore {
        TableFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that the snapshot file is there to be opened.
    pub fn check(&self) -> Result<(), StoreError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(StoreError::Connect(format!(
                "The measurement table '{}' doesn't exist",
                self.path.display()
            )))
        }
    }
}

impl MeasurementStore for TableFileStore {
    fn connect(&self) -> Result<Box<dyn StoreConnection + '_>, StoreError> {
        debug!("Opening measurement table {}", self.path.display());
        self.check()?;
        let tables: MeasurementTables = read_text_file(&self.path)?;
        debug!(
            "{} parts, {} measurements",
            tables.feed_parts.len(),
            tables.measurements.len()
        );
        Ok(Box::new(tables))
    }
}
