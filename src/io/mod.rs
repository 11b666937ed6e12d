// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! File stuff. Configuration, measurement-table snapshots and exported
//! calibration all use the same structured text formats, and the format of a
//! file is determined by its extension.

mod error;

pub use error::*;

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};
use serde::{de::DeserializeOwned, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::cli::Warn;

lazy_static::lazy_static! {
    pub static ref TEXT_FORMATS_COMMA_SEPARATED: String = TextFormat::iter().join(", ");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum TextFormat {
    #[strum(serialize = "toml")]
    Toml,

    #[strum(serialize = "json")]
    Json,

    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
}

impl TextFormat {
    /// Get the format of a file from its extension (case insensitive).
    pub fn from_path(path: &Path) -> Result<TextFormat, TextFormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref().map(TextFormat::from_str) {
            Some(Ok(f)) => Ok(f),
            _ => Err(TextFormatError::UnsupportedExt {
                file: path.display().to_string(),
            }),
        }
    }

    pub fn deserialise<T: DeserializeOwned>(self, contents: &str) -> Result<T, TextFormatError> {
        let t = match self {
            TextFormat::Toml => toml::from_str(contents)?,
            TextFormat::Json => serde_json::from_str(contents)?,
            TextFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(t)
    }

    pub fn serialise<T: Serialize>(self, value: &T) -> Result<String, TextFormatError> {
        let s = match self {
            TextFormat::Toml => toml::to_string_pretty(value)?,
            TextFormat::Json => serde_json::to_string_pretty(value)?,
            TextFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(s)
    }
}

/// Read a structured text file into `T`.
pub fn read_text_file<T: DeserializeOwned>(path: &Path) -> Result<T, TextFormatError> {
    let format = TextFormat::from_path(path)?;
    debug!("Parsing {format} file {}", path.display());
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    format.deserialise(&contents).map_err(|e| e.in_file(path))
}

/// Write `value` into a structured text file, its format chosen by the file's
/// extension.
pub fn write_text_file<T: Serialize>(value: &T, path: &Path) -> Result<(), TextFormatError> {
    let format = TextFormat::from_path(path)?;
    let s = format.serialise(value)?;
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(s.as_bytes())?;
    f.flush()?;
    Ok(())
}

/// Check that a file can be written to before doing any expensive work. Any
/// missing parent directories are created. If the file already exists, a
/// warning is queued for the user.
pub(crate) fn can_write_to_file(file: &Path) -> Result<(), std::io::Error> {
    trace!("Testing whether we can write to {}", file.display());

    if let Some(p) = file.parent() {
        if !p.as_os_str().is_empty() && !p.exists() {
            std::fs::DirBuilder::new().recursive(true).create(p)?;
        }
    }

    if file.exists() {
        if std::fs::metadata(file)?.permissions().readonly() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("'{}' is read only", file.display()),
            ));
        }
        format!("Will overwrite the existing file '{}'", file.display()).warn();
    }

    Ok(())
}
