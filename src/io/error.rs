// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextFormatError {
    #[error("File '{file}' doesn't have a recognised file extension! Valid extensions are: {}", *super::TEXT_FORMATS_COMMA_SEPARATED)]
    UnsupportedExt { file: String },

    #[error("Couldn't decode {file}:\n{err}")]
    Decode {
        file: String,
        #[source]
        err: Box<TextFormatError>,
    },

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl TextFormatError {
    /// Attach the name of the file being decoded to this error.
    pub(super) fn in_file(self, path: &Path) -> TextFormatError {
        TextFormatError::Decode {
            file: path.display().to_string(),
            err: Box::new(self),
        }
    }
}
