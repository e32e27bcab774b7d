// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::DEFAULT_DECK_MARKER;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::position::DEFAULT_POSITION_FILE;
use crate::session::FlipPolicy;

/// The name of the optional configuration file in the working directory.
pub const CONFIG_FILE_NAME: &str = "flipdeck.toml";

/// Settings read from `flipdeck.toml`. Every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Substring a file name must contain to be listed as a deck.
    pub deck_marker: String,
    /// Where the last-viewed card index is kept.
    pub position_file: PathBuf,
    /// Whether a second flip moves on to the next card.
    pub flip_advances: bool,
    /// Sleep between frames, in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_marker: DEFAULT_DECK_MARKER.to_string(),
            position_file: PathBuf::from(DEFAULT_POSITION_FILE),
            flip_advances: true,
            frame_interval_ms: 16,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Fallible<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read the configuration at `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Fallible<Self> {
        match read_to_string(path) {
            Ok(text) => {
                log::debug!("Reading configuration from {}", path.display());
                Self::from_toml(&text).map_err(|e| {
                    ErrorReport::new(format!("{}: {}", path.display(), e.message()))
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn flip_policy(&self) -> FlipPolicy {
        if self.flip_advances {
            FlipPolicy::FlipAdvances
        } else {
            FlipPolicy::FlipOnly
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
