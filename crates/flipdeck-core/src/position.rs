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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;
use std::fs::write;
use std::io;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

/// The default file name of the position store.
pub const DEFAULT_POSITION_FILE: &str = ".flipdeck_position";

/// Remembers the last-viewed card index between runs.
///
/// The file holds a single non-negative decimal integer and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionStore {
    path: PathBuf,
}

/// Errors that can occur when loading or saving a position.
#[derive(Debug)]
pub enum PositionError {
    /// The file exists but could not be read.
    Unreadable { path: PathBuf, source: io::Error },
    /// The file does not contain a non-negative integer.
    Corrupt { path: PathBuf, contents: String },
    /// The file could not be written.
    Unwritable { path: PathBuf, source: io::Error },
}

impl Display for PositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionError::Unreadable { path, source } => {
                write!(f, "couldn't read position file {}: {}", path.display(), source)
            }
            PositionError::Corrupt { path, contents } => {
                write!(
                    f,
                    "position file {} does not contain a card index: {:?}",
                    path.display(),
                    contents
                )
            }
            PositionError::Unwritable { path, source } => {
                write!(f, "couldn't write position file {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for PositionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PositionError::Unreadable { source, .. } => Some(source),
            PositionError::Unwritable { source, .. } => Some(source),
            PositionError::Corrupt { .. } => None,
        }
    }
}

impl PositionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved index. A store that was never written yields `0`.
    pub fn load(&self) -> Result<usize, PositionError> {
        let contents = match read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No position file at {}", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(PositionError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        match contents.trim().parse::<usize>() {
            Ok(index) => {
                log::debug!("Restored position {index} from {}", self.path.display());
                Ok(index)
            }
            Err(_) => Err(PositionError::Corrupt {
                path: self.path.clone(),
                contents,
            }),
        }
    }

    /// Overwrite the store with `index`.
    pub fn save(&self, index: usize) -> Result<(), PositionError> {
        write(&self.path, index.to_string()).map_err(|source| PositionError::Unwritable {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved position {index} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_round_trip() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PositionStore::new(dir.path().join(DEFAULT_POSITION_FILE));
        store.save(7)?;
        assert_eq!(store.load()?, 7);
        Ok(())
    }

    #[test]
    fn test_never_saved() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PositionStore::new(dir.path().join(DEFAULT_POSITION_FILE));
        assert_eq!(store.load()?, 0);
        Ok(())
    }

    #[test]
    fn test_save_overwrites() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PositionStore::new(dir.path().join(DEFAULT_POSITION_FILE));
        store.save(123)?;
        store.save(4)?;
        assert_eq!(store.load()?, 4);
        assert_eq!(read_to_string(store.path())?, "4");
        Ok(())
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_POSITION_FILE);
        write(&path, " 12\n")?;
        assert_eq!(PositionStore::new(path).load()?, 12);
        Ok(())
    }

    #[test]
    fn test_corrupt() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_POSITION_FILE);
        for input in ["", "abc", "-3", "4x"] {
            write(&path, input)?;
            let result = PositionStore::new(path.clone()).load();
            assert!(
                matches!(result, Err(PositionError::Corrupt { ref contents, .. }) if contents == input),
                "expected corrupt error for {input:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_unwritable() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PositionStore::new(dir.path().join("missing").join("position"));
        assert!(matches!(
            store.save(1),
            Err(PositionError::Unwritable { .. })
        ));
        Ok(())
    }
}
