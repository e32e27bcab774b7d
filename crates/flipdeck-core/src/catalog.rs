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

use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::Fallible;

/// The marker a file name must contain to be offered as a deck.
pub const DEFAULT_DECK_MARKER: &str = ".txt";

/// A deck file found by [`Catalog::scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    display_name: String,
    path: PathBuf,
}

impl CatalogEntry {
    pub fn new(display_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            display_name: display_name.into(),
            path,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The deck files available in a directory, in enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// List the immediate children of `directory` whose name contains
    /// `marker` anywhere (not only as a suffix). Directories, and symlinks
    /// to directories, are never candidates. The order is whatever the
    /// directory listing yields.
    pub fn scan(directory: &Path, marker: &str) -> Fallible<Self> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry?;
            // `Path::is_dir` follows symlinks, unlike `DirEntry::file_type`.
            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.contains(marker) {
                entries.push(CatalogEntry::new(name, entry.into_path()));
            }
        }
        log::debug!(
            "Found {} decks in {} matching {marker:?}",
            entries.len(),
            directory.display()
        );
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
