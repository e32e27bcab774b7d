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

use crate::catalog::Catalog;
use crate::catalog::CatalogEntry;
use crate::input::SelectionCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState<'c> {
    /// The menu is open with one entry highlighted.
    Browsing { highlighted: usize },
    /// The user picked an entry.
    Confirmed(&'c CatalogEntry),
    /// The user backed out without picking.
    Cancelled,
}

/// Keyboard-driven choice of one catalog entry.
///
/// The highlight wraps around at both ends. `Confirmed` and `Cancelled` are
/// terminal: once reached, further commands are ignored.
pub struct Selector<'c> {
    catalog: &'c Catalog,
    state: SelectionState<'c>,
}

impl<'c> Selector<'c> {
    /// Returns `None` for an empty catalog, since there is nothing to
    /// highlight.
    pub fn new(catalog: &'c Catalog) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        Some(Self {
            catalog,
            state: SelectionState::Browsing { highlighted: 0 },
        })
    }

    pub fn state(&self) -> SelectionState<'c> {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, SelectionState::Browsing { .. })
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self.state {
            SelectionState::Browsing { highlighted } => Some(highlighted),
            _ => None,
        }
    }

    pub fn confirmed(&self) -> Option<&'c CatalogEntry> {
        match self.state {
            SelectionState::Confirmed(entry) => Some(entry),
            _ => None,
        }
    }

    /// Every catalog entry, paired with whether it is highlighted.
    pub fn menu(&self) -> impl Iterator<Item = (&'c CatalogEntry, bool)> + '_ {
        let highlighted = self.highlighted();
        self.catalog
            .entries()
            .iter()
            .enumerate()
            .map(move |(index, entry)| (entry, highlighted == Some(index)))
    }

    pub fn apply(&mut self, command: SelectionCommand) {
        let SelectionState::Browsing { highlighted } = self.state else {
            return;
        };
        let n = self.catalog.len();
        self.state = match command {
            SelectionCommand::MoveUp => SelectionState::Browsing {
                highlighted: (highlighted + n - 1) % n,
            },
            SelectionCommand::MoveDown => SelectionState::Browsing {
                highlighted: (highlighted + 1) % n,
            },
            SelectionCommand::Confirm => match self.catalog.get(highlighted) {
                Some(entry) => SelectionState::Confirmed(entry),
                None => SelectionState::Cancelled,
            },
            SelectionCommand::Cancel => SelectionState::Cancelled,
        };
    }
}
