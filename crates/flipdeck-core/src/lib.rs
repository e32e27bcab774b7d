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

//! flipdeck-core: the non-rendering half of flipdeck.
//!
//! - Parsing tab-separated deck files
//! - Discovering deck files in a directory
//! - The deck menu and review session state machines
//! - Persisting the last-viewed card between runs

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod parser;
pub mod position;
pub mod selection;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogEntry};
pub use config::Config;
pub use error::{ErrorReport, Fallible, fail};
pub use input::{InputEvent, Key, ReviewCommand, SelectionCommand};
pub use parser::{DeckError, ParsedDeck, load_deck, load_deck_report, parse_deck_content};
pub use position::{PositionError, PositionStore};
pub use selection::{SelectionState, Selector};
pub use session::{Face, FlipPolicy, Flow, ReviewSession};
pub use types::card::{Card, Side};
pub use types::deck::Deck;
