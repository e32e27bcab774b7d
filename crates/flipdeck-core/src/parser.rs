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
use std::fs::read;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::types::card::Card;
use crate::types::deck::Deck;

/// The result of parsing a deck file.
#[derive(Debug, PartialEq)]
pub struct ParsedDeck {
    pub deck: Deck,
    /// 1-based numbers of non-blank lines that had no tab and were dropped.
    pub skipped_lines: Vec<usize>,
}

#[derive(Debug)]
pub enum DeckError {
    /// The deck file could not be opened or read.
    FileUnreadable { path: PathBuf, source: io::Error },
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::FileUnreadable { path, source } => {
                write!(f, "couldn't open deck file {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for DeckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DeckError::FileUnreadable { source, .. } => Some(source),
        }
    }
}

enum Line<'a> {
    /// A line starting with `#`.
    Comment,
    /// An empty line.
    Blank,
    /// A line like `front<TAB>back`.
    Card { front: &'a [u8], back: &'a [u8] },
    /// Any other line.
    Malformed,
}

impl<'a> Line<'a> {
    fn read(line: &'a [u8]) -> Self {
        if is_comment(line) {
            Line::Comment
        } else if let Some(tab) = line.iter().position(|b| *b == b'\t') {
            Line::Card {
                front: &line[..tab],
                back: &line[tab + 1..],
            }
        } else if line.is_empty() {
            Line::Blank
        } else {
            Line::Malformed
        }
    }
}

fn is_comment(line: &[u8]) -> bool {
    line.first() == Some(&b'#')
}

/// Split `bytes` into lines, dropping one trailing `\r` from each.
fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Parse the contents of a deck file.
///
/// Parsing never fails: comments, blank lines and lines without a tab are
/// dropped. Only the first tab splits; any further tabs belong to the back.
/// Card text is kept as raw bytes, so files in any encoding load.
pub fn parse_deck_content(deck_name: &str, bytes: &[u8]) -> ParsedDeck {
    let mut cards = Vec::new();
    let mut skipped_lines = Vec::new();
    for (line_num, line) in lines(bytes).enumerate() {
        match Line::read(line) {
            Line::Comment | Line::Blank => {}
            Line::Card { front, back } => cards.push(Card::new(front, back)),
            Line::Malformed => {
                log::debug!("{deck_name}:{}: no tab, skipping line", line_num + 1);
                skipped_lines.push(line_num + 1);
            }
        }
    }
    ParsedDeck {
        deck: Deck::new(deck_name, cards),
        skipped_lines,
    }
}

/// Read and parse the deck file at `path`, keeping the skipped-line report.
pub fn load_deck_report(path: &Path) -> Result<ParsedDeck, DeckError> {
    let bytes = read(path).map_err(|source| DeckError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_deck_content(&deck_name(path), &bytes);
    log::debug!(
        "Loaded {} cards from {} ({} lines skipped)",
        parsed.deck.len(),
        path.display(),
        parsed.skipped_lines.len()
    );
    Ok(parsed)
}

/// Read and parse the deck file at `path`.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    load_deck_report(path).map(|parsed| parsed.deck)
}

/// A deck is named after its file.
fn deck_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
