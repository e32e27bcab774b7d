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

use flipdeck_core::ParsedDeck;
use flipdeck_core::load_deck_report;

use crate::error::Fallible;

/// Report how a deck file parses.
pub fn check_deck(path: &Path) -> Fallible<()> {
    let parsed = load_deck_report(path)?;
    print!("{}", check_report(&parsed));
    Ok(())
}

fn check_report(parsed: &ParsedDeck) -> String {
    let count = parsed.deck.len();
    let noun = if count == 1 { "card" } else { "cards" };
    let mut report = format!("{}: {count} {noun}\n", parsed.deck.name());
    for line_num in &parsed.skipped_lines {
        report.push_str(&format!("  line {line_num}: no tab, skipped\n"));
    }
    if parsed.deck.is_empty() {
        report.push_str("  warning: the deck has no cards and cannot be reviewed\n");
    }
    report
}
