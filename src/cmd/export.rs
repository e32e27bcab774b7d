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

use std::fs::write;
use std::path::Path;

use flipdeck_core::load_deck;

use crate::error::Fallible;

/// Write a deck as JSON, to `output` or to stdout.
///
/// Card text that is not valid UTF-8 is exported with U+FFFD replacements.
pub fn export_deck(path: &Path, output: Option<&Path>) -> Fallible<()> {
    let deck = load_deck(path)?;
    let json = serde_json::to_string_pretty(&deck)?;
    match output {
        Some(output) => {
            write(output, json)?;
            log::info!("Exported {} cards to {}", deck.len(), output.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
