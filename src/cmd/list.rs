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

use flipdeck_core::Catalog;

use crate::error::Fallible;

/// Print the decks that would be offered for selection.
pub fn list_decks(directory: &Path, marker: &str) -> Fallible<()> {
    let catalog = Catalog::scan(directory, marker)?;
    print!("{}", format_catalog(&catalog));
    Ok(())
}

fn format_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No decks found.\n".to_string();
    }
    let mut output = String::new();
    for entry in catalog.entries() {
        output.push_str(entry.display_name());
        output.push('\n');
    }
    output
}
