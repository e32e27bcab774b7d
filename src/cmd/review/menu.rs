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

use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use flipdeck_core::Catalog;
use flipdeck_core::SelectionCommand;
use flipdeck_core::Selector;

use crate::cmd::review::frontend::Anchor;
use crate::cmd::review::frontend::Color;
use crate::cmd::review::frontend::Frontend;
use crate::error::Fallible;
use crate::error::fail;

const MENU_TITLE: &str = "Choose a deck";
const MENU_HINT: &str = "up/down: move  enter: open  q: quit";

/// Let the user pick a deck from `catalog`. Returns `None` if they back out.
pub fn choose_deck<F: Frontend>(
    frontend: &mut F,
    catalog: &Catalog,
    interval: Duration,
) -> Fallible<Option<PathBuf>> {
    let Some(mut selector) = Selector::new(catalog) else {
        return fail("no decks found.");
    };
    while !selector.is_finished() {
        for event in frontend.poll_events()? {
            if let Some(command) = SelectionCommand::from_event(event) {
                selector.apply(command);
            }
            if selector.is_finished() {
                break;
            }
        }
        if selector.is_finished() {
            break;
        }
        draw_menu(frontend, &selector)?;
        frontend.present_frame()?;
        sleep(interval);
    }
    let choice = selector.confirmed().map(|entry| entry.path().to_path_buf());
    match &choice {
        Some(path) => log::debug!("Selected deck {}", path.display()),
        None => log::debug!("Deck selection cancelled"),
    }
    Ok(choice)
}

/// Rows left for entries between the title (plus a gap) and the hint.
fn visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(3)).max(1)
}

/// The first entry to show so that `highlighted` is within the window.
fn first_visible(highlighted: usize, visible: usize) -> usize {
    (highlighted + 1).saturating_sub(visible)
}

fn draw_menu<F: Frontend>(frontend: &mut F, selector: &Selector) -> Fallible<()> {
    let visible = visible_rows(frontend.height()?);
    let first = selector
        .highlighted()
        .map_or(0, |highlighted| first_visible(highlighted, visible));
    frontend.draw(MENU_TITLE, Color::White, Color::Black, Anchor::TopLeft)?;
    let window = selector.menu().skip(first).take(visible);
    for (row, (entry, highlighted)) in window.enumerate() {
        let (fg, bg) = if highlighted {
            (Color::Black, Color::White)
        } else {
            (Color::White, Color::Black)
        };
        let row = u16::try_from(row + 2).unwrap_or(u16::MAX);
        frontend.draw(entry.display_name(), fg, bg, Anchor::Row(row))?;
    }
    frontend.draw(MENU_HINT, Color::Gray, Color::Black, Anchor::Bottom)?;
    Ok(())
}
