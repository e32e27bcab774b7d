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

pub mod frontend;
mod menu;
mod study;
mod terminal;

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use flipdeck_core::Catalog;
use flipdeck_core::FlipPolicy;
use flipdeck_core::PositionError;
use flipdeck_core::PositionStore;
use flipdeck_core::ReviewSession;
use flipdeck_core::load_deck;

use crate::cmd::review::frontend::Frontend;
use crate::cmd::review::menu::choose_deck;
use crate::cmd::review::study::run_session;
use crate::cmd::review::terminal::TerminalFrontend;
use crate::error::Fallible;
use crate::error::fail;

pub struct ReviewConfig {
    /// Deck to open directly. Without it the user picks one from `directory`.
    pub deck: Option<PathBuf>,
    pub directory: PathBuf,
    pub deck_marker: String,
    pub position_file: PathBuf,
    pub policy: FlipPolicy,
    pub frame_interval: Duration,
}

/// Where the deck comes from, settled before the terminal is taken over.
enum DeckSource {
    Path(PathBuf),
    Catalog(Catalog),
}

impl DeckSource {
    fn resolve(config: &ReviewConfig) -> Fallible<Self> {
        match &config.deck {
            Some(path) => Ok(DeckSource::Path(path.clone())),
            None => {
                let catalog = Catalog::scan(&config.directory, &config.deck_marker)?;
                if catalog.is_empty() {
                    return fail(format!(
                        "no decks found in {} (looking for names containing {:?}).",
                        config.directory.display(),
                        config.deck_marker
                    ));
                }
                Ok(DeckSource::Catalog(catalog))
            }
        }
    }
}

pub fn start_review(config: ReviewConfig) -> Fallible<()> {
    let source = DeckSource::resolve(&config)?;
    let mut frontend = TerminalFrontend::new()?;
    review(&mut frontend, source, &config)
}

fn review<F: Frontend>(frontend: &mut F, source: DeckSource, config: &ReviewConfig) -> Fallible<()> {
    let path = match source {
        DeckSource::Path(path) => path,
        DeckSource::Catalog(catalog) => {
            match choose_deck(frontend, &catalog, config.frame_interval)? {
                Some(path) => path,
                None => return Ok(()),
            }
        }
    };
    let deck = load_deck(&path)?;

    let store = PositionStore::new(&config.position_file);
    let index = restore_position(&store)?;
    let mut session = ReviewSession::resume(deck, config.policy, index)?;

    run_session(frontend, &mut session, config.frame_interval)?;

    store.save(session.current_index())?;
    drop(session);
    Ok(())
}

/// A corrupt store is not fatal: we warn and start from the first card.
fn restore_position(store: &PositionStore) -> Fallible<usize> {
    match store.load() {
        Ok(index) => Ok(index),
        Err(e @ PositionError::Corrupt { .. }) => {
            log::warn!("{e}; starting from the first card");
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Relative position files live next to the decks.
pub fn resolve_position_file(directory: &Path, position_file: &Path) -> PathBuf {
    directory.join(position_file)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use flipdeck_core::InputEvent;
    use flipdeck_core::Key;
    use flipdeck_core::position::DEFAULT_POSITION_FILE;

    use super::*;
    use crate::helper::ScriptedFrontend;
    use crate::helper::create_tmp_directory;
    use crate::helper::press;

    const DECK: &str = "# capitals\nFrance\tParis\nPeru\tLima\nno tab\nJapan\tTokyo\n";

    fn make_config(directory: &Path, deck: Option<PathBuf>) -> ReviewConfig {
        ReviewConfig {
            deck,
            directory: directory.to_path_buf(),
            deck_marker: ".txt".to_string(),
            position_file: directory.join(DEFAULT_POSITION_FILE),
            policy: FlipPolicy::FlipAdvances,
            frame_interval: Duration::ZERO,
        }
    }

    fn run(frontend: &mut ScriptedFrontend, config: &ReviewConfig) -> Fallible<()> {
        let source = DeckSource::resolve(config)?;
        review(frontend, source, config)
    }

    #[test]
    fn test_explicit_deck_saves_position() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let deck = dir.join("capitals.txt");
        write(&deck, DECK)?;
        let config = make_config(&dir, Some(deck));
        let mut frontend = ScriptedFrontend::new(vec![vec![press(Key::Right)], vec![
            press(Key::Right),
            press(Key::Char('q')),
        ]]);
        run(&mut frontend, &config)?;
        assert_eq!(read_to_string(&config.position_file)?, "2");
        Ok(())
    }

    #[test]
    fn test_resumes_from_saved_position() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let deck = dir.join("capitals.txt");
        write(&deck, DECK)?;
        let config = make_config(&dir, Some(deck));
        write(&config.position_file, "1")?;
        let mut frontend = ScriptedFrontend::new(vec![vec![]]);
        run(&mut frontend, &config)?;
        assert_eq!(frontend.frames[0][2], "Peru");
        assert_eq!(frontend.frames[0][1], "2/3");
        assert_eq!(read_to_string(&config.position_file)?, "1");
        Ok(())
    }

    #[test]
    fn test_saved_position_past_end_is_clamped() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let deck = dir.join("capitals.txt");
        write(&deck, DECK)?;
        let config = make_config(&dir, Some(deck));
        write(&config.position_file, "40")?;
        let mut frontend = ScriptedFrontend::new(vec![vec![]]);
        run(&mut frontend, &config)?;
        assert_eq!(frontend.frames[0][2], "Japan");
        assert_eq!(read_to_string(&config.position_file)?, "2");
        Ok(())
    }

    #[test]
    fn test_corrupt_position_starts_at_first_card() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let deck = dir.join("capitals.txt");
        write(&deck, DECK)?;
        let config = make_config(&dir, Some(deck));
        write(&config.position_file, "garbage")?;
        let mut frontend = ScriptedFrontend::new(vec![vec![]]);
        run(&mut frontend, &config)?;
        assert_eq!(frontend.frames[0][2], "France");
        assert_eq!(read_to_string(&config.position_file)?, "0");
        Ok(())
    }

    #[test]
    fn test_select_then_review() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("capitals.txt"), DECK)?;
        write(dir.join("readme.md"), "not a deck")?;
        let config = make_config(&dir, None);
        let mut frontend = ScriptedFrontend::new(vec![
            vec![press(Key::Enter)],
            vec![],
            vec![press(Key::Space)],
            vec![InputEvent::Quit],
        ]);
        run(&mut frontend, &config)?;
        let centers: Vec<&str> = frontend
            .frames
            .iter()
            .filter_map(|frame| frame.get(2).map(String::as_str))
            .collect();
        assert_eq!(centers, vec!["France", "Paris"]);
        assert_eq!(read_to_string(&config.position_file)?, "0");
        Ok(())
    }

    #[test]
    fn test_cancelled_selection_saves_nothing() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("capitals.txt"), DECK)?;
        let config = make_config(&dir, None);
        let mut frontend = ScriptedFrontend::new(vec![vec![press(Key::Escape)]]);
        run(&mut frontend, &config)?;
        assert!(!config.position_file.exists());
        Ok(())
    }

    #[test]
    fn test_no_decks_found() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("readme.md"), "")?;
        let config = make_config(&dir, None);
        let result = DeckSource::resolve(&config);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_unreadable_deck() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let config = make_config(&dir, Some(dir.join("missing.txt")));
        let mut frontend = ScriptedFrontend::new(vec![]);
        let result = run(&mut frontend, &config);
        assert!(
            result
                .err()
                .is_some_and(|e| e.to_string().starts_with("error: couldn't open deck file"))
        );
        Ok(())
    }

    #[test]
    fn test_empty_deck() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let deck = dir.join("empty.txt");
        write(&deck, "# nothing here yet\n")?;
        let config = make_config(&dir, Some(deck));
        let mut frontend = ScriptedFrontend::new(vec![]);
        let result = run(&mut frontend, &config);
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: deck empty.txt has no cards".to_string())
        );
        assert!(!config.position_file.exists());
        Ok(())
    }

    #[test]
    fn test_resolve_position_file() {
        let directory = Path::new("/decks");
        assert_eq!(
            resolve_position_file(directory, Path::new(".pos")),
            PathBuf::from("/decks/.pos")
        );
        assert_eq!(
            resolve_position_file(directory, Path::new("/var/pos")),
            PathBuf::from("/var/pos")
        );
    }
}
