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

//! Input events and the commands they map to.

/// A key, as reported by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Backspace,
    Char(char),
}

/// An event polled from the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed, or the user interrupted the program.
    Quit,
    KeyPress(Key),
}

/// What a key does during a review session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewCommand {
    ToggleFlip,
    Prev,
    Next,
    Quit,
}

impl ReviewCommand {
    pub fn from_event(event: InputEvent) -> Option<Self> {
        match event {
            InputEvent::Quit => Some(ReviewCommand::Quit),
            InputEvent::KeyPress(key) => match key {
                Key::Space | Key::Up | Key::Down | Key::Char('f') => {
                    Some(ReviewCommand::ToggleFlip)
                }
                Key::Left | Key::Backspace | Key::Char('h') | Key::Char('p') => {
                    Some(ReviewCommand::Prev)
                }
                Key::Right | Key::Enter | Key::Char('l') | Key::Char('n') => {
                    Some(ReviewCommand::Next)
                }
                Key::Escape | Key::Char('q') => Some(ReviewCommand::Quit),
                Key::Char(_) => None,
            },
        }
    }
}

/// What a key does in the deck menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionCommand {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

impl SelectionCommand {
    pub fn from_event(event: InputEvent) -> Option<Self> {
        match event {
            InputEvent::Quit => Some(SelectionCommand::Cancel),
            InputEvent::KeyPress(key) => match key {
                Key::Up | Key::Char('k') => Some(SelectionCommand::MoveUp),
                Key::Down | Key::Char('j') => Some(SelectionCommand::MoveDown),
                Key::Enter | Key::Space => Some(SelectionCommand::Confirm),
                Key::Escape | Key::Char('q') => Some(SelectionCommand::Cancel),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(key: Key) -> Option<ReviewCommand> {
        ReviewCommand::from_event(InputEvent::KeyPress(key))
    }

    fn select(key: Key) -> Option<SelectionCommand> {
        SelectionCommand::from_event(InputEvent::KeyPress(key))
    }

    #[test]
    fn test_review_bindings() {
        assert_eq!(review(Key::Space), Some(ReviewCommand::ToggleFlip));
        assert_eq!(review(Key::Left), Some(ReviewCommand::Prev));
        assert_eq!(review(Key::Right), Some(ReviewCommand::Next));
        assert_eq!(review(Key::Escape), Some(ReviewCommand::Quit));
        assert_eq!(review(Key::Char('q')), Some(ReviewCommand::Quit));
        assert_eq!(review(Key::Char('x')), None);
    }

    #[test]
    fn test_quit_event() {
        assert_eq!(
            ReviewCommand::from_event(InputEvent::Quit),
            Some(ReviewCommand::Quit)
        );
        assert_eq!(
            SelectionCommand::from_event(InputEvent::Quit),
            Some(SelectionCommand::Cancel)
        );
    }

    #[test]
    fn test_selection_bindings() {
        assert_eq!(select(Key::Up), Some(SelectionCommand::MoveUp));
        assert_eq!(select(Key::Char('j')), Some(SelectionCommand::MoveDown));
        assert_eq!(select(Key::Enter), Some(SelectionCommand::Confirm));
        assert_eq!(select(Key::Escape), Some(SelectionCommand::Cancel));
        assert_eq!(select(Key::Left), None);
    }
}
