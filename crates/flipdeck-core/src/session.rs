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

use std::borrow::Cow;

use crate::error::Fallible;
use crate::error::fail;
use crate::input::ReviewCommand;
use crate::types::card::Card;
use crate::types::card::Side;
use crate::types::deck::Deck;

/// What pressing flip does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipPolicy {
    /// The first flip shows the back; the second flips back to the front and
    /// moves to the next card (except on the last card).
    FlipAdvances,
    /// Flip only turns the card over.
    FlipOnly,
}

/// Whether the frame loop should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What to display for the current card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face<'a> {
    /// Raw bytes of the side facing up.
    pub text: &'a [u8],
    pub side: Side,
    /// 1-based, e.g. `3/10`.
    pub progress: String,
}

impl<'a> Face<'a> {
    /// The face text for display, with invalid UTF-8 replaced by U+FFFD.
    pub fn display_text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }
}

/// A pass through one deck.
///
/// Invariant: `current_index < deck.len()`, and the deck is never empty.
#[derive(Debug)]
pub struct ReviewSession {
    deck: Deck,
    current_index: usize,
    flipped: bool,
    pending_flip_advance: bool,
    policy: FlipPolicy,
}

impl ReviewSession {
    pub fn new(deck: Deck, policy: FlipPolicy) -> Fallible<Self> {
        Self::resume(deck, policy, 0)
    }

    /// Start at `index`, clamped to the last card if the deck has shrunk
    /// since the position was saved.
    pub fn resume(deck: Deck, policy: FlipPolicy, index: usize) -> Fallible<Self> {
        if deck.is_empty() {
            return fail(format!("deck {} has no cards", deck.name()));
        }
        let last = deck.len() - 1;
        if index > last {
            log::warn!(
                "Saved position {} is past the end of {} ({} cards), starting at the last card",
                index + 1,
                deck.name(),
                deck.len()
            );
        }
        Ok(Self {
            current_index: index.min(last),
            deck,
            flipped: false,
            pending_flip_advance: false,
            policy,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn pending_flip_advance(&self) -> bool {
        self.pending_flip_advance
    }

    fn last_index(&self) -> usize {
        self.deck.len() - 1
    }

    pub fn current_card(&self) -> &Card {
        &self.deck.cards()[self.current_index]
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
        if self.policy == FlipPolicy::FlipOnly {
            return;
        }
        if self.pending_flip_advance && self.current_index < self.last_index() {
            self.current_index += 1;
            self.pending_flip_advance = false;
        } else {
            self.pending_flip_advance = true;
        }
    }

    pub fn prev(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.reset_flip();
    }

    pub fn next(&mut self) {
        if self.current_index < self.last_index() {
            self.current_index += 1;
        }
        self.reset_flip();
    }

    fn reset_flip(&mut self) {
        self.flipped = false;
        self.pending_flip_advance = false;
    }

    /// Apply a command. `Quit` leaves the state untouched; saving the
    /// position is up to the caller.
    pub fn apply(&mut self, command: ReviewCommand) -> Flow {
        match command {
            ReviewCommand::ToggleFlip => self.toggle_flip(),
            ReviewCommand::Prev => self.prev(),
            ReviewCommand::Next => self.next(),
            ReviewCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn side(&self) -> Side {
        if self.flipped { Side::Back } else { Side::Front }
    }

    pub fn progress(&self) -> String {
        format!("{}/{}", self.current_index + 1, self.deck.len())
    }

    pub fn current_face(&self) -> Face<'_> {
        let side = self.side();
        Face {
            text: self.current_card().side(side),
            side,
            progress: self.progress(),
        }
    }
}
