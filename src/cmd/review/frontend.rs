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

use flipdeck_core::InputEvent;

use crate::error::Fallible;

/// Fixed palette. There is no theming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
    Yellow,
    Gray,
}

/// Where a piece of text is placed on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
    /// Centered on the bottom row.
    Bottom,
    /// Left-aligned on the given row, indented by two columns.
    Row(u16),
}

impl Anchor {
    /// The top-left cell at which `text_width` columns of text start on a
    /// screen of `width` by `height` cells.
    pub fn position(self, width: u16, height: u16, text_width: u16) -> (u16, u16) {
        let last_row = height.saturating_sub(1);
        match self {
            Anchor::TopLeft => (0, 0),
            Anchor::TopRight => (width.saturating_sub(text_width), 0),
            Anchor::Center => (width.saturating_sub(text_width) / 2, height / 2),
            Anchor::Bottom => (width.saturating_sub(text_width) / 2, last_row),
            Anchor::Row(row) => (2, row.min(last_row)),
        }
    }
}

/// The rendering and input side of the program. Domain state never lives
/// here: the frame loops read it from the session or the deck menu and
/// hand it over every frame.
pub trait Frontend {
    /// Return the events that arrived since the last call, without blocking.
    fn poll_events(&mut self) -> Fallible<Vec<InputEvent>>;

    /// Number of rows on screen.
    fn height(&self) -> Fallible<u16>;

    fn draw(&mut self, text: &str, fg: Color, bg: Color, anchor: Anchor) -> Fallible<()>;

    /// Show everything drawn since the previous frame.
    fn present_frame(&mut self) -> Fallible<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Anchor::Center.position(80, 24, 10), (35, 12));
    }

    #[test]
    fn test_text_wider_than_screen() {
        assert_eq!(Anchor::Center.position(10, 5, 40), (0, 2));
        assert_eq!(Anchor::TopRight.position(10, 5, 40), (0, 0));
    }

    #[test]
    fn test_edges() {
        assert_eq!(Anchor::TopRight.position(80, 24, 3), (77, 0));
        assert_eq!(Anchor::Bottom.position(80, 24, 20), (30, 23));
        assert_eq!(Anchor::Row(4).position(80, 24, 5), (2, 4));
        assert_eq!(Anchor::Row(99).position(80, 24, 5), (2, 23));
    }
}
