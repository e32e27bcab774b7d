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

use std::collections::VecDeque;
use std::mem::take;
use std::path::PathBuf;

use flipdeck_core::InputEvent;
use flipdeck_core::Key;
use tempfile::tempdir;

use crate::cmd::review::frontend::Anchor;
use crate::cmd::review::frontend::Color;
use crate::cmd::review::frontend::Frontend;
use crate::error::Fallible;

/// Create a temporary directory that outlives the test.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

pub fn press(key: Key) -> InputEvent {
    InputEvent::KeyPress(key)
}

/// A [`Frontend`] that replays a fixed list of event batches, one per frame,
/// and records the text of every frame. Once the script runs out it reports
/// `Quit`, so loops under test always terminate.
pub struct ScriptedFrontend {
    script: VecDeque<Vec<InputEvent>>,
    pending: Vec<(String, Color)>,
    /// The text of each presented frame, in draw order.
    pub frames: Vec<Vec<String>>,
    backgrounds: Vec<Vec<Color>>,
    height: u16,
}

impl ScriptedFrontend {
    pub fn new(script: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: script.into(),
            pending: Vec::new(),
            frames: Vec::new(),
            backgrounds: Vec::new(),
            height: 24,
        }
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    /// Text drawn on a white background in the last frame.
    pub fn highlighted_rows(&self) -> Vec<String> {
        match (self.frames.last(), self.backgrounds.last()) {
            (Some(texts), Some(backgrounds)) => texts
                .iter()
                .zip(backgrounds)
                .filter(|(_, bg)| **bg == Color::White)
                .map(|(text, _)| text.clone())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn poll_events(&mut self) -> Fallible<Vec<InputEvent>> {
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }

    fn height(&self) -> Fallible<u16> {
        Ok(self.height)
    }

    fn draw(&mut self, text: &str, _fg: Color, bg: Color, _anchor: Anchor) -> Fallible<()> {
        self.pending.push((text.to_string(), bg));
        Ok(())
    }

    fn present_frame(&mut self) -> Fallible<()> {
        let (texts, backgrounds): (Vec<String>, Vec<Color>) =
            take(&mut self.pending).into_iter().unzip();
        self.frames.push(texts);
        self.backgrounds.push(backgrounds);
        Ok(())
    }
}
