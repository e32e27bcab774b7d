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

use serde::Serialize;
use serde::Serializer;

/// A front/back pair.
///
/// Both sides are the raw bytes from the deck file: no trimming, no
/// re-encoding, and either side may be empty. Text is decoded only when it
/// is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    #[serde(serialize_with = "serialize_lossy")]
    front: Vec<u8>,
    #[serde(serialize_with = "serialize_lossy")]
    back: Vec<u8>,
}

/// Which side of a card is facing the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl Card {
    pub fn new(front: impl Into<Vec<u8>>, back: impl Into<Vec<u8>>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn side(&self, side: Side) -> &[u8] {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// The text of one side, with invalid UTF-8 replaced by U+FFFD.
    pub fn side_text(&self, side: Side) -> Cow<'_, str> {
        String::from_utf8_lossy(self.side(side))
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
