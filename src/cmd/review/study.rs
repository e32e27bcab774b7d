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

use std::thread::sleep;
use std::time::Duration;

use flipdeck_core::Flow;
use flipdeck_core::ReviewCommand;
use flipdeck_core::ReviewSession;
use flipdeck_core::Side;

use crate::cmd::review::frontend::Anchor;
use crate::cmd::review::frontend::Color;
use crate::cmd::review::frontend::Frontend;
use crate::error::Fallible;

const STUDY_HINT: &str = "space: flip  left/right: previous/next  q: quit";

/// Run the review loop until the user quits.
pub fn run_session<F: Frontend>(
    frontend: &mut F,
    session: &mut ReviewSession,
    interval: Duration,
) -> Fallible<()> {
    loop {
        for event in frontend.poll_events()? {
            let Some(command) = ReviewCommand::from_event(event) else {
                continue;
            };
            if session.apply(command) == Flow::Quit {
                log::debug!("Quit at card {}", session.progress());
                return Ok(());
            }
        }
        draw_session(frontend, session)?;
        frontend.present_frame()?;
        sleep(interval);
    }
}

fn draw_session<F: Frontend>(frontend: &mut F, session: &ReviewSession) -> Fallible<()> {
    let face = session.current_face();
    let fg = match face.side {
        Side::Front => Color::White,
        Side::Back => Color::Yellow,
    };
    frontend.draw(session.deck().name(), Color::Gray, Color::Black, Anchor::TopLeft)?;
    frontend.draw(&face.progress, Color::Gray, Color::Black, Anchor::TopRight)?;
    frontend.draw(&face.display_text(), fg, Color::Black, Anchor::Center)?;
    frontend.draw(STUDY_HINT, Color::Gray, Color::Black, Anchor::Bottom)?;
    Ok(())
}
