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

use std::io::Stdout;
use std::io::Write;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::Hide;
use crossterm::cursor::MoveTo;
use crossterm::cursor::Show;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Print;
use crossterm::style::ResetColor;
use crossterm::style::SetBackgroundColor;
use crossterm::style::SetForegroundColor;
use crossterm::terminal;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use flipdeck_core::InputEvent;
use flipdeck_core::Key;

use crate::cmd::review::frontend::Anchor;
use crate::cmd::review::frontend::Color;
use crate::cmd::review::frontend::Frontend;
use crate::error::Fallible;

struct DrawCall {
    text: String,
    fg: Color,
    bg: Color,
    anchor: Anchor,
}

/// A [`Frontend`] on the controlling terminal.
///
/// Raw mode and the alternate screen are entered on construction and left
/// on drop, so the terminal is restored on every exit path.
pub struct TerminalFrontend {
    stdout: Stdout,
    pending: Vec<DrawCall>,
}

impl TerminalFrontend {
    pub fn new() -> Fallible<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self {
            stdout,
            pending: Vec::new(),
        })
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Frontend for TerminalFrontend {
    fn poll_events(&mut self) -> Fallible<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = translate_key(key) {
                    events.push(input);
                }
            }
        }
        Ok(events)
    }

    fn height(&self) -> Fallible<u16> {
        let (_, height) = terminal::size()?;
        Ok(height)
    }

    fn draw(&mut self, text: &str, fg: Color, bg: Color, anchor: Anchor) -> Fallible<()> {
        self.pending.push(DrawCall {
            text: printable(text),
            fg,
            bg,
            anchor,
        });
        Ok(())
    }

    fn present_frame(&mut self) -> Fallible<()> {
        let (width, height) = terminal::size()?;
        queue!(self.stdout, ResetColor, Clear(ClearType::All))?;
        for call in self.pending.drain(..) {
            let text_width = u16::try_from(call.text.chars().count()).unwrap_or(u16::MAX);
            let (column, row) = call.anchor.position(width, height, text_width);
            queue!(
                self.stdout,
                MoveTo(column, row),
                SetForegroundColor(call.fg.into()),
                SetBackgroundColor(call.bg.into()),
                Print(&call.text),
                ResetColor
            )?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => style::Color::White,
            Color::Black => style::Color::Black,
            Color::Yellow => style::Color::Yellow,
            Color::Gray => style::Color::DarkGrey,
        }
    }
}

/// Replace control characters with spaces. In raw mode a tab or an escape
/// sequence from a deck file would move the cursor or restyle the screen.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(InputEvent::KeyPress(key))
}
