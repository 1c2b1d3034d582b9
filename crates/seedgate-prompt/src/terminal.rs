//! Terminal driver
//!
//! Runs a [`ConfirmSession`] against a stream of terminal events on the
//! caller's task. Each event is handled and rendered to completion before the
//! next one is polled.
//!
//! When stdin is not a terminal (piped or redirected input) there is no raw
//! mode to enter, so one line is read instead.

use crossterm::event::{Event, EventStream};
use crossterm::terminal;
use futures::{Stream, StreamExt};
use std::io::{self, BufRead, IsTerminal, Write};
use std::pin::pin;

use crate::render::LineRenderer;
use crate::session::{ConfirmSession, Effect, InputEvent};
use crate::{Prompt, PromptError};

/// Raw mode for as long as the guard lives.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Drive `session` from `events` until it is confirmed.
///
/// Non-key events (resize, focus, paste) are skipped. The stream ending
/// before Enter is an error.
pub async fn drive<S, W>(
    mut session: ConfirmSession,
    renderer: &LineRenderer,
    events: S,
    out: &mut W,
) -> Result<String, PromptError>
where
    S: Stream<Item = io::Result<Event>>,
    W: Write,
{
    let mut events = pin!(events);

    while let Some(event) = events.next().await {
        let Event::Key(key) = event? else {
            continue;
        };

        match session.handle(InputEvent::from_key(&key)) {
            Effect::Redraw => renderer.redraw(out, session.buffer())?,
            Effect::MoveCursor => renderer.move_cursor(out, session.buffer())?,
            Effect::Nothing => {}
            Effect::Done(value) => {
                renderer.finish(out)?;
                return Ok(value);
            }
            Effect::Interrupted => {
                renderer.finish(out)?;
                return Err(PromptError::Interrupted);
            }
        }
    }

    Err(PromptError::EndOfInput)
}

/// Read one submitted line from a non-interactive `reader`.
///
/// The label is written to `out` first. The line is trimmed and cut to
/// `max_len` characters, the same width the edit buffer allows.
pub fn read_line<R, W>(
    label: &str,
    max_len: usize,
    reader: &mut R,
    out: &mut W,
) -> Result<String, PromptError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::EndOfInput);
    }
    writeln!(out)?;
    Ok(line.trim().chars().take(max_len).collect())
}

/// Interactive prompt on the controlling terminal
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    label: String,
}

impl TerminalPrompt {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new("Enter OTP to continue: ")
    }
}

impl Prompt for TerminalPrompt {
    async fn confirm(&mut self, prefill: &str, max_len: usize) -> Result<String, PromptError> {
        let mut stdout = io::stdout();
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            log::debug!("stdin is not a terminal, reading one line");
            return read_line(&self.label, max_len, &mut stdin.lock(), &mut stdout);
        }

        let session = ConfirmSession::new(prefill, max_len);
        let renderer = LineRenderer::new(&self.label);

        // Dropped on every exit path, including errors
        let _raw = RawModeGuard::enable()?;
        renderer.draw(&mut stdout, session.buffer())?;

        drive(session, &renderer, EventStream::new(), &mut stdout).await
    }
}
