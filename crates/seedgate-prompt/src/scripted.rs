//! Prompt that replays a fixed key sequence
//!
//! Runs the real session and renderer, writing frames to an in-memory buffer
//! instead of the terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use futures::stream;

use crate::render::LineRenderer;
use crate::session::ConfirmSession;
use crate::terminal::drive;
use crate::{Prompt, PromptError};

#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    keys: Vec<KeyEvent>,
    calls: usize,
    prefills: Vec<String>,
    frames: Vec<u8>,
}

impl ScriptedPrompt {
    pub fn new(keys: Vec<KeyEvent>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Accept the pre-filled value unchanged.
    pub fn accept() -> Self {
        Self::new(vec![KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)])
    }

    /// Press Ctrl-C.
    pub fn interrupt() -> Self {
        Self::new(vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)])
    }

    /// Clear up to `max_len` characters, type `text`, then press Enter.
    pub fn replace_with(text: &str, max_len: usize) -> Self {
        let mut keys = vec![KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE); max_len];
        keys.extend(
            text.chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
        keys.push(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        Self::new(keys)
    }

    /// Number of times `confirm` was called
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Values the prompt was pre-filled with, in call order
    pub fn prefills(&self) -> &[String] {
        &self.prefills
    }

    /// Everything rendered so far
    pub fn frames(&self) -> String {
        String::from_utf8_lossy(&self.frames).into_owned()
    }
}

impl Prompt for ScriptedPrompt {
    async fn confirm(&mut self, prefill: &str, max_len: usize) -> Result<String, PromptError> {
        self.calls += 1;
        self.prefills.push(prefill.to_string());

        let session = ConfirmSession::new(prefill, max_len);
        let renderer = LineRenderer::new("");
        renderer.draw(&mut self.frames, session.buffer())?;

        let events = stream::iter(self.keys.clone().into_iter().map(|k| Ok(Event::Key(k))));
        drive(session, &renderer, events, &mut self.frames).await
    }
}
