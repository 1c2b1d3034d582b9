//! Confirmation session state machine
//!
//! Feeds one [`InputEvent`] at a time into an [`EditBuffer`] and reports what
//! the display has to do. No terminal access happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::buffer::EditBuffer;

/// Keypress after translation from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(char),
    Backspace,
    Left,
    Right,
    Confirm,
    /// Ctrl-C. Raw mode swallows the signal, so it is surfaced explicitly.
    Interrupt,
    Ignored,
}

impl InputEvent {
    /// Translate a crossterm key event.
    ///
    /// Releases and anything held with Ctrl, Alt, Super, Hyper or Meta are
    /// ignored, except Ctrl-C.
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Self::Ignored;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Self::Interrupt;
        }

        let held = KeyModifiers::CONTROL
            | KeyModifiers::ALT
            | KeyModifiers::SUPER
            | KeyModifiers::HYPER
            | KeyModifiers::META;
        if key.modifiers.intersects(held) {
            return Self::Ignored;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Self::Digit(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Enter => Self::Confirm,
            _ => Self::Ignored,
        }
    }
}

/// What the display must do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Content changed: rewrite the whole line
    Redraw,
    /// Only the cursor moved
    MoveCursor,
    Nothing,
    /// Session confirmed with this trimmed value
    Done(String),
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmState {
    Editing,
    Confirmed(String),
}

/// One editing session over a pre-filled buffer
#[derive(Debug)]
pub struct ConfirmSession {
    buffer: EditBuffer,
    state: ConfirmState,
}

impl ConfirmSession {
    pub fn new(prefill: &str, max_len: usize) -> Self {
        Self {
            buffer: EditBuffer::new(prefill, max_len),
            state: ConfirmState::Editing,
        }
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, ConfirmState::Confirmed(_))
    }

    /// Apply one event. Once confirmed, every further event is a no-op.
    pub fn handle(&mut self, event: InputEvent) -> Effect {
        if self.is_confirmed() {
            return Effect::Nothing;
        }

        match event {
            InputEvent::Digit(c) => redraw_if(self.buffer.insert(c)),
            InputEvent::Backspace => redraw_if(self.buffer.backspace()),
            InputEvent::Left => move_if(self.buffer.move_left()),
            InputEvent::Right => move_if(self.buffer.move_right()),
            InputEvent::Confirm => {
                let value = self.buffer.content().trim().to_string();
                self.state = ConfirmState::Confirmed(value.clone());
                Effect::Done(value)
            }
            InputEvent::Interrupt => Effect::Interrupted,
            InputEvent::Ignored => Effect::Nothing,
        }
    }
}

fn redraw_if(changed: bool) -> Effect {
    if changed {
        Effect::Redraw
    } else {
        Effect::Nothing
    }
}

fn move_if(moved: bool) -> Effect {
    if moved {
        Effect::MoveCursor
    } else {
        Effect::Nothing
    }
}
