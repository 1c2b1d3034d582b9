//! Seedgate Prompt
//!
//! A one-line, pre-filled, editable terminal prompt. The confirmation step
//! shows the current one-time code already typed in; the operator may edit
//! it (digits, backspace, left/right) and submits with Enter.
//!
//! # Layers
//!
//! - [`EditBuffer`]: content and cursor, no I/O
//! - [`ConfirmSession`]: `Editing → Confirmed` state machine over [`InputEvent`]s
//! - [`LineRenderer`]: fixed-width redraw through crossterm commands
//! - [`terminal::drive`]: async loop over a terminal event stream
//!
//! [`Prompt`] is the seam the session controller depends on. The terminal
//! implementation is [`TerminalPrompt`]; [`ScriptedPrompt`] replays key
//! events through the same state machine for tests.

pub mod buffer;
pub mod render;
pub mod scripted;
pub mod session;
pub mod terminal;

pub use buffer::EditBuffer;
pub use render::LineRenderer;
pub use scripted::ScriptedPrompt;
pub use session::{ConfirmSession, ConfirmState, Effect, InputEvent};
pub use terminal::{RawModeGuard, TerminalPrompt};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Interrupted by operator")]
    Interrupted,
    #[error("Input ended before confirmation")]
    EndOfInput,
}

/// Shows `prefill` for editing and returns the submitted value, trimmed.
#[allow(async_fn_in_trait)]
pub trait Prompt {
    async fn confirm(&mut self, prefill: &str, max_len: usize) -> Result<String, PromptError>;
}
