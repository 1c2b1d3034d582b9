//! Single-line edit buffer with a logical cursor

/// Line content capped at `max_len` characters, with a cursor in
/// `0..=content.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    content: Vec<char>,
    cursor: usize,
    max_len: usize,
}

impl EditBuffer {
    /// Pre-fill with `seed` (truncated to `max_len`), cursor at the end.
    pub fn new(seed: &str, max_len: usize) -> Self {
        let content: Vec<char> = seed.chars().take(max_len).collect();
        let cursor = content.len();
        Self {
            content,
            cursor,
            max_len,
        }
    }

    pub fn content(&self) -> String {
        self.content.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.content.len() >= self.max_len
    }

    /// Insert at the cursor. Returns `false` when the buffer is full.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor. Returns `false` at column 0.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);
        true
    }

    /// Returns `false` if already at the start.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns `false` if already at the end.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Content right-padded with spaces to `max_len`, so a redraw erases
    /// whatever a longer previous value left behind.
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.content(), width = self.max_len)
    }
}
