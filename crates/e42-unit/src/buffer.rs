//! Growable text buffer used to build failure messages and reports.
//!
//! A [`DynamicBuffer`] tracks a logical capacity that always leaves one slot
//! free past the written text, and grows by the missing amount plus a fixed
//! increment rather than by doubling. It never shrinks.

use std::fmt;

/// Capacity of a freshly created buffer, in bytes.
pub const DEFAULT_CAPACITY: usize = 256;

/// Slack added on top of the required size whenever the buffer grows.
pub const GROWTH_INCREMENT: usize = 256;

/// Text appended in place of an absent string.
pub const ABSENT_MARKER: &str = "NULL";

/// Owned, append-mostly text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicBuffer {
    contents: String,
    capacity: usize,
}

impl Default for DynamicBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicBuffer {
    /// Create an empty buffer with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            contents: String::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Append `text`, or [`ABSENT_MARKER`] when `text` is `None`.
    pub fn append<'a>(&mut self, text: impl Into<Option<&'a str>>) {
        let text = text.into().unwrap_or(ABSENT_MARKER);
        self.reserve_for(text.len());
        self.contents.push_str(text);
    }

    /// Append a single character.
    pub fn append_char(&mut self, ch: char) {
        let mut scratch = [0_u8; 4];
        let text: &str = ch.encode_utf8(&mut scratch);
        self.append(text);
    }

    /// Render `args` and append the result.
    ///
    /// Usually reached through `write!`, since the buffer implements
    /// [`fmt::Write`].
    pub fn append_format(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(literal) => self.append(literal),
            None => {
                let rendered = fmt::format(args);
                self.append(rendered.as_str());
            }
        }
    }

    /// Insert `text` at byte offset `pos`, shifting the tail right.
    ///
    /// `pos` is clamped to the current length, and moved back to the closest
    /// character boundary when it would split a multi-byte character.
    pub fn insert<'a>(&mut self, text: impl Into<Option<&'a str>>, pos: usize) {
        let text = text.into().unwrap_or(ABSENT_MARKER);
        let mut pos = pos.min(self.contents.len());
        while !self.contents.is_char_boundary(pos) {
            pos -= 1;
        }
        self.reserve_for(text.len());
        self.contents.insert_str(pos, text);
    }

    /// Reallocate to exactly `new_capacity`. Only called from growth paths.
    pub(crate) fn resize(&mut self, new_capacity: usize) {
        if new_capacity > self.contents.capacity() {
            self.contents.reserve_exact(new_capacity - self.contents.len());
        }
        self.capacity = new_capacity;
    }

    fn reserve_for(&mut self, additional: usize) {
        let needed = self.contents.len() + additional + 1;
        if needed >= self.capacity {
            self.resize(needed + GROWTH_INCREMENT);
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.contents
    }

    /// Number of meaningful bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Logical capacity; always strictly greater than [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.contents
    }
}

impl From<&str> for DynamicBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.append(text);
        buffer
    }
}

impl fmt::Write for DynamicBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl fmt::Display for DynamicBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}
