//! Bounds-tracked cursor over the input text.
//!
//! The cursor advances through the input byte-by-byte. End of input is
//! represented, never signalled: [`Cursor::peek`] returns `None` once every
//! byte has been consumed, and no operation can move the position past the
//! end of the borrowed slice.
//!
//! All grammar-significant bytes in JSON scalars are ASCII, so the cursor
//! works on bytes and only hands out `&str` for lexemes it has validated.

/// Returns `true` for the four whitespace bytes of the JSON grammar.
#[inline]
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Read-only cursor over a borrowed input text.
///
/// The cursor is [`Copy`], so recognizers can take a snapshot of the
/// position before a lookahead scan and commit it afterwards.
///
/// # Invariant
///
/// `pos <= src.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

/// Size assertion: a fat pointer plus one position.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Advance the cursor by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// # Contract
    ///
    /// `n` must not exceed [`remaining()`](Self::remaining). Debug builds
    /// assert this; release builds stop at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            n <= self.remaining(),
            "advance by {n} overruns input ({} bytes remain)",
            self.remaining()
        );
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    /// The unconsumed tail of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.pos..]
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the input and on character boundaries.
    /// Recognizers only slice lexemes they have validated as ASCII.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            start <= end && end <= self.src.len(),
            "slice {start}..{end} outside input of length {}",
            self.src.len()
        );
        &self.src[start..end]
    }

    /// Extract the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let run = self.rest().iter().take_while(|&&b| pred(b)).count();
        self.pos += run;
    }

    /// Skip a run of JSON whitespace (space, tab, newline, carriage return).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

#[cfg(test)]
mod tests;
