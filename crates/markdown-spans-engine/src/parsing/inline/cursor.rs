/// A cursor for scanning a span's text for literal delimiters.
///
/// Positions are byte offsets into `s`. Delimiters are ASCII, so every
/// position the cursor lands on through [`Cursor::find`] and
/// [`Cursor::bump_n`] with a delimiter length is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Text from the cursor to the end.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Absolute index of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.rest().find(pat).map(|off| self.i + off)
    }

    /// Text between the cursor and `end`.
    pub fn up_to(&self, end: usize) -> &'a str {
        &self.s[self.i..end]
    }

    /// Moves the cursor to `pos`.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos;
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
