use crate::token;

/// A read position inside a token stream.
///
/// Cursors are `Copy`: saving a position is taking a copy, restoring it is
/// assigning the copy back. Nested evaluation of a different stream simply
/// uses a different cursor. Reading past the end yields [`token::EOL`], and
/// operand reads that would run off the end yield `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current byte, without consuming it.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_nth(0)
    }

    #[inline]
    pub fn peek_nth(&self, n: usize) -> u8 {
        self.bytes.get(self.pos + n).copied().unwrap_or(token::EOL)
    }

    /// True at [`token::EOL`] or past the end of the stream.
    pub fn at_end(&self) -> bool {
        self.peek() == token::EOL
    }

    #[inline]
    pub fn bump(&mut self) {
        self.pos = (self.pos + 1).min(self.bytes.len());
    }

    /// Consume and return the current byte.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let byte = self.peek();
        self.bump();
        byte
    }

    /// Consume the current byte if it is `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == expected {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `n` operand bytes.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    pub fn read_i32(&mut self) -> Option<i32> {
        let raw = self.take(4)?;
        Some(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    pub fn read_i64(&mut self) -> Option<i64> {
        let raw: [u8; 8] = self.take(8)?.try_into().ok()?;
        Some(i64::from_le_bytes(raw))
    }

    pub fn read_f64(&mut self) -> Option<f64> {
        let raw: [u8; 8] = self.take(8)?.try_into().ok()?;
        Some(f64::from_le_bytes(raw))
    }

    /// Read a length-prefixed name (one length byte).
    pub fn read_name(&mut self) -> Option<&'a [u8]> {
        let len = self.read_u8()?;
        self.take(usize::from(len))
    }

    /// Read the body of a string literal (four length bytes).
    pub fn read_string(&mut self) -> Option<&'a [u8]> {
        let raw: [u8; 4] = self.take(4)?.try_into().ok()?;
        self.take(u32::from_le_bytes(raw) as usize)
    }
}

#[cfg(test)]
mod tests;
