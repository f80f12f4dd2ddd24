use crate::token;
use crate::{Cursor, FunctionId};

/// An owned token stream.
///
/// Built by a tokenizer, read through [`Cursor`]s. The encoding helpers pick
/// the most compact literal form, the way the tokenizer of the legacy dialect
/// does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    bytes: Vec<u8>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already encoded bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        TokenBuffer { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A cursor positioned at the start of the stream.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes)
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn push_int(&mut self, value: i32) {
        match value {
            0 => self.bytes.push(token::INTZERO),
            1 => self.bytes.push(token::INTONE),
            2..=256 => {
                self.bytes.push(token::SMALLINT);
                self.bytes.push((value - 1) as u8);
            }
            _ => {
                self.bytes.push(token::INTCON);
                self.bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
    }

    /// Integers that fit in 32 bits use the shorter encodings.
    pub fn push_int64(&mut self, value: i64) {
        if let Ok(small) = i32::try_from(value) {
            self.push_int(small);
        } else {
            self.bytes.push(token::INT64CON);
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    pub fn push_float(&mut self, value: f64) {
        if value.to_bits() == 0.0f64.to_bits() {
            self.bytes.push(token::FLOATZERO);
        } else if value == 1.0 {
            self.bytes.push(token::FLOATONE);
        } else {
            self.bytes.push(token::FLOATCON);
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    pub fn push_string(&mut self, text: &[u8]) {
        self.bytes.push(token::STRINGCON);
        self.bytes
            .extend_from_slice(&(text.len() as u32).to_le_bytes());
        self.bytes.extend_from_slice(text);
    }

    /// Push a dynamic variable. `@%` and `A%`..`Z%` become static variables.
    pub fn push_variable(&mut self, name: &[u8]) {
        if let Some(index) = static_index(name) {
            self.bytes.push(token::STATICVAR);
            self.bytes.push(index);
        } else {
            self.push_named(token::XVAR, name);
        }
    }

    /// Push an array reference. The opening parenthesis is implied.
    pub fn push_array(&mut self, name: &[u8]) {
        self.push_named(token::ARRAYVAR, name);
    }

    pub fn push_function(&mut self, id: FunctionId) {
        self.bytes.push(token::FUNCTION);
        self.bytes.push(id as u8);
    }

    /// Terminate the stream with [`token::EOL`].
    pub fn finish(&mut self) {
        self.bytes.push(token::EOL);
    }

    fn push_named(&mut self, marker: u8, name: &[u8]) {
        // Names are bounded by the tokenizer; longer ones are cut at 255 bytes.
        let name = &name[..name.len().min(usize::from(u8::MAX))];
        self.bytes.push(marker);
        self.bytes.push(name.len() as u8);
        self.bytes.extend_from_slice(name);
    }
}

/// Index of a static integer variable, 0 for `@%` and 1..=26 for `A%`..`Z%`.
pub(crate) fn static_index(name: &[u8]) -> Option<u8> {
    match name {
        [b'@', b'%'] => Some(0),
        [letter @ b'A'..=b'Z', b'%'] => Some(letter - b'A' + 1),
        _ => None,
    }
}
