//! String storage for evaluation.
//!
//! Two flavours reach the stack. A [`TempString`] is produced by evaluation
//! and owned by whoever holds it; dropping it releases the buffer. A
//! [`StrRef`] is the contents of a variable or array element and has no
//! release or mutation operations; changing it requires copying it into a
//! temporary first ([`StringOperand::into_temp`]).

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::errors::{string_too_long, EvalResult};

/// Longest string the dialect allows.
pub const MAXSTRING: usize = 65536;

/// Allocator for temporary strings.
///
/// Clones share one ledger of live temporaries, which lets tests assert that
/// every exit path of a handler released what it allocated.
#[derive(Clone, Debug, Default)]
pub struct StringArena {
    live: Rc<Cell<usize>>,
}

impl StringArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-filled temporary of `len` bytes. Zero is a valid length.
    pub fn allocate(&self, len: usize) -> EvalResult<TempString> {
        if len > MAXSTRING {
            return Err(string_too_long());
        }
        Ok(self.adopt(vec![0; len]))
    }

    /// A temporary holding a copy of `bytes`.
    pub fn copy_from(&self, bytes: &[u8]) -> EvalResult<TempString> {
        if bytes.len() > MAXSTRING {
            return Err(string_too_long());
        }
        Ok(self.adopt(bytes.to_vec()))
    }

    /// Take ownership of an already built buffer.
    pub fn from_vec(&self, bytes: Vec<u8>) -> EvalResult<TempString> {
        if bytes.len() > MAXSTRING {
            return Err(string_too_long());
        }
        Ok(self.adopt(bytes))
    }

    /// Number of temporaries allocated here and not yet dropped.
    pub fn live_temporaries(&self) -> usize {
        self.live.get()
    }

    fn adopt(&self, bytes: Vec<u8>) -> TempString {
        self.live.set(self.live.get() + 1);
        TempString {
            bytes,
            live: Rc::clone(&self.live),
        }
    }
}

/// An owned temporary string.
///
/// Not `Clone`: a temporary has exactly one owner. Its buffer is released
/// when it is dropped, on success and error paths alike.
pub struct TempString {
    bytes: Vec<u8>,
    live: Rc<Cell<usize>>,
}

impl TempString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// In-place access for handlers that rewrite a temporary they own.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    /// Drop the first `count` bytes.
    pub fn drop_front(&mut self, count: usize) {
        self.bytes.drain(..count.min(self.bytes.len()));
    }

    /// Append, failing once the result would exceed [`MAXSTRING`].
    pub fn push_bytes(&mut self, more: &[u8]) -> EvalResult<()> {
        if self.bytes.len() + more.len() > MAXSTRING {
            return Err(string_too_long());
        }
        self.bytes.extend_from_slice(more);
        Ok(())
    }

    /// Release the temporary and keep its bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl Drop for TempString {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

impl PartialEq for TempString {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl fmt::Debug for TempString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TempString({:?})", String::from_utf8_lossy(&self.bytes))
    }
}

/// The contents of a string variable or array element.
///
/// Holds its own reference to the shared buffer, so reassigning the variable
/// while an expression is still using the old value cannot invalidate it.
#[derive(Clone, PartialEq, Eq)]
pub struct StrRef(Rc<[u8]>);

impl StrRef {
    pub fn new(bytes: Rc<[u8]>) -> Self {
        StrRef(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for StrRef {
    fn from(bytes: &[u8]) -> Self {
        StrRef(Rc::from(bytes))
    }
}

impl fmt::Debug for StrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrRef({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// A string popped off the stack, in either ownership flavour.
#[derive(Debug, PartialEq)]
pub enum StringOperand {
    Temp(TempString),
    Ref(StrRef),
}

impl StringOperand {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StringOperand::Temp(s) => s.as_bytes(),
            StringOperand::Ref(s) => s.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// A temporary that may be mutated: owned ones pass through, borrowed
    /// ones are copied.
    pub fn into_temp(self, arena: &StringArena) -> EvalResult<TempString> {
        match self {
            StringOperand::Temp(s) => Ok(s),
            StringOperand::Ref(s) => arena.copy_from(s.as_bytes()),
        }
    }

    /// Put the operand back on the stack in the flavour it came off in.
    pub fn into_value(self) -> crate::StackValue {
        match self {
            StringOperand::Temp(s) => crate::StackValue::StrTemp(s),
            StringOperand::Ref(s) => crate::StackValue::StrRef(s),
        }
    }
}

#[cfg(test)]
mod tests;
