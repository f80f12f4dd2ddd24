//! BBC IR - the tokenized program representation.
//!
//! The evaluator never sees source text. It walks a byte stream in which
//! every keyword, operator and literal has already been replaced by a token:
//! - [`token`]: the byte vocabulary shared by tokenizer and evaluator
//! - [`FunctionId`]: the ordinal that follows the function marker byte
//! - [`TokenBuffer`]: an owned, encodable token stream
//! - [`Cursor`]: a copyable read position inside a token stream
//!
//! Multi-byte operands are little-endian.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod buffer;
mod cursor;
mod function;
pub mod token;

pub use buffer::TokenBuffer;
pub use cursor::Cursor;
pub use function::FunctionId;

#[cfg(target_pointer_width = "64")]
static_assert_size!(Cursor<'static>, 24);
