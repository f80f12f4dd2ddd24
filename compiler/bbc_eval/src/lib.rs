//! BBC Eval - expression evaluation for BBC BASIC.
//!
//! This crate evaluates tokenized BBC BASIC expressions and implements the
//! built-in functions they can call.
//!
//! # Architecture
//!
//! - [`Interpreter`]: owns the value stack, the string arena, the `RND`
//!   generator and the static integer variables
//! - `expression`: precedence-climbing evaluator driven by a
//!   [`bbc_ir::Cursor`]; reentrant through `EVAL` and array indexes
//! - `functions`: the dense table of built-ins indexed by
//!   [`bbc_ir::FunctionId`]
//! - [`host`]: traits for the collaborators outside the evaluator
//!   (variables, files, console, sound, OS) and a [`NullHost`] stand-in
//! - [`format`]: `STR$` and the `@%` format word
//! - [`prng`]: the 33-bit shift-register `RND` generator
//!
//! # Example
//!
//! ```
//! use bbc_eval::{InterpreterBuilder, StackValue};
//!
//! let mut interp = InterpreterBuilder::new().build();
//! let value = interp.evaluate_source("1 + 2 * 3").unwrap();
//! assert_eq!(value, StackValue::Int(7));
//! ```

mod expression;
pub mod format;
mod functions;
pub mod host;
pub mod interpreter;
mod operators;
pub mod prng;
mod store;
mod tokenizer;

pub use format::FormatWord;
pub use host::{Console, FileIo, NullHost, Os, Sound, Tokenizer, VariableStore};
pub use interpreter::{
    EvalOptions, Interpreter, InterpreterBuilder, LastError, MemoryLayout, Session,
};
pub use operators::{evaluate_binary, negate, BinaryOp};
pub use prng::Prng;
pub use store::MemoryStore;
pub use tokenizer::LexerTokenizer;

pub use bbc_value::{
    ArrayDescriptor, ArrayElements, ElementKind, ErrorKind, EvalError, EvalResult, Number,
    StackValue, StrRef, StringArena, TempString, BASFALSE, BASTRUE,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bbc_eval=debug` or
/// `RUST_LOG=bbc_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
