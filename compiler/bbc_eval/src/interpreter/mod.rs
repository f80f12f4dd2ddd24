//! Interpreter state and the top-level entry points.
//!
//! An [`Interpreter`] owns everything one running program needs while it
//! evaluates expressions: the value stack, the string arena, the `RND`
//! generator, the static integer variables `@%` and `A%`..`Z%`, the option
//! flags and the collaborators that stand in for the rest of the system.
//! There is no global state; two interpreters never share anything.
//!
//! The expression grammar lives in [`crate::expression`], the built-in
//! functions in [`crate::functions`].

mod builder;

pub use builder::InterpreterBuilder;

use bbc_ir::Cursor;
use bbc_value::errors::syntax_error;
use bbc_value::{EvalError, EvalResult, StringArena, ValueStack};

use crate::format::FormatWord;
use crate::host::{Console, FileIo, Os, Sound, Tokenizer, VariableStore};
use crate::prng::Prng;

/// Number of static integer variables: `@%` then `A%` to `Z%`.
pub const STATIC_COUNT: usize = 27;

/// Index of `@%` among the static variables.
pub const AT_PERCENT: usize = 0;

/// Behaviour switches of the dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// `STR$~` formats 64 bits instead of 32.
    pub hex64: bool,
    /// `INT` of a float keeps a float result when it does not fit an integer.
    pub int_uses_float: bool,
    /// `HIMEM`, `LOMEM`, `PAGE`, `TOP` and `END` never read back negative.
    pub pseudo_vars_unsigned: bool,
    /// `EVAL` rejects anything left over after its expression.
    pub cosmetic_checks: bool,
}

/// Addresses reported by the memory pseudo-variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryLayout {
    pub page: i64,
    pub top: i64,
    pub lomem: i64,
    /// Top of the variables, reported by `END`.
    pub vartop: i64,
    pub himem: i64,
}

impl Default for MemoryLayout {
    fn default() -> Self {
        MemoryLayout {
            page: 0x8000,
            top: 0x8002,
            lomem: 0x8002,
            vartop: 0x8002,
            himem: 0x0010_8000,
        }
    }
}

/// The error `ERR`, `ERL` and `REPORT$` describe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastError {
    pub number: i32,
    pub line: i32,
    pub message: String,
}

/// State the statement layer updates between expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Line being executed, recorded against errors for `ERL`.
    pub line: i32,
    /// Characters printed on the current output line (`COUNT`).
    pub print_count: i32,
    /// `WIDTH`.
    pub print_width: i32,
    /// `LISTO`.
    pub listo: i32,
    /// Result of the last OS command (`RETCODE`).
    pub retcode: i32,
    /// File receiving `TRACE` output, 0 for none.
    pub trace_handle: i32,
    /// Whether the interpreter exits when the program ends (`QUIT`).
    pub quit_at_end: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            line: 0,
            print_count: 0,
            print_width: 0,
            listo: 7,
            retcode: 0,
            trace_handle: 0,
            quit_at_end: false,
        }
    }
}

/// A BBC BASIC expression evaluator.
///
/// Create one with [`InterpreterBuilder`]. Evaluate token streams with
/// [`Interpreter::evaluate`], or source text with
/// [`Interpreter::evaluate_source`].
pub struct Interpreter {
    pub(crate) stack: ValueStack,
    pub(crate) arena: StringArena,
    pub(crate) prng: Prng,
    pub(crate) statics: [i32; STATIC_COUNT],
    pub(crate) options: EvalOptions,
    pub(crate) last_error: LastError,
    pub(crate) session: Session,
    /// Program name first, then its arguments.
    pub(crate) args: Vec<String>,
    pub(crate) memory: MemoryLayout,
    pub(crate) load_path: String,
    pub(crate) variables: Box<dyn VariableStore>,
    pub(crate) tokenizer: Box<dyn Tokenizer>,
    pub(crate) files: Box<dyn FileIo>,
    pub(crate) console: Box<dyn Console>,
    pub(crate) sound: Box<dyn Sound>,
    pub(crate) os: Box<dyn Os>,
}

impl Interpreter {
    /// Evaluate one tokenized expression and return its value.
    ///
    /// The expression must be followed by the end of the stream or a `:`.
    /// On error the stack is cut back to its depth on entry, releasing any
    /// temporaries, and the error is recorded for `ERR` and `REPORT$`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, tokens: &[u8]) -> EvalResult {
        let depth = self.stack.depth();
        let mut cur = Cursor::new(tokens);
        let result = self.expression(&mut cur).and_then(|()| {
            if cur.at_end() || cur.peek() == b':' {
                self.stack.pop()
            } else {
                Err(syntax_error())
            }
        });
        result.map_err(|err| {
            self.stack.truncate(depth);
            self.record_error(&err);
            err
        })
    }

    /// Tokenize `source` with the configured tokenizer and evaluate it.
    pub fn evaluate_source(&mut self, source: &str) -> EvalResult {
        let tokens = match self.tokenizer.tokenize(source.as_bytes()) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.record_error(&err);
                return Err(err);
            }
        };
        self.evaluate(tokens.as_bytes())
    }

    fn record_error(&mut self, err: &EvalError) {
        tracing::debug!(number = err.number(), %err, "evaluation failed");
        self.last_error = LastError {
            number: err.number(),
            line: self.session.line,
            message: err.message(),
        };
    }

    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    pub fn arena(&self) -> &StringArena {
        &self.arena
    }

    pub fn prng(&self) -> &Prng {
        &self.prng
    }

    pub fn prng_mut(&mut self) -> &mut Prng {
        &mut self.prng
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    pub fn last_error(&self) -> &LastError {
        &self.last_error
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// A static integer variable by index: 0 is `@%`, 1 to 26 are `A%` to
    /// `Z%`. Out-of-range indexes read as `None`.
    pub fn static_var(&self, index: usize) -> Option<i32> {
        self.statics.get(index).copied()
    }

    /// Assign a static integer variable. Out-of-range indexes are ignored.
    pub fn set_static_var(&mut self, index: usize, value: i32) {
        if let Some(slot) = self.statics.get_mut(index) {
            *slot = value;
        }
    }

    /// The `@%` format word.
    pub fn format_word(&self) -> FormatWord {
        FormatWord::new(self.statics[AT_PERCENT])
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("depth", &self.stack.depth())
            .field("prng", &self.prng)
            .field("options", &self.options)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
