//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use bbc_value::{ValueStack, DEFAULT_STACK_LIMIT};

use super::{
    EvalOptions, Interpreter, LastError, MemoryLayout, Session, AT_PERCENT, STATIC_COUNT,
};
use crate::format::FormatWord;
use crate::host::{Console, FileIo, NullHost, Os, Sound, Tokenizer, VariableStore};
use crate::prng::Prng;
use crate::store::MemoryStore;
use crate::tokenizer::LexerTokenizer;

/// Builder for creating Interpreter instances.
///
/// Every collaborator has a default: variables live in an empty
/// [`MemoryStore`], `EVAL` tokenizes with [`LexerTokenizer`], and files,
/// screen, sound and OS are a [`NullHost`]. Without an explicit seed the
/// `RND` generator is seeded from the clock.
pub struct InterpreterBuilder {
    args: Vec<String>,
    format_word: FormatWord,
    options: EvalOptions,
    stack_limit: usize,
    seed: Option<i32>,
    load_path: String,
    memory: MemoryLayout,
    variables: Option<Box<dyn VariableStore>>,
    tokenizer: Option<Box<dyn Tokenizer>>,
    files: Option<Box<dyn FileIo>>,
    console: Option<Box<dyn Console>>,
    sound: Option<Box<dyn Sound>>,
    os: Option<Box<dyn Os>>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            args: vec![String::new()],
            format_word: FormatWord::PRINT_DEFAULT,
            options: EvalOptions::default(),
            stack_limit: DEFAULT_STACK_LIMIT,
            seed: None,
            load_path: String::new(),
            memory: MemoryLayout::default(),
            variables: None,
            tokenizer: None,
            files: None,
            console: None,
            sound: None,
            os: None,
        }
    }

    /// Program name followed by its arguments, as `ARGV$ 0`, `ARGV$ 1`, ...
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        if self.args.is_empty() {
            self.args.push(String::new());
        }
        self
    }

    /// Initial value of `@%`.
    #[must_use]
    pub fn format_word(mut self, word: FormatWord) -> Self {
        self.format_word = word;
        self
    }

    #[must_use]
    pub fn hex64(mut self, on: bool) -> Self {
        self.options.hex64 = on;
        self
    }

    #[must_use]
    pub fn int_uses_float(mut self, on: bool) -> Self {
        self.options.int_uses_float = on;
        self
    }

    #[must_use]
    pub fn pseudo_vars_unsigned(mut self, on: bool) -> Self {
        self.options.pseudo_vars_unsigned = on;
        self
    }

    #[must_use]
    pub fn cosmetic_checks(mut self, on: bool) -> Self {
        self.options.cosmetic_checks = on;
        self
    }

    /// Maximum depth of the value stack.
    #[must_use]
    pub fn stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = limit;
        self
    }

    /// Seed the `RND` generator as `RND(seed)` would.
    #[must_use]
    pub fn seed(mut self, seed: i32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Program and library search path reported by `FILEPATH$`.
    #[must_use]
    pub fn load_path(mut self, path: impl Into<String>) -> Self {
        self.load_path = path.into();
        self
    }

    #[must_use]
    pub fn memory(mut self, layout: MemoryLayout) -> Self {
        self.memory = layout;
        self
    }

    #[must_use]
    pub fn variables(mut self, store: impl VariableStore + 'static) -> Self {
        self.variables = Some(Box::new(store));
        self
    }

    #[must_use]
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    #[must_use]
    pub fn files(mut self, files: impl FileIo + 'static) -> Self {
        self.files = Some(Box::new(files));
        self
    }

    #[must_use]
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    #[must_use]
    pub fn sound(mut self, sound: impl Sound + 'static) -> Self {
        self.sound = Some(Box::new(sound));
        self
    }

    #[must_use]
    pub fn os(mut self, os: impl Os + 'static) -> Self {
        self.os = Some(Box::new(os));
        self
    }

    pub fn build(self) -> Interpreter {
        let mut statics = [0; STATIC_COUNT];
        statics[AT_PERCENT] = self.format_word.raw();
        let prng = self.seed.map_or_else(Prng::from_clock, Prng::seeded);
        tracing::debug!(seed = ?self.seed, "interpreter created");

        Interpreter {
            stack: ValueStack::with_limit(self.stack_limit),
            arena: bbc_value::StringArena::new(),
            prng,
            statics,
            options: self.options,
            last_error: LastError::default(),
            session: Session::default(),
            args: self.args,
            memory: self.memory,
            load_path: self.load_path,
            variables: self
                .variables
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
            tokenizer: self.tokenizer.unwrap_or_else(|| Box::new(LexerTokenizer)),
            files: self.files.unwrap_or_else(|| Box::new(NullHost::new())),
            console: self.console.unwrap_or_else(|| Box::new(NullHost::new())),
            sound: self.sound.unwrap_or_else(|| Box::new(NullHost::new())),
            os: self.os.unwrap_or_else(|| Box::new(NullHost::new())),
        }
    }
}
