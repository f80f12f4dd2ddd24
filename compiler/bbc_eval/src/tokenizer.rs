//! [`Tokenizer`] backed by the `bbc_lexer` crate.

use bbc_ir::TokenBuffer;
use bbc_value::errors::syntax_error;
use bbc_value::EvalResult;

use crate::host::Tokenizer;

/// Tokenizes with [`bbc_lexer::tokenize`]. Source that is not valid UTF-8
/// is read lossily; every lexical error surfaces as a syntax error.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexerTokenizer;

impl Tokenizer for LexerTokenizer {
    fn tokenize(&self, source: &[u8]) -> EvalResult<TokenBuffer> {
        let text = String::from_utf8_lossy(source);
        bbc_lexer::tokenize(&text).map_err(|err| {
            tracing::debug!(%err, "EVAL source rejected");
            syntax_error()
        })
    }
}
