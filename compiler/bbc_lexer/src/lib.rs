//! Tokenizer for BBC BASIC expressions, built on logos.
//!
//! Turns a line of source into the byte stream the evaluator walks. Only the
//! expression subset of the language is recognised: literals, variables,
//! array references, operators and built-in functions. Anything after a `:`
//! is passed through as raw punctuation for the statement layer.

use bbc_ir::{token, TokenBuffer};
use logos::Logos;

mod keywords;
mod lex_error;

pub use lex_error::LexError;

use keywords::Keyword;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Decimal,

    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"&[0-9A-Fa-f]+")]
    Hex,

    #[regex(r"%[01]+")]
    Binary,

    #[regex(r#""([^"]|"")*""#)]
    Str,

    #[regex(r#""([^"]|"")*"#)]
    UnterminatedStr,

    /// Identifier or keyword, with its type suffix and an optional `(`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(%%|%|&|\$)?\(?")]
    Word,

    #[token("@%")]
    FormatVariable,

    #[token("<>")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,
    #[token(">>>")]
    ShiftRightLogical,

    #[regex(r"[-+*/^=<>(),#~$:]")]
    Punct,
}

/// Tokenize one line of expression source.
///
/// The returned buffer is terminated with [`token::EOL`].
pub fn tokenize(source: &str) -> Result<TokenBuffer, LexError> {
    let mut buf = TokenBuffer::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let text = lexer.slice();
        let offset = lexer.span().start;
        let Ok(raw) = raw else {
            let ch = text.chars().next().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter { offset, ch });
        };
        match raw {
            RawToken::Decimal => push_decimal(&mut buf, text)?,
            RawToken::Float => match text.parse::<f64>() {
                Ok(value) => buf.push_float(value),
                Err(_) => return Err(too_big(text)),
            },
            RawToken::Hex => push_radix(&mut buf, &text[1..], 16, text)?,
            RawToken::Binary => push_radix(&mut buf, &text[1..], 2, text)?,
            RawToken::Str => {
                let body = &text[1..text.len() - 1];
                buf.push_string(body.replace("\"\"", "\"").as_bytes());
            }
            RawToken::UnterminatedStr => return Err(LexError::UnterminatedString { offset }),
            RawToken::Word => push_word(&mut buf, text),
            RawToken::FormatVariable => buf.push_variable(b"@%"),
            RawToken::NotEqual => buf.push_byte(token::NE),
            RawToken::LessEqual => buf.push_byte(token::LE),
            RawToken::GreaterEqual => buf.push_byte(token::GE),
            RawToken::ShiftLeft => buf.push_byte(token::LSL),
            RawToken::ShiftRight => buf.push_byte(token::ASR),
            RawToken::ShiftRightLogical => buf.push_byte(token::LSR),
            RawToken::Punct => buf.push_byte(text.as_bytes()[0]),
        }
    }

    buf.finish();
    Ok(buf)
}

fn too_big(text: &str) -> LexError {
    LexError::NumberTooBig {
        text: text.to_owned(),
    }
}

/// Decimal constants are 32-bit when they fit, then 64-bit, then float.
fn push_decimal(buf: &mut TokenBuffer, text: &str) -> Result<(), LexError> {
    if let Ok(value) = text.parse::<i64>() {
        buf.push_int64(value);
        return Ok(());
    }
    match text.parse::<f64>() {
        Ok(value) => {
            buf.push_float(value);
            Ok(())
        }
        Err(_) => Err(too_big(text)),
    }
}

/// Hex and binary constants wrap into the signed range of their width:
/// `&FFFFFFFF` is -1, not 4294967295.
fn push_radix(buf: &mut TokenBuffer, digits: &str, radix: u32, text: &str) -> Result<(), LexError> {
    let value = u64::from_str_radix(digits, radix).map_err(|_| too_big(text))?;
    match u32::try_from(value) {
        Ok(narrow) => buf.push_int(narrow as i32),
        Err(_) => buf.push_int64(value as i64),
    }
    Ok(())
}

fn push_word(buf: &mut TokenBuffer, word: &str) {
    if let Some(keyword) = keywords::lookup(word) {
        push_keyword(buf, keyword);
    } else if let Some(stem) = word.strip_suffix('(') {
        match keywords::lookup(stem) {
            Some(keyword) => {
                push_keyword(buf, keyword);
                buf.push_byte(b'(');
            }
            None => buf.push_array(stem.as_bytes()),
        }
    } else {
        buf.push_variable(word.as_bytes());
    }
}

fn push_keyword(buf: &mut TokenBuffer, keyword: Keyword) {
    match keyword {
        Keyword::Byte(byte) => buf.push_byte(byte),
        Keyword::Function(id) => buf.push_function(id),
        Keyword::Top => {
            buf.push_byte(token::TO);
            buf.push_variable(b"P");
        }
        Keyword::TimeString => {
            buf.push_function(bbc_ir::FunctionId::Time);
            buf.push_byte(b'$');
        }
    }
}
