//! Keyword spellings.

use bbc_ir::{token, FunctionId};

/// What a reserved word tokenizes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Keyword {
    /// A single token byte (operators and factor keywords).
    Byte(u8),
    Function(FunctionId),
    /// `TOP`, which shares its first two letters with `TO`.
    Top,
    /// `TIME$`, the string form of `TIME`.
    TimeString,
}

/// Look up an upper-case reserved word. Keywords are case sensitive.
pub(crate) fn lookup(word: &str) -> Option<Keyword> {
    let byte = match word {
        "AND" => token::AND,
        "DIV" => token::DIV,
        "EOR" => token::EOR,
        "MOD" => token::MOD,
        "OR" => token::OR,
        "BEATS" => token::BEATS,
        "COLOUR" => token::COLOUR,
        "DIM" => token::DIM,
        "END" => token::END,
        "FALSE" => token::FALSE,
        "MODE" => token::MODE,
        "NOT" => token::NOT,
        "QUIT" => token::QUIT,
        "TINT" => token::TINT,
        "TO" => token::TO,
        "TRACE" => token::TRACE,
        "TRUE" => token::TRUE,
        "VDU" => token::VDU,
        "WIDTH" => token::WIDTH,
        "TOP" => return Some(Keyword::Top),
        "TIME$" => return Some(Keyword::TimeString),
        _ => {
            return FunctionId::ALL
                .iter()
                .find(|id| id.keyword() == word)
                .map(|&id| Keyword::Function(id));
        }
    };
    Some(Keyword::Byte(byte))
}
