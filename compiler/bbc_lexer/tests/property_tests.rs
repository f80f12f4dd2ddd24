//! Property-based tests for the expression tokenizer.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use bbc_ir::token;
use bbc_lexer::tokenize;
use proptest::prelude::*;

/// Decode the single integer literal at the start of a token stream.
fn decode_int(bytes: &[u8]) -> Option<i64> {
    let mut cur = bbc_ir::Cursor::new(bytes);
    match cur.next_byte() {
        token::INTZERO => Some(0),
        token::INTONE => Some(1),
        token::SMALLINT => cur.read_u8().map(|b| i64::from(b) + 1),
        token::INTCON => cur.read_i32().map(i64::from),
        token::INT64CON => cur.read_i64(),
        _ => None,
    }
}

proptest! {
    #[test]
    fn any_ascii_line_terminates(source in "[ -~]{0,40}") {
        if let Ok(buf) = tokenize(&source) {
            prop_assert_eq!(buf.as_bytes().last().copied(), Some(token::EOL));
        }
    }

    #[test]
    fn decimal_literal_round_trips(value in 0i64..=i64::MAX) {
        let buf = tokenize(&value.to_string()).unwrap();
        prop_assert_eq!(decode_int(buf.as_bytes()), Some(value));
    }

    #[test]
    fn lower_case_names_are_variables(name in "[a-z][a-z0-9_]{0,12}[%$]?") {
        let buf = tokenize(&name).unwrap();
        let bytes = buf.as_bytes();
        prop_assert_eq!(bytes[0], token::XVAR);
        prop_assert_eq!(usize::from(bytes[1]), name.len());
        prop_assert_eq!(&bytes[2..2 + name.len()], name.as_bytes());
    }
}
