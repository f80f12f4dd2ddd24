use super::*;
use crate::{FunctionId, TokenBuffer};
use pretty_assertions::assert_eq;

#[test]
fn peek_past_end_is_eol() {
    let cur = Cursor::new(&[]);
    assert_eq!(cur.peek(), token::EOL);
    assert!(cur.at_end());
}

#[test]
fn copy_saves_position() {
    let bytes = [b'(', b'1', b')'];
    let mut cur = Cursor::new(&bytes);
    cur.bump();
    let saved = cur;
    cur.bump();
    cur.bump();
    assert_eq!(cur.position(), 3);
    cur = saved;
    assert_eq!(cur.peek(), b'1');
}

#[test]
fn reads_operands() {
    let mut buf = TokenBuffer::new();
    buf.push_int(-70000);
    buf.push_float(2.5);
    buf.push_string(b"hello");
    buf.push_array(b"a%");
    buf.push_function(FunctionId::Sum);
    buf.finish();

    let mut cur = buf.cursor();
    assert_eq!(cur.next_byte(), token::INTCON);
    assert_eq!(cur.read_i32(), Some(-70000));
    assert_eq!(cur.next_byte(), token::FLOATCON);
    assert_eq!(cur.read_f64(), Some(2.5));
    assert_eq!(cur.next_byte(), token::STRINGCON);
    assert_eq!(cur.read_string(), Some(&b"hello"[..]));
    assert_eq!(cur.next_byte(), token::ARRAYVAR);
    assert_eq!(cur.read_name(), Some(&b"a%"[..]));
    assert!(cur.eat(token::FUNCTION));
    assert_eq!(cur.read_u8(), Some(FunctionId::Sum as u8));
    assert!(cur.at_end());
}

#[test]
fn truncated_operand_is_none() {
    let bytes = [token::INTCON, 1, 2];
    let mut cur = Cursor::new(&bytes);
    cur.bump();
    assert_eq!(cur.read_i32(), None);
    assert_eq!(cur.position(), 1);
}
