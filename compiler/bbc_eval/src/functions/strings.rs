//! String functions.
//!
//! Where a result is the argument unchanged (for example `LEFT$` asked for
//! more characters than there are) the argument goes back on the stack as it
//! came off, reference or temporary. Everything else builds a new temporary;
//! a referenced string is copied before it is modified.

use bbc_ir::Cursor;
use bbc_value::errors::{
    missing_comma, missing_rparen, number_wanted, out_of_range, string_too_long, string_wanted,
    type_mismatch, EvalResult, Expected,
};
use bbc_value::{ArrayElements, StackValue, StringOperand, MAXSTRING};

use crate::expression::expect;
use crate::format::{hex32, hex64, str_number};
use crate::interpreter::Interpreter;

/// `LEFT$(s, n)` and `LEFT$(s)`.
pub(super) fn left(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.eval_string(cur)?;
    if cur.eat(b',') {
        let count = interp.eval_int(cur)?;
        expect(cur, b')', missing_rparen)?;
        // A negative count keeps the whole string.
        let Ok(count) = usize::try_from(count) else {
            return Ok(s.into_value());
        };
        if count == 0 {
            return interp.empty_string();
        }
        if count >= s.len() {
            return Ok(s.into_value());
        }
        let mut t = s.into_temp(&interp.arena)?;
        t.truncate(count);
        return Ok(StackValue::StrTemp(t));
    }
    expect(cur, b')', missing_rparen)?;
    if s.len() <= 1 {
        return interp.empty_string();
    }
    let keep = s.len() - 1;
    let mut t = s.into_temp(&interp.arena)?;
    t.truncate(keep);
    Ok(StackValue::StrTemp(t))
}

/// `RIGHT$(s, n)` and `RIGHT$(s)`.
pub(super) fn right(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.eval_string(cur)?;
    if cur.eat(b',') {
        let count = interp.eval_int(cur)?;
        expect(cur, b')', missing_rparen)?;
        let count = usize::try_from(count).unwrap_or(0);
        if count == 0 {
            return interp.empty_string();
        }
        if count >= s.len() {
            return Ok(s.into_value());
        }
        let len = s.len();
        let mut t = s.into_temp(&interp.arena)?;
        t.drop_front(len - count);
        return Ok(StackValue::StrTemp(t));
    }
    expect(cur, b')', missing_rparen)?;
    match s.as_bytes().last() {
        None => Ok(s.into_value()),
        Some(&last) => interp.temp_string(&[last]),
    }
}

/// `MID$(s, start [, length])`. A missing or negative length means the
/// rest of the string.
pub(super) fn mid(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.eval_string(cur)?;
    expect(cur, b',', missing_comma)?;
    let start = interp.eval_int(cur)?;
    let mut length = if cur.eat(b',') {
        interp.eval_int(cur)?
    } else {
        -1
    };
    expect(cur, b')', missing_rparen)?;
    if length < 0 {
        length = MAXSTRING as i32;
    }

    let len = s.len();
    let Ok(start) = usize::try_from(start) else {
        return interp.empty_string();
    };
    if length == 0 || start > len {
        return interp.empty_string();
    }
    let offset = start.saturating_sub(1);
    let length = length as usize;
    if offset == 0 && length >= len {
        return Ok(s.into_value());
    }
    let length = length.min(len - offset);
    interp.temp_string(&s.as_bytes()[offset..offset + length])
}

/// `INSTR(haystack, needle [, start])`: 1-based position or 0.
///
/// An empty needle is found at the start position only when that position
/// is 1 or 2, and at 1 when the haystack is also empty.
pub(super) fn instr(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let haystack = interp.eval_string(cur)?;
    expect(cur, b',', missing_comma)?;
    let needle = interp.eval_string(cur)?;
    let start = if cur.eat(b',') {
        interp.eval_int(cur)?.max(1)
    } else {
        1
    };
    expect(cur, b')', missing_rparen)?;
    Ok(StackValue::Int(find(haystack.as_bytes(), needle.as_bytes(), start)))
}

fn find(haystack: &[u8], needle: &[u8], start: i32) -> i32 {
    let hay_len = haystack.len() as i64;
    let needle_len = needle.len() as i64;
    let start64 = i64::from(start);
    if needle_len > hay_len - start64 + 1 {
        return 0;
    }
    if needle.is_empty() {
        return match (haystack.is_empty(), start) {
            (true, _) => 1,
            (false, 1 | 2) => start,
            (false, _) => 0,
        };
    }
    let from = (start - 1) as usize;
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map_or(0, |p| (from + p + 1) as i32)
}

/// `VERIFY(s, set [, start])`: index of the first character of `s` not in
/// `set`, or 0 when they all are.
pub(super) fn verify(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let subject = interp.eval_string(cur)?;
    expect(cur, b',', missing_comma)?;
    let set = interp.eval_string(cur)?;
    let start = if cur.eat(b',') {
        interp.eval_int(cur)?.max(1)
    } else {
        1
    };
    expect(cur, b')', missing_rparen)?;

    let subject = subject.as_bytes();
    let set = set.as_bytes();
    let start_index = start as usize;
    if set.is_empty() {
        return Ok(StackValue::Int(start));
    }
    if start_index > subject.len() {
        return Ok(StackValue::Int(0));
    }

    let mut present = [false; 256];
    for &b in set {
        present[usize::from(b)] = true;
    }
    let first_missing = subject[start_index - 1..]
        .iter()
        .position(|&b| !present[usize::from(b)]);
    Ok(StackValue::Int(
        first_missing.map_or(0, |p| (start_index + p) as i32),
    ))
}

/// `XLATE$(s)` lowercases ASCII letters. `XLATE$(s, table)` maps each byte
/// below the table's length through the table, which is either a string or
/// a one-dimensional string array (first character of each element; empty
/// elements leave the byte alone).
pub(super) fn xlate(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let subject = interp.eval_string(cur)?;
    if !cur.eat(b',') {
        expect(cur, b')', missing_rparen)?;
        if subject.is_empty() {
            return Ok(subject.into_value());
        }
        let mut t = subject.into_temp(&interp.arena)?;
        t.as_mut_bytes().make_ascii_lowercase();
        return Ok(StackValue::StrTemp(t));
    }

    interp.expression(cur)?;
    expect(cur, b')', missing_rparen)?;
    match interp.stack.pop()? {
        StackValue::StrArray(table) => {
            if table.dimcount() != 1 {
                return Err(type_mismatch(Expected::OneDimension));
            }
            if subject.is_empty() {
                return Ok(subject.into_value());
            }
            let ArrayElements::Str(entries) = table.elements() else {
                return Err(type_mismatch(Expected::StringArray));
            };
            let mut t = subject.into_temp(&interp.arena)?;
            for b in t.as_mut_bytes() {
                if let Some(&first) = entries.get(usize::from(*b)).and_then(|e| e.first()) {
                    *b = first;
                }
            }
            Ok(StackValue::StrTemp(t))
        }
        table @ (StackValue::StrRef(_) | StackValue::StrTemp(_)) => {
            let table = table.string_bytes().unwrap_or_default();
            if subject.is_empty() || table.is_empty() {
                return Ok(subject.into_value());
            }
            let mut t = subject.into_temp(&interp.arena)?;
            for b in t.as_mut_bytes() {
                if let Some(&mapped) = table.get(usize::from(*b)) {
                    *b = mapped;
                }
            }
            Ok(StackValue::StrTemp(t))
        }
        _ => Err(string_wanted()),
    }
}

/// `STRING$(n, s)`: `s` repeated `n` times.
pub(super) fn string(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let count = interp.eval_int(cur)?;
    expect(cur, b',', missing_comma)?;
    let s = interp.eval_string(cur)?;
    expect(cur, b')', missing_rparen)?;
    if count == 1 {
        return Ok(s.into_value());
    }
    let Ok(count) = usize::try_from(count) else {
        return interp.empty_string();
    };
    match s.len().checked_mul(count) {
        Some(total) if total <= MAXSTRING => {
            let repeated = s.as_bytes().repeat(count);
            Ok(StackValue::StrTemp(interp.arena.from_vec(repeated)?))
        }
        _ => Err(string_too_long()),
    }
}

pub(super) fn len(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.factor_string(cur)?;
    Ok(StackValue::Int(s.len() as i32))
}

/// Code of the first character, or -1 for the empty string.
pub(super) fn asc(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.factor_string(cur)?;
    Ok(StackValue::Int(
        s.as_bytes().first().map_or(-1, |&b| i32::from(b)),
    ))
}

/// One-character string of the low byte of the argument.
pub(super) fn chr(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let code = interp.factor_int(cur)?;
    interp.temp_string(&[code as u8])
}

/// `STR$ x` in decimal under `@%`, `STR$~ x` in upper-case hex.
pub(super) fn str(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let hex = cur.eat(b'~');
    interp.factor(cur)?;
    if !interp.stack.peek_tag().is_some_and(|tag| tag.is_numeric()) {
        interp.stack.pop()?;
        return Err(number_wanted());
    }
    let text = if !hex {
        str_number(interp.stack.pop_number()?, interp.format_word())
    } else if interp.options.hex64 {
        hex64(interp.stack.pop_any_num_64()?)
    } else {
        hex32(interp.stack.pop_any_num_32()?)
    };
    Ok(StackValue::StrTemp(interp.arena.from_vec(text.into_bytes())?))
}

/// `VAL s`: the decimal number at the start of `s`, or 0.
pub(super) fn val(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let s = interp.factor_string(cur)?;
    parse_decimal(&s)
}

/// Read an optionally signed decimal number from the front of `text`,
/// ignoring whatever follows it. Integers come back as integers.
fn parse_decimal(text: &StringOperand) -> EvalResult<StackValue> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let begin = bytes.iter().take_while(|&&b| b == b' ').count();
    let mut end = begin;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let mantissa_from = end;
    end = digits_from(end);
    let mut integral = true;
    if bytes.get(end) == Some(&b'.') {
        integral = false;
        end = digits_from(end + 1);
    }
    let mantissa = &bytes[mantissa_from..end];
    if !mantissa.iter().any(u8::is_ascii_digit) {
        return Ok(StackValue::Int(0));
    }
    if matches!(bytes.get(end), Some(b'E' | b'e')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            integral = false;
            end = digits_from(exp);
        }
    }

    let literal = String::from_utf8_lossy(&bytes[begin..end]);
    if integral {
        let value: i64 = literal.parse().map_err(|_| out_of_range())?;
        return Ok(StackValue::varyint(value));
    }
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(StackValue::Float(value)),
        _ => Err(out_of_range()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn find_follows_the_empty_needle_rules() {
        assert_eq!(find(b"abc", b"", 1), 1);
        assert_eq!(find(b"abc", b"", 2), 2);
        assert_eq!(find(b"abc", b"", 3), 0);
        assert_eq!(find(b"", b"", 1), 1);
        assert_eq!(find(b"", b"", 5), 0);
    }

    #[test]
    fn find_searches_from_start() {
        assert_eq!(find(b"banana", b"an", 1), 2);
        assert_eq!(find(b"banana", b"an", 3), 4);
        assert_eq!(find(b"banana", b"an", 5), 0);
        assert_eq!(find(b"ab", b"abc", 1), 0);
    }

    #[test]
    fn decimal_prefixes() {
        let arena = bbc_value::StringArena::new();
        let parse = |s: &str| {
            parse_decimal(&StringOperand::Temp(arena.copy_from(s.as_bytes()).unwrap()))
        };
        assert_eq!(parse("42abc").unwrap(), StackValue::Int(42));
        assert_eq!(parse("  -7").unwrap(), StackValue::Int(-7));
        assert_eq!(parse("1.5E2x").unwrap(), StackValue::Float(150.0));
        assert_eq!(parse("3E").unwrap(), StackValue::Int(3));
        assert_eq!(parse(".25").unwrap(), StackValue::Float(0.25));
        assert_eq!(parse("abc").unwrap(), StackValue::Int(0));
        assert_eq!(parse("-").unwrap(), StackValue::Int(0));
        assert_eq!(
            parse("5000000000").unwrap(),
            StackValue::Int64(5_000_000_000)
        );
        assert!(parse("99999999999999999999").is_err());
    }
}
