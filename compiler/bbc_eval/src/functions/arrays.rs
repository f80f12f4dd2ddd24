//! Whole-array functions: `SUM`, `SUM LEN`, `MOD` and `DIM`.

use std::rc::Rc;

use bbc_ir::{token, Cursor, FunctionId};
use bbc_value::errors::{
    dim_range, missing_rparen, string_too_long, string_wanted, type_mismatch, EvalResult, Expected,
};
use bbc_value::{ArrayDescriptor, ArrayElements, StackValue, MAXSTRING};

use super::get_arrayname;
use crate::expression::{expect, expect_syntax};
use crate::interpreter::Interpreter;

/// `name()` or `(name())`; one level of parentheses is allowed.
fn array_argument(interp: &Interpreter, cur: &mut Cursor<'_>) -> EvalResult<Rc<ArrayDescriptor>> {
    if cur.eat(b'(') {
        let array = get_arrayname(interp, cur)?;
        expect(cur, b')', missing_rparen)?;
        Ok(array)
    } else {
        get_arrayname(interp, cur)
    }
}

/// `SUM a()` adds up a numeric array or joins a string array.
/// `SUM LEN a()` totals the lengths of a string array.
pub(super) fn sum(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let sum_len = cur.peek() == token::FUNCTION && cur.peek_nth(1) == FunctionId::Len as u8;
    if sum_len {
        cur.bump();
        cur.bump();
    }
    let array = array_argument(interp, cur)?;

    if sum_len {
        let ArrayElements::Str(elements) = array.elements() else {
            return Err(string_wanted());
        };
        let total: usize = elements.iter().map(|s| s.len()).sum();
        return Ok(StackValue::varyint(total as i64));
    }

    Ok(match array.elements() {
        ArrayElements::Int(v) => StackValue::Int(v.iter().fold(0i32, |acc, &x| acc.wrapping_add(x))),
        ArrayElements::Int64(v) => {
            StackValue::Int64(v.iter().fold(0i64, |acc, &x| acc.wrapping_add(x)))
        }
        ArrayElements::Float(v) => StackValue::Float(v.iter().sum()),
        ArrayElements::Str(v) => {
            let total: usize = v.iter().map(|s| s.len()).sum();
            if total > MAXSTRING {
                return Err(string_too_long());
            }
            let mut joined = Vec::with_capacity(total);
            for s in v {
                joined.extend_from_slice(s);
            }
            StackValue::StrTemp(interp.arena.from_vec(joined)?)
        }
    })
}

/// `MOD a()`: square root of the sum of the squares of a numeric array.
pub(super) fn modulus(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let array = array_argument(interp, cur)?;
    let squares: f64 = match array.elements() {
        ArrayElements::Int(v) => v.iter().map(|&x| f64::from(x) * f64::from(x)).sum(),
        ArrayElements::Int64(v) => v.iter().map(|&x| (x as f64) * (x as f64)).sum(),
        ArrayElements::Float(v) => v.iter().map(|&x| x * x).sum(),
        ArrayElements::Str(_) => return Err(type_mismatch(Expected::NumericArray)),
    };
    Ok(StackValue::Float(squares.sqrt()))
}

/// `DIM(a())` is the number of dimensions, `DIM(a(), n)` the highest index
/// of dimension `n`.
pub(super) fn dim(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    expect_syntax(cur, b'(')?;
    let array = get_arrayname(interp, cur)?;
    if cur.eat(b')') {
        return Ok(StackValue::Int(array.dimcount() as i32));
    }
    expect_syntax(cur, b',')?;
    let dimension = interp.eval_int(cur)?;
    expect(cur, b')', missing_rparen)?;
    let extent = usize::try_from(dimension)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| array.dims().get(n))
        .ok_or_else(dim_range)?;
    Ok(StackValue::Int(*extent as i32 - 1))
}
