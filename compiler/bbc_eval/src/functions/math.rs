//! Numeric functions and `RND`.

use bbc_ir::Cursor;
use bbc_value::convert::{to_int, to_int64};
use bbc_value::errors::{log_range, missing_rparen, negative_root, number_wanted, syntax_error};
use bbc_value::{EvalResult, StackValue};

use crate::expression::expect;
use crate::interpreter::Interpreter;

/// Degrees per radian.
const RADCONV: f64 = 180.0 / std::f64::consts::PI;

pub(super) fn abs(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    interp.factor(cur)?;
    Ok(match interp.stack.pop()? {
        StackValue::Int(v) => v
            .checked_abs()
            .map_or(StackValue::Int64(-i64::from(v)), StackValue::Int),
        StackValue::Int64(v) => StackValue::Int64(v.wrapping_abs()),
        StackValue::Float(v) => StackValue::Float(v.abs()),
        byte @ StackValue::Byte(_) => byte,
        _ => return Err(number_wanted()),
    })
}

fn float_function(
    interp: &mut Interpreter,
    cur: &mut Cursor<'_>,
    f: fn(f64) -> f64,
) -> EvalResult<StackValue> {
    let x = interp.factor_float(cur)?;
    Ok(StackValue::Float(f(x)))
}

pub(super) fn acs(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::acos)
}

pub(super) fn asn(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::asin)
}

pub(super) fn cos(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::cos)
}

pub(super) fn sin(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::sin)
}

pub(super) fn tan(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::tan)
}

pub(super) fn exp(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, f64::exp)
}

pub(super) fn deg(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, |radians| radians * RADCONV)
}

pub(super) fn rad(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    float_function(interp, cur, |degrees| degrees / RADCONV)
}

/// `ATN x`, `ATN(x)` or the two-argument `ATN(y, x)`.
pub(super) fn atn(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if !cur.eat(b'(') {
        return float_function(interp, cur, f64::atan);
    }
    let first = interp.eval_float(cur)?;
    let result = if cur.eat(b',') {
        let second = interp.eval_float(cur)?;
        first.atan2(second)
    } else {
        first.atan()
    };
    expect(cur, b')', syntax_error)?;
    Ok(StackValue::Float(result))
}

pub(super) fn ln(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let x = interp.factor_float(cur)?;
    if x <= 0.0 {
        return Err(log_range());
    }
    Ok(StackValue::Float(x.ln()))
}

pub(super) fn log(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let x = interp.factor_float(cur)?;
    if x <= 0.0 {
        return Err(log_range());
    }
    Ok(StackValue::Float(x.log10()))
}

pub(super) fn sqr(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let x = interp.factor_float(cur)?;
    if x < 0.0 {
        return Err(negative_root());
    }
    Ok(StackValue::Float(x.sqrt()))
}

pub(super) fn pi(_interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Float(std::f64::consts::PI))
}

/// Integer part, rounding toward minus infinity. Integers pass through.
pub(super) fn int(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    interp.factor(cur)?;
    match interp.stack.pop()? {
        StackValue::Float(v) => {
            let floor = v.floor();
            if !interp.options.int_uses_float {
                return Ok(StackValue::Int(to_int(floor)?));
            }
            Ok(to_int64(floor)
                .ok()
                .filter(|&i| i as f64 == floor)
                .map_or(StackValue::Float(floor), StackValue::varyint))
        }
        value @ (StackValue::Int(_) | StackValue::Int64(_) | StackValue::Byte(_)) => Ok(value),
        _ => Err(number_wanted()),
    }
}

pub(super) fn sgn(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    interp.factor(cur)?;
    let sign = match interp.stack.pop()? {
        StackValue::Int(v) => v.signum(),
        StackValue::Int64(v) => v.signum() as i32,
        StackValue::Byte(v) => i32::from(v != 0),
        StackValue::Float(v) if v > 0.0 => 1,
        StackValue::Float(v) if v < 0.0 => -1,
        StackValue::Float(_) => 0,
        _ => return Err(number_wanted()),
    };
    Ok(StackValue::Int(sign))
}

/// `RND`: advance and return the raw 32-bit word.
pub(super) fn rnd(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    interp.prng.advance();
    Ok(StackValue::Int(interp.prng.last()))
}

/// `RND(n)`: reseed for negative `n`, the last fraction for 0, a new
/// fraction for 1, otherwise an integer from 1 to `n`.
pub(super) fn rnd_paren(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let n = interp.eval_int(cur)?;
    expect(cur, b')', missing_rparen)?;
    match n {
        ..=-1 => {
            tracing::debug!(seed = n, "RND reseeded");
            interp.prng.reseed(n);
            Ok(StackValue::Int(n))
        }
        0 => Ok(StackValue::Float(interp.prng.fraction())),
        1 => {
            interp.prng.advance();
            Ok(StackValue::Float(interp.prng.fraction()))
        }
        _ => {
            interp.prng.advance();
            let scaled = 1.0 + interp.prng.fraction() * f64::from(n);
            Ok(StackValue::Int(to_int(scaled)?))
        }
    }
}
