//! Binary and unary operator semantics.
//!
//! Integers stay integers as long as they can: 32-bit results that overflow
//! widen to 64 bits, and 64-bit results that overflow fall back to floats.
//! `/` and `^` always produce floats. Comparisons produce `TRUE` (-1) or
//! `FALSE` (0).

use bbc_ir::token;
use bbc_value::convert::{int64_to_32, to_int64};
use bbc_value::errors::{
    division_by_zero, number_wanted, out_of_range, string_wanted, EvalResult,
};
use bbc_value::{bool_value, Number, StackValue, StringArena, StringOperand};

/// An infix operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Power,
    Mul,
    Div,
    IntDiv,
    Mod,
    Add,
    Sub,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Lsl,
    Asr,
    Lsr,
    And,
    Or,
    Eor,
}

impl BinaryOp {
    /// Decode the operator at a cursor position. Anything else ends the
    /// operand chain.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            b'^' => BinaryOp::Power,
            b'*' => BinaryOp::Mul,
            b'/' => BinaryOp::Div,
            token::DIV => BinaryOp::IntDiv,
            token::MOD => BinaryOp::Mod,
            b'+' => BinaryOp::Add,
            b'-' => BinaryOp::Sub,
            b'=' => BinaryOp::Eq,
            token::NE => BinaryOp::Ne,
            b'<' => BinaryOp::Lt,
            b'>' => BinaryOp::Gt,
            token::LE => BinaryOp::Le,
            token::GE => BinaryOp::Ge,
            token::LSL => BinaryOp::Lsl,
            token::ASR => BinaryOp::Asr,
            token::LSR => BinaryOp::Lsr,
            token::AND => BinaryOp::And,
            token::OR => BinaryOp::Or,
            token::EOR => BinaryOp::Eor,
            _ => return None,
        })
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Power => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::IntDiv | BinaryOp::Mod => 5,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::Le
            | BinaryOp::Ge
            | BinaryOp::Lsl
            | BinaryOp::Asr
            | BinaryOp::Lsr => 3,
            BinaryOp::And => 2,
            BinaryOp::Or | BinaryOp::Eor => 1,
        }
    }

    fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge
        )
    }
}

/// Apply `op` to two popped operands.
pub fn evaluate_binary(
    arena: &StringArena,
    op: BinaryOp,
    lhs: StackValue,
    rhs: StackValue,
) -> EvalResult {
    if lhs.tag().is_string() {
        let lhs = string_operand(lhs)?;
        if !rhs.tag().is_string() {
            return Err(string_wanted());
        }
        let rhs = string_operand(rhs)?;
        return evaluate_strings(arena, op, lhs, &rhs);
    }

    let lhs = lhs.number().ok_or_else(number_wanted)?;
    let rhs = rhs.number().ok_or_else(number_wanted)?;
    evaluate_numbers(op, lhs, rhs)
}

fn string_operand(value: StackValue) -> EvalResult<StringOperand> {
    match value {
        StackValue::StrTemp(s) => Ok(StringOperand::Temp(s)),
        StackValue::StrRef(s) => Ok(StringOperand::Ref(s)),
        _ => Err(string_wanted()),
    }
}

fn evaluate_strings(
    arena: &StringArena,
    op: BinaryOp,
    lhs: StringOperand,
    rhs: &StringOperand,
) -> EvalResult {
    if op == BinaryOp::Add {
        if rhs.is_empty() {
            return Ok(lhs.into_value());
        }
        let mut joined = lhs.into_temp(arena)?;
        joined.push_bytes(rhs.as_bytes())?;
        return Ok(StackValue::StrTemp(joined));
    }
    if !op.is_comparison() {
        return Err(number_wanted());
    }
    let ordering = lhs.as_bytes().cmp(rhs.as_bytes());
    Ok(StackValue::Int(bool_value(compare(op, ordering))))
}

fn compare(op: BinaryOp, ordering: std::cmp::Ordering) -> bool {
    use std::cmp::Ordering::{Equal, Greater, Less};
    match op {
        BinaryOp::Eq => ordering == Equal,
        BinaryOp::Ne => ordering != Equal,
        BinaryOp::Lt => ordering == Less,
        BinaryOp::Gt => ordering == Greater,
        BinaryOp::Le => ordering != Greater,
        BinaryOp::Ge => ordering != Less,
        _ => false,
    }
}

fn evaluate_numbers(op: BinaryOp, lhs: Number, rhs: Number) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(arith(lhs, rhs, i32::checked_add, i64::checked_add, |a, b| a + b)),
        BinaryOp::Sub => Ok(arith(lhs, rhs, i32::checked_sub, i64::checked_sub, |a, b| a - b)),
        BinaryOp::Mul => Ok(arith(lhs, rhs, i32::checked_mul, i64::checked_mul, |a, b| a * b)),
        BinaryOp::Div => {
            let divisor = rhs.as_f64();
            if divisor == 0.0 {
                return Err(division_by_zero());
            }
            Ok(StackValue::Float(lhs.as_f64() / divisor))
        }
        BinaryOp::Power => Ok(StackValue::Float(lhs.as_f64().powf(rhs.as_f64()))),
        BinaryOp::IntDiv | BinaryOp::Mod => {
            let wide = is_wide(lhs) || is_wide(rhs);
            let (a, b) = (integer(lhs)?, integer(rhs)?);
            if b == 0 {
                return Err(division_by_zero());
            }
            let result = if op == BinaryOp::IntDiv {
                a.checked_div(b)
            } else {
                a.checked_rem(b)
            };
            Ok(sized(wide, result.ok_or_else(out_of_range)?))
        }
        BinaryOp::And | BinaryOp::Or | BinaryOp::Eor => {
            let wide = is_wide(lhs) || is_wide(rhs);
            let (a, b) = (integer(lhs)?, integer(rhs)?);
            let result = match op {
                BinaryOp::And => a & b,
                BinaryOp::Or => a | b,
                _ => a ^ b,
            };
            Ok(sized(wide, result))
        }
        BinaryOp::Lsl | BinaryOp::Asr | BinaryOp::Lsr => shift(op, lhs, rhs),
        BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => {
            let ordering = match (lhs, rhs) {
                (Number::Float(_), _) | (_, Number::Float(_)) => {
                    match lhs.as_f64().partial_cmp(&rhs.as_f64()) {
                        Some(ordering) => ordering,
                        // NaN compares unequal to everything.
                        None => return Ok(StackValue::Int(bool_value(op == BinaryOp::Ne))),
                    }
                }
                _ => integer(lhs)?.cmp(&integer(rhs)?),
            };
            Ok(StackValue::Int(bool_value(compare(op, ordering))))
        }
    }
}

/// `+`, `-` and `*` with widening on overflow.
fn arith(
    lhs: Number,
    rhs: Number,
    narrow: fn(i32, i32) -> Option<i32>,
    wide: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> StackValue {
    match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => match narrow(a, b) {
            Some(v) => StackValue::Int(v),
            None => widened(i64::from(a), i64::from(b), wide, float),
        },
        (Number::Float(_), _) | (_, Number::Float(_)) => {
            StackValue::Float(float(lhs.as_f64(), rhs.as_f64()))
        }
        (Number::Int(a), Number::Int64(b)) => widened(i64::from(a), b, wide, float),
        (Number::Int64(a), Number::Int(b)) => widened(a, i64::from(b), wide, float),
        (Number::Int64(a), Number::Int64(b)) => widened(a, b, wide, float),
    }
}

fn widened(
    a: i64,
    b: i64,
    wide: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> StackValue {
    match wide(a, b) {
        Some(v) => StackValue::Int64(v),
        None => StackValue::Float(float(a as f64, b as f64)),
    }
}

fn is_wide(n: Number) -> bool {
    matches!(n, Number::Int64(_))
}

/// Integer view of an operand; floats truncate toward zero.
fn integer(n: Number) -> EvalResult<i64> {
    match n {
        Number::Int(v) => Ok(i64::from(v)),
        Number::Int64(v) => Ok(v),
        Number::Float(v) => to_int64(v),
    }
}

fn sized(wide: bool, value: i64) -> StackValue {
    if wide {
        StackValue::Int64(value)
    } else {
        StackValue::varyint(value)
    }
}

/// Shifts work on 32 bits unless the left operand is 64-bit. The shift
/// count wraps at the operand width.
fn shift(op: BinaryOp, lhs: Number, rhs: Number) -> EvalResult {
    let count = integer(rhs)?;
    if let Number::Int64(value) = lhs {
        let count = (count & 63) as u32;
        let result = match op {
            BinaryOp::Lsl => value.wrapping_shl(count),
            BinaryOp::Asr => value.wrapping_shr(count),
            _ => ((value as u64).wrapping_shr(count)) as i64,
        };
        return Ok(StackValue::Int64(result));
    }
    let value = int64_to_32(integer(lhs)?)?;
    let count = (count & 31) as u32;
    let result = match op {
        BinaryOp::Lsl => value.wrapping_shl(count),
        BinaryOp::Asr => value.wrapping_shr(count),
        _ => ((value as u32).wrapping_shr(count)) as i32,
    };
    Ok(StackValue::Int(result))
}

/// Unary minus. The most negative integer of each width widens instead of
/// overflowing.
pub fn negate(value: StackValue) -> EvalResult {
    match value.number().ok_or_else(number_wanted)? {
        Number::Int(v) => Ok(v
            .checked_neg()
            .map_or(StackValue::Int64(-i64::from(v)), StackValue::Int)),
        Number::Int64(v) => Ok(v
            .checked_neg()
            .map_or(StackValue::Float(-(v as f64)), StackValue::Int64)),
        Number::Float(v) => Ok(StackValue::Float(-v)),
    }
}
