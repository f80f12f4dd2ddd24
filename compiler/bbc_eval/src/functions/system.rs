//! Pseudo-variables and functions that report interpreter or OS state.

use bbc_ir::{token, Cursor};
use bbc_value::convert::resize32;
use bbc_value::errors::{missing_rparen, out_of_range, syntax_error, EvalResult};
use bbc_value::{bool_value, StackValue, BASFALSE, BASTRUE};

use crate::expression::expect;
use crate::interpreter::Interpreter;

// Memory

fn address(interp: &Interpreter, value: i64) -> StackValue {
    if interp.options.pseudo_vars_unsigned {
        StackValue::Int64(resize32(value))
    } else {
        StackValue::Int64(value)
    }
}

pub(super) fn himem(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(address(interp, interp.memory.himem))
}

pub(super) fn lomem(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(address(interp, interp.memory.lomem))
}

pub(super) fn page(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(address(interp, interp.memory.page))
}

/// `END` as a factor: the top of the variable area.
pub(super) fn end(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(address(interp, interp.memory.vartop))
}

/// `TOP` arrives as `TO` followed by a variable whose name starts with `P`.
pub(super) fn top(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if cur.peek() != token::XVAR {
        return Err(syntax_error());
    }
    let mut lookahead = *cur;
    lookahead.bump();
    match lookahead.read_name() {
        Some([b'P', ..]) => *cur = lookahead,
        _ => return Err(syntax_error()),
    }
    Ok(address(interp, interp.memory.top))
}

// Program state

pub(super) fn not(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let value = interp.factor_int64(cur)?;
    Ok(StackValue::varyint(!value))
}

pub(super) fn true_value(_interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(BASTRUE))
}

pub(super) fn false_value(
    _interp: &mut Interpreter,
    _cur: &mut Cursor<'_>,
) -> EvalResult<StackValue> {
    Ok(StackValue::Int(BASFALSE))
}

pub(super) fn quit(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(bool_value(interp.session.quit_at_end)))
}

pub(super) fn trace(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.session.trace_handle))
}

pub(super) fn width(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.session.print_width))
}

pub(super) fn count(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.session.print_count))
}

pub(super) fn listo(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.session.listo))
}

pub(super) fn retcode(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.session.retcode))
}

pub(super) fn erl(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.last_error.line))
}

pub(super) fn err(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.last_error.number))
}

pub(super) fn report(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let message = interp.last_error.message.clone();
    interp.temp_string(message.as_bytes())
}

pub(super) fn filepath(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let path = interp.load_path.clone();
    interp.temp_string(path.as_bytes())
}

// Command line

/// Number of arguments after the program name.
pub(super) fn argc(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let count = interp.args.len().saturating_sub(1);
    Ok(StackValue::Int(i32::try_from(count).map_err(|_| out_of_range())?))
}

/// `ARGV$ 0` is the program name, `ARGV$ n` the nth argument.
pub(super) fn argv(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let n = interp.factor_int(cur)?;
    let argument = usize::try_from(n)
        .ok()
        .and_then(|n| interp.args.get(n))
        .ok_or_else(out_of_range)?;
    let bytes = argument.clone().into_bytes();
    Ok(StackValue::StrTemp(interp.arena.from_vec(bytes)?))
}

// Operating system

/// `TIME` in centiseconds, or `TIME$` as a date and time string.
pub(super) fn time(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if cur.eat(b'$') {
        let text = interp.os.time_string()?;
        return Ok(StackValue::StrTemp(interp.arena.from_vec(text.into_bytes())?));
    }
    Ok(StackValue::Int(interp.os.centiseconds()?))
}

pub(super) fn usr(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let address = interp.factor_int(cur)?;
    Ok(StackValue::Int(interp.os.usr(address)?))
}

/// `SYS("name")`: the number of a named system call.
pub(super) fn sys(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let name = interp.factor_string(cur)?;
    let number = interp.os.swi_number(name.as_bytes())?;
    drop(name);
    expect(cur, b')', missing_rparen)?;
    Ok(StackValue::varyint(number))
}

/// `EVAL s$`: tokenize the string and evaluate it as an expression.
///
/// The tokens live only for this call and are read through a fresh cursor,
/// so the caller's position is untouched.
#[tracing::instrument(level = "debug", skip_all)]
pub(super) fn eval(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let source = interp.factor_string(cur)?;
    let tokens = interp.tokenizer.tokenize(source.as_bytes())?;
    drop(source);
    tracing::trace!(len = tokens.len(), "EVAL tokenized");

    let mut inner = Cursor::new(tokens.as_bytes());
    interp.expression(&mut inner)?;
    if interp.options.cosmetic_checks && !inner.at_end() {
        return Err(syntax_error());
    }
    interp.stack.pop()
}
