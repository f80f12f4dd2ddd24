//! Functions that read files, the keyboard, the screen and the sound system.
//!
//! These only parse their arguments and forward them to a collaborator.

use bbc_ir::Cursor;
use bbc_value::errors::{
    missing_comma, missing_hash, missing_lparen, missing_rparen, type_mismatch, EvalResult,
    Expected,
};
use bbc_value::{bool_value, StackValue};

use crate::expression::{expect, expect_syntax};
use crate::interpreter::Interpreter;

/// `#handle`, as taken by the file functions.
fn file_handle(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<i32> {
    expect(cur, b'#', missing_hash)?;
    interp.factor_int(cur)
}

/// `x, y)` after an opening parenthesis.
fn coordinates(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<(i32, i32)> {
    let x = interp.eval_int(cur)?;
    expect(cur, b',', missing_comma)?;
    let y = interp.eval_int(cur)?;
    expect(cur, b')', missing_rparen)?;
    Ok((x, y))
}

/// Wait for a key press, skipping null codes.
fn wait_for_key(interp: &mut Interpreter) -> EvalResult<u8> {
    loop {
        let key = (interp.console.read_key()? & 0xFF) as u8;
        if key != 0 {
            return Ok(key);
        }
    }
}

// Files

pub(super) fn ext(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let handle = file_handle(interp, cur)?;
    Ok(StackValue::Int64(interp.files.extent(handle)?))
}

pub(super) fn bget(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let handle = file_handle(interp, cur)?;
    Ok(StackValue::Int(interp.files.read_byte(handle)?))
}

pub(super) fn eof(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let handle = file_handle(interp, cur)?;
    Ok(StackValue::Int(bool_value(interp.files.eof(handle)?)))
}

/// `PTR#h` is the file pointer. `PTR(a())` and `PTR(s$)` give an address
/// that identifies the array or string storage.
pub(super) fn ptr(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if cur.peek() == b'#' {
        let handle = file_handle(interp, cur)?;
        return Ok(StackValue::Int64(interp.files.pointer(handle)?));
    }
    if !cur.eat(b'(') {
        return Err(missing_hash());
    }
    interp.expression(cur)?;
    let address = match interp.stack.pop()? {
        StackValue::IntArray(a)
        | StackValue::Int64Array(a)
        | StackValue::FloatArray(a)
        | StackValue::StrArray(a) => std::rc::Rc::as_ptr(&a) as usize,
        StackValue::StrRef(s) => s.as_bytes().as_ptr() as usize,
        _ => return Err(type_mismatch(Expected::SuitableVariable)),
    };
    expect(cur, b')', missing_rparen)?;
    Ok(StackValue::Int64(address as i64))
}

fn open_with(
    interp: &mut Interpreter,
    cur: &mut Cursor<'_>,
    open: fn(&mut Interpreter, &[u8]) -> EvalResult<i32>,
) -> EvalResult<StackValue> {
    let name = interp.factor_string(cur)?;
    Ok(StackValue::Int(open(interp, name.as_bytes())?))
}

pub(super) fn openin(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    open_with(interp, cur, |interp, name| interp.files.open_in(name))
}

pub(super) fn openout(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    open_with(interp, cur, |interp, name| interp.files.open_out(name))
}

pub(super) fn openup(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    open_with(interp, cur, |interp, name| interp.files.open_up(name))
}

// Keyboard

/// `GET` waits for a key; `GET(x, y)` reads the character on screen.
pub(super) fn get(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if cur.eat(b'(') {
        let (x, y) = coordinates(interp, cur)?;
        return Ok(StackValue::Int(interp.console.character_at(x, y)?));
    }
    Ok(StackValue::Int(i32::from(wait_for_key(interp)?)))
}

/// `GET$` as a one-character string, `GET$(x, y)` from the screen, or
/// `GET$#h` reading a line from a file.
pub(super) fn get_str(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    if cur.eat(b'(') {
        let (x, y) = coordinates(interp, cur)?;
        let ch = interp.console.character_at(x, y)?;
        return interp.temp_string(&[ch as u8]);
    }
    if cur.peek() == b'#' {
        let handle = file_handle(interp, cur)?;
        let line = interp.files.read_line(handle)?;
        return Ok(StackValue::StrTemp(interp.arena.from_vec(line)?));
    }
    let key = wait_for_key(interp)?;
    interp.temp_string(&[key])
}

pub(super) fn inkey(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let argument = interp.factor_int(cur)?;
    Ok(StackValue::Int(interp.console.inkey(argument)?))
}

/// As `INKEY`, but a timeout gives the empty string.
pub(super) fn inkey_str(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let argument = interp.factor_int(cur)?;
    match interp.console.inkey(argument)? {
        -1 => interp.empty_string(),
        key => interp.temp_string(&[key as u8]),
    }
}

pub(super) fn adval(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let argument = interp.factor_int(cur)?;
    Ok(StackValue::Int(interp.console.adval(argument)?))
}

// Screen

pub(super) fn point(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let (x, y) = coordinates(interp, cur)?;
    Ok(StackValue::Int(interp.console.point(x, y)?))
}

pub(super) fn pos(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.console.pos()?))
}

pub(super) fn vpos(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.console.vpos()?))
}

pub(super) fn mode(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.console.mode()?))
}

/// `COLOUR(r, g, b)`: the nearest colour number in the current mode.
pub(super) fn colour(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    expect_syntax(cur, b'(')?;
    let red = interp.eval_int(cur)?;
    expect_syntax(cur, b',')?;
    let green = interp.eval_int(cur)?;
    expect_syntax(cur, b',')?;
    let blue = interp.eval_int(cur)?;
    expect(cur, b')', missing_rparen)?;
    Ok(StackValue::Int(
        interp.console.colour_number(red, green, blue)?,
    ))
}

pub(super) fn tint(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    expect(cur, b'(', missing_lparen)?;
    let (x, y) = coordinates(interp, cur)?;
    Ok(StackValue::Int(interp.console.tint(x, y)?))
}

pub(super) fn vdu(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    let number = interp.factor_int(cur)?;
    Ok(StackValue::Int64(interp.console.vdu_variable(number)?))
}

// Sound

pub(super) fn beat(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.sound.beat()?))
}

pub(super) fn beats(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.sound.beats()?))
}

pub(super) fn tempo(interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Ok(StackValue::Int(interp.sound.tempo()?))
}
