//! Built-in functions.
//!
//! A function call is the marker byte [`token::FUNCTION`] followed by a
//! [`FunctionId`] ordinal. [`dispatch`] skips both bytes and calls the
//! handler in [`FUNCTION_TABLE`] at that ordinal. Handlers consume their own
//! arguments and punctuation from the cursor and return the single value the
//! call produces, which `dispatch` pushes.
//!
//! A few functions are spelt with statement keywords (`DIM`, `MOD`, `NOT`,
//! `TRUE`, ...) and have single-byte tokens instead; [`keyword_factor`]
//! routes those.

mod arrays;
mod devices;
mod math;
mod strings;
mod system;

use std::rc::Rc;

use bbc_ir::{token, Cursor, FunctionId};
use bbc_value::errors::{
    bad_expression, broken, missing_rparen, type_mismatch, EvalResult, Expected,
};
use bbc_value::{ArrayDescriptor, StackValue};

use crate::interpreter::Interpreter;

/// Entry point of one built-in. The cursor starts just after the function
/// token.
pub(crate) type FunctionHandler = fn(&mut Interpreter, &mut Cursor<'_>) -> EvalResult<StackValue>;

/// Handlers indexed by [`FunctionId`] ordinal. Unassigned ordinals hold
/// [`bad_token`].
static FUNCTION_TABLE: [FunctionHandler; FunctionId::TABLE_SIZE] = [
    bad_token,          // 0x00
    system::himem,      // HIMEM
    devices::ext,       // EXT
    system::filepath,   // FILEPATH$
    strings::left,      // LEFT$(
    system::lomem,      // LOMEM
    strings::mid,       // MID$(
    system::page,       // PAGE
    devices::ptr,       // PTR
    strings::right,     // RIGHT$(
    system::time,       // TIME
    bad_token,          // 0x0B
    bad_token,          // 0x0C
    bad_token,          // 0x0D
    bad_token,          // 0x0E
    bad_token,          // 0x0F
    math::abs,          // ABS
    math::acs,          // ACS
    devices::adval,     // ADVAL
    system::argc,       // ARGC
    system::argv,       // ARGV$
    strings::asc,       // ASC
    math::asn,          // ASN
    math::atn,          // ATN
    devices::beat,      // BEAT
    devices::bget,      // BGET
    strings::chr,       // CHR$
    math::cos,          // COS
    system::count,      // COUNT
    math::deg,          // DEG
    devices::eof,       // EOF
    system::erl,        // ERL
    system::err,        // ERR
    system::eval,       // EVAL
    math::exp,          // EXP
    devices::get,       // GET
    devices::get_str,   // GET$
    devices::inkey,     // INKEY
    devices::inkey_str, // INKEY$
    strings::instr,     // INSTR(
    math::int,          // INT
    strings::len,       // LEN
    system::listo,      // LISTO
    math::ln,           // LN
    math::log,          // LOG
    devices::openin,    // OPENIN
    devices::openout,   // OPENOUT
    devices::openup,    // OPENUP
    math::pi,           // PI
    devices::point,     // POINT(
    devices::pos,       // POS
    math::rad,          // RAD
    system::report,     // REPORT$
    system::retcode,    // RETCODE
    math::rnd,          // RND
    math::sgn,          // SGN
    math::sin,          // SIN
    math::sqr,          // SQR
    strings::str,       // STR$
    strings::string,    // STRING$(
    arrays::sum,        // SUM
    math::tan,          // TAN
    devices::tempo,     // TEMPO
    system::usr,        // USR
    strings::val,       // VAL
    strings::verify,    // VERIFY(
    devices::vpos,      // VPOS
    system::sys,        // SYS(
    math::rnd_paren,    // RND(
    strings::xlate,     // XLATE$(
];

/// Call the built-in at the cursor and push its result.
pub(crate) fn dispatch(interp: &mut Interpreter, cur: &mut Cursor<'_>) -> EvalResult<()> {
    cur.bump();
    let id = cur.next_byte();
    let Some(handler) = FUNCTION_TABLE.get(usize::from(id)) else {
        return Err(broken("function dispatch"));
    };
    tracing::trace!(id, function = ?FunctionId::from_byte(id), "dispatch");
    let value = handler(interp, cur)?;
    interp.stack.push(value)
}

/// Evaluate a keyword used as a factor. The cursor is on the keyword.
pub(crate) fn keyword_factor(
    interp: &mut Interpreter,
    cur: &mut Cursor<'_>,
    keyword: u8,
) -> EvalResult<StackValue> {
    let handler: FunctionHandler = match keyword {
        token::NOT => system::not,
        token::TRUE => system::true_value,
        token::FALSE => system::false_value,
        token::END => system::end,
        token::TO => system::top,
        token::QUIT => system::quit,
        token::TRACE => system::trace,
        token::WIDTH => system::width,
        token::DIM => arrays::dim,
        token::MOD => arrays::modulus,
        token::COLOUR => devices::colour,
        token::TINT => devices::tint,
        token::MODE => devices::mode,
        token::VDU => devices::vdu,
        token::BEATS => devices::beats,
        _ => return Err(bad_expression()),
    };
    cur.bump();
    handler(interp, cur)
}

/// An ordinal with no function behind it means the token stream is corrupt.
fn bad_token(_interp: &mut Interpreter, _cur: &mut Cursor<'_>) -> EvalResult<StackValue> {
    Err(broken("function dispatch"))
}

/// A whole-array argument written `name()`.
fn get_arrayname(interp: &Interpreter, cur: &mut Cursor<'_>) -> EvalResult<Rc<ArrayDescriptor>> {
    if cur.peek() != token::ARRAYVAR {
        return Err(type_mismatch(Expected::Array));
    }
    cur.bump();
    let name = cur.read_name().ok_or_else(|| broken("array token"))?;
    if !cur.eat(b')') {
        return Err(missing_rparen());
    }
    interp.variables.array(name)
}

impl Interpreter {
    /// A new zero-length temporary.
    pub(crate) fn empty_string(&self) -> EvalResult<StackValue> {
        Ok(StackValue::StrTemp(self.arena.allocate(0)?))
    }

    /// A temporary holding a copy of `bytes`.
    pub(crate) fn temp_string(&self, bytes: &[u8]) -> EvalResult<StackValue> {
        Ok(StackValue::StrTemp(self.arena.copy_from(bytes)?))
    }
}
