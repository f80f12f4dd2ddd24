//! Expression evaluation over a token cursor.
//!
//! `expression` and `factor` are the two entry points every handler uses to
//! fetch its arguments. Both leave exactly one value on the stack and move
//! the cursor past what they consumed. Binary operators are parsed by
//! precedence climbing; see [`BinaryOp::precedence`].

use smallvec::SmallVec;

use bbc_ir::{token, Cursor};
use bbc_value::errors::{
    broken, index_count, missing_rparen, number_wanted, syntax_error, EvalError,
};
use bbc_value::{ArrayElements, EvalResult, StackValue, StrRef, StringOperand};

use crate::functions;
use crate::interpreter::Interpreter;
use crate::operators::{evaluate_binary, negate, BinaryOp};

impl Interpreter {
    /// Evaluate a full expression, leaving its value on the stack.
    pub fn expression(&mut self, cur: &mut Cursor<'_>) -> EvalResult<()> {
        bbc_stack::ensure_sufficient_stack(|| self.binary_expression(cur, 1))
    }

    fn binary_expression(&mut self, cur: &mut Cursor<'_>, min_prec: u8) -> EvalResult<()> {
        self.factor(cur)?;
        while let Some(op) = BinaryOp::from_byte(cur.peek()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            cur.bump();
            self.binary_expression(cur, prec + 1)?;
            let rhs = self.stack.pop()?;
            let lhs = self.stack.pop()?;
            let result = evaluate_binary(&self.arena, op, lhs, rhs)?;
            self.stack.push(result)?;
        }
        Ok(())
    }

    /// Evaluate a single factor, leaving its value on the stack.
    pub fn factor(&mut self, cur: &mut Cursor<'_>) -> EvalResult<()> {
        let value = match cur.peek() {
            token::XVAR => {
                cur.bump();
                let name = cur.read_name().ok_or_else(|| broken("variable token"))?;
                self.variables.variable(name)?
            }
            token::STATICVAR => {
                cur.bump();
                let index = cur.read_u8().ok_or_else(|| broken("static variable token"))?;
                let value = self
                    .static_var(usize::from(index))
                    .ok_or_else(|| broken("static variable token"))?;
                StackValue::Int(value)
            }
            token::ARRAYVAR => return bbc_stack::ensure_sufficient_stack(|| self.array_factor(cur)),
            token::INTZERO => {
                cur.bump();
                StackValue::Int(0)
            }
            token::INTONE => {
                cur.bump();
                StackValue::Int(1)
            }
            token::SMALLINT => {
                cur.bump();
                let byte = cur.read_u8().ok_or_else(|| broken("integer literal"))?;
                StackValue::Int(i32::from(byte) + 1)
            }
            token::INTCON => {
                cur.bump();
                StackValue::Int(cur.read_i32().ok_or_else(|| broken("integer literal"))?)
            }
            token::INT64CON => {
                cur.bump();
                StackValue::Int64(cur.read_i64().ok_or_else(|| broken("integer literal"))?)
            }
            token::FLOATZERO => {
                cur.bump();
                StackValue::Float(0.0)
            }
            token::FLOATONE => {
                cur.bump();
                StackValue::Float(1.0)
            }
            token::FLOATCON => {
                cur.bump();
                StackValue::Float(cur.read_f64().ok_or_else(|| broken("float literal"))?)
            }
            token::STRINGCON => {
                cur.bump();
                let text = cur.read_string().ok_or_else(|| broken("string literal"))?;
                StackValue::StrRef(StrRef::from(text))
            }
            b'(' => {
                cur.bump();
                self.expression(cur)?;
                expect(cur, b')', missing_rparen)?;
                return Ok(());
            }
            b'-' => {
                cur.bump();
                self.factor(cur)?;
                let operand = self.stack.pop()?;
                negate(operand)?
            }
            b'+' => {
                cur.bump();
                self.factor(cur)?;
                let operand = self.stack.pop()?;
                if !operand.tag().is_numeric() {
                    return Err(number_wanted());
                }
                operand
            }
            token::FUNCTION => return functions::dispatch(self, cur),
            byte => functions::keyword_factor(self, cur, byte)?,
        };
        self.stack.push(value)
    }

    /// `name(i, j, ...)` or the whole array `name()`.
    fn array_factor(&mut self, cur: &mut Cursor<'_>) -> EvalResult<()> {
        cur.bump();
        let name = cur.read_name().ok_or_else(|| broken("array token"))?;
        if cur.eat(b')') {
            let array = self.variables.array(name)?;
            return self.stack.push(StackValue::array(array));
        }

        let mut indexes: SmallVec<[i64; 4]> = SmallVec::new();
        loop {
            self.expression(cur)?;
            indexes.push(i64::from(self.stack.pop_any_num_32()?));
            if !cur.eat(b',') {
                break;
            }
        }
        expect(cur, b')', missing_rparen)?;

        let array = self.variables.array(name)?;
        let display = String::from_utf8_lossy(name);
        if indexes.len() != array.dimcount() {
            return Err(index_count(&display));
        }
        let offset = array.offset(&indexes, &display)?;
        let element = match array.elements() {
            ArrayElements::Int(v) => v.get(offset).copied().map(StackValue::Int),
            ArrayElements::Int64(v) => v.get(offset).copied().map(StackValue::Int64),
            ArrayElements::Float(v) => v.get(offset).copied().map(StackValue::Float),
            ArrayElements::Str(v) => v
                .get(offset)
                .map(|s| StackValue::StrRef(StrRef::new(std::rc::Rc::clone(s)))),
        };
        self.stack
            .push(element.ok_or_else(|| broken("array element offset"))?)
    }

    // Argument fetchers shared by the function handlers.

    pub(crate) fn eval_int(&mut self, cur: &mut Cursor<'_>) -> EvalResult<i32> {
        self.expression(cur)?;
        self.stack.pop_any_num_32()
    }

    pub(crate) fn eval_float(&mut self, cur: &mut Cursor<'_>) -> EvalResult<f64> {
        self.expression(cur)?;
        self.stack.pop_any_num_fp()
    }

    pub(crate) fn eval_string(&mut self, cur: &mut Cursor<'_>) -> EvalResult<StringOperand> {
        self.expression(cur)?;
        self.stack.pop_string()
    }

    pub(crate) fn factor_int(&mut self, cur: &mut Cursor<'_>) -> EvalResult<i32> {
        self.factor(cur)?;
        self.stack.pop_any_num_32()
    }

    pub(crate) fn factor_int64(&mut self, cur: &mut Cursor<'_>) -> EvalResult<i64> {
        self.factor(cur)?;
        self.stack.pop_any_num_64()
    }

    pub(crate) fn factor_float(&mut self, cur: &mut Cursor<'_>) -> EvalResult<f64> {
        self.factor(cur)?;
        self.stack.pop_any_num_fp()
    }

    pub(crate) fn factor_string(&mut self, cur: &mut Cursor<'_>) -> EvalResult<StringOperand> {
        self.factor(cur)?;
        self.stack.pop_string()
    }
}

/// Consume `byte` or fail with the error `missing` builds.
pub(crate) fn expect(cur: &mut Cursor<'_>, byte: u8, missing: fn() -> EvalError) -> EvalResult<()> {
    if cur.eat(byte) {
        Ok(())
    } else {
        Err(missing())
    }
}

/// Fail with a syntax error unless `byte` is next.
pub(crate) fn expect_syntax(cur: &mut Cursor<'_>, byte: u8) -> EvalResult<()> {
    expect(cur, byte, syntax_error)
}
