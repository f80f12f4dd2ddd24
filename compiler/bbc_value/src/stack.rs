use std::rc::Rc;

use crate::array::ArrayDescriptor;
use crate::convert::{int64_to_32, to_int, to_int64};
use crate::errors::{
    number_wanted, stack_empty, stack_full, string_wanted, type_mismatch, EvalResult, Expected,
};
use crate::stack_value::{Number, StackTag, StackValue};
use crate::string::StringOperand;

/// Default depth limit of the arithmetic stack.
pub const DEFAULT_STACK_LIMIT: usize = 4096;

/// The arithmetic stack.
///
/// Raw `push`/`pop` move values without looking at them. The typed pops
/// coerce within a class (any numeric tag to the requested width) and fail
/// with a type mismatch outside it. A value that fails a typed pop has
/// still been removed from the stack.
#[derive(Debug)]
pub struct ValueStack {
    items: Vec<StackValue>,
    limit: usize,
}

impl Default for ValueStack {
    fn default() -> Self {
        ValueStack::with_limit(DEFAULT_STACK_LIMIT)
    }
}

impl ValueStack {
    pub fn with_limit(limit: usize) -> Self {
        ValueStack {
            items: Vec::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: StackValue) -> EvalResult<()> {
        if self.items.len() >= self.limit {
            return Err(stack_full());
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> EvalResult<StackValue> {
        self.items.pop().ok_or_else(stack_empty)
    }

    pub fn peek(&self) -> Option<&StackValue> {
        self.items.last()
    }

    pub fn peek_tag(&self) -> Option<StackTag> {
        self.items.last().map(StackValue::tag)
    }

    /// Discard everything above `depth`. Temporaries are released as they
    /// are dropped.
    pub fn truncate(&mut self, depth: usize) {
        self.items.truncate(depth);
    }

    pub fn pop_number(&mut self) -> EvalResult<Number> {
        self.pop()?.number().ok_or_else(number_wanted)
    }

    /// Any numeric value as a float.
    pub fn pop_any_num_fp(&mut self) -> EvalResult<f64> {
        self.pop_number().map(Number::as_f64)
    }

    /// Any numeric value as a 32-bit integer.
    pub fn pop_any_num_32(&mut self) -> EvalResult<i32> {
        match self.pop_number()? {
            Number::Int(v) => Ok(v),
            Number::Int64(v) => int64_to_32(v),
            Number::Float(v) => to_int(v),
        }
    }

    /// Any numeric value as a 64-bit integer.
    pub fn pop_any_num_64(&mut self) -> EvalResult<i64> {
        match self.pop_number()? {
            Number::Int(v) => Ok(i64::from(v)),
            Number::Int64(v) => Ok(v),
            Number::Float(v) => to_int64(v),
        }
    }

    pub fn pop_string(&mut self) -> EvalResult<StringOperand> {
        match self.pop()? {
            StackValue::StrTemp(s) => Ok(StringOperand::Temp(s)),
            StackValue::StrRef(s) => Ok(StringOperand::Ref(s)),
            _ => Err(string_wanted()),
        }
    }

    pub fn pop_array(&mut self) -> EvalResult<Rc<ArrayDescriptor>> {
        match self.pop()? {
            StackValue::IntArray(a)
            | StackValue::Int64Array(a)
            | StackValue::FloatArray(a)
            | StackValue::StrArray(a) => Ok(a),
            _ => Err(type_mismatch(Expected::Array)),
        }
    }
}
