use std::rc::Rc;

use crate::array::{ArrayDescriptor, ElementKind};
use crate::string::{StrRef, TempString};

/// One slot of the arithmetic stack.
///
/// Numeric variants are never reinterpreted in place; conversion goes
/// through the typed pops on [`crate::ValueStack`] or the helpers in
/// [`crate::convert`]. Array variants share the descriptor owned by the
/// variable store.
#[derive(Debug, PartialEq)]
pub enum StackValue {
    Int(i32),
    Int64(i64),
    Byte(u8),
    Float(f64),
    StrRef(StrRef),
    StrTemp(TempString),
    IntArray(Rc<ArrayDescriptor>),
    Int64Array(Rc<ArrayDescriptor>),
    FloatArray(Rc<ArrayDescriptor>),
    StrArray(Rc<ArrayDescriptor>),
}

/// The tag of a [`StackValue`], for peeking without popping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackTag {
    Int,
    Int64,
    Byte,
    Float,
    StrRef,
    StrTemp,
    IntArray,
    Int64Array,
    FloatArray,
    StrArray,
}

impl StackTag {
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            StackTag::Int | StackTag::Int64 | StackTag::Byte | StackTag::Float
        )
    }

    pub fn is_string(self) -> bool {
        matches!(self, StackTag::StrRef | StackTag::StrTemp)
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            StackTag::IntArray | StackTag::Int64Array | StackTag::FloatArray | StackTag::StrArray
        )
    }
}

impl StackValue {
    pub fn tag(&self) -> StackTag {
        match self {
            StackValue::Int(_) => StackTag::Int,
            StackValue::Int64(_) => StackTag::Int64,
            StackValue::Byte(_) => StackTag::Byte,
            StackValue::Float(_) => StackTag::Float,
            StackValue::StrRef(_) => StackTag::StrRef,
            StackValue::StrTemp(_) => StackTag::StrTemp,
            StackValue::IntArray(_) => StackTag::IntArray,
            StackValue::Int64Array(_) => StackTag::Int64Array,
            StackValue::FloatArray(_) => StackTag::FloatArray,
            StackValue::StrArray(_) => StackTag::StrArray,
        }
    }

    /// Wrap an array in the variant matching its element kind.
    pub fn array(descriptor: Rc<ArrayDescriptor>) -> Self {
        match descriptor.kind() {
            ElementKind::Int => StackValue::IntArray(descriptor),
            ElementKind::Int64 => StackValue::Int64Array(descriptor),
            ElementKind::Float => StackValue::FloatArray(descriptor),
            ElementKind::Str => StackValue::StrArray(descriptor),
        }
    }

    /// 32-bit when the value fits, 64-bit otherwise.
    pub fn varyint(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(small) => StackValue::Int(small),
            Err(_) => StackValue::Int64(value),
        }
    }

    /// String contents, for either ownership flavour.
    pub fn string_bytes(&self) -> Option<&[u8]> {
        match self {
            StackValue::StrRef(s) => Some(s.as_bytes()),
            StackValue::StrTemp(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        match *self {
            StackValue::Int(v) => Some(Number::Int(v)),
            StackValue::Int64(v) => Some(Number::Int64(v)),
            StackValue::Byte(v) => Some(Number::Int(i32::from(v))),
            StackValue::Float(v) => Some(Number::Float(v)),
            _ => None,
        }
    }
}

impl From<Number> for StackValue {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(v) => StackValue::Int(v),
            Number::Int64(v) => StackValue::Int64(v),
            Number::Float(v) => StackValue::Float(v),
        }
    }
}

/// A numeric operand after unsigned bytes have been widened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i32),
    Int64(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => f64::from(v),
            Number::Int64(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}
