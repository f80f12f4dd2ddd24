//! BBC Value - the data the evaluator moves around.
//!
//! - [`StackValue`] and [`ValueStack`]: the tagged arithmetic stack
//! - [`StringArena`], [`TempString`], [`StrRef`]: owned temporaries versus
//!   borrowed variable contents
//! - [`ArrayDescriptor`]: dimensioned arrays of one element kind
//! - [`EvalError`] / [`ErrorKind`]: the error taxonomy with legacy `ERR`
//!   numbers
//! - [`convert`]: checked numeric narrowing

mod array;
pub mod convert;
pub mod errors;
mod stack;
mod stack_value;
mod string;

pub use array::{ArrayDescriptor, ArrayElements, ElementKind, MAXDIMS};
pub use errors::{ErrorClass, ErrorKind, EvalError, EvalResult, Expected};
pub use stack::{ValueStack, DEFAULT_STACK_LIMIT};
pub use stack_value::{Number, StackTag, StackValue};
pub use string::{StrRef, StringArena, StringOperand, TempString, MAXSTRING};

/// Value of `TRUE`.
pub const BASTRUE: i32 = -1;
/// Value of `FALSE`.
pub const BASFALSE: i32 = 0;

/// Truth value as a BASIC integer.
#[inline]
pub fn bool_value(flag: bool) -> i32 {
    if flag {
        BASTRUE
    } else {
        BASFALSE
    }
}
