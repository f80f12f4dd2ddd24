//! Error types for expression evaluation.
//!
//! Every condition carries the `ERR` number and message text of the legacy
//! dialect so programs that inspect `ERR` and `REPORT$` keep working.
//! Factory functions (e.g. [`division_by_zero`]) are the public way to build
//! errors and are kept out of the hot path with `#[cold]`.

use std::fmt;

use thiserror::Error;

use crate::StackValue;

/// Result of an evaluation step. Defaults to producing a stack value.
pub type EvalResult<T = StackValue> = Result<T, EvalError>;

/// What a type mismatch wanted instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    Number,
    String,
    Array,
    StringArray,
    NumericArray,
    OneDimension,
    SuitableVariable,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::Number => "number wanted",
            Expected::String => "string wanted",
            Expected::Array => "array wanted",
            Expected::StringArray => "string array wanted",
            Expected::NumericArray => "numeric array wanted",
            Expected::OneDimension => "array must have only one dimension",
            Expected::SuitableVariable => "unsuitable variable type for operation",
        })
    }
}

/// Coarse grouping of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing punctuation or malformed expression.
    Syntax,
    /// Wrong kind of value on the stack.
    TypeMismatch,
    /// Numeric domain, index or length out of bounds.
    Range,
    /// Variable or array not found or not dimensioned.
    UndefinedReference,
    /// Corrupted token stream or exhausted interpreter resources.
    /// Never recoverable by the program.
    Internal,
    /// Reported by a collaborator (files, devices).
    Io,
}

/// A typed error condition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Type mismatch: {0}")]
    TypeMismatch(Expected),
    #[error("Cannot find array '{name}()'")]
    ArrayMissing { name: String },
    #[error("The dimensions of array '{name}()' have not been defined")]
    NoDims { name: String },
    #[error("Array index value of {index} is out of range in reference to '{name}()'")]
    BadIndex { index: i64, name: String },
    #[error("Number of array indexes in reference to '{name}()' is wrong")]
    IndexCount { name: String },
    #[error("The dimension number in call to 'DIM()' is out of range")]
    DimRange,
    #[error("Cannot find variable '{name}'")]
    VariableMissing { name: String },
    #[error("Syntax error")]
    Syntax,
    #[error("Syntax error in expression")]
    BadExpression,
    #[error("Missing ','")]
    MissingComma,
    #[error("Missing '('")]
    MissingLparen,
    #[error("Missing ')'")]
    MissingRparen,
    #[error("Missing '#'")]
    MissingHash,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Character string is too long")]
    StringTooLong,
    #[error("Number is out of range")]
    Range,
    #[error("Tried to take square root of a negative number")]
    NegativeRoot,
    #[error("Tried to take log of zero or a negative number")]
    LogRange,
    #[error("Handle is invalid or file associated with it has been closed")]
    BadHandle,
    #[error("Have reached end of file")]
    HitEof,
    #[error("Cannot find file '{name}'")]
    FileNotFound { name: String },
    #[error("Unsupported Basic V/VI feature found")]
    Unsupported,
    #[error("Arithmetic stack overflow")]
    StackFull,
    #[error("Arithmetic stack is empty")]
    StackEmpty,
    #[error("The interpreter has gone wrong in {location}")]
    Broken { location: &'static str },
}

impl ErrorKind {
    /// The value `ERR` reports for this condition.
    pub fn number(&self) -> i32 {
        match self {
            ErrorKind::TypeMismatch(_) => 6,
            ErrorKind::ArrayMissing { .. } | ErrorKind::NoDims { .. } => 14,
            ErrorKind::BadIndex { .. } | ErrorKind::IndexCount { .. } | ErrorKind::DimRange => 15,
            ErrorKind::Syntax | ErrorKind::BadExpression => 16,
            ErrorKind::DivisionByZero => 18,
            ErrorKind::StringTooLong => 19,
            ErrorKind::Range => 20,
            ErrorKind::NegativeRoot => 21,
            ErrorKind::LogRange => 22,
            ErrorKind::VariableMissing { .. } => 26,
            ErrorKind::MissingComma | ErrorKind::MissingLparen | ErrorKind::MissingRparen => 27,
            ErrorKind::MissingHash => 45,
            ErrorKind::FileNotFound { .. } => 214,
            ErrorKind::BadHandle => 222,
            ErrorKind::HitEof => 223,
            ErrorKind::Unsupported
            | ErrorKind::StackFull
            | ErrorKind::StackEmpty
            | ErrorKind::Broken { .. } => 0,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::Syntax
            | ErrorKind::BadExpression
            | ErrorKind::MissingComma
            | ErrorKind::MissingLparen
            | ErrorKind::MissingRparen
            | ErrorKind::MissingHash => ErrorClass::Syntax,
            ErrorKind::TypeMismatch(_) => ErrorClass::TypeMismatch,
            ErrorKind::BadIndex { .. }
            | ErrorKind::IndexCount { .. }
            | ErrorKind::DimRange
            | ErrorKind::DivisionByZero
            | ErrorKind::StringTooLong
            | ErrorKind::Range
            | ErrorKind::NegativeRoot
            | ErrorKind::LogRange => ErrorClass::Range,
            ErrorKind::ArrayMissing { .. }
            | ErrorKind::NoDims { .. }
            | ErrorKind::VariableMissing { .. } => ErrorClass::UndefinedReference,
            ErrorKind::Unsupported
            | ErrorKind::StackFull
            | ErrorKind::StackEmpty
            | ErrorKind::Broken { .. } => ErrorClass::Internal,
            ErrorKind::BadHandle | ErrorKind::HitEof | ErrorKind::FileNotFound { .. } => {
                ErrorClass::Io
            }
        }
    }

    /// Fatal errors cannot be trapped by `ON ERROR`.
    pub fn is_fatal(&self) -> bool {
        self.class() == ErrorClass::Internal
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: ErrorKind,
}

impl EvalError {
    pub fn new(kind: ErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Legacy `ERR` number.
    pub fn number(&self) -> i32 {
        self.kind.number()
    }

    /// Text reported by `REPORT$`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl From<ErrorKind> for EvalError {
    fn from(kind: ErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Syntax

#[cold]
pub fn syntax_error() -> EvalError {
    ErrorKind::Syntax.into()
}

#[cold]
pub fn bad_expression() -> EvalError {
    ErrorKind::BadExpression.into()
}

#[cold]
pub fn missing_comma() -> EvalError {
    ErrorKind::MissingComma.into()
}

#[cold]
pub fn missing_lparen() -> EvalError {
    ErrorKind::MissingLparen.into()
}

#[cold]
pub fn missing_rparen() -> EvalError {
    ErrorKind::MissingRparen.into()
}

#[cold]
pub fn missing_hash() -> EvalError {
    ErrorKind::MissingHash.into()
}

// Types

#[cold]
pub fn type_mismatch(expected: Expected) -> EvalError {
    ErrorKind::TypeMismatch(expected).into()
}

#[cold]
pub fn number_wanted() -> EvalError {
    type_mismatch(Expected::Number)
}

#[cold]
pub fn string_wanted() -> EvalError {
    type_mismatch(Expected::String)
}

// Ranges

#[cold]
pub fn division_by_zero() -> EvalError {
    ErrorKind::DivisionByZero.into()
}

#[cold]
pub fn string_too_long() -> EvalError {
    ErrorKind::StringTooLong.into()
}

#[cold]
pub fn out_of_range() -> EvalError {
    ErrorKind::Range.into()
}

#[cold]
pub fn negative_root() -> EvalError {
    ErrorKind::NegativeRoot.into()
}

#[cold]
pub fn log_range() -> EvalError {
    ErrorKind::LogRange.into()
}

#[cold]
pub fn dim_range() -> EvalError {
    ErrorKind::DimRange.into()
}

#[cold]
pub fn bad_index(index: i64, name: &str) -> EvalError {
    ErrorKind::BadIndex {
        index,
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn index_count(name: &str) -> EvalError {
    ErrorKind::IndexCount {
        name: name.to_owned(),
    }
    .into()
}

// References

#[cold]
pub fn array_missing(name: &str) -> EvalError {
    ErrorKind::ArrayMissing {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn no_dims(name: &str) -> EvalError {
    ErrorKind::NoDims {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn variable_missing(name: &str) -> EvalError {
    ErrorKind::VariableMissing {
        name: name.to_owned(),
    }
    .into()
}

// Collaborators

#[cold]
pub fn bad_handle() -> EvalError {
    ErrorKind::BadHandle.into()
}

#[cold]
pub fn hit_eof() -> EvalError {
    ErrorKind::HitEof.into()
}

#[cold]
pub fn file_not_found(name: &str) -> EvalError {
    ErrorKind::FileNotFound {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn unsupported() -> EvalError {
    ErrorKind::Unsupported.into()
}

// Internal

#[cold]
pub fn stack_full() -> EvalError {
    ErrorKind::StackFull.into()
}

#[cold]
pub fn stack_empty() -> EvalError {
    ErrorKind::StackEmpty.into()
}

/// The token stream or interpreter state is inconsistent.
#[cold]
pub fn broken(location: &'static str) -> EvalError {
    ErrorKind::Broken { location }.into()
}

#[cfg(test)]
mod tests;
