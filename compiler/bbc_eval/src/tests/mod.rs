//! Evaluation tests driven from source text through the default lexer.
//!
//! Grouped by the family of built-ins they exercise.

mod expression_tests;
mod strings_tests;

use bbc_value::ErrorKind;

use crate::{Interpreter, InterpreterBuilder, MemoryStore, StackValue};

fn interpreter() -> Interpreter {
    InterpreterBuilder::new().seed(-1).build()
}

fn with_store(store: MemoryStore) -> Interpreter {
    InterpreterBuilder::new().seed(-1).variables(store).build()
}

fn eval(interp: &mut Interpreter, source: &str) -> StackValue {
    match interp.evaluate_source(source) {
        Ok(value) => value,
        Err(err) => panic!("{source:?} failed: {err}"),
    }
}

/// Evaluate and return the string result as text.
fn eval_text(interp: &mut Interpreter, source: &str) -> String {
    let value = eval(interp, source);
    let Some(bytes) = value.string_bytes() else {
        panic!("{source:?} gave {value:?}, not a string");
    };
    String::from_utf8_lossy(bytes).into_owned()
}

fn eval_err(interp: &mut Interpreter, source: &str) -> ErrorKind {
    match interp.evaluate_source(source) {
        Ok(value) => panic!("{source:?} gave {value:?}, expected an error"),
        Err(err) => err.kind().clone(),
    }
}
