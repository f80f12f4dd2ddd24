//! Native stack growth for the expression evaluator.
//!
//! BASIC expressions nest without a fixed bound: parentheses inside
//! parentheses, function arguments that are themselves expressions, and
//! `EVAL` strings that tokenize into further expressions. Every recursive
//! entry point of the evaluator runs through [`ensure_sufficient_stack`] so a
//! pathological program hits the arithmetic stack limit long before it can
//! exhaust the native stack.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining native stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the native stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
