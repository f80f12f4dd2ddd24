//! Property-based tests for the evaluator.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::rc::Rc;

use bbc_eval::{
    ArrayDescriptor, ArrayElements, Interpreter, InterpreterBuilder, MemoryStore, Prng, StackValue,
};
use bbc_ir::{FunctionId, TokenBuffer};
use proptest::prelude::*;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new().seed(-1).build()
}

/// `id$()` maps every ASCII code to itself.
fn identity_tables() -> Interpreter {
    let entries: Vec<Rc<[u8]>> = (0u8..128).map(|b| Rc::from(&[b][..])).collect();
    let mut store = MemoryStore::new();
    store.set_array("id$", ArrayDescriptor::vector(ArrayElements::Str(entries)));
    InterpreterBuilder::new().seed(-1).variables(store).build()
}

fn as_i64(value: &StackValue) -> Option<i64> {
    match *value {
        StackValue::Int(v) => Some(i64::from(v)),
        StackValue::Int64(v) => Some(v),
        _ => None,
    }
}

proptest! {
    #[test]
    fn integer_addition_never_overflows(a in any::<i32>(), b in any::<i32>()) {
        let mut tokens = TokenBuffer::new();
        tokens.push_int(a);
        tokens.push_byte(b'+');
        tokens.push_int(b);
        tokens.finish();

        let mut interp = interpreter();
        let sum = interp.evaluate(tokens.as_bytes()).unwrap();
        prop_assert_eq!(as_i64(&sum), Some(i64::from(a) + i64::from(b)));
        prop_assert_eq!(interp.stack().depth(), 0);
    }

    #[test]
    fn val_reads_back_str(n in any::<i32>()) {
        let mut tokens = TokenBuffer::new();
        tokens.push_function(FunctionId::Val);
        tokens.push_function(FunctionId::Str);
        tokens.push_int(n);
        tokens.finish();

        let mut interp = interpreter();
        prop_assert_eq!(interp.evaluate(tokens.as_bytes()).unwrap(), StackValue::Int(n));
        prop_assert_eq!(interp.arena().live_temporaries(), 0);
    }

    #[test]
    fn left_and_right_partition_a_string(text in "[a-z ]{0,30}", cut in 0usize..=30) {
        let cut = cut.min(text.len());
        let source = format!(
            r#"LEFT$("{text}", {cut}) + RIGHT$("{text}", {})"#,
            text.len() - cut
        );
        let mut interp = interpreter();
        let joined = interp.evaluate_source(&source).unwrap();
        prop_assert_eq!(joined.string_bytes(), Some(text.as_bytes()));
        drop(joined);
        prop_assert_eq!(interp.arena().live_temporaries(), 0);
    }

    #[test]
    fn instr_finds_what_mid_extracts(text in "[a-c]{1,20}", start in 1usize..=20, len in 1usize..=5) {
        prop_assume!(start <= text.len());
        let source = format!(r#"INSTR("{text}", MID$("{text}", {start}, {len})) <= {start}"#);
        let mut interp = interpreter();
        prop_assert_eq!(interp.evaluate_source(&source).unwrap(), StackValue::Int(-1));
    }

    #[test]
    fn rnd_stays_in_range(seed in 1i32..=i32::MAX, n in 2i32..=1000) {
        let mut interp = interpreter();
        interp.evaluate_source(&format!("RND(-{seed})")).unwrap();
        for _ in 0..8 {
            let value = interp.evaluate_source(&format!("RND({n})")).unwrap();
            let drawn = as_i64(&value).unwrap();
            prop_assert!((1..=i64::from(n)).contains(&drawn), "RND({}) gave {}", n, drawn);
        }
    }

    #[test]
    fn failed_evaluations_leave_nothing_behind(text in "[a-z]{0,10}", divisor in -3i32..=3) {
        let source = format!(r#"LEN ("{text}" + STRING$(2, "x")) DIV {divisor}"#);
        let mut interp = interpreter();
        let result = interp.evaluate_source(&source);
        prop_assert_eq!(result.is_err(), divisor == 0);
        drop(result);
        prop_assert_eq!(interp.stack().depth(), 0);
        prop_assert_eq!(interp.arena().live_temporaries(), 0);
    }

    #[test]
    fn mid_agrees_with_slicing(text in "[a-z]{0,20}", start in 1usize..=22, len in 0usize..=22) {
        let source = format!(r#"MID$("{text}", {start}, {len})"#);
        let mut interp = interpreter();
        let value = interp.evaluate_source(&source).unwrap();
        let from = (start - 1).min(text.len());
        let to = (from + len).min(text.len());
        prop_assert_eq!(value.string_bytes(), Some(&text.as_bytes()[from..to]));
    }

    #[test]
    fn xlate_through_identity_is_unchanged(text in "[ -!#-~]{0,30}") {
        let mut interp = identity_tables();
        let value = interp
            .evaluate_source(&format!(r#"XLATE$("{text}", id$())"#))
            .unwrap();
        prop_assert_eq!(value.string_bytes(), Some(text.as_bytes()));
    }

    #[test]
    fn fraction_is_a_unit_interval(seed in any::<i32>(), steps in 0usize..16) {
        let mut prng = Prng::seeded(seed);
        for _ in 0..steps {
            prng.advance();
        }
        let fraction = prng.fraction();
        prop_assert!((0.0..1.0).contains(&fraction));
        prop_assert_eq!(prng.fraction().to_bits(), fraction.to_bits());
    }
}
