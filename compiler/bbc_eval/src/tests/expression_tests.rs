//! Operators, literals and variable references.

use super::*;
use bbc_value::{ArrayDescriptor, ArrayElements, Expected};

mod precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplication_binds_tighter() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "1 + 2 * 3"), StackValue::Int(7));
        assert_eq!(eval(&mut interp, "(1 + 2) * 3"), StackValue::Int(9));
    }

    #[test]
    fn comparison_below_arithmetic_and_above_logic() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "1 + 2 * 3 = 7"), StackValue::Int(-1));
        assert_eq!(eval(&mut interp, "1 < 2 AND 3 > 2"), StackValue::Int(-1));
        assert_eq!(eval(&mut interp, "1 > 2 OR 2 <> 2"), StackValue::Int(0));
    }

    #[test]
    fn power_and_integer_division() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "2 ^ 3"), StackValue::Float(8.0));
        assert_eq!(eval(&mut interp, "7 DIV 2"), StackValue::Int(3));
        assert_eq!(eval(&mut interp, "-7 MOD 3"), StackValue::Int(-1));
    }

    #[test]
    fn unary_minus_applies_to_the_factor() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "-2 ^ 2"), StackValue::Float(4.0));
        assert_eq!(eval(&mut interp, "- -3"), StackValue::Int(3));
    }
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_and_binary() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "&FF"), StackValue::Int(255));
        assert_eq!(eval(&mut interp, "&FFFFFFFF"), StackValue::Int(-1));
        assert_eq!(eval(&mut interp, "%101"), StackValue::Int(5));
    }

    #[test]
    fn integer_overflow_widens() {
        let mut interp = interpreter();
        assert_eq!(
            eval(&mut interp, "2147483647 + 1"),
            StackValue::Int64(2_147_483_648)
        );
        assert_eq!(
            eval(&mut interp, "5000000000"),
            StackValue::Int64(5_000_000_000)
        );
    }

    #[test]
    fn shifts() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, "1 << 4"), StackValue::Int(16));
        assert_eq!(eval(&mut interp, "-16 >> 2"), StackValue::Int(-4));
        assert_eq!(eval(&mut interp, "-16 >>> 28"), StackValue::Int(15));
    }

    #[test]
    fn strings_join_and_compare() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#""ab" + "cd""#), "abcd");
        assert_eq!(eval(&mut interp, r#""abc" < "abd""#), StackValue::Int(-1));
        assert_eq!(eval(&mut interp, r#""say ""hi""" = "x""#), StackValue::Int(0));
        assert_eq!(interp.arena().live_temporaries(), 0);
    }
}

mod variables {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set_int("count%", 5);
        store.set_float("ratio", 0.5);
        store.set_string("name$", "Bob");
        store.set_array(
            "grid%",
            ArrayDescriptor::from_elements(&[2, 3], ArrayElements::Int(vec![0, 1, 2, 10, 11, 12]))
                .unwrap(),
        );
        store
    }

    #[test]
    fn scalars() {
        let mut interp = with_store(store());
        assert_eq!(eval(&mut interp, "count% * 2"), StackValue::Int(10));
        assert_eq!(eval(&mut interp, "count% * ratio"), StackValue::Float(2.5));
        assert_eq!(eval_text(&mut interp, r#"name$ + "!""#), "Bob!");
    }

    #[test]
    fn string_variable_is_borrowed_not_copied() {
        let mut interp = with_store(store());
        let value = eval(&mut interp, "name$");
        assert!(matches!(value, StackValue::StrRef(_)));
        assert_eq!(interp.arena().live_temporaries(), 0);
    }

    #[test]
    fn array_elements() {
        let mut interp = with_store(store());
        assert_eq!(eval(&mut interp, "grid%(1, 2)"), StackValue::Int(12));
        assert_eq!(eval(&mut interp, "grid%(0, 1 + 1)"), StackValue::Int(2));
    }

    #[test]
    fn array_index_errors() {
        let mut interp = with_store(store());
        assert_eq!(
            eval_err(&mut interp, "grid%(1)"),
            ErrorKind::IndexCount {
                name: "grid%".into()
            }
        );
        assert_eq!(
            eval_err(&mut interp, "grid%(2, 0)"),
            ErrorKind::BadIndex {
                index: 2,
                name: "grid%".into()
            }
        );
    }

    #[test]
    fn missing_variable() {
        let mut interp = with_store(store());
        assert_eq!(
            eval_err(&mut interp, "total"),
            ErrorKind::VariableMissing {
                name: "total".into()
            }
        );
    }
}

mod malformed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unclosed_parenthesis() {
        let mut interp = interpreter();
        assert_eq!(eval_err(&mut interp, "(1 + 2"), ErrorKind::MissingRparen);
    }

    #[test]
    fn mixed_operand_types() {
        let mut interp = interpreter();
        assert_eq!(
            eval_err(&mut interp, r#"1 + "a""#),
            ErrorKind::TypeMismatch(Expected::Number)
        );
        assert_eq!(
            eval_err(&mut interp, r#"+"a""#),
            ErrorKind::TypeMismatch(Expected::Number)
        );
        assert_eq!(
            eval_err(&mut interp, r#""a" * "b""#),
            ErrorKind::TypeMismatch(Expected::Number)
        );
    }

    #[test]
    fn division_by_zero() {
        let mut interp = interpreter();
        assert_eq!(eval_err(&mut interp, "1 DIV 0"), ErrorKind::DivisionByZero);
        assert_eq!(eval_err(&mut interp, "1 MOD 0"), ErrorKind::DivisionByZero);
    }
}
