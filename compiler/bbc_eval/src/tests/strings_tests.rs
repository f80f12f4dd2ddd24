//! String built-ins.

use super::*;
use bbc_value::{ArrayDescriptor, ArrayElements, Expected};
use std::rc::Rc;

mod slicing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn left() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#"LEFT$("hello", 2)"#), "he");
        assert_eq!(eval_text(&mut interp, r#"LEFT$("hello", 9)"#), "hello");
        assert_eq!(eval_text(&mut interp, r#"LEFT$("hello", 0)"#), "");
        assert_eq!(eval_text(&mut interp, r#"LEFT$("hello", -1)"#), "hello");
        assert_eq!(eval_text(&mut interp, r#"LEFT$("hello")"#), "hell");
    }

    #[test]
    fn right() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#"RIGHT$("hello", 3)"#), "llo");
        assert_eq!(eval_text(&mut interp, r#"RIGHT$("hello", 10)"#), "hello");
        assert_eq!(eval_text(&mut interp, r#"RIGHT$("hello", -2)"#), "");
        assert_eq!(eval_text(&mut interp, r#"RIGHT$("hello")"#), "o");
        assert_eq!(eval_text(&mut interp, r#"RIGHT$("")"#), "");
    }

    #[test]
    fn mid() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 2, 3)"#), "ell");
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 3)"#), "llo");
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 0, 2)"#), "he");
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 6)"#), "");
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 4, -1)"#), "lo");
        assert_eq!(eval_text(&mut interp, r#"MID$("hello", 2, 0)"#), "");
    }

    #[test]
    fn unchanged_variable_is_passed_through() {
        let mut store = MemoryStore::new();
        store.set_string("s$", "abc");
        let mut interp = with_store(store);
        assert!(matches!(
            eval(&mut interp, "LEFT$(s$, 5)"),
            StackValue::StrRef(_)
        ));
        assert!(matches!(
            eval(&mut interp, "LEFT$(s$, 2)"),
            StackValue::StrTemp(_)
        ));
    }

    #[test]
    fn punctuation_errors() {
        let mut interp = interpreter();
        assert_eq!(
            eval_err(&mut interp, r#"MID$("abc" 2)"#),
            ErrorKind::MissingComma
        );
        assert_eq!(
            eval_err(&mut interp, r#"LEFT$("abc", 2"#),
            ErrorKind::MissingRparen
        );
        assert_eq!(
            eval_err(&mut interp, "LEFT$(3, 2)"),
            ErrorKind::TypeMismatch(Expected::String)
        );
    }
}

mod searching {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn instr() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, r#"INSTR("banana", "an")"#), StackValue::Int(2));
        assert_eq!(eval(&mut interp, r#"INSTR("banana", "an", 3)"#), StackValue::Int(4));
        assert_eq!(eval(&mut interp, r#"INSTR("banana", "x")"#), StackValue::Int(0));
        assert_eq!(eval(&mut interp, r#"INSTR("banana", "", 2)"#), StackValue::Int(2));
        assert_eq!(eval(&mut interp, r#"INSTR("banana", "an", -5)"#), StackValue::Int(2));
        assert_eq!(eval(&mut interp, r#"INSTR("abc", "", 1)"#), StackValue::Int(1));
        assert_eq!(eval(&mut interp, r#"INSTR("abc", "", 3)"#), StackValue::Int(0));
    }

    #[test]
    fn verify() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, r#"VERIFY("12a4", "0123456789")"#), StackValue::Int(3));
        assert_eq!(eval(&mut interp, r#"VERIFY("1234", "0123456789")"#), StackValue::Int(0));
        assert_eq!(eval(&mut interp, r#"VERIFY("a1b", "ab", 2)"#), StackValue::Int(2));
        assert_eq!(eval(&mut interp, r#"VERIFY("abc", "", 3)"#), StackValue::Int(3));
        assert_eq!(eval(&mut interp, r#"VERIFY("abc", "x", 9)"#), StackValue::Int(0));
        assert_eq!(eval(&mut interp, r#"VERIFY("ABC", "ABC")"#), StackValue::Int(0));
        assert_eq!(eval(&mut interp, r#"VERIFY("ABD", "ABC")"#), StackValue::Int(3));
        assert_eq!(eval(&mut interp, r#"VERIFY("X", "")"#), StackValue::Int(1));
    }
}

mod building {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_repeats() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#"STRING$(3, "ab")"#), "ababab");
        assert_eq!(eval_text(&mut interp, r#"STRING$(0, "ab")"#), "");
        assert_eq!(eval_text(&mut interp, r#"STRING$(-1, "ab")"#), "");
        assert_eq!(
            eval_err(&mut interp, r#"STRING$(40000, "ab")"#),
            ErrorKind::StringTooLong
        );
    }

    #[test]
    fn chr_and_asc() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, "CHR$ 65"), "A");
        assert_eq!(eval_text(&mut interp, "CHR$ 321"), "A");
        assert_eq!(eval(&mut interp, r#"ASC "A""#), StackValue::Int(65));
        assert_eq!(eval(&mut interp, r#"ASC """#), StackValue::Int(-1));
        assert_eq!(eval(&mut interp, r#"LEN "hello""#), StackValue::Int(5));
    }

    #[test]
    fn xlate_lowercases() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, r#"XLATE$("Hello World")"#), "hello world");
    }

    #[test]
    fn xlate_through_a_string_table() {
        let mut interp = interpreter();
        // Bytes beyond the table are left alone.
        assert_eq!(
            eval_text(&mut interp, r#"XLATE$("abc", STRING$(98, "*"))"#),
            "*bc"
        );
    }

    #[test]
    fn xlate_through_a_string_array() {
        let mut table: Vec<Rc<[u8]>> = vec![Rc::from(&b""[..]); 128];
        table[usize::from(b'a')] = Rc::from(&b"Alpha"[..]);
        let mut store = MemoryStore::new();
        store.set_array("t$", ArrayDescriptor::vector(ArrayElements::Str(table)));
        store.set_array(
            "grid$",
            ArrayDescriptor::new(&[2, 2], bbc_value::ElementKind::Str).unwrap(),
        );
        let mut interp = with_store(store);

        assert_eq!(eval_text(&mut interp, r#"XLATE$("abc", t$())"#), "Abc");
        assert_eq!(
            eval_err(&mut interp, r#"XLATE$("abc", grid$())"#),
            ErrorKind::TypeMismatch(Expected::OneDimension)
        );
    }
}

mod conversion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn str_decimal_and_hex() {
        let mut interp = interpreter();
        assert_eq!(eval_text(&mut interp, "STR$ 42"), "42");
        assert_eq!(eval_text(&mut interp, "STR$ -1.5"), "-1.5");
        assert_eq!(eval_text(&mut interp, "STR$~255"), "FF");
        assert_eq!(eval_text(&mut interp, "STR$~-1"), "FFFFFFFF");
        assert_eq!(
            eval_err(&mut interp, r#"STR$ "x""#),
            ErrorKind::TypeMismatch(Expected::Number)
        );
        assert_eq!(interp.arena().live_temporaries(), 0);
    }

    #[test]
    fn str_hex64() {
        let mut interp = InterpreterBuilder::new().seed(-1).hex64(true).build();
        assert_eq!(eval_text(&mut interp, "STR$~-1"), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn val() {
        let mut interp = interpreter();
        assert_eq!(eval(&mut interp, r#"VAL "42""#), StackValue::Int(42));
        assert_eq!(eval(&mut interp, r#"VAL " -3.5kg""#), StackValue::Float(-3.5));
        assert_eq!(eval(&mut interp, r#"VAL "none""#), StackValue::Int(0));
    }
}
