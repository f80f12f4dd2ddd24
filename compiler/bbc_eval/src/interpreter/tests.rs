use super::*;
use bbc_ir::{token, TokenBuffer};
use bbc_value::{ErrorKind, StackValue};

fn interpreter() -> Interpreter {
    InterpreterBuilder::new().seed(-1).build()
}

mod evaluate {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_the_value_and_leaves_the_stack_empty() {
        let mut interp = interpreter();
        let mut tokens = TokenBuffer::new();
        tokens.push_int(41);
        tokens.push_byte(b'+');
        tokens.push_int(1);
        tokens.finish();

        assert_eq!(interp.evaluate(tokens.as_bytes()).unwrap(), StackValue::Int(42));
        assert_eq!(interp.stack().depth(), 0);
    }

    #[test]
    fn stops_at_a_colon() {
        let mut interp = interpreter();
        let value = interp.evaluate(&[token::INTONE, b':', token::INTZERO]).unwrap();
        assert_eq!(value, StackValue::Int(1));
    }

    #[test]
    fn trailing_tokens_are_a_syntax_error() {
        let mut interp = interpreter();
        let err = interp.evaluate(&[token::INTONE, token::INTZERO]).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Syntax);
        assert_eq!(interp.stack().depth(), 0);
    }

    #[test]
    fn empty_stream_is_a_bad_expression() {
        let mut interp = interpreter();
        let err = interp.evaluate(&[]).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::BadExpression);
    }

    #[test]
    fn failure_releases_temporaries() {
        let mut interp = interpreter();
        let err = interp
            .evaluate_source(r#""abc" + STRING$(3, "x") + 1"#)
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::TypeMismatch(bbc_value::Expected::String));
        assert_eq!(interp.stack().depth(), 0);
        assert_eq!(interp.arena().live_temporaries(), 0);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failure_is_recorded_with_the_current_line() {
        let mut interp = interpreter();
        interp.session_mut().line = 120;
        interp.evaluate_source("1 / 0").unwrap_err();

        assert_eq!(
            interp.last_error(),
            &LastError {
                number: 18,
                line: 120,
                message: "Division by zero".into(),
            }
        );
    }

    #[test]
    fn lexical_errors_are_recorded_too() {
        let mut interp = interpreter();
        let err = interp.evaluate_source("\"unterminated").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Syntax);
        assert_eq!(interp.last_error().number, 16);
    }

    #[test]
    fn success_keeps_the_previous_error() {
        let mut interp = interpreter();
        interp.evaluate_source("SQR -1").unwrap_err();
        interp.evaluate_source("1").unwrap();
        assert_eq!(interp.last_error().number, 21);
    }
}

mod state {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_variables() {
        let mut interp = interpreter();
        interp.set_static_var(1, 7);
        interp.set_static_var(99, 1);
        assert_eq!(interp.static_var(1), Some(7));
        assert_eq!(interp.static_var(STATIC_COUNT), None);
        assert_eq!(interp.evaluate_source("A% * 6").unwrap(), StackValue::Int(42));
    }

    #[test]
    fn at_percent_is_the_format_word() {
        let interp = InterpreterBuilder::new()
            .seed(-1)
            .format_word(FormatWord::new(0x0002_0300))
            .build();
        assert_eq!(interp.static_var(AT_PERCENT), Some(0x0002_0300));
        assert_eq!(interp.format_word().raw(), 0x0002_0300);
    }

    #[test]
    fn builder_defaults() {
        let interp = InterpreterBuilder::default().build();
        assert_eq!(interp.options(), EvalOptions::default());
        assert_eq!(interp.session(), &Session::default());
        assert_eq!(interp.format_word(), FormatWord::PRINT_DEFAULT);
        assert_eq!(interp.stack().depth(), 0);
    }

    #[test]
    fn stack_limit_is_enforced() {
        let mut interp = InterpreterBuilder::new().seed(-1).stack_limit(2).build();
        let err = interp.evaluate_source("1 + (2 + (3 + 4))").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::StackFull);
        assert_eq!(interp.stack().depth(), 0);
    }

    #[test]
    fn seed_fixes_the_sequence() {
        let mut a = InterpreterBuilder::new().seed(-99).build();
        let mut b = InterpreterBuilder::new().seed(-99).build();
        assert_eq!(
            a.evaluate_source("RND").unwrap(),
            b.evaluate_source("RND").unwrap()
        );
    }
}
