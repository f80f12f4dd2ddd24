use super::*;
use pretty_assertions::assert_eq;

#[test]
fn legacy_numbers() {
    assert_eq!(division_by_zero().number(), 18);
    assert_eq!(string_too_long().number(), 19);
    assert_eq!(missing_rparen().number(), 27);
    assert_eq!(missing_hash().number(), 45);
    assert_eq!(type_mismatch(Expected::NumericArray).number(), 6);
    assert_eq!(bad_index(12, "a%").number(), 15);
    assert_eq!(broken("dispatch").number(), 0);
}

#[test]
fn messages() {
    assert_eq!(
        type_mismatch(Expected::StringArray).message(),
        "Type mismatch: string array wanted"
    );
    assert_eq!(array_missing("fred%").message(), "Cannot find array 'fred%()'");
    assert_eq!(
        bad_index(11, "a").to_string(),
        "Array index value of 11 is out of range in reference to 'a()'"
    );
    assert_eq!(log_range().message(), "Tried to take log of zero or a negative number");
}

#[test]
fn classes() {
    assert_eq!(missing_comma().kind().class(), ErrorClass::Syntax);
    assert_eq!(string_wanted().kind().class(), ErrorClass::TypeMismatch);
    assert_eq!(negative_root().kind().class(), ErrorClass::Range);
    assert_eq!(no_dims("x").kind().class(), ErrorClass::UndefinedReference);
    assert_eq!(hit_eof().kind().class(), ErrorClass::Io);
}

#[test]
fn only_internal_errors_are_fatal() {
    assert!(broken("factor").is_fatal());
    assert!(stack_full().is_fatal());
    assert!(!division_by_zero().is_fatal());
    assert!(!syntax_error().is_fatal());
}
