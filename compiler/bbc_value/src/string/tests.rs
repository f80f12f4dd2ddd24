use super::*;
use pretty_assertions::assert_eq;

#[test]
fn zero_length_allocation() {
    let arena = StringArena::new();
    let s = arena.allocate(0).unwrap();
    assert!(s.is_empty());
    assert_eq!(arena.live_temporaries(), 1);
}

#[test]
fn drop_releases() {
    let arena = StringArena::new();
    {
        let _a = arena.copy_from(b"abc").unwrap();
        let _b = arena.allocate(10).unwrap();
        assert_eq!(arena.live_temporaries(), 2);
    }
    assert_eq!(arena.live_temporaries(), 0);
}

#[test]
fn into_bytes_releases_once() {
    let arena = StringArena::new();
    let s = arena.copy_from(b"xyz").unwrap();
    assert_eq!(s.into_bytes(), b"xyz".to_vec());
    assert_eq!(arena.live_temporaries(), 0);
}

#[test]
fn too_long() {
    let arena = StringArena::new();
    assert!(arena.allocate(MAXSTRING).is_ok());
    assert_eq!(
        arena.allocate(MAXSTRING + 1).unwrap_err().kind(),
        &crate::ErrorKind::StringTooLong
    );
    assert_eq!(arena.live_temporaries(), 0);
}

#[test]
fn push_bytes_checks_limit() {
    let arena = StringArena::new();
    let mut s = arena.allocate(MAXSTRING - 1).unwrap();
    assert!(s.push_bytes(b"a").is_ok());
    assert!(s.push_bytes(b"b").is_err());
    assert_eq!(s.len(), MAXSTRING);
}

#[test]
fn copy_on_write_leaves_reference_alone() {
    let arena = StringArena::new();
    let original = StrRef::from(&b"Hello"[..]);
    let mut temp = StringOperand::Ref(original.clone()).into_temp(&arena).unwrap();
    temp.as_mut_bytes()[0] = b'J';
    assert_eq!(temp.as_bytes(), b"Jello");
    assert_eq!(original.as_bytes(), b"Hello");
}

#[test]
fn owned_temporary_passes_through() {
    let arena = StringArena::new();
    let temp = arena.copy_from(b"own").unwrap();
    let again = StringOperand::Temp(temp).into_temp(&arena).unwrap();
    assert_eq!(again.as_bytes(), b"own");
    assert_eq!(arena.live_temporaries(), 1);
}

#[test]
fn drop_front() {
    let arena = StringArena::new();
    let mut s = arena.copy_from(b"abcdef").unwrap();
    s.drop_front(2);
    assert_eq!(s.as_bytes(), b"cdef");
    s.drop_front(99);
    assert!(s.is_empty());
}
