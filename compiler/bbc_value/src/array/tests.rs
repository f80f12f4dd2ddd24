use super::*;
use pretty_assertions::assert_eq;

#[test]
fn size_is_product_of_extents() {
    let a = ArrayDescriptor::new(&[3, 4, 2], ElementKind::Float).unwrap();
    assert_eq!(a.dimcount(), 3);
    assert_eq!(a.arrsize(), 24);
    assert_eq!(a.kind(), ElementKind::Float);
}

#[test]
fn mismatched_element_count_rejected() {
    let err = ArrayDescriptor::from_elements(&[2, 2], ArrayElements::Int(vec![1, 2, 3]));
    assert!(err.is_err());
}

#[test]
fn too_many_dimensions() {
    assert!(ArrayDescriptor::new(&[1; MAXDIMS], ElementKind::Int).is_ok());
    assert!(ArrayDescriptor::new(&[1; MAXDIMS + 1], ElementKind::Int).is_err());
}

#[test]
fn row_major_offsets() {
    let a = ArrayDescriptor::new(&[3, 4], ElementKind::Int).unwrap();
    assert_eq!(a.offset(&[0, 0], "a").unwrap(), 0);
    assert_eq!(a.offset(&[1, 0], "a").unwrap(), 4);
    assert_eq!(a.offset(&[2, 3], "a").unwrap(), 11);
}

#[test]
fn index_bounds() {
    let a = ArrayDescriptor::new(&[3], ElementKind::Int).unwrap();
    let err = a.offset(&[3], "a%").unwrap_err();
    assert_eq!(
        err.kind(),
        &crate::ErrorKind::BadIndex {
            index: 3,
            name: "a%".to_owned()
        }
    );
    assert!(a.offset(&[-1], "a%").is_err());
}

#[test]
fn vector_has_one_dimension() {
    let a = ArrayDescriptor::vector(ArrayElements::Float(vec![1.0, 2.0]));
    assert_eq!(a.dims(), &[2]);
}
