//! Dimensioned arrays.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::errors::{bad_index, out_of_range, EvalResult};

/// Most dimensions an array may have.
pub const MAXDIMS: usize = 10;

/// Element type of an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Int,
    Int64,
    Float,
    Str,
}

/// Contiguous element storage, row-major.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElements {
    Int(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<Rc<[u8]>>),
}

impl ArrayElements {
    pub fn len(&self) -> usize {
        match self {
            ArrayElements::Int(v) => v.len(),
            ArrayElements::Int64(v) => v.len(),
            ArrayElements::Float(v) => v.len(),
            ArrayElements::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ArrayElements::Int(_) => ElementKind::Int,
            ArrayElements::Int64(_) => ElementKind::Int64,
            ArrayElements::Float(_) => ElementKind::Float,
            ArrayElements::Str(_) => ElementKind::Str,
        }
    }
}

/// A dimensioned array: its extents and its elements.
///
/// Invariant: `arrsize() == dims().iter().product()` and the element
/// storage holds exactly `arrsize()` elements. `DIM a(3)` has one extent of
/// 4 because BASIC indexes include both bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayDescriptor {
    dims: SmallVec<[usize; 2]>,
    elements: ArrayElements,
}

impl ArrayDescriptor {
    /// A zero-filled array with the given extents.
    pub fn new(dims: &[usize], kind: ElementKind) -> EvalResult<Self> {
        let size = checked_size(dims)?;
        let elements = match kind {
            ElementKind::Int => ArrayElements::Int(vec![0; size]),
            ElementKind::Int64 => ArrayElements::Int64(vec![0; size]),
            ElementKind::Float => ArrayElements::Float(vec![0.0; size]),
            ElementKind::Str => ArrayElements::Str(vec![Rc::from(&b""[..]); size]),
        };
        Ok(ArrayDescriptor {
            dims: SmallVec::from_slice(dims),
            elements,
        })
    }

    /// An array over existing elements. Their count must match the extents.
    pub fn from_elements(dims: &[usize], elements: ArrayElements) -> EvalResult<Self> {
        if checked_size(dims)? != elements.len() {
            return Err(out_of_range());
        }
        Ok(ArrayDescriptor {
            dims: SmallVec::from_slice(dims),
            elements,
        })
    }

    /// One-dimensional array.
    pub fn vector(elements: ArrayElements) -> Self {
        let len = elements.len();
        ArrayDescriptor {
            dims: SmallVec::from_slice(&[len]),
            elements,
        }
    }

    pub fn dimcount(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn arrsize(&self) -> usize {
        self.elements.len()
    }

    pub fn kind(&self) -> ElementKind {
        self.elements.kind()
    }

    pub fn elements(&self) -> &ArrayElements {
        &self.elements
    }

    /// Row-major offset of an element. `name` only feeds the error message.
    pub fn offset(&self, indexes: &[i64], name: &str) -> EvalResult<usize> {
        let mut offset = 0usize;
        for (&index, &extent) in indexes.iter().zip(&self.dims) {
            let within = usize::try_from(index).ok().filter(|&i| i < extent);
            let Some(i) = within else {
                return Err(bad_index(index, name));
            };
            offset = offset * extent + i;
        }
        Ok(offset)
    }
}

fn checked_size(dims: &[usize]) -> EvalResult<usize> {
    if dims.is_empty() || dims.len() > MAXDIMS || dims.contains(&0) {
        return Err(out_of_range());
    }
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests;
