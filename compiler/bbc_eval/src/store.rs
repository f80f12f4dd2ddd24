//! In-memory variable store.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use bbc_value::errors::{array_missing, no_dims, variable_missing};
use bbc_value::{ArrayDescriptor, EvalResult, StackValue, StrRef};

use crate::host::VariableStore;

/// Value held by a scalar variable.
#[derive(Clone, Debug, PartialEq)]
enum Scalar {
    Int(i32),
    Int64(i64),
    Byte(u8),
    Float(f64),
    Str(Rc<[u8]>),
}

/// Variables and arrays held in hash maps, keyed by name with its type
/// suffix (`count%`, `name$`).
///
/// Array names are stored without the opening parenthesis. An array that
/// has been declared but not dimensioned is kept as `None`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scalars: FxHashMap<Vec<u8>, Scalar>,
    arrays: FxHashMap<Vec<u8>, Option<Rc<ArrayDescriptor>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.scalars.insert(name.into(), Scalar::Int(value));
    }

    pub fn set_int64(&mut self, name: &str, value: i64) {
        self.scalars.insert(name.into(), Scalar::Int64(value));
    }

    pub fn set_byte(&mut self, name: &str, value: u8) {
        self.scalars.insert(name.into(), Scalar::Byte(value));
    }

    pub fn set_float(&mut self, name: &str, value: f64) {
        self.scalars.insert(name.into(), Scalar::Float(value));
    }

    pub fn set_string(&mut self, name: &str, value: impl AsRef<[u8]>) {
        self.scalars
            .insert(name.into(), Scalar::Str(Rc::from(value.as_ref())));
    }

    /// Make `name` known as an array without giving it dimensions.
    pub fn declare_array(&mut self, name: &str) {
        self.arrays.insert(name.into(), None);
    }

    pub fn set_array(&mut self, name: &str, array: ArrayDescriptor) {
        self.arrays.insert(name.into(), Some(Rc::new(array)));
    }
}

impl VariableStore for MemoryStore {
    fn variable(&self, name: &[u8]) -> EvalResult<StackValue> {
        let Some(value) = self.scalars.get(name) else {
            return Err(variable_missing(&String::from_utf8_lossy(name)));
        };
        Ok(match value {
            Scalar::Int(v) => StackValue::Int(*v),
            Scalar::Int64(v) => StackValue::Int64(*v),
            Scalar::Byte(v) => StackValue::Byte(*v),
            Scalar::Float(v) => StackValue::Float(*v),
            Scalar::Str(s) => StackValue::StrRef(StrRef::new(Rc::clone(s))),
        })
    }

    fn array(&self, name: &[u8]) -> EvalResult<Rc<ArrayDescriptor>> {
        match self.arrays.get(name) {
            Some(Some(array)) => Ok(Rc::clone(array)),
            Some(None) => Err(no_dims(&String::from_utf8_lossy(name))),
            None => Err(array_missing(&String::from_utf8_lossy(name))),
        }
    }
}
