//! Error-accumulating results.
//!
//! [`Checked`] is a plain `Result` whose error side is a non-empty list.
//! `?` and `and_then` give fail-fast sequencing; [`map2`] and [`map3`] give
//! accumulation for independent sub-results, concatenating every error in
//! argument order.

use core::fmt;

use smallvec::{SmallVec, smallvec};

use super::TypeError;
use crate::Vec;

/// A non-empty, ordered collection of type errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeErrors(SmallVec<[TypeError; 1]>);

pub type Checked<T> = Result<T, TypeErrors>;

impl TypeErrors {
    pub fn single(error: TypeError) -> Self {
        TypeErrors(smallvec![error])
    }

    /// Build from a list, or `None` if it is empty.
    pub fn from_vec(errors: Vec<TypeError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(TypeErrors(SmallVec::from_vec(errors)))
        }
    }

    /// `self` followed by `other`.
    pub fn concat(mut self, other: TypeErrors) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn push(&mut self, error: TypeError) {
        self.0.push(error);
    }

    pub fn first(&self) -> &TypeError {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TypeError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TypeError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<TypeError> {
        self.0.into_vec()
    }
}

impl From<TypeError> for TypeErrors {
    fn from(error: TypeError) -> Self {
        TypeErrors::single(error)
    }
}

impl IntoIterator for TypeErrors {
    type Item = TypeError;
    type IntoIter = smallvec::IntoIter<[TypeError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeErrors {
    type Item = &'a TypeError;
    type IntoIter = core::slice::Iter<'a, TypeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TypeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::error::format_errors(self.as_slice()))
    }
}

impl core::error::Error for TypeErrors {}

/// Combine two independent results. Both error lists survive, `a`'s first.
pub fn map2<A, B, R>(a: Checked<A>, b: Checked<B>, f: impl FnOnce(A, B) -> R) -> Checked<R> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok(f(a, b)),
        (Err(ea), Err(eb)) => Err(ea.concat(eb)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}

/// Three-way [`map2`].
pub fn map3<A, B, C, R>(
    a: Checked<A>,
    b: Checked<B>,
    c: Checked<C>,
    f: impl FnOnce(A, B, C) -> R,
) -> Checked<R> {
    let ab = map2(a, b, |a, b| (a, b));
    map2(ab, c, |(a, b), c| f(a, b, c))
}
