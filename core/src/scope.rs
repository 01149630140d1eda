//! Immutable, persistent name bindings.
//!
//! Used by both the analyzer (binds types) and the evaluator (binds values).
//! A scope is never mutated: [`Scope::bind`] returns a new scope whose
//! innermost frame holds the new binding and whose parent is the old scope.
//! Cloning a scope only bumps a reference count, so a caller can keep the
//! old scope around after extending it.

use alloc::sync::Arc;
use core::fmt;

use hashbrown::{HashMap, HashSet};

use crate::{String, ToString, Vec};

pub struct Scope<T> {
    bindings: Arc<HashMap<String, T>>,
    parent: Option<Arc<Scope<T>>>,
}

impl<T> Scope<T> {
    pub fn empty() -> Self {
        Scope {
            bindings: Arc::new(HashMap::new()),
            parent: None,
        }
    }

    /// Extend with one binding. A binding of the same name further out is
    /// shadowed, not replaced.
    pub fn bind(&self, name: impl Into<String>, value: T) -> Self {
        let mut frame = HashMap::with_capacity(1);
        frame.insert(name.into(), value);
        Scope {
            bindings: Arc::new(frame),
            parent: Some(Arc::new(self.clone())),
        }
    }

    /// Extend with many bindings at once, as a single frame over `self`.
    /// Later duplicates within `bindings` win.
    pub fn extend<K: Into<String>>(&self, bindings: impl IntoIterator<Item = (K, T)>) -> Self {
        Scope {
            bindings: Arc::new(
                bindings
                    .into_iter()
                    .map(|(name, value)| (name.into(), value))
                    .collect(),
            ),
            parent: Some(Arc::new(self.clone())),
        }
    }

    /// Number of frames a lookup may visit.
    pub fn frames(&self) -> usize {
        let mut count = 1;
        let mut scope = self;
        while let Some(parent) = scope.parent.as_deref() {
            count += 1;
            scope = parent;
        }
        count
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            scope = scope.parent.as_deref()?;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.parent.as_ref().is_none_or(|p| p.is_empty())
    }

    /// Visible bindings, innermost first, with shadowed entries omitted.
    /// Names within one frame come out in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        let mut scope = Some(self);
        while let Some(current) = scope {
            for (name, value) in current.bindings.iter() {
                if seen.insert(name.as_str()) {
                    out.push((name.as_str(), value));
                }
            }
            scope = current.parent.as_deref();
        }
        out.into_iter()
    }
}

impl<T> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Scope {
            bindings: Arc::clone(&self.bindings),
            parent: self.parent.clone(),
        }
    }
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a single frame. Later duplicates win.
impl<K: ToString, T> FromIterator<(K, T)> for Scope<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Scope {
            bindings: Arc::new(
                iter.into_iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
            ),
            parent: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
