//! Pluggable storage for the flat accumulation buffer behind a grid.
//!
//! The grid never owns its values: it only knows how many scalars it needs and
//! where each one lives. Whatever accumulates the data (a `Vec`, a shared
//! reduction buffer, ...) implements [`Storage`] and is handed to the grid's
//! element accessors.

use core::fmt::{self, Debug};
use core::ops::AddAssign;

/// Contiguous, indexable storage for `V` with slice access.
pub trait Storage<V>: Debug {
    /// Construct a buffer of `len`, filled with `fill`.
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone;

    /// Current length in elements.
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resize to `new_len`, filling new cells with `fill`.
    fn resize(&mut self, new_len: usize, fill: V)
    where
        V: Clone;

    /// Entire read-only buffer.
    fn as_slice(&self) -> &[V];

    /// Entire mutable buffer.
    fn as_mut_slice(&mut self) -> &mut [V];

    /// Copy of the element at `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= len()`.
    #[inline]
    fn value_at(&self, offset: usize) -> V
    where
        V: Copy,
    {
        self.as_slice()[offset]
    }

    /// Overwrite the element at `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= len()`.
    #[inline]
    fn set_at(&mut self, offset: usize, value: V) {
        self.as_mut_slice()[offset] = value;
    }

    /// Add `value` in place to the element at `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= len()`.
    #[inline]
    fn add_at(&mut self, offset: usize, value: V)
    where
        V: AddAssign,
    {
        self.as_mut_slice()[offset] += value;
    }
}

/// `Vec`-backed storage (default).
#[derive(Clone, Default, PartialEq)]
pub struct VecStorage<V>(pub(crate) Vec<V>);

impl<V> Debug for VecStorage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecStorage")
            .field("len", &self.0.len())
            .finish()
    }
}

impl<V> Storage<V> for VecStorage<V> {
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone,
    {
        Self(vec![fill; len])
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn resize(&mut self, new_len: usize, fill: V)
    where
        V: Clone,
    {
        self.0.resize(new_len, fill);
    }

    fn as_slice(&self) -> &[V] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.0
    }
}

impl<V> From<Vec<V>> for VecStorage<V> {
    fn from(v: Vec<V>) -> Self {
        Self(v)
    }
}

impl<V> VecStorage<V> {
    /// Empty buffer; size it with [`Storage::resize`] or `Grid::resize`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Unwrap the backing `Vec`.
    pub fn into_inner(self) -> Vec<V> {
        self.0
    }
}
