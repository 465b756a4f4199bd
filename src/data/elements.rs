//! Element access: `(point, element)` pairs to offsets in the flat buffer.
//!
//! Value `element` of grid point `point` lives at
//! `elements_per_point * point + element`. Index misuse is a programming
//! error: it is asserted in debug builds, and in release builds only the
//! buffer's own bounds check remains.

use crate::data::storage::Storage;
use crate::geometry::grid::Grid;
use crate::grid_error::GridError;

impl Grid {
    /// Size `buffer` to hold every element of every point.
    ///
    /// Existing values are kept where they fit; new cells are zero.
    ///
    /// # Errors
    /// `ElementsPerPointUnset` if the grid stores nothing per point.
    pub fn resize<S: Storage<f64>>(&self, buffer: &mut S) -> Result<(), GridError> {
        if self.elements_per_point() == 0 {
            return Err(GridError::ElementsPerPointUnset);
        }
        log::trace!(
            "resizing grid buffer to {} x {} values",
            self.total_points(),
            self.elements_per_point()
        );
        buffer.resize(self.buffer_len(), 0.0);
        Ok(())
    }

    /// Buffer offset of `element` at flat point `point`.
    #[inline]
    pub fn element_offset(&self, point: usize, element: usize) -> usize {
        debug_assert!(
            point < self.total_points(),
            "grid point {point} out of range (total {})",
            self.total_points()
        );
        debug_assert!(
            element < self.elements_per_point(),
            "element {element} out of range ({} per point)",
            self.elements_per_point()
        );
        self.elements_per_point() * point + element
    }

    /// Value of `element` at flat point `point`.
    #[inline]
    pub fn get_element<S: Storage<f64>>(&self, buffer: &S, point: usize, element: usize) -> f64 {
        buffer.value_at(self.element_offset(point, element))
    }

    /// Overwrite `element` at flat point `point`.
    #[inline]
    pub fn set_element<S: Storage<f64>>(
        &self,
        buffer: &mut S,
        point: usize,
        element: usize,
        value: f64,
    ) {
        buffer.set_at(self.element_offset(point, element), value);
    }

    /// Add `value` to `element` at flat point `point`.
    #[inline]
    pub fn add_to_element<S: Storage<f64>>(
        &self,
        buffer: &mut S,
        point: usize,
        element: usize,
        value: f64,
    ) {
        buffer.add_at(self.element_offset(point, element), value);
    }

    /// [`get_element`](Self::get_element) addressed by multi-index.
    #[inline]
    pub fn get_element_at<S: Storage<f64>>(
        &self,
        buffer: &S,
        indices: &[usize],
        element: usize,
    ) -> f64 {
        self.get_element(buffer, self.flat_index(indices), element)
    }

    /// [`set_element`](Self::set_element) addressed by multi-index.
    #[inline]
    pub fn set_element_at<S: Storage<f64>>(
        &self,
        buffer: &mut S,
        indices: &[usize],
        element: usize,
        value: f64,
    ) {
        self.set_element(buffer, self.flat_index(indices), element, value);
    }

    /// [`add_to_element`](Self::add_to_element) addressed by multi-index.
    #[inline]
    pub fn add_to_element_at<S: Storage<f64>>(
        &self,
        buffer: &mut S,
        indices: &[usize],
        element: usize,
        value: f64,
    ) {
        self.add_to_element(buffer, self.flat_index(indices), element, value);
    }
}
