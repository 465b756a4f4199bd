//! Conversions between flat point indices, multi-indices and coordinates.
//!
//! Flattening is column-major: the first axis varies fastest, so for extents
//! `(n0, n1, n2)` the point `(i0, i1, i2)` lives at `i0 + n0 * (i1 + n1 * i2)`.

use crate::geometry::grid::Grid;

/// Flatten `indices` over `extents` in column-major order.
///
/// Both slices must be non-empty and of equal length.
pub fn flatten(extents: &[usize], indices: &[usize]) -> usize {
    debug_assert_eq!(extents.len(), indices.len());
    let d = indices.len();
    let mut index = indices[d - 1];
    for k in (1..d).rev() {
        index = index * extents[k - 1] + indices[k - 1];
    }
    index
}

/// Invert [`flatten`] by successive division, writing into `out`.
///
/// The last axis takes whatever quotient remains, so a `flat` past the end of
/// the grid yields an out-of-range last index rather than wrapping.
pub fn unflatten_into(extents: &[usize], flat: usize, out: &mut [usize]) {
    debug_assert_eq!(extents.len(), out.len());
    let Some((last, leading)) = out.split_last_mut() else {
        return;
    };
    let mut rest = flat;
    for (slot, &n) in leading.iter_mut().zip(extents) {
        *slot = rest % n;
        rest /= n;
    }
    *last = rest;
}

impl Grid {
    /// Flat point index of a multi-index.
    #[inline]
    pub fn flat_index(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(indices.len(), self.dimension());
        flatten(self.extents(), indices)
    }

    /// Multi-index of flat point `flat`.
    pub fn multi_index(&self, flat: usize) -> Vec<usize> {
        let mut out = vec![0; self.dimension()];
        self.multi_index_into(flat, &mut out);
        out
    }

    /// Multi-index of flat point `flat`, written into a caller buffer.
    #[inline]
    pub fn multi_index_into(&self, flat: usize, out: &mut [usize]) {
        debug_assert_eq!(out.len(), self.dimension());
        unflatten_into(self.extents(), flat, out);
    }

    /// Coordinates of the grid point with multi-index `indices`.
    pub fn coordinates_of(&self, indices: &[usize]) -> Vec<f64> {
        debug_assert_eq!(indices.len(), self.dimension());
        self.axes()
            .iter()
            .zip(indices)
            .map(|(axis, &i)| axis.coordinate(i))
            .collect()
    }

    /// Coordinates of flat grid point `point`.
    pub fn point_coordinates(&self, point: usize) -> Vec<f64> {
        debug_assert!(point < self.total_points());
        self.coordinates_of(&self.multi_index(point))
    }

    /// Truncated bin indices of a position.
    ///
    /// Positions outside the grid give indices outside `[0, nbin)`; guarding
    /// against that is up to the caller (see [`point_index_of`](Self::point_index_of)).
    pub fn bin_indices(&self, x: &[f64]) -> Vec<isize> {
        debug_assert_eq!(x.len(), self.dimension());
        self.axes()
            .iter()
            .zip(x)
            .map(|(axis, &xi)| axis.bin_of(xi))
            .collect()
    }

    /// Flat index of the grid point at or below `x`, or `None` if `x` falls
    /// outside the sampled range on any axis.
    pub fn point_index_of(&self, x: &[f64]) -> Option<usize> {
        let indices = self
            .bin_indices(x)
            .into_iter()
            .zip(self.extents())
            .map(|(i, &n)| usize::try_from(i).ok().filter(|&i| i < n))
            .collect::<Option<Vec<_>>>()?;
        Some(self.flat_index(&indices))
    }

    /// All points in flat order with their multi-indices.
    pub fn points(&self) -> impl Iterator<Item = (usize, Vec<usize>)> + '_ {
        (0..self.total_points()).map(move |p| (p, self.multi_index(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_order() {
        let extents = [3, 2, 4];
        assert_eq!(flatten(&extents, &[0, 0, 0]), 0);
        assert_eq!(flatten(&extents, &[1, 0, 0]), 1);
        assert_eq!(flatten(&extents, &[0, 1, 0]), 3);
        assert_eq!(flatten(&extents, &[0, 0, 1]), 6);
        assert_eq!(flatten(&extents, &[2, 1, 3]), 23);
    }

    #[test]
    fn unflatten_three_axes() {
        // The running-index formula goes wrong here for three or more axes.
        let extents = [3, 2, 4];
        let mut out = [0; 3];
        unflatten_into(&extents, 23, &mut out);
        assert_eq!(out, [2, 1, 3]);
        unflatten_into(&extents, 10, &mut out);
        assert_eq!(out, [1, 1, 1]);
    }

    #[test]
    fn one_axis_is_identity() {
        let mut out = [0; 1];
        unflatten_into(&[7], 5, &mut out);
        assert_eq!(out, [5]);
        assert_eq!(flatten(&[7], &[5]), 5);
    }

    #[test]
    fn exhaustive_round_trip_four_axes() {
        let extents = [2, 3, 1, 4];
        let total: usize = extents.iter().product();
        let mut out = [0; 4];
        for flat in 0..total {
            unflatten_into(&extents, flat, &mut out);
            for (i, n) in out.iter().zip(&extents) {
                assert!(i < n);
            }
            assert_eq!(flatten(&extents, &out), flat);
        }
    }
}
