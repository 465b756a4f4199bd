//! Row-per-point text dump of a grid.
//!
//! Every row carries, for each axis, `min_<axis> max_<axis> nbins_<axis>
//! periodic_<axis>`, then the coordinates of the point, then the stored
//! elements. Rows follow flat-index order. For grids with two or more axes a
//! blank line is written each time the enumeration wraps the penultimate axis,
//! which gives the block layout gnuplot's `splot` expects.

use std::io::Write;

use crate::data::storage::Storage;
use crate::geometry::grid::Grid;
use crate::grid_error::GridError;
use crate::io::table::{FieldFormat, TableWriter};

/// Per-axis constant column names.
struct AxisColumns {
    min: String,
    max: String,
    nbins: String,
    periodic: String,
}

/// Write every point of `grid`, reading values from `storage`.
///
/// Coordinates and values are formatted with `fmt`; bounds are echoed as the
/// text they were given in.
pub fn write_grid<S, W>(
    grid: &Grid,
    storage: &S,
    writer: W,
    fmt: &FieldFormat,
) -> Result<(), GridError>
where
    S: Storage<f64>,
    W: Write,
{
    debug_assert_eq!(storage.len(), grid.buffer_len());
    let mut table = TableWriter::new(writer);

    let axis_columns: Vec<AxisColumns> = grid
        .coordinate_names()
        .iter()
        .map(|name| AxisColumns {
            min: format!("min_{name}"),
            max: format!("max_{name}"),
            nbins: format!("nbins_{name}"),
            periodic: format!("periodic_{name}"),
        })
        .collect();
    for c in &axis_columns {
        table.add_constant_field(c.min.as_str());
        table.add_constant_field(c.max.as_str());
        table.add_constant_field(c.nbins.as_str());
        table.add_constant_field(c.periodic.as_str());
    }

    let d = grid.dimension();
    let mut indices = vec![0; d];
    for point in 0..grid.total_points() {
        grid.multi_index_into(point, &mut indices);
        if point > 0 && d > 1 && indices[..d - 1].iter().all(|&i| i == 0) {
            table.blank_line()?;
        }

        for (axis, c) in grid.axes().iter().zip(&axis_columns) {
            table.print_str(&c.min, axis.min().text());
            table.print_str(&c.max, axis.max().text());
            table.print_int(&c.nbins, axis.nbin() as i64);
            table.print_str(&c.periodic, if axis.is_periodic() { "true" } else { "false" });
        }
        for ((axis, name), &i) in grid.axes().iter().zip(grid.coordinate_names()).zip(&indices) {
            table.print_f64(name, axis.coordinate(i), fmt);
        }
        for (element, name) in grid.element_names().iter().enumerate() {
            table.print_f64(name, grid.get_element(storage, point, element), fmt);
        }
        table.end_row()?;
    }
    table.flush()?;
    log::debug!("wrote {} grid rows", table.rows());
    Ok(())
}
