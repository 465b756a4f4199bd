#![allow(dead_code)]
use grid_vessel::data::storage::VecStorage;
use grid_vessel::geometry::grid::Grid;
use grid_vessel::keywords::GridKeywords;
use grid_vessel::vessel::{GridVessel, VesselKind};

/// Grid from a keyword line with field names `x0.. f0..`.
pub fn named_grid(line: &str, nper: usize) -> Grid {
    let pending = GridKeywords::parse(line)
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap();
    let names: Vec<String> = (0..pending.dimension())
        .map(|k| format!("x{k}"))
        .chain((0..nper).map(|j| format!("f{j}")))
        .collect();
    pending.finish_with_names(nper, &names).unwrap()
}

/// Non-periodic grid with the requested number of points per axis.
pub fn grid_with_extents(extents: &[usize], nper: usize) -> Grid {
    let min = vec!["0"; extents.len()].join(",");
    let max = extents
        .iter()
        .map(|n| (n - 1).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let nbin = extents
        .iter()
        .map(|n| (n - 1).to_string())
        .collect::<Vec<_>>()
        .join(",");
    named_grid(&format!("MIN={min} MAX={max} NBIN={nbin}"), nper)
}

pub fn vessel(grid: Grid) -> GridVessel<VecStorage<f64>> {
    GridVessel::with_vec(grid).unwrap()
}

pub fn dump(vessel: &GridVessel, fmt: &str) -> String {
    let mut out = Vec::new();
    vessel.write_to_file(&mut out, fmt).unwrap();
    String::from_utf8(out).unwrap()
}
