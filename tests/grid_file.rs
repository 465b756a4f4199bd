mod util;

use grid_vessel::geometry::setup::Argument;
use grid_vessel::grid_error::GridError;
use grid_vessel::keywords::GridKeywords;
use grid_vessel::vessel::{GridVessel, VesselKind};

#[test]
fn two_axes_split_into_blocks() {
    // axis 0 has 3 points, axis 1 has 2
    let mut v = util::vessel(util::named_grid("MIN=0,0 MAX=2,1 NBIN=2,1", 1));
    for p in 0..v.grid().total_points() {
        v.set_element(p, 0, p as f64);
    }
    let text = util::dump(&v, "%.1f");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(!lines[0].is_empty());
    assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 1);
    assert!(lines[3].is_empty());
    assert_eq!(lines[0], "0 2 3 false 0 1 2 false 0.0 0.0 0.0");
    assert_eq!(lines[2], "0 2 3 false 0 1 2 false 2.0 0.0 2.0");
    assert_eq!(lines[4], "0 2 3 false 0 1 2 false 0.0 1.0 3.0");
    assert_eq!(lines[6], "0 2 3 false 0 1 2 false 2.0 1.0 5.0");
}

#[test]
fn columns_are_constants_then_coordinates_then_values() {
    let args = [Argument::new("d")];
    let grid = GridKeywords::parse("MIN=1 MAX=2 NBIN=1")
        .unwrap()
        .into_setup(VesselKind::FunctionGrid)
        .unwrap()
        .finish_with_arguments(&args, "bias", true)
        .unwrap();
    let mut v = GridVessel::with_vec(grid).unwrap();
    v.set_element(1, 0, 0.5);
    v.set_element(1, 1, -2.0);
    let text = util::dump(&v, "%6.2f");
    assert_eq!(
        text,
        "1 2 2 false   1.00   0.00   0.00\n1 2 2 false   2.00   0.50  -2.00\n"
    );
}

#[test]
fn bad_format_is_a_configuration_error() {
    let v = util::vessel(util::named_grid("MIN=0 MAX=1 NBIN=1", 1));
    let mut out = Vec::new();
    assert_eq!(
        v.write_to_file(&mut out, "%s"),
        Err(GridError::InvalidFormat("%s".into()))
    );
    assert!(out.is_empty());
}

#[test]
fn four_axes_blocks_follow_last_axis() {
    let v = util::vessel(util::grid_with_extents(&[2, 2, 2, 3], 1));
    let text = util::dump(&v, "%.0f");
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    for block in blocks {
        assert_eq!(block.trim_end().lines().count(), 8);
    }
}
