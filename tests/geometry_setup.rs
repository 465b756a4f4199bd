mod util;

use std::f64::consts::PI;

use grid_vessel::debug_invariants::DebugInvariants;
use grid_vessel::geometry::setup::{Argument, BoundVariable};
use grid_vessel::grid_error::GridError;
use grid_vessel::keywords::GridKeywords;
use grid_vessel::vessel::VesselKind;

#[test]
fn non_periodic_axis_samples_both_endpoints() {
    let grid = util::named_grid("MIN=0 MAX=10 NBIN=5", 1);
    let axis = grid.axis(0);
    assert_eq!(axis.width(), 2.0);
    assert_eq!(axis.nbin(), 6);
    assert_eq!(grid.point_coordinates(5), vec![10.0]);
    assert_eq!(grid.point_coordinates(0), vec![0.0]);
}

#[test]
fn periodic_axis_keeps_bin_count() {
    let grid = GridKeywords::parse("MIN=0 MAX=2pi NBIN=4")
        .unwrap()
        .into_setup(VesselKind::HistogramGrid)
        .unwrap()
        .finish_with_arguments(&[Argument::periodic("phi", "0", "2pi")], "hist", false)
        .unwrap();
    let axis = grid.axis(0);
    assert_eq!(axis.nbin(), 4);
    assert!((axis.width() - PI / 2.0).abs() < 1e-12);
    assert_eq!(grid.total_points(), 4);
    assert!(axis.is_periodic());
}

#[test]
fn named_setup_rejects_wrong_name_count() {
    let pending = GridKeywords::parse("MIN=0,0 MAX=1,1 NBIN=2,2")
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap();
    let err = pending.finish_with_names(1, &["x", "y"]).unwrap_err();
    assert_eq!(err, GridError::FieldNameCount { expected: 3, found: 2 });
    assert!(err.to_string().contains("number of field names"));
}

#[test]
fn non_grid_kind_is_rejected() {
    let err = GridKeywords::parse("MIN=0 MAX=1 NBIN=2")
        .unwrap()
        .into_setup(VesselKind::Sum)
        .unwrap_err();
    assert_eq!(err, GridError::NotAGridVessel(VesselKind::Sum));
}

#[test]
fn derivative_slots_and_names() {
    let args = [Argument::new("d1"), Argument::new("d2")];
    let grid = GridKeywords::parse("MIN=0,0 MAX=1,2 NBIN=2,4")
        .unwrap()
        .into_setup(VesselKind::FunctionGrid)
        .unwrap()
        .finish_with_arguments(&args, "ene", true)
        .unwrap();
    assert_eq!(grid.elements_per_point(), 3);
    assert_eq!(grid.coordinate_names(), &["d1", "d2"].map(String::from));
    assert_eq!(grid.element_names(), &["ene", "der_d1", "der_d2"].map(String::from));
    assert_eq!(grid.buffer_len(), 3 * 5 * 3);
    assert!(grid.validate_invariants().is_ok());
}

#[test]
fn custom_bound_variables() {
    struct Torsion;
    impl BoundVariable for Torsion {
        fn name(&self) -> &str {
            "t"
        }
        fn is_periodic(&self) -> bool {
            true
        }
        fn domain(&self) -> Option<(String, String)> {
            None
        }
    }
    let err = GridKeywords::parse("MIN=-pi MAX=pi NBIN=10")
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap()
        .finish_with_arguments(&[Torsion], "f", false)
        .unwrap_err();
    assert_eq!(err, GridError::MissingPeriodicDomain("t".into()));
}

#[test]
fn description_uses_original_text() {
    let args = [Argument::periodic("phi", "-pi", "pi"), Argument::new("psi")];
    let grid = GridKeywords::parse("MIN=-pi,-1.0 MAX=pi,1.0 NBIN=10,4")
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap()
        .finish_with_arguments(&args, "f", false)
        .unwrap();
    assert_eq!(
        grid.describe(),
        "grid of 10 X 5 equally spaced points between (-pi,-1.0) and (pi,1.0)"
    );
    assert_eq!(grid.to_string(), grid.describe());
}

#[test]
fn geometry_serializes_to_json() {
    let grid = util::named_grid("MIN=-1,0 MAX=1,3 NBIN=2,3", 2);
    let json = serde_json::to_string(&grid).unwrap();
    let back: grid_vessel::geometry::grid::Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
    assert!(back.validate_invariants().is_ok());
}

#[test]
fn tampered_json_is_rejected() {
    let grid = util::named_grid("MIN=0 MAX=2 NBIN=2", 1);
    let mut value = serde_json::to_value(&grid).unwrap();
    value["total_points"] = serde_json::json!(50);
    let err = serde_json::from_value::<grid_vessel::geometry::grid::Grid>(value).unwrap_err();
    assert!(err.to_string().contains("total_points 50"), "{err}");

    let mut value = serde_json::to_value(&grid).unwrap();
    value["field_names"] = serde_json::json!(["x"]);
    assert!(serde_json::from_value::<grid_vessel::geometry::grid::Grid>(value).is_err());

    let mut value = serde_json::to_value(&grid).unwrap();
    value["extents"] = serde_json::json!([4]);
    assert!(serde_json::from_value::<grid_vessel::geometry::grid::Grid>(value).is_err());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn bin_counts_that_overflow_are_configuration_errors() {
    let err = GridKeywords::parse("MIN=0 MAX=1 NBIN=18446744073709551615")
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap()
        .finish_with_names(1, &["x", "f"])
        .unwrap_err();
    assert_eq!(err, GridError::TooManyPoints);

    let err = GridKeywords::parse("MIN=0,0 MAX=1,1 NBIN=4294967296,4294967296")
        .unwrap()
        .into_setup(VesselKind::Grid)
        .unwrap()
        .finish_with_names(1, &["x", "y", "f"])
        .unwrap_err();
    assert_eq!(err, GridError::TooManyPoints);
}
