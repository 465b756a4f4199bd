mod util;

use proptest::prelude::*;
use util::grid_with_extents;

fn extents(max_dim: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(2usize..6, 1..=max_dim)
}

proptest! {
    #[test]
    fn flat_multi_flat(extents in extents(4)) {
        let grid = grid_with_extents(&extents, 1);
        prop_assert_eq!(grid.extents(), extents.as_slice());
        for flat in 0..grid.total_points() {
            let idx = grid.multi_index(flat);
            for (i, n) in idx.iter().zip(&extents) {
                prop_assert!(i < n);
            }
            prop_assert_eq!(grid.flat_index(&idx), flat);
        }
    }

    #[test]
    fn coordinates_invert_to_their_indices(extents in extents(4)) {
        let grid = grid_with_extents(&extents, 1);
        for (flat, idx) in grid.points() {
            let x = grid.coordinates_of(&idx);
            let back: Vec<usize> = grid.bin_indices(&x).into_iter().map(|i| i as usize).collect();
            prop_assert_eq!(&back, &idx);
            prop_assert_eq!(grid.point_index_of(&x), Some(flat));
        }
    }
}

#[test]
fn every_dimension_one_to_four_round_trips() {
    for extents in [vec![5], vec![3, 2], vec![2, 3, 4], vec![2, 2, 3, 2]] {
        let grid = grid_with_extents(&extents, 1);
        assert_eq!(grid.total_points(), extents.iter().product::<usize>());
        for flat in 0..grid.total_points() {
            assert_eq!(grid.flat_index(&grid.multi_index(flat)), flat);
        }
    }
}

#[test]
fn first_axis_varies_fastest() {
    let grid = grid_with_extents(&[3, 2], 1);
    let order: Vec<Vec<usize>> = grid.points().map(|(_, idx)| idx).collect();
    assert_eq!(
        order,
        vec![
            vec![0, 0],
            vec![1, 0],
            vec![2, 0],
            vec![0, 1],
            vec![1, 1],
            vec![2, 1]
        ]
    );
}

#[test]
fn dyadic_widths_invert_exactly() {
    let grid = util::named_grid("MIN=-1,0.5 MAX=1,2.5 NBIN=8,4", 1);
    for (_, idx) in grid.points() {
        let x = grid.coordinates_of(&idx);
        let back: Vec<isize> = idx.iter().map(|&i| i as isize).collect();
        assert_eq!(grid.bin_indices(&x), back);
    }
}

#[test]
fn positions_outside_the_grid() {
    let grid = util::named_grid("MIN=0,0 MAX=4,4 NBIN=4,4", 1);
    assert_eq!(grid.bin_indices(&[-0.5, 5.5]), vec![-1, 5]);
    assert_eq!(grid.point_index_of(&[-0.5, 1.0]), None);
    assert_eq!(grid.point_index_of(&[1.0, 5.0]), None);
    assert_eq!(grid.point_index_of(&[4.9, 4.0]), Some(24));
}
