//! Unit tests for the grid and the visited tracker.

#[cfg(test)]
mod grid {
    use sar_core::{Cell, EntityId};

    use crate::{Grid, GridError};

    fn grid5() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    #[test]
    fn zero_area_rejected() {
        assert!(matches!(Grid::new(0, 5), Err(GridError::EmptyGrid { .. })));
        assert!(matches!(Grid::new(5, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn bounds() {
        let g = grid5();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        assert_eq!(g.cell_count(), 25);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(4, 4)));
        assert!(!g.in_bounds(Cell::new(5, 0)));
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn place_and_query() {
        let mut g = grid5();
        let id = EntityId(0);
        g.place(id, Cell::new(2, 3)).unwrap();
        assert_eq!(g.position_of(id), Some(Cell::new(2, 3)));
        assert_eq!(g.contents(Cell::new(2, 3)), &[id]);
    }

    #[test]
    fn place_out_of_bounds_errors() {
        let mut g = grid5();
        let err = g.place(EntityId(0), Cell::new(9, 9));
        assert!(matches!(err, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn double_place_errors() {
        let mut g = grid5();
        g.place(EntityId(0), Cell::new(1, 1)).unwrap();
        assert!(matches!(
            g.place(EntityId(0), Cell::new(2, 2)),
            Err(GridError::AlreadyPlaced(_))
        ));
    }

    #[test]
    fn cells_hold_multiple_entities() {
        let mut g = grid5();
        g.place(EntityId(0), Cell::new(1, 1)).unwrap();
        g.place(EntityId(1), Cell::new(1, 1)).unwrap();
        g.place(EntityId(2), Cell::new(1, 1)).unwrap();
        assert_eq!(g.contents(Cell::new(1, 1)).len(), 3);
    }

    #[test]
    fn move_updates_both_indices() {
        let mut g = grid5();
        let id = EntityId(7);
        g.place(id, Cell::new(0, 0)).unwrap();
        assert!(g.move_to(id, Cell::new(1, 1)).unwrap());
        assert_eq!(g.position_of(id), Some(Cell::new(1, 1)));
        assert!(g.contents(Cell::new(0, 0)).is_empty());
        assert_eq!(g.contents(Cell::new(1, 1)), &[id]);
    }

    #[test]
    fn move_into_blocked_cell_is_a_noop() {
        let mut g = grid5();
        let id = EntityId(0);
        g.place(id, Cell::new(0, 0)).unwrap();
        g.block(Cell::new(1, 0)).unwrap();
        assert!(!g.move_to(id, Cell::new(1, 0)).unwrap());
        assert_eq!(g.position_of(id), Some(Cell::new(0, 0)));
    }

    #[test]
    fn move_out_of_bounds_is_a_noop() {
        let mut g = grid5();
        let id = EntityId(0);
        g.place(id, Cell::new(0, 0)).unwrap();
        assert!(!g.move_to(id, Cell::new(-1, 0)).unwrap());
        assert_eq!(g.position_of(id), Some(Cell::new(0, 0)));
    }

    #[test]
    fn move_unplaced_errors() {
        let mut g = grid5();
        assert!(matches!(
            g.move_to(EntityId(3), Cell::new(1, 1)),
            Err(GridError::NotPlaced(_))
        ));
    }

    #[test]
    fn blocked_cells_remain_queryable() {
        let mut g = grid5();
        g.place(EntityId(0), Cell::new(2, 2)).unwrap();
        g.block(Cell::new(2, 2)).unwrap();
        assert!(g.is_blocked(Cell::new(2, 2)));
        assert_eq!(g.contents(Cell::new(2, 2)), &[EntityId(0)]);
    }

    #[test]
    fn out_of_bounds_counts_as_blocked() {
        let g = grid5();
        assert!(g.is_blocked(Cell::new(-1, 0)));
        assert!(g.is_blocked(Cell::new(0, 5)));
    }

    #[test]
    fn neighborhood_interior() {
        let g = grid5();
        let n = g.neighborhood(Cell::new(2, 2), 1, false);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn neighborhood_corner_clipped() {
        let g = grid5();
        let n = g.neighborhood(Cell::new(0, 0), 1, false);
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn neighborhood_include_center() {
        let g = grid5();
        let n = g.neighborhood(Cell::new(0, 0), 1, true);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Cell::new(0, 0)));
    }

    #[test]
    fn neighborhood_radius_two() {
        let g = grid5();
        let n = g.neighborhood(Cell::new(2, 2), 2, false);
        assert_eq!(n.len(), 24);
        assert!(n.iter().all(|c| c.chebyshev(Cell::new(2, 2)) <= 2));
    }

    #[test]
    fn neighborhood_radius_zero_is_empty() {
        let g = grid5();
        assert!(g.neighborhood(Cell::new(2, 2), 0, false).is_empty());
        assert_eq!(g.neighborhood(Cell::new(2, 2), 0, true), vec![Cell::new(2, 2)]);
    }
}

#[cfg(test)]
mod visited {
    use sar_core::Cell;

    use crate::VisitedTracker;

    #[test]
    fn record_is_idempotent() {
        let mut v = VisitedTracker::new();
        assert!(v.record(Cell::new(1, 1)));
        assert!(!v.record(Cell::new(1, 1)));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn never_shrinks() {
        let mut v = VisitedTracker::new();
        for i in 0..10 {
            let before = v.len();
            v.record(Cell::new(i, 0));
            assert!(v.len() >= before);
        }
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn coverage_fraction() {
        let mut v = VisitedTracker::new();
        v.record(Cell::new(0, 0));
        v.record(Cell::new(1, 0));
        assert!((v.coverage(8) - 0.25).abs() < f64::EPSILON);
        assert_eq!(v.coverage(0), 0.0);
    }
}
