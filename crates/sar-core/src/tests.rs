//! Unit tests for sar-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(3, 4)), 7);
        assert_eq!(Cell::new(5, 5).manhattan(Cell::new(5, 5)), 0);
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(0, 0)), 4);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(Cell::new(0, 0).chebyshev(Cell::new(3, 4)), 4);
        assert_eq!(Cell::new(0, 0).chebyshev(Cell::new(2, 2)), 2);
        assert_eq!(Cell::new(1, 1).chebyshev(Cell::new(1, 1)), 0);
    }

    #[test]
    fn step_clamps_each_axis() {
        let from = Cell::new(5, 5);
        assert_eq!(from.step_towards(Cell::new(9, 9)), Cell::new(6, 6));
        assert_eq!(from.step_towards(Cell::new(0, 5)), Cell::new(4, 5));
        assert_eq!(from.step_towards(Cell::new(5, 0)), Cell::new(5, 4));
        assert_eq!(from.step_towards(Cell::new(6, 0)), Cell::new(6, 4));
    }

    #[test]
    fn step_at_target_stays() {
        let c = Cell::new(3, 3);
        assert_eq!(c.step_towards(c), c);
    }

    #[test]
    fn diagonal_step_closes_chebyshev() {
        let from = Cell::new(0, 0);
        let target = Cell::new(4, 7);
        let stepped = from.step_towards(target);
        assert_eq!(stepped.chebyshev(target), from.chebyshev(target) - 1);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::seeded(12345);
        let mut r2 = SimRng::seeded(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::seeded(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::seeded(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::seeded(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::seeded(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{Cell, SwarmConfig};

    #[test]
    fn default_is_valid() {
        assert!(SwarmConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        let cfg = SwarmConfig { width: 0, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { height: 0, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn hub_count_bounds() {
        let cfg = SwarmConfig { n_hubs: 0, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { n_hubs: 5, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { n_hubs: 4, ..SwarmConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn probability_bounds() {
        let cfg = SwarmConfig { sensor_prob: 1.5, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { sensor_prob: -0.1, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { sensor_prob: f64::NAN, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_battery_rejected() {
        let cfg = SwarmConfig { battery: 0, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn hub_corners_fixed_scheme() {
        let cfg = SwarmConfig { n_hubs: 4, ..SwarmConfig::default() };
        assert_eq!(
            cfg.hub_cells(),
            vec![
                Cell::new(0, 0),
                Cell::new(19, 19),
                Cell::new(19, 0),
                Cell::new(0, 19),
            ]
        );
    }

    #[test]
    fn degenerate_grid_cannot_host_multiple_hubs() {
        let cfg = SwarmConfig { width: 1, height: 1, n_hubs: 2, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { width: 1, height: 1, n_hubs: 1, ..SwarmConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}
