//! Integration tests for the Sobol and lattice families.

use approx::assert_abs_diff_eq;
use lds_core::{
    DigitalNetConfig, LdsError, LowDiscrepancySequence, PointSet, RandomType, SeedRng,
};
use lds_families::lattice::{korobov, Rank1Lattice};
use lds_families::sobol::{sobol, MAX_SOBOL_DIM};
use proptest::prelude::*;

const ALL_RANDOM_TYPES: [RandomType; 4] = [
    RandomType::RandomShift,
    RandomType::LeftMatrixScrambling,
    RandomType::RightMatrixScrambling,
    RandomType::StripedMatrixScrambling,
];

fn plain() -> DigitalNetConfig {
    DigitalNetConfig::builder().randomise(false).build().unwrap()
}

// ============================================================================
// Sobol
// ============================================================================

#[test]
fn test_sobol_first_points_in_gray_order() {
    let mut net = sobol(3, 3, &plain(), SeedRng::default()).unwrap();
    let expected = [
        [0.0, 0.0, 0.0],
        [0.5, 0.5, 0.5],
        [0.75, 0.25, 0.25],
        [0.25, 0.75, 0.75],
        [0.375, 0.375, 0.625],
        [0.875, 0.875, 0.125],
        [0.625, 0.125, 0.875],
        [0.125, 0.625, 0.375],
    ];

    let mut point = [0.0; 3];
    for row in expected {
        net.fill_point(&mut point).unwrap();
        assert_eq!(point, row);
    }
    assert!(matches!(
        net.fill_point(&mut point),
        Err(LdsError::PointsExhausted { points: 8 })
    ));
}

#[test]
fn test_sobol_direct_jump_follows_gray_code() {
    let mut net = sobol(3, 2, &plain(), SeedRng::default()).unwrap();
    // Digit vector i, before the Gray-code reordering.
    let by_digits = [
        [0.0, 0.0],
        [0.5, 0.5],
        [0.25, 0.75],
        [0.75, 0.25],
        [0.125, 0.625],
        [0.625, 0.125],
        [0.375, 0.375],
        [0.875, 0.875],
    ];
    for (i, row) in by_digits.iter().enumerate() {
        let matrix = net.generator_matrix();
        assert_eq!(matrix.apply(0, i) as f64 / 4_294_967_296.0, row[0]);
        assert_eq!(matrix.apply(1, i) as f64 / 4_294_967_296.0, row[1]);
    }
    for k in (0..8).rev() {
        net.set_point_index(k);
        let row = by_digits[k ^ (k >> 1)];
        assert_eq!(net.next_f64().unwrap(), row[0]);
        assert_eq!(net.next_f64().unwrap(), row[1]);
    }
}

#[test]
fn test_sobol_integration_all_random_types() {
    // E[x * y * z] over the unit cube is 1/8.
    for random_type in ALL_RANDOM_TYPES {
        let config = DigitalNetConfig::with_random_type(random_type);
        let mut net = sobol(12, 3, &config, SeedRng::from_seed(77)).unwrap();

        let mut point = [0.0; 3];
        let mut sum = 0.0;
        for _ in 0..net.points() {
            net.fill_point(&mut point).unwrap();
            sum += point.iter().product::<f64>();
        }
        assert_abs_diff_eq!(sum / net.points() as f64, 0.125, epsilon = 2e-3);
    }
}

#[test]
fn test_sobol_full_dimension_range() {
    let mut net = sobol(6, MAX_SOBOL_DIM, &plain(), SeedRng::default()).unwrap();
    let mut point = vec![0.0; MAX_SOBOL_DIM];
    net.skip(1);
    net.fill_point(&mut point).unwrap();
    assert!(point.iter().all(|&x| x == 0.5));
}

proptest! {
    /// Every dimension stratifies the unit interval into 2^k cells.
    #[test]
    fn prop_sobol_dimensions_are_stratified(
        k in 1u32..=8,
        dim in 1usize..=MAX_SOBOL_DIM,
        seed in any::<u64>(),
        type_idx in 0usize..4,
    ) {
        let config = DigitalNetConfig::with_random_type(ALL_RANDOM_TYPES[type_idx]);
        let mut net = sobol(k, dim, &config, SeedRng::from_seed(seed)).unwrap();
        let n = net.points();

        let mut cells = vec![vec![false; n]; dim];
        for _ in 0..n {
            for column in cells.iter_mut() {
                let cell = (net.next_u32().unwrap() >> (32 - k)) as usize;
                prop_assert!(!column[cell]);
                column[cell] = true;
            }
            net.jump();
        }
    }
}

// ============================================================================
// Lattices
// ============================================================================

#[test]
fn test_fibonacci_lattice_integration() {
    // 987 and 610 are consecutive Fibonacci numbers.
    let mut lattice = Rank1Lattice::new(987, &[1, 610], SeedRng::from_seed(5)).unwrap();
    let mut point = [0.0; 2];
    let mut sum = 0.0;
    for _ in 0..lattice.points() {
        lattice.fill_point(&mut point).unwrap();
        sum += point[0] * point[1];
    }
    assert_abs_diff_eq!(sum / 987.0, 0.25, epsilon = 5e-3);
}

#[test]
fn test_shifted_lattice_marginals() {
    let n = 1021;
    let mut lattice = korobov(n, 76, 4, 0, SeedRng::from_seed(12)).unwrap();
    let mut sums = [0.0; 4];
    let mut point = [0.0; 4];
    for _ in 0..n {
        lattice.fill_point(&mut point).unwrap();
        for (s, x) in sums.iter_mut().zip(point) {
            *s += x;
        }
    }
    for s in sums {
        assert_abs_diff_eq!(s / n as f64, 0.5, epsilon = 2.0 / n as f64);
    }
}

#[test]
fn test_lattice_seed_replays_shift() {
    let mut lattice = korobov(64, 5, 3, 0, SeedRng::from_seed(1)).unwrap();
    lattice.seed(99);
    lattice.randomise();
    let first: Vec<u32> = (0..3).map(|_| lattice.next_u32().unwrap()).collect();

    lattice.seed(99);
    lattice.randomise();
    let second: Vec<u32> = (0..3).map(|_| lattice.next_u32().unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_lattice_exhaustion() {
    let mut lattice = Rank1Lattice::unshifted(2, &[1], SeedRng::default()).unwrap();
    lattice.skip(2);
    assert_eq!(
        lattice.next_u32(),
        Err(LdsError::PointsExhausted { points: 2 })
    );
}

proptest! {
    /// Coprime generators visit every multiple of 1/n exactly once.
    #[test]
    fn prop_lattice_coordinates_are_permutations(
        a in 1u64..101,
        dim in 1usize..6,
    ) {
        let n = 101;
        let mut lattice = korobov(n, a, dim, 0, SeedRng::default()).unwrap();
        let shift = lattice.shift().unwrap().to_vec();

        let mut columns = vec![Vec::with_capacity(n as usize); dim];
        for _ in 0..n {
            for (j, column) in columns.iter_mut().enumerate() {
                column.push(lattice.next_u32().unwrap().wrapping_sub(shift[j]));
            }
            lattice.jump();
        }

        let grid: Vec<u32> = (0..n).map(|r| ((r << 32) / n) as u32).collect();
        for mut column in columns {
            column.sort_unstable();
            prop_assert_eq!(&column, &grid);
        }
    }
}
