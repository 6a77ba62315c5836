use approx::assert_relative_eq;
use noise2d::seed::SEED_BOUND;
use noise2d::{Noise2D, NoiseSource, Perlin3D};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Off-lattice sample points spread over a few cells
fn points() -> impl Iterator<Item = (f64, f64)> {
    (0..200).map(|i| {
        let t = i as f64;
        (t * 0.731 - 40.0, t * 0.419 + 3.3)
    })
}

const SCALES: [f64; 3] = [1.0, 7.5, -3.0];

#[test]
fn noise_is_deterministic() {
    let a = Noise2D::with_seed(2025.0);
    let b = Noise2D::with_seed(2025.0);
    for (x, y) in points() {
        for s in SCALES {
            assert_eq!(a.noise(x, y, s), a.noise(x, y, s));
            assert_eq!(a.noise(x, y, s), b.noise(x, y, s));
        }
    }
}

// Number of sample points where two generators disagree
fn differing(a: &Noise2D, b: &Noise2D) -> usize {
    points()
        .filter(|&(x, y)| a.noise(x, y, 1.0) != b.noise(x, y, 1.0))
        .count()
}

#[test]
fn different_seeds_sample_different_fields() {
    let hi = SEED_BOUND as f64;
    let pairs = [
        (1.0, 2.0),
        (1.0, 257.0),
        (-5.0, 251.0),
        (hi, hi - 256.0),
        (-hi, -hi + 512.0),
        (1e19, 1e300),
    ];
    for (s1, s2) in pairs {
        let n = differing(&Noise2D::with_seed(s1), &Noise2D::with_seed(s2));
        assert!(n > 150, "seeds {s1} and {s2} differ at only {n} of 200 points");
    }
}

#[test]
fn drawn_seeds_sample_different_fields() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..50 {
        let a = Noise2D::from_rng(&mut rng);
        let b = Noise2D::from_rng(&mut rng);
        let n = differing(&a, &b);
        assert!(n > 150, "seeds {} and {} differ at only {n} of 200 points", a.seed(), b.seed());
    }
}

#[test]
fn unit_noise_is_shifted_noise() {
    let n = Noise2D::with_seed(-77.0);
    for (x, y) in points() {
        for s in SCALES {
            assert_relative_eq!(n.unit_noise(x, y, s), (n.noise(x, y, s) + 1.0) / 2.0);
        }
    }
}

#[test]
fn range_is_monotonic() {
    let n = Noise2D::with_seed(8.0);
    let ranges = [0.0, 0.05, 0.1, 0.25, 0.5, 0.75, 1.0, 2.0];
    for (x, y) in points() {
        for pair in ranges.windows(2) {
            if n.range(x, y, 2.0, pair[0]) {
                assert!(n.range(x, y, 2.0, pair[1]));
            }
        }
    }
}

#[test]
fn threshold_boundaries() {
    let n = Noise2D::with_seed(13.0);
    for (x, y) in points() {
        assert!(!n.range(x, y, 3.0, 0.0));
        assert!(!n.edge_range(x, y, 3.0, 0.0));
        let unit = n.unit_noise(x, y, 3.0);
        if unit > 0.0 && unit < 1.0 {
            assert!(n.edge_range(x, y, 3.0, 1.0));
        }
    }
}

#[test]
fn seed_42_scenario() {
    let n = Noise2D::with_seed(42.0);
    let v = Perlin3D::new().get3(1.0, 1.0, 42.0);

    assert_eq!(n.noise(1.0, 1.0, 1.0), v);
    assert_relative_eq!(n.unit_noise(1.0, 1.0, 1.0), (v + 1.0) / 2.0);
    assert_eq!(n.range(1.0, 1.0, 1.0, 0.5), v.abs() < 0.5);
    assert_eq!(n.edge_range(1.0, 1.0, 1.0, 0.5), v < 0.0);
}

#[test]
fn edge_range_half_is_negative_noise() {
    let n = Noise2D::with_seed(42.0);
    for (x, y) in points() {
        assert_eq!(n.edge_range(x, y, 5.0, 0.5), n.noise(x, y, 5.0) < 0.0);
    }
}

#[test]
fn seedless_instances_get_distinct_seeds() {
    let a = Noise2D::random();
    let b = Noise2D::new(None);
    assert_ne!(a.seed(), b.seed());
    assert_eq!(a.seed(), a.seed().trunc());
}

#[test]
fn non_finite_inputs_propagate() {
    let n = Noise2D::with_seed(5.0);
    assert!(n.noise(f64::NAN, 1.0, 1.0).is_nan());
    assert!(n.unit_noise(1.0, f64::INFINITY, 1.0).is_nan());
    assert!(!n.noise(1.0, 1.0, 0.0).is_finite());
}
