use proptest::prelude::*;
use semi_infinite_string::{
    antiderivative, displacement, left_wave, right_wave, Piece, SemiInfiniteString,
    VelocityProfile,
};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

#[test]
fn antiderivative_is_continuous_at_breakpoints() {
    let eps = 1e-10;
    for i in 1..=40 {
        let c = i as f64 * 0.25;
        for &x in &[1.0, 2.0] {
            let below = antiderivative(x - eps, c).unwrap();
            let at = antiderivative(x, c).unwrap();
            let above = antiderivative(x + eps, c).unwrap();
            approx_eq(below, at, 1e-8);
            approx_eq(at, above, 1e-8);
        }
    }
}

#[test]
fn antiderivative_plateaus() {
    for i in 1..=20 {
        let c = i as f64 * 0.5;
        let low = -1.0 / (2.0 * c);
        let high = 1.0 / (2.0 * c);
        for j in 0..10 {
            let x = j as f64 * 0.1;
            assert_eq!(antiderivative(x, c).unwrap(), low);
        }
        for j in 0..10 {
            let x = 2.0 + j as f64 * 0.7;
            assert_eq!(antiderivative(x, c).unwrap(), high);
        }
    }
    assert_eq!(antiderivative(0.0, 2.0).unwrap(), -0.25);
    assert_eq!(antiderivative(3.0, 2.0).unwrap(), 0.25);
}

#[test]
fn concrete_scenarios() {
    for x in 0..=6 {
        assert_eq!(displacement(x as f64, 2.0, 0.0).unwrap(), 0.0);
    }
    assert_eq!(displacement(3.0, 2.0, 0.0).unwrap(), 0.0);
    assert_eq!(displacement(0.0, 2.0, 0.5).unwrap(), 0.0);
    assert_eq!(displacement(0.0, 2.0, 1.0).unwrap(), 0.0);
}

#[test]
fn wavefront_branches_agree() {
    // Approach x = ct from the free side and compare with the reflected branch.
    for &(c, t) in &[(2.0, 0.3), (2.0, 1.0), (0.7, 2.5), (3.0, 0.1)] {
        let front = c * t;
        let on = displacement(front, c, t).unwrap();
        let just_past = displacement(front + 1e-10, c, t).unwrap();
        approx_eq(on, just_past, 1e-8);
    }
}

#[test]
fn decomposition_on_grid() {
    for ci in 1..=5 {
        let c = ci as f64 * 0.6;
        for ti in 0..=15 {
            let t = ti as f64 * 0.1;
            for xi in 0..=60 {
                let x = xi as f64 * 0.1;
                let u = displacement(x, c, t).unwrap();
                let sum = right_wave(x, c, t).unwrap() + left_wave(x, c, t).unwrap();
                assert_eq!(u, sum, "x = {x}, c = {c}, t = {t}");
            }
        }
    }
}

#[test]
fn standard_string_matches_free_functions() {
    let string = SemiInfiniteString::standard(2.0).unwrap();
    for xi in 0..=30 {
        let x = xi as f64 * 0.2;
        assert_eq!(
            string.displacement(x, 0.8).unwrap(),
            displacement(x, 2.0, 0.8).unwrap()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, .. ProptestConfig::default()
    })]

    #[test]
    fn fixed_end_holds_exactly(c in 0.01f64..10.0, t in 0.0f64..50.0) {
        prop_assert_eq!(displacement(0.0, c, t).unwrap(), 0.0);
    }

    #[test]
    fn starts_at_rest(c in 0.01f64..10.0, x in 0.0f64..100.0) {
        prop_assert_eq!(displacement(x, c, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn components_add_up(x in 0.0f64..10.0, c in 0.01f64..10.0, t in 0.0f64..5.0) {
        let u = displacement(x, c, t).unwrap();
        let sum = right_wave(x, c, t).unwrap() + left_wave(x, c, t).unwrap();
        prop_assert_eq!(u, sum);
    }

    #[test]
    fn displacement_is_bounded_by_total_impulse(
        x in 0.0f64..10.0, c in 0.01f64..10.0, t in 0.0f64..5.0,
    ) {
        // G stays within ±I/(4c), so |u| <= I/(2c) = 1/c for the default bump.
        let u = displacement(x, c, t).unwrap();
        prop_assert!(u.abs() <= (1.0 / c) * (1.0 + 1e-12));
    }

    #[test]
    fn custom_profile_keeps_boundary_fixed(
        start in 0.0f64..3.0,
        width in 0.1f64..2.0,
        value in -5.0f64..5.0,
        c in 0.1f64..5.0,
        t in 0.0f64..4.0,
    ) {
        let profile = VelocityProfile::new(vec![Piece::new(start, start + width, value)]).unwrap();
        let string = SemiInfiniteString::new(c, profile).unwrap();
        prop_assert_eq!(string.displacement(0.0, t).unwrap(), 0.0);
    }

    #[test]
    fn negative_positions_always_fail(x in -100.0f64..-1e-9, c in 0.1f64..5.0, t in 0.0f64..4.0) {
        prop_assert!(antiderivative(x, c).is_err());
        prop_assert!(displacement(x, c, t).is_err());
        prop_assert!(left_wave(x, c, t).is_err());
        prop_assert!(right_wave(x, c, t).is_err());
    }
}
