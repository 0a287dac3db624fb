//! Property-based tests for the two-link solver.
//!
//! Run with: cargo test -p scara-core --test properties

use proptest::prelude::*;
use scara_core::{
    JointAngles, Position, SolutionPair, TwoLinkKinematics,
    angle::{FULL_TURN, angular_error, normalize_degrees, shortest_rotation, wrap_degrees},
};
use std::f64::consts::PI;

const POSITION_TOL: f64 = 1e-6;
const ANGLE_TOL: f64 = 1e-7;

// =============================================================================
// Strategies
// =============================================================================

/// Arm with link lengths between 1mm and 300mm.
fn arb_arm() -> impl Strategy<Value = TwoLinkKinematics> {
    (1.0..300.0f64, 1.0..300.0f64).prop_map(|(l1, l2)| TwoLinkKinematics::new(l1, l2).unwrap())
}

/// A target strictly inside the arm's reachable annulus.
fn arb_reachable() -> impl Strategy<Value = (TwoLinkKinematics, Position)> {
    (arb_arm(), 0.01..0.99f64, -PI..PI).prop_map(|(kin, t, phi)| {
        let r = kin.min_radius() + (kin.max_radius() - kin.min_radius()) * t;
        (kin, Position::new(r * phi.cos(), r * phi.sin()))
    })
}

fn arb_angle() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn assert_same_angles(actual: JointAngles, expected: JointAngles) {
    assert!(
        actual.max_error(&expected) < ANGLE_TOL,
        "expected {expected:?}, got {actual:?}"
    );
}

fn negated(angles: JointAngles) -> JointAngles {
    JointAngles::new(-angles.theta1, -angles.theta2)
}

fn swapped(angles: JointAngles) -> JointAngles {
    JointAngles::new(angles.theta2, angles.theta1)
}

fn solve(kin: &TwoLinkKinematics, target: Position) -> SolutionPair {
    kin.inverse(target)
        .unwrap_or_else(|| panic!("{target:?} should be reachable for {kin:?}"))
}

// =============================================================================
// Inverse / forward
// =============================================================================

proptest! {
    #[test]
    fn proptest_round_trip_both_branches((kin, target) in arb_reachable()) {
        let pair = solve(&kin, target);
        for (branch, angles) in pair.iter() {
            let reached = kin.forward(angles);
            prop_assert!(
                reached.distance(&target) < POSITION_TOL,
                "{branch}: {target:?} -> {angles:?} -> {reached:?}"
            );
        }
    }

    #[test]
    fn proptest_angles_are_normalized((kin, target) in arb_reachable()) {
        for (_, angles) in solve(&kin, target).iter() {
            prop_assert!((0.0..FULL_TURN).contains(&angles.theta1));
            prop_assert!((0.0..FULL_TURN).contains(&angles.theta2));
        }
    }

    #[test]
    fn proptest_outside_annulus_is_unreachable(kin in arb_arm(), gap in 1e-3..100.0f64, phi in -PI..PI) {
        let outer = kin.max_radius() + gap;
        prop_assert!(kin.inverse(Position::new(outer * phi.cos(), outer * phi.sin())).is_none());

        let inner = kin.min_radius() - gap;
        if inner >= 0.0 {
            prop_assert!(kin.inverse(Position::new(inner * phi.cos(), inner * phi.sin())).is_none());
        }
    }

    #[test]
    fn proptest_positive_elbow_rotates_link1_clockwise((kin, target) in arb_reachable()) {
        let pair = solve(&kin, target);
        let target_angle = target.y.atan2(target.x).to_degrees();
        // link 1 sits clockwise of the target line on the positive branch
        prop_assert!(shortest_rotation(target_angle, pair.positive_elbow.theta1) >= -ANGLE_TOL);
        prop_assert!(shortest_rotation(target_angle, pair.negative_elbow.theta1) <= ANGLE_TOL);
    }

    #[test]
    fn proptest_forward_is_periodic(kin in arb_arm(), theta1 in -720.0..720.0f64, theta2 in -720.0..720.0f64) {
        let base = kin.forward(JointAngles::new(theta1, theta2));
        let turned1 = kin.forward(JointAngles::new(theta1 + FULL_TURN, theta2));
        let turned2 = kin.forward(JointAngles::new(theta1, theta2 + FULL_TURN));
        prop_assert!(base.distance(&turned1) < 1e-9);
        prop_assert!(base.distance(&turned2) < 1e-9);
    }

    #[test]
    fn proptest_forward_stays_in_annulus(kin in arb_arm(), theta1 in -720.0..720.0f64, theta2 in -720.0..720.0f64) {
        let reached = kin.forward(JointAngles::new(theta1, theta2));
        prop_assert!(kin.is_reachable(reached));
    }
}

// =============================================================================
// Branch symmetry
// =============================================================================

proptest! {
    /// Reflecting the target across the X-axis negates the angles and swaps
    /// the branches.
    #[test]
    fn proptest_mirror_swaps_branches((kin, target) in arb_reachable()) {
        let pair = solve(&kin, target);
        let mirrored = solve(&kin, Position::new(target.x, -target.y));
        assert_same_angles(mirrored.positive_elbow, negated(pair.negative_elbow));
        assert_same_angles(mirrored.negative_elbow, negated(pair.positive_elbow));
    }

    /// Swapping the link lengths swaps the joint angles and the branches.
    #[test]
    fn proptest_swapped_links_swap_branches((kin, target) in arb_reachable()) {
        let pair = solve(&kin, target);
        let other = TwoLinkKinematics::new(kin.l2(), kin.l1()).unwrap();
        let swapped_pair = solve(&other, target);
        assert_same_angles(swapped_pair.positive_elbow, swapped(pair.negative_elbow));
        assert_same_angles(swapped_pair.negative_elbow, swapped(pair.positive_elbow));
    }

    /// Doing both keeps the branch order.
    #[test]
    fn proptest_swap_and_mirror_keeps_order((kin, target) in arb_reachable()) {
        let pair = solve(&kin, target);
        let other = TwoLinkKinematics::new(kin.l2(), kin.l1()).unwrap();
        let both = solve(&other, Position::new(target.x, -target.y));
        assert_same_angles(both.positive_elbow, negated(swapped(pair.positive_elbow)));
        assert_same_angles(both.negative_elbow, negated(swapped(pair.negative_elbow)));
    }
}

// =============================================================================
// Angle helpers
// =============================================================================

proptest! {
    #[test]
    fn proptest_normalize_in_range(a in arb_angle()) {
        let n = normalize_degrees(a);
        prop_assert!((0.0..FULL_TURN).contains(&n), "{a} -> {n}");
    }

    #[test]
    fn proptest_normalize_is_congruent(a in arb_angle()) {
        prop_assert!(angular_error(normalize_degrees(a), a) < 1e-9);
    }

    #[test]
    fn proptest_normalize_ignores_full_turns(a in -10_000.0..10_000.0f64, k in -1000i32..1000) {
        let shifted = a + FULL_TURN * f64::from(k);
        prop_assert!(angular_error(normalize_degrees(shifted), normalize_degrees(a)) < 1e-6);
    }

    #[test]
    fn proptest_wrap_agrees_with_normalize(a in arb_angle()) {
        prop_assert!(angular_error(wrap_degrees(a), normalize_degrees(a)) < 1e-9);
        prop_assert!((0.0..FULL_TURN).contains(&wrap_degrees(a)));
    }

    #[test]
    fn proptest_shortest_rotation_lands_on_target(target in arb_angle(), current in arb_angle()) {
        let rotation = shortest_rotation(target, current);
        prop_assert!(rotation > -180.0 && rotation <= 180.0, "{rotation}");
        prop_assert!(angular_error(current + rotation, target) < 1e-6);
    }
}
