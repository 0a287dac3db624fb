//! Angle helpers in degrees.
//!
//! Every angle the solver hands out is wrapped to `[0, 360)`. Two wrapping
//! strategies exist: [`normalize_degrees`] takes the exact remainder, while
//! [`wrap_degrees`] repeatedly adds or subtracts a full turn, as the
//! kinematics design script does. Both produce the same value for every
//! finite input.
//!
//! Neither snaps near-zero results to zero the way the arm firmware's
//! `fmod` based wrap does (anything within 0.01 degrees), so `359.995`
//! stays `359.995` here.

/// One full revolution in degrees.
pub const FULL_TURN: f64 = 360.0;

const HALF_TURN: f64 = 180.0;

// Beyond this many turns the iterative wrap falls back to the remainder,
// otherwise huge inputs would spin for a very long time.
const MAX_ITERATIVE_TURNS: f64 = 1024.0;

/// Wrap an angle to `[0, 360)` using a true (Euclidean) modulo.
///
/// Negative inputs wrap forward, so `-10` becomes `350`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly one full turn
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Wrap an angle to `[0, 360)` by adding or subtracting full turns until it
/// lands in range, the loop used by the kinematics design script.
///
/// Non-finite inputs are returned unchanged.
pub fn wrap_degrees(mut angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    if angle.abs() > MAX_ITERATIVE_TURNS * FULL_TURN {
        angle %= FULL_TURN;
    }
    while angle < 0.0 {
        angle += FULL_TURN;
    }
    while angle >= FULL_TURN {
        angle -= FULL_TURN;
    }
    angle
}

/// Wraparound-aware distance between two angles, in `[0, 180]`.
pub fn angular_error(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % FULL_TURN;
    diff.min(FULL_TURN - diff)
}

/// Signed rotation in `(-180, 180]` that carries `current` onto `target`.
pub fn shortest_rotation(target: f64, current: f64) -> f64 {
    let diff = normalize_degrees(target - current);
    if diff > HALF_TURN {
        diff - FULL_TURN
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn normalize_wraps_negative_forward() {
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(-370.0), 350.0);
    }

    #[test]
    fn normalize_wraps_beyond_full_turn() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(359.5), 359.5);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        let tiny = -1e-15;
        assert_eq!(normalize_degrees(tiny), 0.0);
        assert_eq!(wrap_degrees(tiny), 0.0);
    }

    #[test]
    fn wrap_adds_or_subtracts_full_turns() {
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(1080.0), 0.0);
        assert_eq!(wrap_degrees(-719.0), 1.0);
    }

    #[test]
    fn wrap_does_not_snap_near_zero() {
        assert_eq!(wrap_degrees(359.995), 359.995);
        assert_eq!(wrap_degrees(0.005), 0.005);
        assert_eq!(normalize_degrees(359.995), 359.995);
    }

    #[test]
    fn wrap_passes_through_non_finite() {
        assert!(wrap_degrees(f64::NAN).is_nan());
        assert_eq!(wrap_degrees(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn wrap_handles_huge_inputs() {
        let angle = 1.0e12 + 90.0;
        assert_eq!(wrap_degrees(angle), normalize_degrees(angle));
    }

    #[test]
    fn strategies_agree_on_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5ca7a);
        for _ in 0..10_000 {
            let angle: f64 = rng.random_range(-10_000.0..10_000.0);
            let modulo = normalize_degrees(angle);
            let iterative = wrap_degrees(angle);
            assert!((0.0..FULL_TURN).contains(&modulo), "{angle} -> {modulo}");
            assert!(
                angular_error(modulo, iterative) < 1e-9,
                "{angle}: modulo {modulo} iterative {iterative}"
            );
        }
    }

    #[test]
    fn angular_error_accounts_for_wraparound() {
        assert_abs_diff_eq!(angular_error(359.0, 1.0), 2.0);
        assert_abs_diff_eq!(angular_error(1.0, 359.0), 2.0);
        assert_abs_diff_eq!(angular_error(10.0, 190.0), 180.0);
        assert_abs_diff_eq!(angular_error(-90.0, 270.0), 0.0);
    }

    #[test]
    fn shortest_rotation_picks_short_way_round() {
        assert_abs_diff_eq!(shortest_rotation(10.0, 350.0), 20.0);
        assert_abs_diff_eq!(shortest_rotation(350.0, 10.0), -20.0);
        assert_abs_diff_eq!(shortest_rotation(90.0, 0.0), 90.0);
        // exactly half a turn goes the positive way
        assert_abs_diff_eq!(shortest_rotation(180.0, 0.0), 180.0);
        assert_abs_diff_eq!(shortest_rotation(0.0, 180.0), 180.0);
    }
}
