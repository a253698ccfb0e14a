//! Property tests for the control core
//!
//! Run with: cargo test -p plush-core

use plush_core::config::{DebounceConfig, JOINT, TOUCH_DEBOUNCE};
use plush_core::math::{isqrt_approx, magnitude, sum_of_squares};
use plush_core::motion::ActuatorController;
use plush_core::sensing::{Debouncer, SensorPhase};
use plush_core::traits::{Joint, JointActuator};
use proptest::prelude::*;

struct NullServos;

impl JointActuator for NullServos {
    fn set_angle_degrees(&mut self, _joint: Joint, _angle: i16) {}

    fn angle_degrees(&self, _joint: Joint) -> i16 {
        JOINT.home_angle
    }
}

proptest! {
    /// Targets always land inside the mechanical range
    #[test]
    fn target_is_clamped(angle in any::<i16>()) {
        let mut joint = ActuatorController::new(Joint::LeftShoulder);
        joint.set_target(angle);
        prop_assert_eq!(joint.target_angle(), angle.clamp(45, 135));
    }

    /// Each tick moves at most one step and never past the target
    #[test]
    fn step_is_bounded(
        start in 45i16..=135,
        targets in prop::collection::vec(any::<i16>(), 1..8),
        ticks in 1usize..40,
    ) {
        let mut servos = NullServos;
        let mut joint = ActuatorController::new(Joint::Spine);
        joint.set_target(start);
        for _ in 0..30 {
            joint.tick(&mut servos);
        }
        prop_assert_eq!(joint.current_angle(), start);

        for target in targets {
            joint.set_target(target);
            let target = joint.target_angle();
            for _ in 0..ticks {
                let before = joint.current_angle();
                joint.tick(&mut servos);
                let after = joint.current_angle();

                prop_assert!((after - before).abs() <= 4);
                prop_assert!((target - after).abs() <= (target - before).abs());
                prop_assert!((target - after).signum() * (target - before).signum() >= 0);
                prop_assert!((45..=135).contains(&after));
            }
        }
    }

    /// A joint given enough ticks always settles on its target
    #[test]
    fn joint_settles(target in any::<i16>()) {
        let mut servos = NullServos;
        let mut joint = ActuatorController::new(Joint::RightShoulder);
        joint.set_target(target);
        for _ in 0..23 {
            joint.tick(&mut servos);
        }
        prop_assert!(joint.at_target());
    }

    /// Active for exactly one tick per trigger, never during cooldown
    #[test]
    fn debounce_one_tick_per_edge(
        raw in prop::collection::vec(any::<bool>(), 1..600),
        cooldown in 1u16..200,
    ) {
        let mut debouncer = Debouncer::new(DebounceConfig::cooldown(cooldown));
        let mut deaf_until = None;

        for (tick, &level) in raw.iter().enumerate() {
            let idle = debouncer.phase() == SensorPhase::Idle;
            debouncer.tick(|| level);

            if debouncer.is_active() {
                prop_assert!(idle);
                prop_assert!(level);
                if let Some(until) = deaf_until {
                    prop_assert!(tick > until);
                }
                deaf_until = Some(tick + cooldown as usize);
            } else if idle {
                prop_assert!(!level);
            }
        }
    }

    /// Estimate stays within 10% (plus rounding) of the true magnitude
    #[test]
    fn magnitude_accuracy(x in any::<i16>(), y in any::<i16>(), z in any::<i16>()) {
        let exact = (sum_of_squares(x, y, z) as f64).sqrt();
        let estimate = magnitude(x, y, z) as f64;
        prop_assert!((estimate - exact).abs() <= exact * 0.1 + 1.5);
    }

    /// Perfect squares below the pre-scaling range come back close to their root
    #[test]
    fn isqrt_matches_small_roots(root in 0u32..256) {
        let estimate = isqrt_approx((root as u64) * (root as u64));
        prop_assert!((estimate as i64 - root as i64).abs() <= 1 + root as i64 / 10);
    }
}

#[test]
fn touch_scenario_timing() {
    let mut debouncer = Debouncer::new(TOUCH_DEBOUNCE);
    let mut reads = Vec::new();

    for tick in 0..200u32 {
        debouncer.tick(|| {
            reads.push(tick);
            true
        });
        assert_eq!(debouncer.is_active(), tick == 0 || tick == 161);
    }

    assert_eq!(reads, [0, 161]);
}
