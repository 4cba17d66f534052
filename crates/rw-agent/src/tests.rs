//! Unit tests for rw-agent.

use rw_core::{AgentId, Point};

use crate::Mover;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mover_at(x: f64, y: f64) -> Mover {
    Mover::new(AgentId(0), Point::new(x, y))
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics_tests {
    use std::f64::consts::{PI, TAU};

    use rw_core::Point;

    use crate::Kinematics;

    #[test]
    fn odometer_accumulates_move_by() {
        let mut k = Kinematics::new(Point::new(-12.0, 40.0));
        assert_eq!(k.distance_traveled(), 0.0);
        k.move_by(1.0, 0.0);
        assert_eq!(k.distance_traveled(), 1.0);
        k.move_by(1.0, 0.0);
        assert_eq!(k.distance_traveled(), 2.0);
        k.move_by(3.0, 4.0);
        assert_eq!(k.distance_traveled(), 7.0);
        assert_eq!(k.position(), Point::new(-7.0, 44.0));
    }

    #[test]
    fn move_to_sets_position() {
        let mut k = Kinematics::new(Point::new(10.0, 10.0));
        k.move_to(Point::new(13.0, 14.0));
        assert_eq!(k.position(), Point::new(13.0, 14.0));
        assert_eq!(k.distance_traveled(), 5.0);
        assert_eq!(k.trip_distance(), 5.0);
    }

    #[test]
    fn move_polar_credits_exact_radius() {
        let theta = 1.234;
        let mut k = Kinematics::new(Point::new(3.0, -8.0));
        k.move_polar(theta, 17.0);
        assert_eq!(k.position(), Point::new(3.0 + theta.cos() * 17.0, -8.0 + theta.sin() * 17.0));
        assert_eq!(k.distance_traveled(), 17.0);
    }

    #[test]
    fn successive_polar_moves_sum_radii() {
        let mut k = Kinematics::new(Point::ORIGIN);
        let mut total = 0.0;
        for i in 0..100 {
            let theta = (i as f64 * 0.37) % TAU;
            let r = 1.0 + (i as f64 * 7.3) % 99.0;
            k.move_polar(theta, r);
            total += r;
        }
        assert!((k.distance_traveled() - total).abs() < 1e-9);
    }

    #[test]
    fn negative_radius_moves_backwards_and_still_counts() {
        let mut k = Kinematics::new(Point::ORIGIN);
        k.move_polar(0.0, -2.0);
        assert_eq!(k.position(), Point::new(-2.0, 0.0));
        assert_eq!(k.distance_traveled(), 2.0);
    }

    #[test]
    fn trip_reset_keeps_lifetime_odometer() {
        let mut k = Kinematics::new(Point::ORIGIN);
        k.move_polar(PI, 4.0);
        k.reset_trip_odometer();
        assert_eq!(k.trip_distance(), 0.0);
        assert_eq!(k.distance_traveled(), 4.0);
        k.move_by(0.0, 1.0);
        assert_eq!(k.trip_distance(), 1.0);
        assert_eq!(k.distance_traveled(), 5.0);
    }

    #[test]
    fn vector_to_points() {
        let k = Kinematics::new(Point::ORIGIN);
        assert_eq!(k.vector_to(Point::new(1.0, 0.0)), (0.0, 1.0));
        assert_eq!(k.vector_to(Point::new(0.0, 1.0)), (std::f64::consts::FRAC_PI_2, 1.0));
        assert_eq!(k.vector_to(Point::new(-1.0, 0.0)), (PI, 1.0));
    }
}

// ── Targeting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod targeting_tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use rw_core::Point;

    use super::*;
    use crate::AgentError;

    #[test]
    fn untargeted_queries_fail() {
        let m = mover_at(0.0, 0.0);
        assert_eq!(m.target(), None);
        assert_eq!(m.target_distance(), Err(AgentError::NoTarget));
        assert_eq!(m.target_azimuth(), Err(AgentError::NoTarget));
        assert_eq!(m.is_on_target(), Err(AgentError::NoTarget));
    }

    #[test]
    fn targeted_queries_succeed() {
        let mut m = mover_at(0.0, 0.0);
        m.set_absolute_target(3.0, 4.0).unwrap();
        assert_eq!(m.target_distance(), Ok(5.0));
        assert!(m.target_azimuth().is_ok());
        assert_eq!(m.is_on_target(), Ok(false));
    }

    #[test]
    fn setters_are_atomic_and_clearable() {
        let mut m = mover_at(1.0, 1.0);
        m.set_relative_target(2.0, -1.0).unwrap();
        assert_eq!(m.target(), Some(Point::new(3.0, 0.0)));
        m.clear_target();
        assert_eq!(m.target(), None);
        m.set_polar_target(PI, 1.0).unwrap();
        let t = m.target().unwrap();
        assert!((t.x - 0.0).abs() < 1e-12 && (t.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_target_rejected_and_previous_kept() {
        let mut m = mover_at(0.0, 0.0);
        m.set_absolute_target(1.0, 1.0).unwrap();
        assert!(matches!(m.set_absolute_target(f64::NAN, 0.0), Err(AgentError::Invariant(_))));
        assert_eq!(m.target(), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn azimuth_normalized_into_full_turn() {
        let mut m = mover_at(0.0, 0.0);
        m.set_absolute_target(0.0, -1.0).unwrap();
        assert!((m.target_azimuth().unwrap() - 3.0 * FRAC_PI_2).abs() < 1e-12);
        for i in 0..64 {
            let theta = -PI + i as f64 * (TAU / 64.0);
            m.set_polar_target(theta, 2.0).unwrap();
            let az = m.target_azimuth().unwrap();
            assert!((0.0..TAU).contains(&az), "azimuth {az} out of range");
        }
    }

    #[test]
    fn on_target_within_tolerance() {
        let mut m = mover_at(0.0, 0.0).with_epsilon(0.1).unwrap();
        m.set_absolute_target(0.05, 0.0).unwrap();
        assert_eq!(m.is_on_target(), Ok(true));
        assert!(mover_at(0.0, 0.0).with_epsilon(-1.0).is_err());
    }
}

// ── Mover ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mover_tests {
    use std::f64::consts::PI;

    use rw_core::Point;

    use super::*;
    use crate::{AgentError, AgentState};

    #[test]
    fn state_transitions() {
        let mut m = mover_at(-40.0, 22.0);
        assert_eq!(m.state(), AgentState::Halted);
        m.set_absolute_target(10.0, 10.0).unwrap();
        m.advance().unwrap();
        assert_eq!(m.state(), AgentState::Moving);
        m.wait();
        assert_eq!(m.state(), AgentState::Waiting);
    }

    #[test]
    fn wait_does_not_move() {
        let mut m = mover_at(5.0, -5.0);
        m.wait();
        assert_eq!(m.position(), Point::new(5.0, -5.0));
        assert_eq!(m.distance_traveled(), 0.0);
    }

    #[test]
    fn single_unit_step_reaches_target() {
        let mut m = mover_at(0.0, 0.0);
        m.set_absolute_target(1.0, 0.0).unwrap();
        m.advance().unwrap();
        assert_eq!(m.position(), Point::new(1.0, 0.0));
        assert_eq!(m.distance_traveled(), 1.0);
    }

    #[test]
    fn arrival_after_exactly_four_half_steps() {
        let mut m = mover_at(0.0, 0.0).with_velocity(0.5).unwrap();
        m.set_polar_target(0.0, 2.0).unwrap();
        for _ in 0..3 {
            assert_eq!(m.is_on_target(), Ok(false));
            m.advance().unwrap();
        }
        assert_eq!(m.is_on_target(), Ok(false));
        m.advance().unwrap();
        assert_eq!(m.is_on_target(), Ok(true));
    }

    #[test]
    fn advance_without_target_fails() {
        let mut m = mover_at(0.0, 0.0);
        assert_eq!(m.advance(), Err(AgentError::NoTarget));
        assert_eq!(m.state(), AgentState::Halted);
    }

    #[test]
    fn snap_consumes_remaining_distance_only() {
        let mut m = mover_at(0.0, 0.0);
        let distance = 0.37;
        m.set_polar_target(PI, distance).unwrap();
        let target = m.target().unwrap();
        let before = m.target_distance().unwrap();
        assert_eq!(m.distance_traveled(), 0.0);
        m.advance().unwrap();
        assert_eq!(m.position(), target);
        assert_eq!(m.distance_traveled(), before);
    }

    #[test]
    fn velocity_setter_validates() {
        let mut m = mover_at(0.0, 0.0);
        m.set_velocity(10.0).unwrap();
        assert_eq!(m.velocity(), 10.0);
        assert!(m.set_velocity(-1.0).is_err());
        assert!(m.set_velocity(f64::INFINITY).is_err());
        assert_eq!(m.velocity(), 10.0);
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use rw_core::{AgentRng, Point};

    use super::*;
    use crate::{Agent, AgentState, Field};

    #[test]
    fn untargeted_report_has_null_target_fields() {
        let m = mover_at(12.5, -3.0);
        let r = m.report();
        assert_eq!(r.x, 12.5);
        assert_eq!(r.y, -3.0);
        assert_eq!((r.tx, r.ty, r.ta, r.tr), (None, None, None, None));
        assert_eq!(r.d, 0.0);
        assert_eq!(r.st, AgentState::Halted);
        assert!(r.get("tx").unwrap().is_null());
    }

    #[test]
    fn report_tracks_target_and_first_step() {
        let (ax, ay) = (20.0, -7.0);
        let (theta, r) = (0.8, 9.0);
        let mut m = mover_at(ax, ay);
        m.set_polar_target(theta, r).unwrap();

        let rep = m.report();
        assert!((rep.tx.unwrap() - (ax + r * theta.cos())).abs() < 1e-9);
        assert!((rep.ty.unwrap() - (ay + r * theta.sin())).abs() < 1e-9);
        assert!((rep.ta.unwrap() - theta).abs() < 1e-9);
        assert!((rep.tr.unwrap() - r).abs() < 1e-9);
        assert_eq!(rep.st, AgentState::Halted);

        m.advance().unwrap();
        let rep = m.report();
        assert!((rep.x - (ax + theta.cos())).abs() < 1e-9);
        assert!((rep.y - (ay + theta.sin())).abs() < 1e-9);
        assert!((rep.ta.unwrap() - theta).abs() < 1e-9);
        assert!((rep.tr.unwrap() - (r - 1.0)).abs() < 1e-9);
        assert_eq!(rep.d, 1.0);
        assert_eq!(rep.st, AgentState::Moving);
    }

    #[test]
    fn extras_are_looked_up_by_name() {
        let mut rep = mover_at(0.0, 0.0).report();
        rep.push("energy", 42.0);
        rep.push("homebound", true);
        assert_eq!(rep.get("energy"), Some(Field::Float(42.0)));
        assert_eq!(rep.get("homebound"), Some(Field::Flag(true)));
        assert_eq!(rep.get("st"), Some(Field::Text("HALTED")));
        assert_eq!(rep.get("missing"), None);
    }

    #[test]
    fn field_display() {
        assert_eq!(Field::Float(1.5).to_string(), "1.5");
        assert_eq!(Field::Null.to_string(), "");
        assert_eq!(Field::Flag(false).to_string(), "false");
        assert_eq!(Field::from(AgentState::Waiting).to_string(), "WAITING");
    }

    #[test]
    fn passive_mover_update_is_noop() {
        let mut m = mover_at(1.0, 2.0);
        let mut rng = AgentRng::new(0, 0);
        Agent::update(&mut m, &mut rng).unwrap();
        assert_eq!(m.position(), Point::new(1.0, 2.0));
        assert_eq!(m.kind(), "mover");
        let boxed: Box<dyn Agent> = Box::new(m);
        assert_eq!(boxed.id(), rw_core::AgentId(0));
    }
}
