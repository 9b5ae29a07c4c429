//! Ballistic integration for the ball
//!
//! Per tick, in order: gravity, integrate, ground bounce, rolling friction,
//! rest detection, side-wall clamp. Every contact loses energy, so any throw
//! settles in bounded time.

use glam::Vec2;

use super::state::Ball;
use crate::tuning::Tuning;

/// Advance the ball one tick. `carrier` is the dog's position.
///
/// Returns true on the tick the ball comes to rest.
pub fn integrate_ball(ball: &mut Ball, carrier: Vec2, tuning: &Tuning) -> bool {
    if ball.carried {
        // Stick to the dog's mouth, no physics
        ball.pos = carry_position(carrier, tuning);
        ball.vel = Vec2::ZERO;
        ball.in_air = false;
        ball.at_rest = false;
        return false;
    }

    if !ball.in_air {
        return false;
    }

    apply_gravity(ball, tuning);
    ball.pos += ball.vel;
    ground_contact(ball, tuning);
    apply_rolling_friction(ball, tuning);
    let settled = try_settle(ball, tuning);
    clamp_to_walls(ball, tuning);
    settled
}

/// Where a carried ball sits, kept inside the side walls
pub fn carry_position(carrier: Vec2, tuning: &Tuning) -> Vec2 {
    let mouth = carrier + tuning.carry_offset;
    let x = mouth.x.clamp(tuning.ball_radius, tuning.world_width - tuning.ball_radius);
    Vec2::new(x, mouth.y)
}

#[inline]
pub fn apply_gravity(ball: &mut Ball, tuning: &Tuning) {
    ball.vel.y += tuning.gravity;
}

/// Bounce off the ground line
pub fn ground_contact(ball: &mut Ball, tuning: &Tuning) {
    let floor = tuning.ball_floor_y();
    if ball.pos.y + tuning.ball_radius < tuning.ground_y {
        return;
    }

    ball.pos.y = floor;
    ball.vel.y *= -tuning.ground_restitution;
    ball.vel.x *= tuning.ground_friction;
    if ball.vel.y.abs() < tuning.bounce_cutoff {
        ball.vel.y = 0.0;
    }
}

/// Ball lies on the ground with no vertical motion
pub fn is_grounded(ball: &Ball, tuning: &Tuning) -> bool {
    (ball.pos.y - tuning.ball_floor_y()).abs() < tuning.settle_tolerance && ball.vel.y == 0.0
}

/// Slow a grounded ball's roll; snaps tiny speeds to zero
pub fn apply_rolling_friction(ball: &mut Ball, tuning: &Tuning) {
    if !is_grounded(ball, tuning) {
        return;
    }
    ball.vel.x *= tuning.roll_friction;
    if ball.vel.x.abs() < tuning.roll_cutoff {
        ball.vel.x = 0.0;
    }
}

/// Put a slow ball on the ground to rest. Returns true if it settled.
pub fn try_settle(ball: &mut Ball, tuning: &Tuning) -> bool {
    let on_floor = ball.pos.y >= tuning.ball_floor_y() - tuning.settle_tolerance;
    if ball.vel.length() < tuning.rest_speed && on_floor {
        ball.in_air = false;
        ball.at_rest = true;
        ball.vel = Vec2::ZERO;
        return true;
    }
    false
}

/// Keep the ball between the side walls, bouncing it back in
pub fn clamp_to_walls(ball: &mut Ball, tuning: &Tuning) {
    let min_x = tuning.ball_radius;
    let max_x = tuning.world_width - tuning.ball_radius;
    if ball.pos.x < min_x {
        ball.pos.x = min_x;
        ball.vel.x *= -tuning.wall_restitution;
    }
    if ball.pos.x > max_x {
        ball.pos.x = max_x;
        ball.vel.x *= -tuning.wall_restitution;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flying(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            in_air: true,
            at_rest: false,
            carried: false,
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_gravity_adds_to_vertical_velocity() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(120.0, 450.0), Vec2::new(36.0, -12.0));
        apply_gravity(&mut ball, &t);
        assert!(approx(ball.vel.x, 36.0));
        assert!(approx(ball.vel.y, -11.5));
    }

    #[test]
    fn test_ground_bounce_reflects_and_damps() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 465.0), Vec2::new(4.0, 10.0));
        integrate_ball(&mut ball, Vec2::ZERO, &t);

        assert_eq!(ball.pos.y, 470.0);
        // vy: (10 + 0.5) * -0.55
        assert!(approx(ball.vel.y, -5.775));
        assert!(approx(ball.vel.x, 4.0 * 0.985));
        assert!(ball.in_air);
    }

    #[test]
    fn test_micro_bounce_is_killed() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 469.0), Vec2::new(0.0, 1.0));
        ground_contact(&mut ball, &t);
        assert_eq!(ball.pos.y, 469.0);
        assert_eq!(ball.vel.y, 1.0);

        ball.pos.y = 470.5;
        ground_contact(&mut ball, &t);
        assert_eq!(ball.pos.y, 470.0);
        assert_eq!(ball.vel.y, 0.0);
        assert!(is_grounded(&ball, &t));
    }

    #[test]
    fn test_rolling_friction_damps_once_per_call() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 470.0), Vec2::new(5.0, 0.0));
        apply_rolling_friction(&mut ball, &t);
        assert!(approx(ball.vel.x, 4.925));
    }

    #[test]
    fn test_rolling_friction_ignores_airborne_ball() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 300.0), Vec2::new(5.0, 0.0));
        apply_rolling_friction(&mut ball, &t);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_rolling_friction_snaps_to_zero() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 470.0), Vec2::new(0.081, 0.0));
        apply_rolling_friction(&mut ball, &t);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_rolling_ball_converges_to_rest() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(300.0, 470.0), Vec2::new(5.0, 0.0));
        let mut last_vx = ball.vel.x;
        let mut settled_at = None;
        for i in 0..2000 {
            if integrate_ball(&mut ball, Vec2::ZERO, &t) {
                settled_at = Some(i);
                break;
            }
            assert!(ball.vel.x <= last_vx);
            last_vx = ball.vel.x;
        }
        assert!(settled_at.is_some());
        assert!(ball.at_rest);
        assert!(!ball.in_air);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos.y, 470.0);
    }

    #[test]
    fn test_zero_velocity_throw_drops_and_settles() {
        let t = Tuning::default();
        let mut ball = flying(t.anchor(), Vec2::ZERO);
        let settled = (0..200).any(|_| integrate_ball(&mut ball, Vec2::ZERO, &t));
        assert!(settled);
        assert_eq!(ball.pos, Vec2::new(120.0, 470.0));
    }

    #[test]
    fn test_walls_clamp_and_reflect() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(880.0, 200.0), Vec2::new(40.0, 0.0));
        integrate_ball(&mut ball, Vec2::ZERO, &t);
        assert_eq!(ball.pos.x, 890.0);
        assert!(approx(ball.vel.x, -16.0));

        let mut ball = flying(Vec2::new(15.0, 200.0), Vec2::new(-40.0, 0.0));
        integrate_ball(&mut ball, Vec2::ZERO, &t);
        assert_eq!(ball.pos.x, 10.0);
        assert!(approx(ball.vel.x, 16.0));
    }

    #[test]
    fn test_carried_ball_follows_dog() {
        let t = Tuning::default();
        let mut ball = flying(Vec2::new(500.0, 100.0), Vec2::new(9.0, 9.0));
        ball.in_air = false;
        ball.carried = true;
        integrate_ball(&mut ball, Vec2::new(300.0, 470.0), &t);
        assert_eq!(ball.pos, Vec2::new(312.0, 452.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!ball.in_air);

        integrate_ball(&mut ball, Vec2::new(885.0, 470.0), &t);
        assert_eq!(ball.pos.x, 890.0);
    }

    #[test]
    fn test_resting_ball_does_not_move() {
        let t = Tuning::default();
        let mut ball = Ball::resting_at(Vec2::new(400.0, 470.0));
        assert!(!integrate_ball(&mut ball, Vec2::ZERO, &t));
        assert_eq!(ball.pos, Vec2::new(400.0, 470.0));
    }

    #[test]
    fn test_every_throw_settles() {
        let t = Tuning::default();
        let max_speed = t.max_drag * t.power_scale;
        for step in 0..=12 {
            let angle = -std::f32::consts::PI * step as f32 / 12.0;
            for frac in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let vel = Vec2::new(angle.cos(), angle.sin()) * max_speed * frac;
                let mut ball = flying(t.anchor(), vel);
                let settled = (0..2000).any(|_| integrate_ball(&mut ball, Vec2::ZERO, &t));
                assert!(settled, "throw {:?} never settled", vel);
                assert!(ball.pos.x >= 10.0 && ball.pos.x <= 890.0);
            }
        }
    }
}
