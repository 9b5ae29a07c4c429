//! Property tests for the simulation invariants

use fetch::Tuning;
use fetch::sim::physics::integrate_ball;
use fetch::sim::{Ball, GameState, Mood, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn assert_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(!(state.ball.carried && state.ball.in_air));
    prop_assert_eq!(state.dog.has_ball, state.ball.carried);
    prop_assert!(!(state.ball.at_rest && state.ball.in_air));
    match state.dog.mood {
        Mood::Chasing => prop_assert!(!state.dog.has_ball),
        Mood::Returning => prop_assert!(state.dog.has_ball),
        Mood::Ready => {}
    }
    let r = state.tuning.ball_radius;
    prop_assert!(state.ball.pos.x >= r && state.ball.pos.x <= state.tuning.world_width - r);
    Ok(())
}

/// A frame of player input: maybe throw, maybe reset
fn frame() -> impl Strategy<Value = TickInput> {
    (
        prop::option::weighted(0.05, (-500.0f32..500.0, -500.0f32..500.0)),
        prop::option::weighted(0.005, any::<bool>()),
    )
        .prop_map(|(throw, reset)| TickInput {
            throw: throw.map(|(x, y)| Vec2::new(x, y)),
            reset,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_throw_settles(angle in -std::f32::consts::PI..std::f32::consts::PI, frac in 0.0f32..=1.0) {
        let t = Tuning::default();
        let speed = t.max_drag * t.power_scale * frac;
        let mut ball = Ball {
            pos: t.anchor(),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            in_air: true,
            at_rest: false,
            carried: false,
        };
        let settled = (0..2000).any(|_| integrate_ball(&mut ball, Vec2::ZERO, &t));
        prop_assert!(settled);
        prop_assert!(ball.pos.y >= t.ball_floor_y() - t.settle_tolerance);
    }

    #[test]
    fn invariants_hold_every_tick(frames in prop::collection::vec(frame(), 1..1500)) {
        let mut state = GameState::default();
        let mut last_score = 0;
        for input in &frames {
            tick(&mut state, input);
            assert_invariants(&state)?;

            if input.reset == Some(false) {
                prop_assert_eq!(state.score, 0);
            } else {
                prop_assert!(state.score >= last_score);
            }
            last_score = state.score;
        }
    }

    #[test]
    fn at_most_one_point_per_throw(frames in prop::collection::vec(frame(), 1..1500)) {
        let mut state = GameState::default();
        let mut throws_since_reset = 0u64;
        for input in &frames {
            tick(&mut state, input);
            if input.reset == Some(false) {
                throws_since_reset = 0;
            }
            if state.events.contains(&fetch::sim::GameEvent::Thrown) {
                throws_since_reset += 1;
            }
            prop_assert!(state.score <= throws_since_reset);
        }
    }

    #[test]
    fn lingering_at_handoff_scores_once(extra in 1usize..50) {
        let mut state = GameState::default();
        state.dog.mood = Mood::Returning;
        state.dog.has_ball = true;
        state.ball.carried = true;
        state.ball.at_rest = false;
        state.dog.pos = state.anchor() + Vec2::new(5.0, 5.0);

        for _ in 0..=extra {
            tick(&mut state, &TickInput::default());
            // Keep the dog in the drop zone holding the ball
            state.dog.mood = Mood::Returning;
            state.dog.has_ball = true;
            state.ball.carried = true;
            state.ball.at_rest = false;
        }
        prop_assert_eq!(state.score, 1);
    }

    #[test]
    fn airborne_release_changes_nothing(dx in -420.0f32..420.0, dy in -420.0f32..420.0, ticks in 1usize..20) {
        let mut state = GameState::default();
        prop_assert!(state.throw_with(Vec2::new(150.0, -300.0)));
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default());
        }
        prop_assume!(state.ball.in_air);

        let before = (state.ball.pos, state.ball.vel);
        prop_assert!(!state.throw_with(Vec2::new(dx, dy)));
        state.aim.active = true;
        state.aim.drag = Vec2::new(dx, dy);
        prop_assert!(!state.release_throw());
        prop_assert_eq!((state.ball.pos, state.ball.vel), before);
    }
}
