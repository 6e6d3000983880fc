//! Per-frame scene update
//!
//! One `tick` per frame, driven by the window event loop with a bounded
//! variable delta. All mutation of scene state happens here.

use super::state::SceneState;
use crate::consts::*;

/// Input commands for a single frame. One-shot flags are cleared by the
/// caller after each tick; `blend_dir` reflects held keys.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Toggle the day/night clock (one-shot)
    pub toggle_pause: bool,
    /// Jump to a fresh morning (one-shot)
    pub skip_day: bool,
    /// Hide / show the oasis grass (one-shot)
    pub grass_off: bool,
    pub grass_on: bool,
    /// Start or restart the narrative sequence (one-shot)
    pub trigger_narrative: bool,
    /// Gradient blend adjustment: negative while A held, positive while D held
    pub blend_dir: f32,
}

/// Advance the whole scene by one frame delta
pub fn tick(state: &mut SceneState, input: &TickInput, dt: f32) {
    if input.toggle_pause {
        state.clock.toggle_pause();
    }
    if input.skip_day {
        state.clock.skip_to(SKIP_ELAPSED);
    }
    if input.grass_off {
        state.grass = false;
    }
    if input.grass_on {
        state.grass = true;
    }
    if input.trigger_narrative {
        state.narrative.trigger();
    }

    // The blend nudges by a fixed step per held frame, independent of dt
    if input.blend_dir != 0.0 {
        state.blend = (state.blend + input.blend_dir.signum() * BLEND_STEP).clamp(0.0, 1.0);
    }

    state.clock.advance(dt);
    state.fish.swim(dt);

    if state.narrative.tick(dt) {
        state.exit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Phase;

    fn scene() -> SceneState {
        SceneState::new(&Settings::default())
    }

    #[test]
    fn test_zero_dt_is_idempotent() {
        let mut state = scene();
        // Get some motion going first
        let input = TickInput {
            trigger_narrative: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);

        let elapsed = state.clock.elapsed;
        let angle = state.fish.angle;
        let entrance = state.narrative.entrance_progress;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.clock.elapsed, elapsed);
        assert_eq!(state.fish.angle, angle);
        assert_eq!(state.narrative.entrance_progress, entrance);
        assert!(!state.exit_requested);
    }

    #[test]
    fn test_pause_freezes_clock_not_fish() {
        let mut state = scene();
        let input = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        let elapsed = state.clock.elapsed;
        let angle = state.fish.angle;

        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.clock.elapsed, elapsed);
        assert!(state.fish.angle > angle);
    }

    #[test]
    fn test_skip_day_unpauses() {
        let mut state = scene();
        let input = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert!(state.clock.paused);

        let input = TickInput {
            skip_day: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert!(!state.clock.paused);
        assert_eq!(state.clock.elapsed, SKIP_ELAPSED);
    }

    #[test]
    fn test_grass_toggles() {
        let mut state = scene();
        assert!(state.grass);
        let input = TickInput {
            grass_off: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.016);
        assert!(!state.grass);

        let input = TickInput {
            grass_on: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.016);
        assert!(state.grass);
    }

    #[test]
    fn test_blend_clamps() {
        let mut state = scene();
        let up = TickInput {
            blend_dir: 1.0,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &up, 0.016);
        }
        assert_eq!(state.blend, 1.0);

        let down = TickInput {
            blend_dir: -1.0,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &down, 0.016);
        }
        assert_eq!(state.blend, 0.0);
    }

    #[test]
    fn test_sequence_requests_exit() {
        let mut state = scene();
        let input = TickInput {
            trigger_narrative: true,
            ..Default::default()
        };
        tick(&mut state, &input, 1.0 / 60.0);
        assert_eq!(state.narrative.phase, Phase::Opening);

        let idle = TickInput::default();
        for _ in 0..30_000 {
            if state.exit_requested {
                break;
            }
            tick(&mut state, &idle, 1.0 / 60.0);
        }
        assert!(state.exit_requested);
        assert_eq!(state.narrative.phase, Phase::Closing);
    }
}
