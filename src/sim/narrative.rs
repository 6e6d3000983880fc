//! Narrative sequencer
//!
//! Staged reveal driven by a one-shot trigger: the pyramid entrances open,
//! the message fades in letter by letter, holds, fades out globally, then
//! the scene requests exit after a short delay. Each stage uses its own
//! linear rate so stages can be re-timed independently.

use crate::consts::*;

/// Discrete stage of the reveal sequence. Transitions are strictly ordered;
/// at most one transition happens per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Entrance cutouts growing on the pyramids
    Opening,
    /// Message cascading in left to right
    Revealing,
    /// Global fade-out of the whole message
    Fading,
    /// Text gone; counting down to exit
    Closing,
}

/// Narrative state. `letter_alphas` length is fixed to the message length
/// for the lifetime of the scene.
#[derive(Debug, Clone)]
pub struct Narrative {
    pub phase: Phase,
    /// Entrance cutout growth, 0..=1
    pub entrance_progress: f32,
    /// Global text opacity, multiplied with each letter's own alpha
    pub text_alpha: f32,
    /// Scalar sweeping the cascade; reused as the fade driver after reveal
    pub reveal_progress: f32,
    /// Per-letter opacity, one entry per message character
    pub letter_alphas: Vec<f32>,
    pub close_timer: f32,
}

impl Narrative {
    pub fn new(message_len: usize) -> Self {
        Self {
            phase: Phase::Idle,
            entrance_progress: 0.0,
            text_alpha: 0.0,
            reveal_progress: 0.0,
            letter_alphas: vec![0.0; message_len],
            close_timer: 0.0,
        }
    }

    /// Begin (or restart) the sequence, cancelling any in-flight progress
    pub fn trigger(&mut self) {
        self.phase = Phase::Opening;
        self.entrance_progress = 0.0;
        self.text_alpha = 0.0;
        self.reveal_progress = 0.0;
        self.close_timer = 0.0;
        self.letter_alphas.fill(0.0);
    }

    /// Pyramids render with entrance cutouts while the sequence is active
    pub fn entrances_open(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The message is drawn during the reveal and fade stages
    pub fn text_visible(&self) -> bool {
        matches!(self.phase, Phase::Revealing | Phase::Fading)
    }

    /// Advance by a frame delta. Returns true once the sequence has finished
    /// and the application should close.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.phase {
            Phase::Idle => {}
            Phase::Opening => {
                self.entrance_progress = (self.entrance_progress + dt * ENTRANCE_RATE).min(1.0);
                if self.entrance_progress >= 1.0 {
                    self.phase = Phase::Revealing;
                }
            }
            Phase::Revealing => {
                self.text_alpha = (self.text_alpha + dt * TEXT_ALPHA_RATE).clamp(0.0, 1.0);

                // Each letter chases a 0/1 target gated by the sweep. The chase
                // rate outruns the sweep, so a letter finishes fading in well
                // before the next one starts.
                let len = self.letter_alphas.len() as f32;
                for (i, alpha) in self.letter_alphas.iter_mut().enumerate() {
                    let target = if self.reveal_progress * len > i as f32 {
                        1.0
                    } else {
                        0.0
                    };
                    *alpha = (*alpha + dt * LETTER_CHASE_RATE * (target - *alpha)).clamp(0.0, 1.0);
                }

                self.reveal_progress += dt * REVEAL_RATE;
                if self.reveal_progress >= 1.0 {
                    self.phase = Phase::Fading;
                    self.reveal_progress = 0.0;
                }
            }
            Phase::Fading => {
                // Letters are held; only the global alpha drops
                self.text_alpha = (self.text_alpha - dt * TEXT_ALPHA_RATE).max(0.0);
                if self.text_alpha <= 0.0 {
                    self.phase = Phase::Closing;
                }
            }
            Phase::Closing => {
                self.close_timer += dt;
                if self.close_timer >= CLOSE_DELAY {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn run_until(n: &mut Narrative, phase: Phase, max_ticks: u32) {
        for _ in 0..max_ticks {
            if n.phase == phase {
                return;
            }
            n.tick(DT);
        }
        panic!("never reached {phase:?}, stuck in {:?}", n.phase);
    }

    #[test]
    fn test_phase_order_strict() {
        let mut n = Narrative::new(5);
        assert_eq!(n.phase, Phase::Idle);
        n.tick(DT);
        assert_eq!(n.phase, Phase::Idle);

        n.trigger();
        let mut seen = vec![n.phase];
        for _ in 0..20_000 {
            if n.tick(DT) {
                break;
            }
            if *seen.last().unwrap() != n.phase {
                seen.push(n.phase);
            }
        }
        assert_eq!(
            seen,
            vec![
                Phase::Opening,
                Phase::Revealing,
                Phase::Fading,
                Phase::Closing
            ]
        );
    }

    #[test]
    fn test_first_letter_completes_before_second_starts() {
        let mut n = Narrative::new(2);
        n.trigger();
        run_until(&mut n, Phase::Revealing, 1000);

        // Capture how complete the first letter is at the instant the
        // second first starts to rise.
        let mut first_at_second_start = None;
        while n.phase == Phase::Revealing {
            if first_at_second_start.is_none() && n.letter_alphas[1] > 0.0 {
                first_at_second_start = Some(n.letter_alphas[0]);
            }
            n.tick(DT);
        }

        let alpha = first_at_second_start.expect("second letter never rose");
        assert!(alpha > 0.95, "first letter only at {alpha}");
    }

    #[test]
    fn test_letters_become_visible_in_order() {
        let mut n = Narrative::new(6);
        n.trigger();
        run_until(&mut n, Phase::Revealing, 1000);

        let mut visible_order = Vec::new();
        while n.phase == Phase::Revealing {
            for i in 0..6 {
                if n.letter_alphas[i] > 0.5 && !visible_order.contains(&i) {
                    visible_order.push(i);
                }
            }
            n.tick(DT);
        }
        assert_eq!(visible_order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_alphas_stay_clamped() {
        let mut n = Narrative::new(8);
        n.trigger();
        for _ in 0..20_000 {
            n.tick(DT);
            assert!(n.entrance_progress >= 0.0 && n.entrance_progress <= 1.0);
            assert!(n.text_alpha >= 0.0 && n.text_alpha <= 1.0);
            for a in &n.letter_alphas {
                assert!(*a >= 0.0 && *a <= 1.0);
            }
        }
    }

    #[test]
    fn test_retrigger_resets_everything() {
        let mut n = Narrative::new(6);
        n.trigger();
        run_until(&mut n, Phase::Fading, 20_000);
        assert!(n.letter_alphas.iter().any(|a| *a > 0.5));

        n.trigger();
        assert_eq!(n.phase, Phase::Opening);
        assert_eq!(n.entrance_progress, 0.0);
        assert_eq!(n.text_alpha, 0.0);
        assert_eq!(n.reveal_progress, 0.0);
        assert_eq!(n.close_timer, 0.0);
        assert!(n.letter_alphas.iter().all(|a| *a == 0.0));
        assert_eq!(n.letter_alphas.len(), 6);
    }

    #[test]
    fn test_close_fires_at_threshold_not_before() {
        let mut n = Narrative::new(3);
        n.trigger();
        run_until(&mut n, Phase::Closing, 20_000);

        assert!(!n.tick(1.0));
        assert!(!n.tick(0.9));
        // close_timer now 1.9
        assert!(n.tick(0.2));
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut n = Narrative::new(5);
        n.trigger();
        for _ in 0..100 {
            n.tick(DT);
        }
        let before = n.clone();
        for _ in 0..50 {
            assert!(!n.tick(0.0));
        }
        assert_eq!(n.phase, before.phase);
        assert_eq!(n.entrance_progress, before.entrance_progress);
        assert_eq!(n.text_alpha, before.text_alpha);
        assert_eq!(n.reveal_progress, before.reveal_progress);
        assert_eq!(n.letter_alphas, before.letter_alphas);
    }

    #[test]
    fn test_empty_message_still_completes() {
        let mut n = Narrative::new(0);
        n.trigger();
        let mut finished = false;
        for _ in 0..20_000 {
            if n.tick(DT) {
                finished = true;
                break;
            }
        }
        assert!(finished);
    }
}
