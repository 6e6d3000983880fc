//! Deterministic scene simulation
//!
//! All animation logic lives here. This module must stay pure:
//! - Bounded frame deltas only
//! - Seeded RNG only (star placement)
//! - No rendering or platform dependencies

pub mod celestial;
pub mod narrative;
pub mod state;
pub mod tick;

pub use celestial::{CelestialState, SKY_DAY, SKY_NIGHT};
pub use narrative::{Narrative, Phase};
pub use state::{Clock, Fish, SceneState, StarField};
pub use tick::{TickInput, tick};
