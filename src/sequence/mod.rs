//! Deterministic answer ordering
//!
//! A seeded LCG shuffle and the cursor walk over it.

mod random;
mod sequencer;

pub use random::SeededRandom;
pub use sequencer::AnswerSequencer;
