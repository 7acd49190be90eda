// Rhythm Engine - Hit sequences and timing/velocity modifiers
// Mathematical generators (Euclidean, Fibonacci, golden ratio, polyrhythm)
// plus fixed cultural presets and genre-flavored dispatch

pub mod breakcore;
pub mod euclidean;
pub mod generator;
pub mod groove;
pub mod pattern;

// Re-export main types
pub use breakcore::{breakcore_chops, canonical_break, thought_amen, BreakSlice};
pub use euclidean::{euclidean, rotate_left, EuclideanPreset};
pub use generator::{generate_rhythm, GenreRhythm, RhythmOptions};
pub use groove::{
    apply_swing, fibonacci_rhythm, golden_groove, humanize, polyrhythm, velocity_variation,
};
pub use pattern::RhythmPattern;
