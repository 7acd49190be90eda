// Cadenza - Generative music composition engine
// Pure computation: patterns, curves and parameter envelopes for a renderer.
// No audio, no I/O, no blocking.

pub mod arrangement;
pub mod dj;
pub mod error;
pub mod genre;
pub mod rhythm;
pub mod theory;

pub use error::{EngineError, EngineResult};
