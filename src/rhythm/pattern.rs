// Rhythm Pattern - The unit of generated rhythm handed to a renderer
// Immutable once generated; steps are a fixed-length boolean hit sequence

use serde::{Deserialize, Serialize};

/// A generated rhythm: named hit sequence plus groove modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmPattern {
    /// Pattern name (e.g., "tresillo", "lofi-kick")
    pub name: String,

    /// Hit sequence, one flag per subdivision
    pub steps: Vec<bool>,

    /// Swing amount [0.0, 1.0]
    pub swing: f32,

    /// Humanize amount [0.0, 1.0]
    pub humanize: f32,
}

impl RhythmPattern {
    /// Create a pattern with groove modifiers clamped into range
    pub fn new(name: impl Into<String>, steps: Vec<bool>, swing: f32, humanize: f32) -> Self {
        RhythmPattern {
            name: name.into(),
            steps,
            swing: swing.clamp(0.0, 1.0),
            humanize: humanize.clamp(0.0, 1.0),
        }
    }

    /// Number of active hits
    pub fn hit_count(&self) -> usize {
        self.steps.iter().filter(|&&s| s).count()
    }

    /// Fraction of steps that are hits
    pub fn density(&self) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.hit_count() as f32 / self.steps.len() as f32
    }
}
