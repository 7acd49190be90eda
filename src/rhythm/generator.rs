// Genre Rhythm Generator - Turns a genre tag into four grooved drum layers
// One dispatch at the top; each arm is a recipe over the mathematical generators

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::genre::Genre;
use crate::rhythm::euclidean::euclidean;
use crate::rhythm::groove::{fibonacci_rhythm, golden_groove};
use crate::rhythm::pattern::RhythmPattern;

/// Options for genre rhythm generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmOptions {
    pub genre: Genre,

    /// Density scaling [0.0, 1.0]
    pub complexity: f32,

    /// Subdivisions per pattern
    pub steps: usize,
}

impl RhythmOptions {
    pub fn new(genre: Genre) -> Self {
        RhythmOptions {
            genre,
            complexity: 0.5,
            steps: 16,
        }
    }
}

/// The four rhythm layers of a composed section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreRhythm {
    pub kick: RhythmPattern,
    pub snare: RhythmPattern,
    pub hat: RhythmPattern,
    pub percussion: RhythmPattern,
}

/// Generate genre-flavored kick/snare/hat/percussion patterns
pub fn generate_rhythm(options: &RhythmOptions, rng: &mut fastrand::Rng) -> EngineResult<GenreRhythm> {
    if options.steps == 0 {
        return Err(EngineError::InvalidArgument(
            "rhythm steps must be > 0".to_string(),
        ));
    }

    let steps = options.steps;
    let c = options.complexity.clamp(0.0, 1.0);

    // Hit count as a fraction of the grid, never exceeding it
    let count = |fraction: f32| ((fraction * steps as f32).round() as usize).min(steps);

    match options.genre {
        Genre::Breakcore => {
            // Dense Euclidean layers everywhere, percussion displaced
            let layers = GenreRhythm {
                kick: layer("breakcore-kick", euclidean(count(0.25 + 0.15 * c), steps, 0)?, 0.05, 0.25),
                snare: layer("breakcore-snare", euclidean(count(0.2 + 0.15 * c), steps, 4)?, 0.05, 0.25),
                hat: layer("breakcore-hat", euclidean(count(0.5 + 0.3 * c), steps, 0)?, 0.05, 0.25),
                percussion: layer("breakcore-perc", euclidean(count(0.3 + 0.2 * c), steps, 2)?, 0.05, 0.25),
            };
            Ok(layers)
        }

        Genre::Lofi => Ok(GenreRhythm {
            kick: layer("lofi-kick", euclidean(count(0.12 + 0.13 * c), steps, 0)?, 0.55, 0.35),
            snare: layer("lofi-snare", backbeat(steps), 0.55, 0.35),
            hat: layer("lofi-hat", euclidean(count(0.35 + 0.25 * c), steps, 0)?, 0.55, 0.35),
            percussion: layer("lofi-perc", fibonacci_rhythm(steps, 0.15 * c)?, 0.55, 0.35),
        }),

        Genre::Cottagecore => Ok(GenreRhythm {
            kick: layer("cottage-kick", euclidean(count(0.1 + 0.08 * c), steps, 0)?, 0.3, 0.5),
            snare: layer("cottage-snare", fibonacci_rhythm(steps, 0.0)?, 0.3, 0.5),
            hat: layer("cottage-hat", golden_hits(steps), 0.3, 0.5),
            percussion: layer("cottage-perc", euclidean(count(0.08 * (1.0 + c)), steps, 3)?, 0.3, 0.5),
        }),

        Genre::Frutiger => Ok(GenreRhythm {
            kick: layer("frutiger-kick", four_on_the_floor(steps), 0.1, 0.1),
            snare: layer("frutiger-snare", backbeat(steps), 0.1, 0.1),
            hat: layer("frutiger-hat", euclidean(count(0.4 + 0.2 * c), steps, 2)?, 0.1, 0.1),
            percussion: layer("frutiger-perc", euclidean(count(0.15 + 0.1 * c), steps, 1)?, 0.1, 0.1),
        }),

        Genre::Ambient => Ok(GenreRhythm {
            kick: layer("ambient-kick", fibonacci_rhythm(steps, 0.05 * c)?, 0.2, 0.4),
            snare: layer("ambient-snare", euclidean(count(0.06), steps, steps / 2)?, 0.2, 0.4),
            hat: layer("ambient-hat", golden_hits(steps), 0.2, 0.4),
            percussion: layer("ambient-perc", fibonacci_rhythm(steps, 0.1 * c)?, 0.2, 0.4),
        }),

        Genre::Vaporwave => Ok(GenreRhythm {
            kick: layer("vapor-kick", four_on_the_floor(steps), 0.2, 0.2),
            snare: layer("vapor-snare", backbeat(steps), 0.2, 0.2),
            hat: layer("vapor-hat", euclidean(count(0.25 + 0.15 * c), steps, 2)?, 0.2, 0.2),
            percussion: layer("vapor-perc", euclidean(count(0.1 + 0.08 * c), steps, 0)?, 0.2, 0.2),
        }),
    }
    .map(|mut rhythm: GenreRhythm| {
        // Tightness jitter keeps repeated calls from sounding stamped out
        let wobble = rng.f32() * 0.05;
        rhythm.kick.humanize = (rhythm.kick.humanize + wobble).clamp(0.0, 1.0);
        rhythm.snare.humanize = (rhythm.snare.humanize + wobble).clamp(0.0, 1.0);
        rhythm.hat.humanize = (rhythm.hat.humanize + wobble).clamp(0.0, 1.0);
        rhythm.percussion.humanize = (rhythm.percussion.humanize + wobble).clamp(0.0, 1.0);
        rhythm
    })
}

fn layer(name: &str, steps: Vec<bool>, swing: f32, humanize: f32) -> RhythmPattern {
    RhythmPattern::new(name, steps, swing, humanize)
}

/// Snare hits on beats 2 and 4 of the bar
fn backbeat(steps: usize) -> Vec<bool> {
    let mut pattern = vec![false; steps];
    if steps >= 4 {
        pattern[steps / 4] = true;
        pattern[3 * steps / 4] = true;
    } else {
        pattern[steps - 1] = true;
    }
    pattern
}

/// Kick on every quarter of the bar
fn four_on_the_floor(steps: usize) -> Vec<bool> {
    let quarter = (steps / 4).max(1);
    (0..steps).map(|i| i % quarter == 0).collect()
}

/// Sparse hits where the golden-ratio micro-offset swings late
fn golden_hits(steps: usize) -> Vec<bool> {
    match golden_groove(steps) {
        Ok(offsets) => offsets.iter().map(|&o| o > 0.03).collect(),
        Err(_) => Vec::new(),
    }
}
