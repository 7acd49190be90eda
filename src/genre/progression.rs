// Chord Progressions - One chord event per bar, style-driven
// The degree is retained on each event for voice-leading decisions downstream

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::genre::profile::{GenreProfile, ProgressionStyle};
use crate::theory::{
    parse_key, scale_degree_name, ChordQuality, Scale, JAZZY_DEGREES, NOTE_NAMES,
};

/// A chord in a progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEvent {
    /// Root note name
    pub root: String,

    /// Chord quality tag
    pub quality: ChordQuality,

    /// Scale degree (1-7) this chord was built on
    pub degree: u8,
}

// Voice-leading interval jumps for the complex walk
const WALK_JUMPS: [i32; 6] = [-5, -4, -2, 2, 4, 5];

const ALL_QUALITIES: [ChordQuality; 10] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Augmented,
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Dominant7,
    ChordQuality::Sus2,
    ChordQuality::Sus4,
    ChordQuality::Power,
];

/// Generate one chord per bar in the profile's progression style
pub fn generate_progression(
    profile: &GenreProfile,
    key: &str,
    bars: usize,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<ChordEvent>> {
    if bars == 0 {
        return Err(EngineError::InvalidArgument(
            "progression bars must be > 0".to_string(),
        ));
    }

    let parsed = parse_key(key)?;
    let key_root = NOTE_NAMES[parsed.root];
    // Minor keys pull the walk onto the natural minor scale
    let scale = if parsed.minor {
        Scale::NaturalMinor
    } else {
        profile.primary_scale()
    };

    let pool_quality =
        |rng: &mut fastrand::Rng| profile.chord_pool[rng.usize(0..profile.chord_pool.len())];

    let mut chords = Vec::with_capacity(bars);

    match profile.progression_style {
        ProgressionStyle::Jazzy => {
            let template = JAZZY_DEGREES[rng.usize(0..JAZZY_DEGREES.len())];
            for bar in 0..bars {
                let degree = template[bar % template.len()];
                chords.push(ChordEvent {
                    root: scale_degree_name(key_root, scale, degree)?.to_string(),
                    quality: pool_quality(rng),
                    degree,
                });
            }
        }

        ProgressionStyle::Simple => {
            const CYCLE: [u8; 4] = [1, 4, 5, 1];
            for bar in 0..bars {
                let degree = CYCLE[bar % CYCLE.len()];
                chords.push(ChordEvent {
                    root: scale_degree_name(key_root, scale, degree)?.to_string(),
                    quality: profile.primary_quality(),
                    degree,
                });
            }
        }

        ProgressionStyle::Complex => {
            let mut degree: i32 = 1;
            for _ in 0..bars {
                chords.push(ChordEvent {
                    root: scale_degree_name(key_root, scale, degree as u8)?.to_string(),
                    quality: pool_quality(rng),
                    degree: degree as u8,
                });
                let jump = WALK_JUMPS[rng.usize(0..WALK_JUMPS.len())];
                degree = (degree - 1 + jump).rem_euclid(7) + 1;
            }
        }

        ProgressionStyle::Minimal => {
            const CYCLE: [u8; 4] = [1, 1, 4, 1];
            for bar in 0..bars {
                let degree = CYCLE[bar % CYCLE.len()];
                chords.push(ChordEvent {
                    root: scale_degree_name(key_root, scale, degree)?.to_string(),
                    quality: profile.primary_quality(),
                    degree,
                });
            }
        }

        ProgressionStyle::Chaotic => {
            // Atonal: any root, any degree, any quality
            for _ in 0..bars {
                chords.push(ChordEvent {
                    root: NOTE_NAMES[rng.usize(0..12)].to_string(),
                    quality: ALL_QUALITIES[rng.usize(0..ALL_QUALITIES.len())],
                    degree: 1 + rng.u8(0..7),
                });
            }
        }
    }

    Ok(chords)
}
