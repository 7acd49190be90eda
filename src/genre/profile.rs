// Genre Profile Types - Declarative, read-only configuration per musical style
// Profiles are harmonic and sonic systems, not just patches

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::theory::{ChordQuality, Scale};

/// Supported musical styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Lofi,
    Cottagecore,
    Frutiger,
    Breakcore,
    Ambient,
    Vaporwave,
}

impl Genre {
    /// Resolve a genre from its name tag; unknown tags fail fast rather
    /// than silently defaulting
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name {
            "lofi" => Ok(Genre::Lofi),
            "cottagecore" => Ok(Genre::Cottagecore),
            "frutiger" => Ok(Genre::Frutiger),
            "breakcore" => Ok(Genre::Breakcore),
            "ambient" => Ok(Genre::Ambient),
            "vaporwave" => Ok(Genre::Vaporwave),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown genre: {other}"
            ))),
        }
    }

    /// Name tag for this genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Lofi => "lofi",
            Genre::Cottagecore => "cottagecore",
            Genre::Frutiger => "frutiger",
            Genre::Breakcore => "breakcore",
            Genre::Ambient => "ambient",
            Genre::Vaporwave => "vaporwave",
        }
    }

    /// All supported genres
    pub fn all() -> [Genre; 6] {
        [
            Genre::Lofi,
            Genre::Cottagecore,
            Genre::Frutiger,
            Genre::Breakcore,
            Genre::Ambient,
            Genre::Vaporwave,
        ]
    }
}

/// How chord progressions are generated for a genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStyle {
    /// Curated ii-V-I family templates with pool-drawn qualities
    Jazzy,

    /// Fixed I-IV-V-I cycle
    Simple,

    /// Constrained random walk over scale degrees
    Complex,

    /// Fixed I-I-IV-I cycle
    Minimal,

    /// Fully random root/degree/quality, no scale constraint
    Chaotic,
}

/// How a genre prefers to build energy into the next section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildupStyle {
    Gradual,
    Swell,
    Riser,
    Sudden,
}

/// The transition flavor a genre leans toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPreference {
    Fade,
    Filter,
    Cut,
    Stutter,
    Echo,
}

/// Sample-processing envelope applied by a renderer to genre samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleProcessing {
    /// Pitch-shift range in semitones (min, max)
    pub pitch_shift_range: (f32, f32),

    /// Time-stretch factor range (min, max)
    pub time_stretch_range: (f32, f32),

    /// Filter cutoff range in Hz (min, max)
    pub filter_range: (f32, f32),

    pub bit_crush: f32,
    pub reverb: f32,
    pub delay: f32,
    pub chorus: f32,
    pub distortion: f32,
}

/// Complete genre definition: tempo, harmony, rhythm feel, sonics,
/// textures, arrangement hints and sample handling
#[derive(Debug, Clone, Serialize)]
pub struct GenreProfile {
    pub genre: Genre,
    pub name: &'static str,

    /// Usable tempo range in BPM (min, max)
    pub tempo_range: (f32, f32),

    /// The BPM this genre defaults to
    pub preferred_bpm: f32,

    /// Scales drawn from when composing, primary first
    pub scales: Vec<Scale>,

    /// Chord qualities drawn from, primary first
    pub chord_pool: Vec<ChordQuality>,

    pub progression_style: ProgressionStyle,

    /// Keys drawn from when none is requested
    pub preferred_keys: Vec<&'static str>,

    // Rhythmic knobs, all [0.0, 1.0]
    pub swing: f32,
    pub rhythmic_complexity: f32,
    pub groove_tightness: f32,

    // Sonic knobs, all [0.0, 1.0]
    pub brightness: f32,
    pub warmth: f32,
    pub saturation: f32,
    pub space_reverb: f32,
    pub lofi_amount: f32,
    pub glitch_amount: f32,

    // Texture toggles
    pub vinyl_crackle: bool,
    pub tape_wobble: bool,
    pub nature_ambience: bool,
    pub synth_pads: bool,
    pub acoustic_elements: bool,
    pub digital_glitch: bool,

    // Arrangement hints
    pub buildup_style: BuildupStyle,
    pub transition_preference: TransitionPreference,
    pub section_length_bars: u32,

    /// Sample-category tags a renderer should reach for
    pub sample_categories: Vec<&'static str>,

    pub sample_processing: SampleProcessing,
}

impl GenreProfile {
    /// Pick one of the genre's preferred keys
    pub fn random_key(&self, rng: &mut fastrand::Rng) -> &'static str {
        self.preferred_keys[rng.usize(0..self.preferred_keys.len())]
    }

    /// The genre's primary scale
    pub fn primary_scale(&self) -> Scale {
        self.scales[0]
    }

    /// The genre's primary chord quality
    pub fn primary_quality(&self) -> ChordQuality {
        self.chord_pool[0]
    }
}
