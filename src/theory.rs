// Music Theory Tables - Scales, chords, and note/frequency conversion
// Side-effect-free lookups consumed by every generator in the engine

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Golden ratio - used for organic, non-repeating micro-timing and spacing
pub const PHI: f32 = 1.618_034;

/// Ascending Fibonacci sequence (1 listed once)
pub const FIBONACCI: [u32; 16] = [
    1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597,
];

/// Chromatic note names, sharps only
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Circle-of-fifths ordering, used to estimate harmonic closeness of two keys
pub const CIRCLE_OF_FIFTHS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#", "F",
];

/// Curated scale-degree templates for jazzy progressions (ii-V-I family)
pub const JAZZY_DEGREES: [[u8; 4]; 4] = [
    [2, 5, 1, 6],
    [1, 6, 2, 5],
    [3, 6, 2, 5],
    [2, 5, 1, 4],
];

/// Musical scale families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Major,
    NaturalMinor,
    HarmonicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    MajorPentatonic,
    MinorPentatonic,
    WholeTone,
}

impl Scale {
    /// Semitone intervals from the root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Scale::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Scale::MajorPentatonic => &[0, 2, 4, 7, 9],
            Scale::MinorPentatonic => &[0, 3, 5, 7, 10],
            Scale::WholeTone => &[0, 2, 4, 6, 8, 10],
        }
    }
}

/// Chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    Sus2,
    Sus4,
    Power,
}

impl ChordQuality {
    /// Semitone intervals from the chord root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Power => &[0, 7],
        }
    }
}

/// Resolve a note name (sharp or flat spelling) to its chromatic index
pub fn note_index(name: &str) -> EngineResult<usize> {
    let normalized = match name {
        "Db" => "C#",
        "Eb" => "D#",
        "Gb" => "F#",
        "Ab" => "G#",
        "Bb" => "A#",
        other => other,
    };

    NOTE_NAMES
        .iter()
        .position(|&n| n == normalized)
        .ok_or_else(|| EngineError::UnknownNote(name.to_string()))
}

/// Convert a note name and octave to a frequency in Hz (A4 = 440, equal temperament)
pub fn note_frequency(name: &str, octave: i32) -> EngineResult<f32> {
    let index = note_index(name)?;
    let midi = (octave + 1) * 12 + index as i32;
    Ok(440.0 * 2.0_f32.powf((midi - 69) as f32 / 12.0))
}

/// Frequencies of a scale rooted at `root` in the given octave
pub fn scale_frequencies(root: &str, scale: Scale, octave: i32) -> EngineResult<Vec<f32>> {
    let base = note_frequency(root, octave)?;
    Ok(scale
        .intervals()
        .iter()
        .map(|&i| base * 2.0_f32.powf(i as f32 / 12.0))
        .collect())
}

/// Frequencies of a chord rooted at `root` in the given octave
pub fn chord_frequencies(root: &str, quality: ChordQuality, octave: i32) -> EngineResult<Vec<f32>> {
    let base = note_frequency(root, octave)?;
    Ok(quality
        .intervals()
        .iter()
        .map(|&i| base * 2.0_f32.powf(i as f32 / 12.0))
        .collect())
}

/// Note name at a 1-based scale degree of `key`, wrapping past the octave
pub fn scale_degree_name(key: &str, scale: Scale, degree: u8) -> EngineResult<&'static str> {
    if degree == 0 {
        return Err(EngineError::InvalidArgument(
            "scale degree must be >= 1".to_string(),
        ));
    }

    let root = note_index(key)?;
    let intervals = scale.intervals();
    let interval = intervals[(degree as usize - 1) % intervals.len()];
    Ok(NOTE_NAMES[(root + interval as usize) % 12])
}

/// A parsed key: chromatic root index plus major/minor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub root: usize,
    pub minor: bool,
}

/// Parse a key name such as "C", "F#" or "Am" into root index and mode
pub fn parse_key(name: &str) -> EngineResult<Key> {
    let (root_name, minor) = match name.strip_suffix('m') {
        // "Em" is E minor, but a bare "m" is not a key
        Some(root) if !root.is_empty() => (root, true),
        _ => (name, false),
    };

    Ok(Key {
        root: note_index(root_name)?,
        minor,
    })
}

/// Distance between two chromatic roots on the circle of fifths (0..=6)
pub fn circle_distance(root_a: usize, root_b: usize) -> u32 {
    let pos = |root: usize| {
        CIRCLE_OF_FIFTHS
            .iter()
            .position(|&n| n == NOTE_NAMES[root % 12])
            .unwrap_or(0) as i32
    };

    let delta = (pos(root_a) - pos(root_b)).rem_euclid(12);
    delta.min(12 - delta) as u32
}
