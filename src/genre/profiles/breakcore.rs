// Breakcore Profile
// Chopped breaks at violent tempo, atonal chaos, maximum glitch

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the breakcore profile
///
/// Characteristics:
/// - 180 BPM default, range up to 220
/// - Chaotic atonal progressions, dense Euclidean drum layers
/// - Short 4-bar sections, hard cut/stutter transitions
/// - Extreme sample mangling (wide pitch and stretch ranges)
pub fn breakcore_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Breakcore,
        name: "breakcore",
        tempo_range: (160.0, 220.0),
        preferred_bpm: 180.0,
        scales: vec![Scale::NaturalMinor, Scale::HarmonicMinor, Scale::Phrygian],
        chord_pool: vec![
            ChordQuality::Minor,
            ChordQuality::Diminished,
            ChordQuality::Power,
        ],
        progression_style: ProgressionStyle::Chaotic,
        preferred_keys: vec!["Am", "Em", "F#m", "Cm"],
        swing: 0.05,
        rhythmic_complexity: 0.95,
        groove_tightness: 0.2,
        brightness: 0.7,
        warmth: 0.2,
        saturation: 0.9,
        space_reverb: 0.3,
        lofi_amount: 0.4,
        glitch_amount: 0.95,
        vinyl_crackle: false,
        tape_wobble: false,
        nature_ambience: false,
        synth_pads: false,
        acoustic_elements: false,
        digital_glitch: true,
        buildup_style: BuildupStyle::Sudden,
        transition_preference: TransitionPreference::Stutter,
        section_length_bars: 4,
        sample_categories: vec!["amen", "hardcore", "scream", "glitch"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (-6.0, 6.0),
            time_stretch_range: (0.5, 2.0),
            filter_range: (200.0, 10000.0),
            bit_crush: 0.7,
            reverb: 0.3,
            delay: 0.2,
            chorus: 0.0,
            distortion: 0.8,
        },
    }
}
