// Vaporwave Profile
// Slowed and pitched-down mall jazz, saturated nostalgia

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the vaporwave profile
///
/// Characteristics:
/// - 75 BPM, jazzy seventh-chord movement pitched down
/// - Everything slowed: time-stretch envelope sits below 1.0
/// - Vinyl crackle, tape wobble, echo transitions
pub fn vaporwave_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Vaporwave,
        name: "vaporwave",
        tempo_range: (60.0, 85.0),
        preferred_bpm: 75.0,
        scales: vec![Scale::Major, Scale::Mixolydian, Scale::Dorian],
        chord_pool: vec![
            ChordQuality::Major7,
            ChordQuality::Minor7,
            ChordQuality::Dominant7,
        ],
        progression_style: ProgressionStyle::Jazzy,
        preferred_keys: vec!["C", "F", "Bb", "Am"],
        swing: 0.2,
        rhythmic_complexity: 0.3,
        groove_tightness: 0.5,
        brightness: 0.4,
        warmth: 0.6,
        saturation: 0.4,
        space_reverb: 0.7,
        lofi_amount: 0.6,
        glitch_amount: 0.2,
        vinyl_crackle: true,
        tape_wobble: true,
        nature_ambience: false,
        synth_pads: true,
        acoustic_elements: false,
        digital_glitch: true,
        buildup_style: BuildupStyle::Gradual,
        transition_preference: TransitionPreference::Echo,
        section_length_bars: 8,
        sample_categories: vec!["mall", "sax", "city", "vhs"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (-5.0, -1.0),
            time_stretch_range: (0.7, 0.9),
            filter_range: (300.0, 3000.0),
            bit_crush: 0.3,
            reverb: 0.7,
            delay: 0.4,
            chorus: 0.6,
            distortion: 0.2,
        },
    }
}
