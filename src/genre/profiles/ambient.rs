// Ambient Profile
// Slow drones, long reverbs, barely-there rhythm

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the ambient profile
///
/// Characteristics:
/// - 70 BPM, minimal I-I-IV-I harmony, sustained single notes
/// - Massive reverb, 16-bar sections
/// - Nature ambience and pads, near-zero rhythmic activity
pub fn ambient_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Ambient,
        name: "ambient",
        tempo_range: (60.0, 80.0),
        preferred_bpm: 70.0,
        scales: vec![Scale::Lydian, Scale::WholeTone, Scale::Major],
        chord_pool: vec![
            ChordQuality::Major7,
            ChordQuality::Sus2,
            ChordQuality::Sus4,
        ],
        progression_style: ProgressionStyle::Minimal,
        preferred_keys: vec!["C", "F", "G", "Eb"],
        swing: 0.2,
        rhythmic_complexity: 0.1,
        groove_tightness: 0.3,
        brightness: 0.5,
        warmth: 0.7,
        saturation: 0.1,
        space_reverb: 0.95,
        lofi_amount: 0.1,
        glitch_amount: 0.0,
        vinyl_crackle: false,
        tape_wobble: false,
        nature_ambience: true,
        synth_pads: true,
        acoustic_elements: false,
        digital_glitch: false,
        buildup_style: BuildupStyle::Swell,
        transition_preference: TransitionPreference::Fade,
        section_length_bars: 16,
        sample_categories: vec!["drone", "field", "bowl", "wind"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (-3.0, 3.0),
            time_stretch_range: (0.8, 1.2),
            filter_range: (300.0, 5000.0),
            bit_crush: 0.0,
            reverb: 0.95,
            delay: 0.5,
            chorus: 0.4,
            distortion: 0.0,
        },
    }
}
