// Cottagecore Profile
// Pastoral acoustic simplicity, birdsong and open major chords

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the cottagecore profile
///
/// Characteristics:
/// - Gentle 92 BPM, simple I-IV-V movement
/// - Acoustic elements and nature ambience, no digital texture
/// - Very sparse rhythms, soft dynamics
pub fn cottagecore_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Cottagecore,
        name: "cottagecore",
        tempo_range: (80.0, 110.0),
        preferred_bpm: 92.0,
        scales: vec![Scale::Major, Scale::MajorPentatonic, Scale::Lydian],
        chord_pool: vec![
            ChordQuality::Major,
            ChordQuality::Sus2,
            ChordQuality::Major7,
        ],
        progression_style: ProgressionStyle::Simple,
        preferred_keys: vec!["C", "G", "D", "F"],
        swing: 0.3,
        rhythmic_complexity: 0.25,
        groove_tightness: 0.35,
        brightness: 0.6,
        warmth: 0.75,
        saturation: 0.2,
        space_reverb: 0.5,
        lofi_amount: 0.2,
        glitch_amount: 0.0,
        vinyl_crackle: false,
        tape_wobble: false,
        nature_ambience: true,
        synth_pads: false,
        acoustic_elements: true,
        digital_glitch: false,
        buildup_style: BuildupStyle::Swell,
        transition_preference: TransitionPreference::Fade,
        section_length_bars: 8,
        sample_categories: vec!["birds", "guitar", "flute", "stream"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (-1.0, 1.0),
            time_stretch_range: (0.95, 1.05),
            filter_range: (600.0, 6000.0),
            bit_crush: 0.0,
            reverb: 0.5,
            delay: 0.25,
            chorus: 0.3,
            distortion: 0.0,
        },
    }
}
