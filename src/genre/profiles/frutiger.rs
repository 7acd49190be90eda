// Frutiger Profile
// Glossy Y2K optimism: bright arpeggios, clean four-on-the-floor

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the frutiger profile
///
/// Characteristics:
/// - 118 BPM, tight grid, strict chord-tone arpeggiation
/// - High brightness, airy digital sheen
/// - Riser buildups into filter transitions
pub fn frutiger_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Frutiger,
        name: "frutiger",
        tempo_range: (110.0, 130.0),
        preferred_bpm: 118.0,
        scales: vec![Scale::Major, Scale::Lydian, Scale::MajorPentatonic],
        chord_pool: vec![
            ChordQuality::Major7,
            ChordQuality::Sus2,
            ChordQuality::Major,
        ],
        progression_style: ProgressionStyle::Complex,
        preferred_keys: vec!["C", "E", "A", "B"],
        swing: 0.1,
        rhythmic_complexity: 0.5,
        groove_tightness: 0.9,
        brightness: 0.85,
        warmth: 0.4,
        saturation: 0.3,
        space_reverb: 0.45,
        lofi_amount: 0.0,
        glitch_amount: 0.1,
        vinyl_crackle: false,
        tape_wobble: false,
        nature_ambience: false,
        synth_pads: true,
        acoustic_elements: false,
        digital_glitch: true,
        buildup_style: BuildupStyle::Riser,
        transition_preference: TransitionPreference::Filter,
        section_length_bars: 8,
        sample_categories: vec!["bubbles", "glass", "ui", "water"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (0.0, 3.0),
            time_stretch_range: (1.0, 1.15),
            filter_range: (800.0, 8000.0),
            bit_crush: 0.0,
            reverb: 0.45,
            delay: 0.35,
            chorus: 0.5,
            distortion: 0.05,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frutiger_profile() {
        let profile = frutiger_profile();

        assert_eq!(profile.genre, Genre::Frutiger);
        assert_eq!(profile.progression_style, ProgressionStyle::Complex);
        // Bright enough to flip the effect chain into highpass territory
        assert!(profile.brightness > 0.5);
        assert!(profile.groove_tightness > 0.8);
        assert_eq!(profile.lofi_amount, 0.0);
        assert_eq!(profile.buildup_style, BuildupStyle::Riser);
    }
}
