// Lofi Profile
// Dusty jazz chords, heavy swing, vinyl warmth

use crate::genre::profile::*;
use crate::theory::{ChordQuality, Scale};

/// Create the lofi profile
///
/// Characteristics:
/// - 85 BPM default, jazzy ii-V-I movement over seventh chords
/// - Heavy swing, loose timing
/// - Vinyl crackle and tape wobble textures
/// - Strong lo-fi degradation (bit depth, filtering)
pub fn lofi_profile() -> GenreProfile {
    GenreProfile {
        genre: Genre::Lofi,
        name: "lofi",
        tempo_range: (70.0, 95.0),
        preferred_bpm: 85.0,
        scales: vec![Scale::Dorian, Scale::NaturalMinor, Scale::MinorPentatonic],
        chord_pool: vec![
            ChordQuality::Minor7,
            ChordQuality::Major7,
            ChordQuality::Dominant7,
        ],
        progression_style: ProgressionStyle::Jazzy,
        preferred_keys: vec!["Am", "Dm", "Em", "C", "F"],
        swing: 0.55,
        rhythmic_complexity: 0.35,
        groove_tightness: 0.4,
        brightness: 0.35,
        warmth: 0.8,
        saturation: 0.5,
        space_reverb: 0.4,
        lofi_amount: 0.8,
        glitch_amount: 0.05,
        vinyl_crackle: true,
        tape_wobble: true,
        nature_ambience: false,
        synth_pads: true,
        acoustic_elements: true,
        digital_glitch: false,
        buildup_style: BuildupStyle::Gradual,
        transition_preference: TransitionPreference::Fade,
        section_length_bars: 8,
        sample_categories: vec!["vinyl", "rhodes", "rain", "tape"],
        sample_processing: SampleProcessing {
            pitch_shift_range: (-2.0, 2.0),
            time_stretch_range: (0.9, 1.1),
            filter_range: (400.0, 4000.0),
            bit_crush: 0.5,
            reverb: 0.4,
            delay: 0.3,
            chorus: 0.2,
            distortion: 0.1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lofi_profile() {
        let profile = lofi_profile();

        assert_eq!(profile.genre, Genre::Lofi);
        assert_eq!(profile.preferred_bpm, 85.0);
        assert_eq!(profile.progression_style, ProgressionStyle::Jazzy);
        assert_eq!(profile.primary_quality(), ChordQuality::Minor7);
        assert!(profile.vinyl_crackle);
        assert!(profile.tape_wobble);
        // Heavy lo-fi degradation triggers the bit-crusher path
        assert!(profile.lofi_amount > 0.3);
    }

    #[test]
    fn test_lofi_tempo_range_contains_default() {
        let profile = lofi_profile();
        assert!(profile.preferred_bpm >= profile.tempo_range.0);
        assert!(profile.preferred_bpm <= profile.tempo_range.1);
    }
}
