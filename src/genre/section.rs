// Section Composition - One composed unit of music for a renderer
// Pulls progression, voicings, melody, rhythm, bass and effects together

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::genre::bass::generate_bass_line;
use crate::genre::effects::{effect_chain, EffectChain};
use crate::genre::melody::generate_melody;
use crate::genre::profile::Genre;
use crate::genre::profiles::profile;
use crate::genre::progression::{generate_progression, ChordEvent};
use crate::rhythm::{generate_rhythm, GenreRhythm, RhythmOptions};
use crate::theory::chord_frequencies;

const CHORD_OCTAVE: i32 = 3;
const MELODY_OCTAVE: i32 = 4;
const MELODY_NOTES_PER_BAR: usize = 4;
const BASS_STEPS_PER_CHORD: usize = 4;

/// Options for section generation; unset fields resolve from the profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionOptions {
    pub key: Option<String>,
    pub bpm: Option<f32>,
    pub bars: Option<u32>,

    /// Section energy [0.0, 1.0]; scales rhythmic complexity
    pub energy: Option<f32>,
}

/// A composed section of music: the unit handed to a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSection {
    pub genre: Genre,
    pub key: String,
    pub bpm: f32,

    /// The underlying progression, degrees retained for voice leading
    pub progression: Vec<ChordEvent>,

    /// One voiced chord (concrete frequencies) per bar
    pub chords: Vec<Vec<f32>>,

    /// Flat melody sequence, 4 notes per bar, 0.0 = rest
    pub melody: Vec<f32>,

    pub rhythm: GenreRhythm,

    /// Bass frequency sequence, 0.0 = rest
    pub bass: Vec<f32>,

    pub effects: EffectChain,

    /// Duration in bars
    pub bars: u32,
}

/// Compose a section of the given genre
pub fn generate_section(
    genre: Genre,
    options: &SectionOptions,
    rng: &mut fastrand::Rng,
) -> EngineResult<GeneratedSection> {
    let profile = profile(genre);

    let key = match &options.key {
        Some(key) => key.clone(),
        None => profile.random_key(rng).to_string(),
    };
    let bpm = options.bpm.unwrap_or(profile.preferred_bpm);
    let bars = options.bars.unwrap_or(profile.section_length_bars);
    let energy = options.energy.unwrap_or(0.5).clamp(0.0, 1.0);

    if bars == 0 {
        return Err(EngineError::InvalidArgument(
            "section bars must be > 0".to_string(),
        ));
    }

    log::debug!(
        "generating {} section: key={} bpm={} bars={} energy={}",
        profile.name,
        key,
        bpm,
        bars,
        energy
    );

    let progression = generate_progression(&profile, &key, bars as usize, rng)?;

    let chords = progression
        .iter()
        .map(|chord| chord_frequencies(&chord.root, chord.quality, CHORD_OCTAVE))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut melody = Vec::with_capacity(bars as usize * MELODY_NOTES_PER_BAR);
    for chord in &progression {
        melody.extend(generate_melody(
            &profile,
            chord,
            MELODY_NOTES_PER_BAR,
            MELODY_OCTAVE,
            rng,
        )?);
    }

    let rhythm_options = RhythmOptions {
        genre,
        complexity: profile.rhythmic_complexity * (0.8 + energy * 0.4),
        steps: 16,
    };
    let rhythm = generate_rhythm(&rhythm_options, rng)?;

    let bass = generate_bass_line(&profile, &progression, BASS_STEPS_PER_CHORD, rng)?;

    Ok(GeneratedSection {
        genre,
        key,
        bpm,
        progression,
        chords,
        melody,
        rhythm,
        bass,
        effects: effect_chain(&profile),
        bars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_resolves_profile_defaults() {
        let mut rng = fastrand::Rng::with_seed(1);
        let section = generate_section(Genre::Lofi, &SectionOptions::default(), &mut rng).unwrap();

        assert_eq!(section.bpm, 85.0);
        assert_eq!(section.bars, 8);
        assert_eq!(section.progression.len(), 8);
        assert_eq!(section.chords.len(), 8);
        // 4 melody notes per bar
        assert_eq!(section.melody.len(), 32);
        // 4 bass steps per chord
        assert_eq!(section.bass.len(), 32);
    }

    #[test]
    fn test_section_honors_overrides() {
        let mut rng = fastrand::Rng::with_seed(2);
        let options = SectionOptions {
            key: Some("F".to_string()),
            bpm: Some(90.0),
            bars: Some(4),
            energy: Some(0.9),
        };
        let section = generate_section(Genre::Cottagecore, &options, &mut rng).unwrap();

        assert_eq!(section.key, "F");
        assert_eq!(section.bpm, 90.0);
        assert_eq!(section.bars, 4);
        assert_eq!(section.melody.len(), 16);
    }

    #[test]
    fn test_section_rejects_zero_bars() {
        let mut rng = fastrand::Rng::with_seed(3);
        let options = SectionOptions {
            bars: Some(0),
            ..Default::default()
        };
        assert!(generate_section(Genre::Ambient, &options, &mut rng).is_err());
    }

    #[test]
    fn test_section_chords_are_voiced() {
        let mut rng = fastrand::Rng::with_seed(4);
        let section =
            generate_section(Genre::Vaporwave, &SectionOptions::default(), &mut rng).unwrap();

        for (event, voicing) in section.progression.iter().zip(section.chords.iter()) {
            assert_eq!(voicing.len(), event.quality.intervals().len());
            assert!(voicing.iter().all(|&f| f > 20.0));
        }
    }

    #[test]
    fn test_section_is_reproducible_from_seed() {
        let a = generate_section(
            Genre::Breakcore,
            &SectionOptions::default(),
            &mut fastrand::Rng::with_seed(9),
        )
        .unwrap();
        let b = generate_section(
            Genre::Breakcore,
            &SectionOptions::default(),
            &mut fastrand::Rng::with_seed(9),
        )
        .unwrap();

        assert_eq!(a.key, b.key);
        assert_eq!(a.melody, b.melody);
        assert_eq!(a.bass, b.bass);
    }
}
