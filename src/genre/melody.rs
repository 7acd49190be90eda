// Melody Generation - Per-genre note choice over chord tones, scale tones and rests
// A melody is a flat frequency sequence; 0.0 marks a rest

use crate::error::{EngineError, EngineResult};
use crate::genre::profile::{Genre, GenreProfile};
use crate::genre::progression::ChordEvent;
use crate::theory::{chord_frequencies, scale_frequencies};

/// Generate a melody phrase of `length` notes over one chord
pub fn generate_melody(
    profile: &GenreProfile,
    chord: &ChordEvent,
    length: usize,
    octave: i32,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<f32>> {
    if length == 0 {
        return Err(EngineError::InvalidArgument(
            "melody length must be > 0".to_string(),
        ));
    }

    let chord_tones = chord_frequencies(&chord.root, chord.quality, octave)?;
    let scale_tones = scale_frequencies(&chord.root, profile.primary_scale(), octave)?;

    let mut melody = Vec::with_capacity(length);

    match profile.genre {
        // Sparse and chordal: rests carry as much weight as notes
        Genre::Lofi => {
            for _ in 0..length {
                let roll = rng.f32();
                if roll < 0.4 {
                    melody.push(0.0);
                } else if roll < 0.85 {
                    melody.push(chord_tones[rng.usize(0..chord_tones.len())]);
                } else {
                    melody.push(scale_tones[rng.usize(0..scale_tones.len())]);
                }
            }
        }

        // Wandering stepwise folk line
        Genre::Cottagecore => {
            let mut position = 0usize;
            for _ in 0..length {
                if rng.f32() < 0.15 {
                    melody.push(0.0);
                    continue;
                }
                let step: i32 = if rng.bool() { 1 } else { -1 };
                position = (position as i32 + step).rem_euclid(scale_tones.len() as i32) as usize;
                melody.push(scale_tones[position]);
            }
        }

        // Strict ascending arpeggio
        Genre::Frutiger => {
            for i in 0..length {
                melody.push(chord_tones[i % chord_tones.len()]);
            }
        }

        // Scattered scale tones with the occasional detuned note
        Genre::Breakcore => {
            for _ in 0..length {
                let mut freq = scale_tones[rng.usize(0..scale_tones.len())];
                if rng.f32() < 0.25 {
                    let cents = (rng.f32() * 2.0 - 1.0) * 50.0;
                    freq *= 2.0_f32.powf(cents / 1200.0);
                }
                melody.push(freq);
            }
        }

        // One sustained note per 4-step block
        Genre::Ambient => {
            let mut held = 0.0;
            for i in 0..length {
                if i % 4 == 0 {
                    held = if rng.f32() < 0.2 {
                        0.0
                    } else {
                        scale_tones[rng.usize(0..scale_tones.len())]
                    };
                }
                melody.push(held);
            }
        }

        // Arpeggio pitched down a minor third, gaps between phrases
        Genre::Vaporwave => {
            let shift = 2.0_f32.powf(-3.0 / 12.0);
            for i in 0..length {
                if rng.f32() < 0.25 {
                    melody.push(0.0);
                } else {
                    melody.push(chord_tones[i % chord_tones.len()] * shift);
                }
            }
        }
    }

    Ok(melody)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::profiles::profile;
    use crate::theory::ChordQuality;

    fn test_chord() -> ChordEvent {
        ChordEvent {
            root: "C".to_string(),
            quality: ChordQuality::Major,
            degree: 1,
        }
    }

    #[test]
    fn test_melody_rejects_zero_length() {
        let mut rng = fastrand::Rng::with_seed(1);
        let p = profile(Genre::Lofi);
        assert!(generate_melody(&p, &test_chord(), 0, 4, &mut rng).is_err());
    }

    #[test]
    fn test_melody_length() {
        let mut rng = fastrand::Rng::with_seed(1);
        for genre in Genre::all() {
            let p = profile(genre);
            let melody = generate_melody(&p, &test_chord(), 16, 4, &mut rng).unwrap();
            assert_eq!(melody.len(), 16, "{}", p.name);
        }
    }

    #[test]
    fn test_frutiger_strictly_arpeggiates() {
        let mut rng = fastrand::Rng::with_seed(2);
        let p = profile(Genre::Frutiger);
        let chord = test_chord();
        let tones = chord_frequencies(&chord.root, chord.quality, 4).unwrap();

        let melody = generate_melody(&p, &chord, 8, 4, &mut rng).unwrap();
        for (i, &freq) in melody.iter().enumerate() {
            assert_eq!(freq, tones[i % tones.len()]);
        }
    }

    #[test]
    fn test_ambient_holds_four_step_blocks() {
        let mut rng = fastrand::Rng::with_seed(3);
        let p = profile(Genre::Ambient);
        let melody = generate_melody(&p, &test_chord(), 16, 4, &mut rng).unwrap();

        for block in melody.chunks(4) {
            assert!(block.iter().all(|&f| f == block[0]));
        }
    }

    #[test]
    fn test_vaporwave_is_pitched_down() {
        let mut rng = fastrand::Rng::with_seed(4);
        let p = profile(Genre::Vaporwave);
        let chord = test_chord();
        let tones = chord_frequencies(&chord.root, chord.quality, 4).unwrap();
        let melody = generate_melody(&p, &chord, 32, 4, &mut rng).unwrap();

        let max_tone = tones.iter().cloned().fold(0.0f32, f32::max);
        for &freq in melody.iter().filter(|&&f| f > 0.0) {
            // A minor third below the source tones
            assert!(freq < max_tone);
        }
    }

    #[test]
    fn test_lofi_melody_contains_rests() {
        let mut rng = fastrand::Rng::with_seed(5);
        let p = profile(Genre::Lofi);
        let melody = generate_melody(&p, &test_chord(), 64, 4, &mut rng).unwrap();
        assert!(melody.iter().any(|&f| f == 0.0));
        assert!(melody.iter().any(|&f| f > 0.0));
    }
}
