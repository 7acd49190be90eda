// Bass Lines - Per-genre rhythmic patterns over root, fifth and octave
// One frequency per step; 0.0 marks a rest

use crate::error::{EngineError, EngineResult};
use crate::genre::profile::{Genre, GenreProfile};
use crate::genre::progression::ChordEvent;
use crate::theory::note_frequency;

const BASS_OCTAVE: i32 = 2;
const FIFTH: f32 = 1.498_307; // 2^(7/12)

/// Generate a bass line across a whole progression, `steps_per_chord`
/// steps for each chord
pub fn generate_bass_line(
    profile: &GenreProfile,
    progression: &[ChordEvent],
    steps_per_chord: usize,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<f32>> {
    if progression.is_empty() {
        return Err(EngineError::InvalidArgument(
            "bass line needs a non-empty progression".to_string(),
        ));
    }
    if steps_per_chord == 0 {
        return Err(EngineError::InvalidArgument(
            "bass steps per chord must be > 0".to_string(),
        ));
    }

    let mut line = Vec::with_capacity(progression.len() * steps_per_chord);

    for chord in progression {
        let root = note_frequency(&chord.root, BASS_OCTAVE)?;
        let fifth = root * FIFTH;
        let octave = root * 2.0;

        match profile.genre {
            // Root bounce with the occasional fifth
            Genre::Lofi => {
                for step in 0..steps_per_chord {
                    if step == 0 {
                        line.push(root);
                    } else {
                        let roll = rng.f32();
                        if roll < 0.3 {
                            line.push(fifth);
                        } else if roll < 0.7 {
                            line.push(root);
                        } else {
                            line.push(0.0);
                        }
                    }
                }
            }

            // Root, breath, root, breath
            Genre::Cottagecore => {
                for step in 0..steps_per_chord {
                    line.push(if step % 2 == 0 { root } else { 0.0 });
                }
            }

            // Driving root on every step
            Genre::Frutiger => {
                for _ in 0..steps_per_chord {
                    line.push(root);
                }
            }

            // Anything goes, sometimes dropped an octave
            Genre::Breakcore => {
                for _ in 0..steps_per_chord {
                    let mut freq = match rng.usize(0..3) {
                        0 => root,
                        1 => fifth,
                        _ => octave,
                    };
                    if rng.f32() < 0.2 {
                        freq *= 0.5;
                    }
                    line.push(freq);
                }
            }

            // Single onset per chord, renderer sustains the drone
            Genre::Ambient => {
                for step in 0..steps_per_chord {
                    line.push(if step == 0 { root } else { 0.0 });
                }
            }

            // Slowed root/root/fifth figure: indices crawl at 0.8x speed
            Genre::Vaporwave => {
                const FIGURE: [usize; 3] = [0, 0, 1];
                let mut previous = usize::MAX;
                for step in 0..steps_per_chord {
                    let slowed = (step as f32 * 0.8) as usize;
                    if slowed == previous {
                        line.push(0.0);
                        continue;
                    }
                    previous = slowed;
                    line.push(match FIGURE[slowed % FIGURE.len()] {
                        0 => root,
                        _ => fifth,
                    });
                }
            }
        }
    }

    Ok(line)
}
