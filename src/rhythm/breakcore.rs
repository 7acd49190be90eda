// Breakcore Chops - Sliced-break events and amen-style chop sequencing
// Slices reference a sampled drum break by normalized offset; the renderer
// owns the actual sample

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rhythm::euclidean::euclidean;

/// One slice of a sampled drum break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakSlice {
    /// Normalized start offset into the break [0.0, 1.0)
    pub start: f32,

    /// Normalized duration
    pub duration: f32,

    /// Pitch offset in semitones (signed)
    pub pitch_offset: f32,

    /// Play the slice reversed
    pub reverse: bool,

    /// Playback volume [0.0, 1.0]
    pub volume: f32,

    /// Optional filter cutoff in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_cutoff: Option<f32>,

    /// Optional stutter repeat count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stutter: Option<u32>,
}

impl BreakSlice {
    /// A plain slice with no processing applied
    pub fn plain(start: f32, duration: f32) -> Self {
        BreakSlice {
            start,
            duration,
            pitch_offset: 0.0,
            reverse: false,
            volume: 1.0,
            filter_cutoff: None,
            stutter: None,
        }
    }
}

// Canonical slice indices within the 8-slice break
const SLICE_KICK: usize = 0;
const SLICE_SNARE: usize = 2;
const SLICE_HAT: usize = 6;

/// The canonical 8-slice break: eight equal slices, kick on 0 and 4,
/// snares on 2 and 5, hats filling the gaps
pub fn canonical_break() -> Vec<BreakSlice> {
    (0..8)
        .map(|i| BreakSlice::plain(i as f32 / 8.0, 1.0 / 8.0))
        .collect()
}

/// Draw `length` random slices and mangle each one, with every roll scaled
/// by `intensity`
pub fn breakcore_chops(
    slices: &[BreakSlice],
    intensity: f32,
    length: usize,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<BreakSlice>> {
    if slices.is_empty() {
        return Err(EngineError::InvalidArgument(
            "cannot chop an empty slice set".to_string(),
        ));
    }

    let intensity = intensity.clamp(0.0, 1.0);
    let mut chops = Vec::with_capacity(length);

    for _ in 0..length {
        let mut slice = slices[rng.usize(0..slices.len())].clone();

        slice.pitch_offset = (rng.f32() * 2.0 - 1.0) * 6.0 * intensity;
        slice.reverse = rng.f32() < 0.3 * intensity;
        if rng.f32() < 0.4 * intensity {
            slice.stutter = Some(2 + rng.u32(0..4));
        }
        if rng.f32() < 0.3 * intensity {
            slice.duration *= 0.5;
        }
        if rng.f32() < 0.2 * intensity {
            slice.filter_cutoff = Some(400.0 + rng.f32() * 3600.0);
        }
        slice.volume = 0.6 + rng.f32() * 0.4;

        chops.push(slice);
    }

    Ok(chops)
}

/// Deterministic amen-style chop sequence: kick/snare/hat hit counts are
/// derived from `complexity`, and a chop event is emitted only at steps
/// where one of the Euclidean layers is active. The snare layer is rotated
/// by 4 for the backbeat feel.
pub fn thought_amen(complexity: f32, bars: usize) -> EngineResult<Vec<BreakSlice>> {
    if bars == 0 {
        return Err(EngineError::InvalidArgument(
            "thought_amen bars must be > 0".to_string(),
        ));
    }

    let complexity = complexity.clamp(0.0, 1.0);
    let kicks = 3 + (complexity * 3.0) as usize;
    let snares = 2 + (complexity * 2.0) as usize;
    let hats = 6 + (complexity * 6.0) as usize;

    let kick_layer = euclidean(kicks, 16, 0)?;
    let snare_layer = euclidean(snares, 16, 4)?;
    let hat_layer = euclidean(hats, 16, 0)?;

    let break_slices = canonical_break();
    let step_duration = 1.0 / 16.0;
    let mut events = Vec::new();

    for _ in 0..bars {
        for step in 0..16 {
            // One event per step, kick taking precedence over snare over hat
            let source = if kick_layer[step] {
                SLICE_KICK
            } else if snare_layer[step] {
                SLICE_SNARE
            } else if hat_layer[step] {
                SLICE_HAT
            } else {
                continue;
            };

            let mut slice = break_slices[source].clone();
            slice.duration = step_duration;
            events.push(slice);
        }
    }

    Ok(events)
}
