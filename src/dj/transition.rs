// Transitions - Deterministic crossfade schedules between two tracks
// A config expands into interpolation steps a renderer executes verbatim

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Transition families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionType {
    Cut,
    Fade,
    Filter,
    Beatmatch,
    Backspin,
    Echo,
    Stutter,
}

/// Interpolation curve shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Linear,
    Exponential,
    Logarithmic,
    SCurve,
}

impl CurveKind {
    /// Crossfade value at normalized time `t`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            CurveKind::Linear => t,
            CurveKind::Exponential => t * t,
            CurveKind::Logarithmic => t.sqrt(),
            CurveKind::SCurve => 3.0 * t * t - 2.0 * t * t * t,
        }
    }
}

/// Effect events injected into specific transition steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionEffect {
    /// Delay throw, peaking mid-transition
    Echo { wet: f32 },

    /// Rewind burst on the outgoing track
    Backspin,

    /// Stutter locked to an eighth-note grid position
    Stutter { eighth: u32 },
}

/// One step of the interpolation schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionStep {
    /// Normalized time [0.0, 1.0]
    pub t: f32,

    /// Blend weight toward track B [0.0, 1.0]
    pub crossfade: f32,

    pub volume_a: f32,
    pub volume_b: f32,
    pub filter_a: f32,
    pub filter_b: f32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<TransitionEffect>,
}

/// A transition schedule blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub kind: TransitionType,

    /// Length in beats
    pub duration_beats: f32,

    pub curve: CurveKind,

    /// Effect intensity [0.0, 1.0]
    pub intensity: f32,

    /// BPM the beat durations refer to
    pub bpm: f32,
}

impl TransitionConfig {
    /// Expand into the ordered interpolation schedule:
    /// `ceil(duration * 4) + 1` steps
    pub fn steps(&self) -> Vec<TransitionStep> {
        let count = (self.duration_beats * 4.0).ceil() as usize + 1;

        (0..count)
            .map(|i| {
                let t = if count > 1 {
                    i as f32 / (count - 1) as f32
                } else {
                    0.0
                };
                let crossfade = self.curve.apply(t);

                let (mut filter_a, mut filter_b) =
                    (1.0 - 0.5 * crossfade, 0.5 + 0.5 * crossfade);

                let effect = match self.kind {
                    TransitionType::Echo => Some(TransitionEffect::Echo {
                        wet: self.intensity * (1.0 - (t - 0.5).abs() * 2.0),
                    }),
                    TransitionType::Filter => {
                        // Steeper sweep than the default crossfade filters
                        filter_a = 1.0 - 0.8 * crossfade;
                        filter_b = 0.2 + 0.8 * crossfade;
                        None
                    }
                    TransitionType::Backspin if t > 0.3 && t < 0.5 => {
                        Some(TransitionEffect::Backspin)
                    }
                    TransitionType::Stutter if t < 0.5 => Some(TransitionEffect::Stutter {
                        eighth: (t * self.duration_beats * 2.0) as u32,
                    }),
                    _ => None,
                };

                TransitionStep {
                    t,
                    crossfade,
                    volume_a: 1.0 - crossfade,
                    volume_b: crossfade,
                    filter_a,
                    filter_b,
                    effect,
                }
            })
            .collect()
    }
}

/// Build a transition of the given type at a BPM
pub fn generate_transition(
    kind: TransitionType,
    bpm: f32,
    intensity: f32,
) -> EngineResult<TransitionConfig> {
    if bpm <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "transition bpm must be > 0".to_string(),
        ));
    }

    let duration_beats = match kind {
        TransitionType::Cut => 0.0,
        TransitionType::Stutter => 2.0,
        _ => 8.0,
    };
    let curve = match kind {
        TransitionType::Filter => CurveKind::SCurve,
        _ => CurveKind::Linear,
    };

    Ok(TransitionConfig {
        kind,
        duration_beats,
        curve,
        intensity: intensity.clamp(0.0, 1.0),
        bpm,
    })
}
