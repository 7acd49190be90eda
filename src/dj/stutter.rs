// Stutter, Tape-Stop and Scratch Recipes
// Fixed parametric shapes a renderer replays; style tags pick the recipe

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Stutter recipe flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StutterStyle {
    Buildup,
    Breakdown,
    Random,
    Trance,
}

/// A repeated-slice stutter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StutterConfig {
    /// How many divisions the stuttered beat is cut into
    pub divisions: u32,

    /// On/off gate per division
    pub pattern: Vec<bool>,

    /// Semitone change per repeat (positive rises)
    pub pitch_ramp: f32,

    /// Volume lost per repeat [0.0, 1.0]
    pub volume_decay: f32,

    /// Fraction of each division that sounds [0.0, 1.0]
    pub gate: f32,
}

/// Build a stutter recipe for a style
pub fn generate_stutter(style: StutterStyle, rng: &mut fastrand::Rng) -> StutterConfig {
    match style {
        // Rising pressure: every division fires, pitch creeps up
        StutterStyle::Buildup => StutterConfig {
            divisions: 16,
            pattern: vec![true; 16],
            pitch_ramp: 0.5,
            volume_decay: 0.0,
            gate: 0.9,
        },

        // Falling apart: gaps appear, pitch sinks, volume dies away
        StutterStyle::Breakdown => StutterConfig {
            divisions: 8,
            pattern: (0..8).map(|i| i % 3 != 2).collect(),
            pitch_ramp: -0.5,
            volume_decay: 0.1,
            gate: 0.7,
        },

        StutterStyle::Random => {
            let divisions = if rng.bool() { 8 } else { 16 };
            StutterConfig {
                divisions,
                pattern: (0..divisions).map(|_| rng.f32() < 0.6).collect(),
                pitch_ramp: (rng.f32() * 2.0 - 1.0),
                volume_decay: rng.f32() * 0.2,
                gate: 0.5 + rng.f32() * 0.4,
            }
        }

        // Even gated pumping, no pitch movement
        StutterStyle::Trance => StutterConfig {
            divisions: 16,
            pattern: (0..16).map(|i| i % 2 == 0).collect(),
            pitch_ramp: 0.0,
            volume_decay: 0.05,
            gate: 0.5,
        },
    }
}

/// One sample of a tape-stop speed curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedPoint {
    pub time_ms: f32,

    /// Playback speed [0.0, 1.0]
    pub speed: f32,
}

/// A tape-stop: exponentially decaying speed sampled every 10 ms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeStopConfig {
    pub duration_ms: f32,
    pub curve: Vec<SpeedPoint>,
}

const TAPE_STOP_SAMPLE_MS: f32 = 10.0;
const TAPE_STOP_STEEPNESS: f32 = 4.0;

/// Build a tape-stop curve; speed starts at 1.0 and decays exponentially
/// to a dead stop
pub fn generate_tape_stop(duration_ms: f32) -> EngineResult<TapeStopConfig> {
    if duration_ms <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "tape stop duration must be > 0".to_string(),
        ));
    }

    let samples = (duration_ms / TAPE_STOP_SAMPLE_MS).ceil() as usize + 1;
    let floor = (-TAPE_STOP_STEEPNESS).exp();

    let curve = (0..samples)
        .map(|i| {
            let time_ms = (i as f32 * TAPE_STOP_SAMPLE_MS).min(duration_ms);
            let progress = time_ms / duration_ms;
            // Normalized so the curve lands exactly on zero
            let speed = ((-TAPE_STOP_STEEPNESS * progress).exp() - floor) / (1.0 - floor);
            SpeedPoint { time_ms, speed }
        })
        .collect();

    Ok(TapeStopConfig {
        duration_ms,
        curve,
    })
}

/// Scratch pattern flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScratchStyle {
    Baby,
    Chirp,
    Transform,
    Flare,
}

/// A record-position waypoint: (normalized time, normalized position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScratchPoint {
    pub time: f32,
    pub position: f32,
}

/// A scratch gesture as a waypoint list the renderer interpolates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchPattern {
    pub style: ScratchStyle,
    pub waypoints: Vec<ScratchPoint>,
}

/// Fixed waypoint recipe for a scratch style
pub fn generate_scratch(style: ScratchStyle) -> ScratchPattern {
    let point = |time: f32, position: f32| ScratchPoint { time, position };

    let waypoints = match style {
        // Simple forward-back rub
        ScratchStyle::Baby => vec![
            point(0.0, 0.0),
            point(0.25, 0.5),
            point(0.5, 0.0),
            point(0.75, 0.5),
            point(1.0, 0.0),
        ],

        // Fast forward stab, released on the way back
        ScratchStyle::Chirp => vec![
            point(0.0, 0.0),
            point(0.15, 0.6),
            point(0.3, 0.55),
            point(0.5, 0.0),
            point(0.65, 0.6),
            point(0.8, 0.55),
            point(1.0, 0.0),
        ],

        // Stepped forward motion, fader-cut plateaus
        ScratchStyle::Transform => vec![
            point(0.0, 0.0),
            point(0.2, 0.25),
            point(0.3, 0.25),
            point(0.5, 0.5),
            point(0.6, 0.5),
            point(0.8, 0.75),
            point(0.9, 0.75),
            point(1.0, 1.0),
        ],

        // Continuous motion with mid-stroke bounces
        ScratchStyle::Flare => vec![
            point(0.0, 0.0),
            point(0.3, 0.7),
            point(0.4, 0.6),
            point(0.5, 0.75),
            point(0.6, 0.55),
            point(0.8, 0.65),
            point(1.0, 0.0),
        ],
    };

    ScratchPattern { style, waypoints }
}
