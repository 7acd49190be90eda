// DJ Engine - Beat matching, transitions, chops and compatibility scoring
// Independent toolbox over BPM/key metadata; no dependency on composition

pub mod beatgrid;
pub mod chop;
pub mod compat;
pub mod mix;
pub mod stutter;
pub mod transition;

// Re-export main types
pub use beatgrid::{calculate_bpm, calculate_stretch_ratio, generate_beat_grid, BeatInfo};
pub use chop::{
    generate_chop_and_screw, generate_chop_points, rearrange_slices, screw_vocal,
    ChopAndScrewConfig, ChopLayout, ChopPoint, RearrangeStyle,
};
pub use compat::{analyze_compatibility, CompatibilityReport, TrackProfile};
pub use mix::{find_mix_point, generate_mix, MixPlan, MixPoint, MixStyle};
pub use stutter::{
    generate_scratch, generate_stutter, generate_tape_stop, ScratchPattern, ScratchPoint,
    ScratchStyle, SpeedPoint, StutterConfig, StutterStyle, TapeStopConfig,
};
pub use transition::{
    generate_transition, CurveKind, TransitionConfig, TransitionEffect, TransitionStep,
    TransitionType,
};
