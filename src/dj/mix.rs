// Mix Planning - Where to blend two tracks and how
// Combines a mix point, a style-chosen transition and an effect bundle

use serde::{Deserialize, Serialize};

use crate::dj::beatgrid::{calculate_stretch_ratio, BeatInfo};
use crate::dj::transition::{generate_transition, TransitionConfig, TransitionType};
use crate::error::{EngineError, EngineResult};

/// Per-track deck state at the moment two tracks meet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixPoint {
    /// Normalized position in track A, snapped to a downbeat
    pub position_a: f32,
    pub volume_a: f32,
    pub filter_a: f32,

    /// Track B always starts from its own beginning
    pub position_b: f32,
    pub volume_b: f32,
    pub filter_b: f32,

    /// Blend state [-1.0, 1.0]: -1 fully A, +1 fully B
    pub crossfade: f32,
}

/// Find where to bring track B in: the downbeat of track A nearest the
/// preferred position
pub fn find_mix_point(track_a: &BeatInfo, preferred_position: f32) -> EngineResult<MixPoint> {
    if track_a.downbeats.is_empty() {
        return Err(EngineError::InvalidArgument(
            "track A has no downbeats".to_string(),
        ));
    }

    let preferred = preferred_position.clamp(0.0, 1.0);
    let position_a = track_a
        .downbeats
        .iter()
        .copied()
        .min_by(|a, b| {
            (a - preferred)
                .abs()
                .partial_cmp(&(b - preferred).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(preferred);

    Ok(MixPoint {
        position_a,
        volume_a: 1.0,
        filter_a: 0.5,
        position_b: 0.0,
        volume_b: 0.0,
        filter_b: 0.5,
        crossfade: -1.0,
    })
}

/// Overall mixing attitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixStyle {
    /// Long filter blend
    Smooth,

    /// Hard cut with an echo tail
    Quick,

    /// Backspin or stutter theatrics
    Creative,
}

/// A complete plan for mixing track B into track A
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixPlan {
    pub mix_point: MixPoint,
    pub transition: TransitionConfig,

    /// Effect names the renderer should arm for this mix
    pub effects: Vec<String>,

    /// Stretch for track B to match track A's tempo
    pub stretch_b: f32,
}

/// Plan a mix between two tracks
pub fn generate_mix(
    track_a: &BeatInfo,
    track_b: &BeatInfo,
    style: MixStyle,
    rng: &mut fastrand::Rng,
) -> EngineResult<MixPlan> {
    let mix_point = find_mix_point(track_a, 0.75)?;
    let stretch_b = calculate_stretch_ratio(track_b.bpm, track_a.bpm)?;

    let (kind, intensity, effects) = match style {
        MixStyle::Smooth => (
            TransitionType::Filter,
            0.4,
            vec!["filter_sweep".to_string(), "eq_blend".to_string()],
        ),
        MixStyle::Quick => (TransitionType::Cut, 0.6, vec!["echo_out".to_string()]),
        MixStyle::Creative => {
            let kind = if rng.bool() {
                TransitionType::Backspin
            } else {
                TransitionType::Stutter
            };
            (
                kind,
                0.9,
                vec![
                    "noise_riser".to_string(),
                    "reverse_buildup".to_string(),
                ],
            )
        }
    };

    log::debug!(
        "mix plan: {:?} at bpm {} -> {} (stretch {:.3})",
        kind,
        track_b.bpm,
        track_a.bpm,
        stretch_b
    );

    Ok(MixPlan {
        mix_point,
        transition: generate_transition(kind, track_a.bpm, intensity)?,
        effects,
        stretch_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dj::beatgrid::generate_beat_grid;

    fn grid(bpm: f32) -> BeatInfo {
        generate_beat_grid(bpm, 60_000.0, (4, 4)).unwrap()
    }

    #[test]
    fn test_mix_point_snaps_to_downbeat() {
        let track = grid(120.0);
        let mix_point = find_mix_point(&track, 0.75).unwrap();

        assert!(track.downbeats.contains(&mix_point.position_a));
        // Snapped position is close to the request
        assert!((mix_point.position_a - 0.75).abs() < 0.05);
    }

    #[test]
    fn test_mix_point_deck_b_initial_state() {
        let mix_point = find_mix_point(&grid(120.0), 0.5).unwrap();
        assert_eq!(mix_point.position_b, 0.0);
        assert_eq!(mix_point.volume_b, 0.0);
        assert_eq!(mix_point.filter_b, 0.5);
        assert_eq!(mix_point.crossfade, -1.0);
        assert_eq!(mix_point.volume_a, 1.0);
    }

    #[test]
    fn test_mix_point_needs_downbeats() {
        let mut track = grid(120.0);
        track.downbeats.clear();
        assert!(find_mix_point(&track, 0.75).is_err());
    }

    #[test]
    fn test_smooth_mix_uses_filter() {
        let mut rng = fastrand::Rng::with_seed(1);
        let plan = generate_mix(&grid(120.0), &grid(126.0), MixStyle::Smooth, &mut rng).unwrap();

        assert_eq!(plan.transition.kind, TransitionType::Filter);
        assert!(plan.effects.iter().any(|e| e == "filter_sweep"));
        // Track B slows from 126 to 120
        assert!(plan.stretch_b < 1.0);
    }

    #[test]
    fn test_quick_mix_cuts() {
        let mut rng = fastrand::Rng::with_seed(2);
        let plan = generate_mix(&grid(120.0), &grid(120.0), MixStyle::Quick, &mut rng).unwrap();

        assert_eq!(plan.transition.kind, TransitionType::Cut);
        assert_eq!(plan.transition.duration_beats, 0.0);
        assert_eq!(plan.stretch_b, 1.0);
    }

    #[test]
    fn test_creative_mix_picks_theatrics() {
        let mut rng = fastrand::Rng::with_seed(3);
        let plan =
            generate_mix(&grid(140.0), &grid(140.0), MixStyle::Creative, &mut rng).unwrap();

        assert!(matches!(
            plan.transition.kind,
            TransitionType::Backspin | TransitionType::Stutter
        ));
        assert_eq!(plan.effects.len(), 2);
    }

    #[test]
    fn test_mix_transition_runs_at_track_a_tempo() {
        let mut rng = fastrand::Rng::with_seed(4);
        let plan = generate_mix(&grid(96.0), &grid(128.0), MixStyle::Smooth, &mut rng).unwrap();
        assert_eq!(plan.transition.bpm, 96.0);
    }
}
