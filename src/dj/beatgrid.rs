// Beat Grids - Synthetic beat positions and BPM detection
// Grid generation and BPM calculation are approximate inverses of each other

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Beat layout of a track; positions are normalized [0.0, 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatInfo {
    pub bpm: f32,
    pub time_signature: (u32, u32),

    /// Every beat position
    pub beats: Vec<f32>,

    /// First beat of each bar
    pub downbeats: Vec<f32>,

    /// Percussive peaks (beats 2 and 4 in 4/4)
    pub transients: Vec<f32>,
}

/// Build a synthetic beat grid from a BPM and track duration
pub fn generate_beat_grid(
    bpm: f32,
    duration_ms: f64,
    time_signature: (u32, u32),
) -> EngineResult<BeatInfo> {
    if bpm <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "beat grid bpm must be > 0".to_string(),
        ));
    }
    if duration_ms <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "beat grid duration must be > 0".to_string(),
        ));
    }
    if time_signature.0 == 0 {
        return Err(EngineError::InvalidArgument(
            "time signature numerator must be > 0".to_string(),
        ));
    }

    let interval_ms = 60_000.0 / bpm as f64;
    let beat_count = (duration_ms / interval_ms) as usize;

    let mut beats = Vec::with_capacity(beat_count);
    let mut downbeats = Vec::new();
    let mut transients = Vec::new();

    for i in 0..beat_count {
        let position = (i as f64 * interval_ms / duration_ms) as f32;
        beats.push(position);

        if i as u32 % time_signature.0 == 0 {
            downbeats.push(position);
        }
        // Snare placement in straight 4/4
        if time_signature.0 == 4 && matches!(i % 4, 1 | 3) {
            transients.push(position);
        }
    }

    Ok(BeatInfo {
        bpm,
        time_signature,
        beats,
        downbeats,
        transients,
    })
}

/// Estimate BPM from detected beat positions. Fewer than 2 positions
/// defaults to 120.
pub fn calculate_bpm(beat_positions: &[f32], duration_ms: f64) -> f32 {
    if beat_positions.len() < 2 || duration_ms <= 0.0 {
        return 120.0;
    }

    let mut interval_sum = 0.0;
    for pair in beat_positions.windows(2) {
        interval_sum += (pair[1] - pair[0]) as f64;
    }
    let mean_interval_ms =
        interval_sum / (beat_positions.len() - 1) as f64 * duration_ms;

    if mean_interval_ms <= 0.0 {
        return 120.0;
    }

    (60_000.0 / mean_interval_ms).round() as f32
}

/// Playback-rate ratio needed to stretch `source` BPM onto `target` BPM
pub fn calculate_stretch_ratio(source_bpm: f32, target_bpm: f32) -> EngineResult<f32> {
    if source_bpm <= 0.0 || target_bpm <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "stretch ratio needs positive BPMs".to_string(),
        ));
    }
    Ok(target_bpm / source_bpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_at_120_bpm() {
        let grid = generate_beat_grid(120.0, 2000.0, (4, 4)).unwrap();

        // 500ms per beat over 2 seconds: 4 beats at 0, 0.25, 0.5, 0.75
        assert_eq!(grid.beats.len(), 4);
        assert!((grid.beats[1] - 0.25).abs() < 0.0001);
        assert!((grid.beats[3] - 0.75).abs() < 0.0001);

        // Downbeat on the first beat of the bar
        assert_eq!(grid.downbeats, vec![grid.beats[0]]);

        // Transients on beats 2 and 4
        assert_eq!(grid.transients.len(), 2);
        assert!((grid.transients[0] - 0.25).abs() < 0.0001);
        assert!((grid.transients[1] - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_downbeats_every_bar() {
        let grid = generate_beat_grid(120.0, 8000.0, (4, 4)).unwrap();
        assert_eq!(grid.beats.len(), 16);
        assert_eq!(grid.downbeats.len(), 4);
        for (bar, downbeat) in grid.downbeats.iter().enumerate() {
            assert_eq!(*downbeat, grid.beats[bar * 4]);
        }
    }

    #[test]
    fn test_grid_and_bpm_are_inverses() {
        for bpm in [85.0, 120.0, 140.0, 174.0] {
            let grid = generate_beat_grid(bpm, 10_000.0, (4, 4)).unwrap();
            let detected = calculate_bpm(&grid.beats, 10_000.0);
            assert!(
                (detected - bpm).abs() <= 1.0,
                "bpm {bpm} detected as {detected}"
            );
        }
    }

    #[test]
    fn test_bpm_defaults_with_sparse_input() {
        assert_eq!(calculate_bpm(&[], 1000.0), 120.0);
        assert_eq!(calculate_bpm(&[0.5], 1000.0), 120.0);
    }

    #[test]
    fn test_grid_rejects_degenerate_input() {
        assert!(generate_beat_grid(0.0, 1000.0, (4, 4)).is_err());
        assert!(generate_beat_grid(120.0, 0.0, (4, 4)).is_err());
        assert!(generate_beat_grid(120.0, 1000.0, (0, 4)).is_err());
    }

    #[test]
    fn test_stretch_ratio() {
        assert!((calculate_stretch_ratio(120.0, 126.0).unwrap() - 1.05).abs() < 0.0001);
        assert!((calculate_stretch_ratio(140.0, 70.0).unwrap() - 0.5).abs() < 0.0001);
        assert!(calculate_stretch_ratio(0.0, 120.0).is_err());
    }

    #[test]
    fn test_three_four_has_no_transients() {
        let grid = generate_beat_grid(120.0, 4000.0, (3, 4)).unwrap();
        assert!(grid.transients.is_empty());
        assert_eq!(grid.downbeats.len(), 3);
    }
}
