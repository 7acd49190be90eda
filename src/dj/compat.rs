// Track Compatibility - BPM and key closeness scoring for mixing two tracks
// BPM bands on the tempo ratio, key bands on circle-of-fifths distance

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::theory::{circle_distance, parse_key};

/// The metadata compatibility analysis needs about a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProfile {
    pub bpm: f32,

    /// Key name, e.g. "C" or "Am"
    pub key: String,
}

/// Compatibility verdict for a pair of tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// [0.0, 1.0], symmetric in the two tracks
    pub bpm_compatibility: f32,

    /// [0.0, 1.0]
    pub key_compatibility: f32,

    /// Blended score: 60% BPM, 40% key
    pub overall: f32,

    /// Stretch to apply to track A to match track B
    pub suggested_stretch: f32,
}

/// Score how mixable two tracks are
pub fn analyze_compatibility(
    track_a: &TrackProfile,
    track_b: &TrackProfile,
) -> EngineResult<CompatibilityReport> {
    if track_a.bpm <= 0.0 || track_b.bpm <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "compatibility needs positive BPMs".to_string(),
        ));
    }

    // Symmetric by construction
    let ratio = track_a.bpm.min(track_b.bpm) / track_a.bpm.max(track_b.bpm);
    let bpm_compatibility = if ratio > 0.94 {
        1.0
    } else if ratio > 0.88 {
        0.8
    } else if ratio > 0.75 {
        0.5
    } else {
        0.2
    };

    let key_a = parse_key(&track_a.key)?;
    let key_b = parse_key(&track_b.key)?;
    let distance = circle_distance(key_a.root, key_b.root);

    let mut key_compatibility = match distance {
        0 => 1.0,
        1 => 0.9,
        2 => 0.7,
        3 => 0.5,
        _ => 0.3,
    };
    // Relative major/minor pairs sit three fifths apart with opposite modes
    if distance == 3 && key_a.minor != key_b.minor {
        key_compatibility = (key_compatibility + 0.2f32).min(1.0);
    }

    Ok(CompatibilityReport {
        bpm_compatibility,
        key_compatibility,
        overall: 0.6 * bpm_compatibility + 0.4 * key_compatibility,
        suggested_stretch: track_b.bpm / track_a.bpm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(bpm: f32, key: &str) -> TrackProfile {
        TrackProfile {
            bpm,
            key: key.to_string(),
        }
    }

    #[test]
    fn test_identical_tracks_are_fully_compatible() {
        let report =
            analyze_compatibility(&track(120.0, "C"), &track(120.0, "C")).unwrap();
        assert_eq!(report.bpm_compatibility, 1.0);
        assert_eq!(report.key_compatibility, 1.0);
        assert_eq!(report.overall, 1.0);
        assert_eq!(report.suggested_stretch, 1.0);
    }

    #[test]
    fn test_bpm_bands() {
        let bands = [
            (120.0, 122.0, 1.0), // ratio 0.983
            (120.0, 130.0, 0.8), // ratio 0.923
            (120.0, 150.0, 0.5), // ratio 0.8
            (120.0, 180.0, 0.2), // ratio 0.667
        ];
        for (a, b, expected) in bands {
            let report = analyze_compatibility(&track(a, "C"), &track(b, "C")).unwrap();
            assert_eq!(report.bpm_compatibility, expected, "{a} vs {b}");
        }
    }

    #[test]
    fn test_bpm_compatibility_is_symmetric() {
        for (a, b) in [(120.0, 135.0), (85.0, 174.0), (100.0, 101.0)] {
            let forward = analyze_compatibility(&track(a, "C"), &track(b, "G")).unwrap();
            let backward = analyze_compatibility(&track(b, "C"), &track(a, "G")).unwrap();
            assert_eq!(forward.bpm_compatibility, backward.bpm_compatibility);
        }
    }

    #[test]
    fn test_key_distance_bands() {
        let cases = [
            ("C", "C", 1.0),  // identical
            ("C", "G", 0.9),  // one fifth
            ("C", "D", 0.7),  // two fifths
            ("C", "F#", 0.3), // opposite side of the circle
        ];
        for (a, b, expected) in cases {
            let report = analyze_compatibility(&track(120.0, a), &track(120.0, b)).unwrap();
            assert_eq!(report.key_compatibility, expected, "{a} vs {b}");
        }
    }

    #[test]
    fn test_relative_minor_bonus() {
        // C major and A minor: distance 3, one minor -> 0.5 + 0.2
        let report = analyze_compatibility(&track(120.0, "C"), &track(120.0, "Am")).unwrap();
        assert!((report.key_compatibility - 0.7).abs() < 0.0001);

        // C major and A major: distance 3, no bonus
        let report = analyze_compatibility(&track(120.0, "C"), &track(120.0, "A")).unwrap();
        assert_eq!(report.key_compatibility, 0.5);
    }

    #[test]
    fn test_overall_blend() {
        let report = analyze_compatibility(&track(120.0, "C"), &track(130.0, "G")).unwrap();
        let expected = 0.6 * 0.8 + 0.4 * 0.9;
        assert!((report.overall - expected).abs() < 0.0001);
    }

    #[test]
    fn test_suggested_stretch_direction() {
        let report = analyze_compatibility(&track(100.0, "C"), &track(110.0, "C")).unwrap();
        assert!((report.suggested_stretch - 1.1).abs() < 0.0001);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(analyze_compatibility(&track(0.0, "C"), &track(120.0, "C")).is_err());
        assert!(analyze_compatibility(&track(120.0, "X"), &track(120.0, "C")).is_err());
    }
}
