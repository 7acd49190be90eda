// Chop & Screw - Houston-style slowdown plus slice chopping and rearrangement
// All positions are normalized against the source material

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::theory::{FIBONACCI, PHI};

/// One chopped playback event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChopPoint {
    /// Normalized position in the source [0.0, 1.0)
    pub time: f32,

    /// Normalized duration
    pub duration: f32,

    /// Consecutive plays of this chop
    pub repeats: u32,

    /// Pitch offset in semitones
    pub pitch_offset: f32,

    pub reverse: bool,
    pub fade_in: bool,
    pub fade_out: bool,
}

/// Full chop-and-screw treatment for a stretch of material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChopAndScrewConfig {
    /// Source duration in seconds
    pub duration_s: f32,

    /// Playback-rate factor, below 1.0
    pub slowdown: f32,

    /// Pitch shift in semitones, always negative
    pub pitch_shift: f32,

    pub chop_density: f32,
    pub screw_intensity: f32,
    pub reverb: f32,
    pub phaser: f32,

    pub chops: Vec<ChopPoint>,
}

/// Generate a chop-and-screw treatment. The walk steps through normalized
/// time in golden-ratio-sized gaps, dropping a chop with probability equal
/// to the chop density.
pub fn generate_chop_and_screw(
    duration_s: f32,
    intensity: f32,
    rng: &mut fastrand::Rng,
) -> EngineResult<ChopAndScrewConfig> {
    if duration_s <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "chop and screw duration must be > 0".to_string(),
        ));
    }

    let intensity = intensity.clamp(0.0, 1.0);
    let slowdown = 0.85 - intensity * 0.2;
    let pitch_shift = -3.0 - (intensity * 4.0).floor();
    let chop_density = 0.2 + intensity * 0.4;

    let mut chops = Vec::new();
    let mut position = 0.0f32;

    loop {
        position += (1.0 / PHI) * (0.1 + rng.f32() * 0.2);
        if position >= 1.0 {
            break;
        }
        if rng.f32() >= chop_density {
            continue;
        }

        // Repeat count weighted toward 2
        let roll = rng.f32();
        let repeats = if roll < 0.25 {
            1
        } else if roll < 0.75 {
            2
        } else {
            3
        };

        chops.push(ChopPoint {
            time: position,
            duration: 0.02 + rng.f32() * 0.08,
            repeats,
            pitch_offset: if rng.f32() < 0.3 { -2.0 } else { 0.0 },
            reverse: rng.f32() < 0.1,
            fade_in: rng.f32() < 0.2,
            fade_out: rng.f32() < 0.3,
        });
    }

    Ok(ChopAndScrewConfig {
        duration_s,
        slowdown,
        pitch_shift,
        chop_density,
        screw_intensity: intensity,
        reverb: 0.4 + intensity * 0.4,
        phaser: 0.2 + intensity * 0.3,
        chops,
    })
}

/// Screw a single vocal syllable: 2-4 repeats, each 10% longer and half a
/// semitone lower than the last, fading out only on the final repeat.
pub fn screw_vocal(
    position: f32,
    syllable_length: f32,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<ChopPoint>> {
    if syllable_length <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "syllable length must be > 0".to_string(),
        ));
    }

    let count = 2 + rng.u32(0..3);
    Ok((0..count)
        .map(|i| ChopPoint {
            time: position,
            duration: syllable_length * 1.1f32.powi(i as i32),
            repeats: 1,
            pitch_offset: -0.5 * i as f32,
            reverse: false,
            fade_in: false,
            fade_out: i == count - 1,
        })
        .collect())
}

/// How chop positions are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChopLayout {
    Grid,
    Golden,
    Fibonacci,
    Random,
}

/// Generate normalized chop positions. The first point is always 0.0 and
/// every point lies in [0.0, 1.0).
pub fn generate_chop_points(
    duration_s: f32,
    num_chops: usize,
    layout: ChopLayout,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<f32>> {
    if duration_s <= 0.0 {
        return Err(EngineError::InvalidArgument(
            "chop point duration must be > 0".to_string(),
        ));
    }
    if num_chops == 0 {
        return Err(EngineError::InvalidArgument(
            "chop count must be > 0".to_string(),
        ));
    }

    let points = match layout {
        ChopLayout::Grid => (0..num_chops)
            .map(|i| i as f32 / num_chops as f32)
            .collect(),

        ChopLayout::Golden => {
            let mut points: Vec<f32> = (0..num_chops)
                .map(|i| (i as f32 / PHI) % 1.0)
                .collect();
            points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            points
        }

        ChopLayout::Fibonacci => {
            let weight = |i: usize| FIBONACCI[i % FIBONACCI.len()];
            let total: u32 = (0..num_chops).map(weight).sum();
            let mut cumulative = 0u32;
            (0..num_chops)
                .map(|i| {
                    let point = cumulative as f32 / total as f32;
                    cumulative += weight(i);
                    point
                })
                .collect()
        }

        ChopLayout::Random => {
            let mut points = vec![0.0f32];
            for _ in 1..num_chops {
                for _attempt in 0..100 {
                    let candidate = rng.f32();
                    if points.iter().all(|&p| (p - candidate).abs() >= 0.05) {
                        points.push(candidate);
                        break;
                    }
                }
            }
            points
        }
    };

    Ok(points)
}

/// How a slice sequence is reordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RearrangeStyle {
    Shuffle,
    Reverse,
    Palindrome,
    Breakcore,
    Intelligent,
}

/// Produce a playback order over `num_slices` slice indices
pub fn rearrange_slices(
    num_slices: usize,
    style: RearrangeStyle,
    rng: &mut fastrand::Rng,
) -> EngineResult<Vec<usize>> {
    if num_slices == 0 {
        return Err(EngineError::InvalidArgument(
            "slice count must be > 0".to_string(),
        ));
    }

    let order = match style {
        RearrangeStyle::Shuffle => {
            let mut order: Vec<usize> = (0..num_slices).collect();
            rng.shuffle(&mut order);
            order
        }

        RearrangeStyle::Reverse => (0..num_slices).rev().collect(),

        // Forward then backward, sharing the apex slice
        RearrangeStyle::Palindrome => {
            let mut order: Vec<usize> = (0..num_slices).collect();
            order.extend((0..num_slices.saturating_sub(1)).rev());
            order
        }

        RearrangeStyle::Breakcore => {
            let mut order = Vec::with_capacity(num_slices * 2);
            while order.len() < num_slices * 2 {
                let pick = rng.usize(0..num_slices);
                order.push(pick);
                if order.len() < num_slices * 2 && rng.f32() < 0.3 {
                    order.push(pick);
                }
            }
            order
        }

        RearrangeStyle::Intelligent => {
            let mut order = Vec::with_capacity(num_slices);
            for i in 0..num_slices {
                order.push(i);
                // Callbacks to earlier material once the phrase is established
                if i > 2 && rng.f32() < 0.2 {
                    order.push(rng.usize(0..i));
                }
            }
            order
        }
    };

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chop_and_screw_parameters() {
        let mut rng = fastrand::Rng::with_seed(1);
        let config = generate_chop_and_screw(30.0, 1.0, &mut rng).unwrap();

        assert!((config.slowdown - 0.65).abs() < 0.0001);
        assert_eq!(config.pitch_shift, -7.0);
        assert!((config.chop_density - 0.6).abs() < 0.0001);
        assert!((config.reverb - 0.8).abs() < 0.0001);
        assert!((config.phaser - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_chop_and_screw_chops_in_range() {
        let mut rng = fastrand::Rng::with_seed(2);
        let config = generate_chop_and_screw(60.0, 0.8, &mut rng).unwrap();

        for chop in &config.chops {
            assert!(chop.time > 0.0 && chop.time < 1.0);
            assert!(chop.duration >= 0.02 && chop.duration <= 0.10);
            assert!((1..=3).contains(&chop.repeats));
        }
    }

    #[test]
    fn test_chop_and_screw_rejects_zero_duration() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(generate_chop_and_screw(0.0, 0.5, &mut rng).is_err());
    }

    #[test]
    fn test_screw_vocal_shape() {
        let mut rng = fastrand::Rng::with_seed(3);
        let repeats = screw_vocal(0.4, 0.1, &mut rng).unwrap();

        assert!((2..=4).contains(&repeats.len()));
        for (i, chop) in repeats.iter().enumerate() {
            assert_eq!(chop.time, 0.4);
            // Each repeat 10% longer and half a semitone lower
            assert!((chop.duration - 0.1 * 1.1f32.powi(i as i32)).abs() < 0.0001);
            assert_eq!(chop.pitch_offset, -0.5 * i as f32);
            assert_eq!(chop.fade_out, i == repeats.len() - 1);
        }
    }

    #[test]
    fn test_chop_points_start_at_zero_and_stay_bounded() {
        let mut rng = fastrand::Rng::with_seed(4);
        for layout in [
            ChopLayout::Grid,
            ChopLayout::Golden,
            ChopLayout::Fibonacci,
            ChopLayout::Random,
        ] {
            let points = generate_chop_points(10.0, 8, layout, &mut rng).unwrap();
            assert_eq!(points[0], 0.0, "{layout:?}");
            for &point in &points {
                assert!((0.0..1.0).contains(&point), "{layout:?} point {point}");
            }
        }
    }

    #[test]
    fn test_grid_chop_points_are_even() {
        let mut rng = fastrand::Rng::with_seed(5);
        let points = generate_chop_points(10.0, 4, ChopLayout::Grid, &mut rng).unwrap();
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_random_chop_points_keep_distance() {
        let mut rng = fastrand::Rng::with_seed(6);
        let points = generate_chop_points(10.0, 12, ChopLayout::Random, &mut rng).unwrap();

        for (i, &a) in points.iter().enumerate() {
            for &b in &points[i + 1..] {
                assert!((a - b).abs() >= 0.05);
            }
        }
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let mut rng = fastrand::Rng::with_seed(7);
        let once = rearrange_slices(8, RearrangeStyle::Reverse, &mut rng).unwrap();
        let twice: Vec<usize> = once.iter().rev().cloned().collect();
        assert_eq!(twice, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_palindrome_shape() {
        let mut rng = fastrand::Rng::with_seed(8);
        let order = rearrange_slices(5, RearrangeStyle::Palindrome, &mut rng).unwrap();

        assert_eq!(order.len(), 9);
        assert_eq!(order, vec![0, 1, 2, 3, 4, 3, 2, 1, 0]);
        // Reads the same forwards and backwards
        let reversed: Vec<usize> = order.iter().rev().cloned().collect();
        assert_eq!(order, reversed);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = fastrand::Rng::with_seed(9);
        let mut order = rearrange_slices(16, RearrangeStyle::Shuffle, &mut rng).unwrap();
        order.sort();
        assert_eq!(order, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_breakcore_doubles_length() {
        let mut rng = fastrand::Rng::with_seed(10);
        let order = rearrange_slices(8, RearrangeStyle::Breakcore, &mut rng).unwrap();
        assert_eq!(order.len(), 16);
        assert!(order.iter().all(|&i| i < 8));
    }

    #[test]
    fn test_intelligent_preserves_forward_motion() {
        let mut rng = fastrand::Rng::with_seed(11);
        let order = rearrange_slices(16, RearrangeStyle::Intelligent, &mut rng).unwrap();

        // The original sequence appears in order within the result
        let mut expected = 0;
        for &index in &order {
            if index == expected {
                expected += 1;
            }
        }
        assert_eq!(expected, 16);
        assert!(order.len() >= 16);
    }

    #[test]
    fn test_rearrange_rejects_zero_slices() {
        let mut rng = fastrand::Rng::with_seed(12);
        assert!(rearrange_slices(0, RearrangeStyle::Shuffle, &mut rng).is_err());
    }
}
