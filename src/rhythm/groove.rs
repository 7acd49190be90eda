// Groove Generators - Fibonacci/golden-ratio rhythm, polyrhythm, swing and feel
// Mathematical timing generators shared across all genres

use crate::error::{EngineError, EngineResult};
use crate::theory::{FIBONACCI, PHI};

/// Place hits at Fibonacci positions, topping up with golden-ratio spaced
/// hits until the target density is met (or `length` attempts exhaust).
pub fn fibonacci_rhythm(length: usize, density: f32) -> EngineResult<Vec<bool>> {
    if length == 0 {
        return Err(EngineError::InvalidArgument(
            "fibonacci rhythm length must be > 0".to_string(),
        ));
    }

    let mut pattern = vec![false; length];
    for i in 0..length {
        let position = (i + 1) as u32;
        if position <= length as u32 && FIBONACCI.contains(&position) {
            pattern[i] = true;
        }
    }

    let density = density.clamp(0.0, 1.0);
    let mut hits = pattern.iter().filter(|&&b| b).count();
    let mut attempts = 0;
    let mut k = 1;

    while (hits as f32 / length as f32) < density && attempts < length {
        let index = ((k as f32 * PHI * length as f32) % length as f32).floor() as usize;
        if !pattern[index % length] {
            pattern[index % length] = true;
            hits += 1;
        }
        k += 1;
        attempts += 1;
    }

    Ok(pattern)
}

/// Per-step micro-timing offsets within +-5% of a step, derived from the
/// golden ratio so the groove never repeats exactly.
pub fn golden_groove(steps: usize) -> EngineResult<Vec<f32>> {
    if steps == 0 {
        return Err(EngineError::InvalidArgument(
            "golden groove steps must be > 0".to_string(),
        ));
    }

    Ok((0..steps)
        .map(|i| ((i as f32 * PHI) % 1.0 - 0.5) * 0.1)
        .collect())
}

/// Two layers of `a` and `b` evenly spaced hits on a shared grid of
/// `max(steps, lcm(a, b))` slots.
pub fn polyrhythm(a: usize, b: usize, steps: usize) -> EngineResult<(Vec<bool>, Vec<bool>)> {
    if a == 0 || b == 0 || steps == 0 {
        return Err(EngineError::InvalidArgument(
            "polyrhythm layers and steps must be > 0".to_string(),
        ));
    }

    let grid = steps.max(lcm(a, b));

    let spread = |count: usize| {
        let mut layer = vec![false; grid];
        for i in 0..count {
            layer[i * grid / count] = true;
        }
        layer
    };

    Ok((spread(a), spread(b)))
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

/// Delay every odd subdivision by a fraction of the total normalized time.
///
/// Returns the unchanged pattern together with one normalized timing per
/// step; a renderer schedules hits at these times.
pub fn apply_swing(
    pattern: &[bool],
    amount: f32,
    subdivision: usize,
) -> EngineResult<(Vec<bool>, Vec<f32>)> {
    if pattern.is_empty() {
        return Err(EngineError::InvalidArgument(
            "cannot swing an empty pattern".to_string(),
        ));
    }
    if subdivision == 0 {
        return Err(EngineError::InvalidArgument(
            "swing subdivision must be > 0".to_string(),
        ));
    }

    let amount = amount.clamp(0.0, 1.0);
    let len = pattern.len() as f32;

    let timings = (0..pattern.len())
        .map(|i| {
            let base = i as f32 / len;
            if (i % subdivision) % 2 == 1 {
                base + amount * 0.5 / len
            } else {
                base
            }
        })
        .collect();

    Ok((pattern.to_vec(), timings))
}

/// Add independent uniform jitter in +-amount to each timing
pub fn humanize(timings: &[f32], amount: f32, rng: &mut fastrand::Rng) -> Vec<f32> {
    let amount = amount.clamp(0.0, 1.0);
    timings
        .iter()
        .map(|&t| t + (rng.f32() * 2.0 - 1.0) * amount)
        .collect()
}

/// Per-step velocities: active hits get a base in [0.7, 0.9], an accent
/// boost when the (cycled) accent pattern marks the step, and a small
/// downbeat boost every 4 steps. Rests are velocity 0.
pub fn velocity_variation(
    pattern: &[bool],
    accents: Option<&[bool]>,
    rng: &mut fastrand::Rng,
) -> Vec<f32> {
    pattern
        .iter()
        .enumerate()
        .map(|(i, &hit)| {
            if !hit {
                return 0.0;
            }

            let mut velocity = 0.7 + rng.f32() * 0.2;
            if let Some(accents) = accents {
                if !accents.is_empty() && accents[i % accents.len()] {
                    velocity += 0.2;
                }
            }
            if i % 4 == 0 {
                velocity += 0.1;
            }
            velocity.min(1.0)
        })
        .collect()
}
