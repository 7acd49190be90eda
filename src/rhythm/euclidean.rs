// Euclidean Rhythms - Bjorklund's algorithm plus the world-rhythm preset table
// Distributes k hits as evenly as possible over n steps

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Generate a Euclidean rhythm: `hits` ones distributed as evenly as
/// possible across `steps` slots, circularly left-rotated by `rotation`.
///
/// Edge policy:
/// - `steps == 0` is an error (no meaningful partial result)
/// - `hits == 0` yields all rests
/// - `hits >= steps` yields all hits
pub fn euclidean(hits: usize, steps: usize, rotation: usize) -> EngineResult<Vec<bool>> {
    if steps == 0 {
        return Err(EngineError::InvalidArgument(
            "euclidean steps must be > 0".to_string(),
        ));
    }

    if hits == 0 {
        return Ok(vec![false; steps]);
    }
    if hits >= steps {
        return Ok(vec![true; steps]);
    }

    let pattern = bjorklund(hits, steps);
    Ok(rotate_left(&pattern, rotation % steps))
}

/// Bjorklund bucket-splitting recursion
///
/// Start with `hits` singleton [1] groups and `steps - hits` singleton [0]
/// groups, then repeatedly fold the shorter tail set into the head set until
/// only one distinguishable remainder group is left, and flatten.
fn bjorklund(hits: usize, steps: usize) -> Vec<bool> {
    let mut head: Vec<Vec<bool>> = vec![vec![true]; hits];
    let mut tail: Vec<Vec<bool>> = vec![vec![false]; steps - hits];

    while tail.len() > 1 {
        let pairs = head.len().min(tail.len());

        let mut folded: Vec<Vec<bool>> = Vec::with_capacity(pairs);
        for i in 0..pairs {
            let mut group = head[i].clone();
            group.extend_from_slice(&tail[i]);
            folded.push(group);
        }

        // Whichever set is longer leaves a remainder that becomes the new tail
        let remainder = if head.len() > pairs {
            head[pairs..].to_vec()
        } else {
            tail[pairs..].to_vec()
        };

        head = folded;
        tail = remainder;
    }

    head.into_iter().chain(tail).flatten().collect()
}

/// Circular left-rotation of a pattern
pub fn rotate_left(pattern: &[bool], amount: usize) -> Vec<bool> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let amount = amount % pattern.len();
    let mut rotated = pattern[amount..].to_vec();
    rotated.extend_from_slice(&pattern[..amount]);
    rotated
}

/// Named world rhythms expressed as (hits, steps, rotation) triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EuclideanPreset {
    /// Cuban tresillo, 3 over 8
    Tresillo,

    /// Cuban cinquillo, 5 over 8
    Cinquillo,

    /// Son clave skeleton, 5 over 16
    SonClave,

    /// Brazilian samba bell, 7 over 16
    Samba,

    /// Venda drumming (South Africa), 5 over 12
    Venda,

    /// Turkish aksak, 4 over 9
    Aksak,

    /// Arabic wahda family, 7 over 12
    Arabic,

    /// Ghanaian gahu bell, 5 over 16 displaced
    Gahu,

    /// Bembe bell (West Africa), 7 over 12
    Bembe,

    /// Four-on-the-floor kick, 4 over 16
    FourOnTheFloor,

    /// Offbeat stabs, 4 over 16 displaced to the upbeats
    Offbeat,
}

impl EuclideanPreset {
    /// The (hits, steps, rotation) triple for this preset
    pub fn parameters(&self) -> (usize, usize, usize) {
        match self {
            EuclideanPreset::Tresillo => (3, 8, 0),
            EuclideanPreset::Cinquillo => (5, 8, 0),
            EuclideanPreset::SonClave => (5, 16, 0),
            EuclideanPreset::Samba => (7, 16, 0),
            EuclideanPreset::Venda => (5, 12, 0),
            EuclideanPreset::Aksak => (4, 9, 0),
            EuclideanPreset::Arabic => (7, 12, 5),
            EuclideanPreset::Gahu => (5, 16, 2),
            EuclideanPreset::Bembe => (7, 12, 0),
            EuclideanPreset::FourOnTheFloor => (4, 16, 0),
            EuclideanPreset::Offbeat => (4, 16, 2),
        }
    }

    /// Generate this preset's hit sequence
    pub fn pattern(&self) -> Vec<bool> {
        let (hits, steps, rotation) = self.parameters();
        // Preset parameters are all non-degenerate
        euclidean(hits, steps, rotation).unwrap_or_default()
    }

    /// Resolve a preset from its name tag; unknown tags fail fast
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name {
            "tresillo" => Ok(EuclideanPreset::Tresillo),
            "cinquillo" => Ok(EuclideanPreset::Cinquillo),
            "son_clave" => Ok(EuclideanPreset::SonClave),
            "samba" => Ok(EuclideanPreset::Samba),
            "venda" => Ok(EuclideanPreset::Venda),
            "aksak" => Ok(EuclideanPreset::Aksak),
            "arabic" => Ok(EuclideanPreset::Arabic),
            "gahu" => Ok(EuclideanPreset::Gahu),
            "bembe" => Ok(EuclideanPreset::Bembe),
            "four_on_the_floor" => Ok(EuclideanPreset::FourOnTheFloor),
            "offbeat" => Ok(EuclideanPreset::Offbeat),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown rhythm preset: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_bits(pattern: &[bool]) -> Vec<u8> {
        pattern.iter().map(|&b| b as u8).collect()
    }

    #[test]
    fn test_tresillo() {
        // The canonical Cuban tresillo
        let pattern = euclidean(3, 8, 0).unwrap();
        assert_eq!(as_bits(&pattern), vec![1, 0, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_cinquillo() {
        let pattern = euclidean(5, 8, 0).unwrap();
        assert_eq!(as_bits(&pattern), vec![1, 0, 1, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_hit_count_preserved() {
        for steps in 1..=16 {
            for hits in 0..=steps {
                let pattern = euclidean(hits, steps, 0).unwrap();
                assert_eq!(pattern.len(), steps);
                assert_eq!(
                    pattern.iter().filter(|&&b| b).count(),
                    hits,
                    "wrong hit count for E({hits},{steps})"
                );
            }
        }
    }

    #[test]
    fn test_edge_policies() {
        assert!(euclidean(3, 0, 0).is_err());
        assert_eq!(euclidean(0, 4, 0).unwrap(), vec![false; 4]);
        assert_eq!(euclidean(4, 4, 0).unwrap(), vec![true; 4]);
        assert_eq!(euclidean(9, 4, 0).unwrap(), vec![true; 4]);
    }

    #[test]
    fn test_rotation_round_trip() {
        for rotation in 0..8 {
            let rotated = euclidean(3, 8, rotation).unwrap();
            let back = rotate_left(&rotated, 8 - rotation);
            assert_eq!(back, euclidean(3, 8, 0).unwrap());
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(euclidean(3, 8, 8).unwrap(), euclidean(3, 8, 0).unwrap());
        assert_eq!(euclidean(3, 8, 11).unwrap(), euclidean(3, 8, 3).unwrap());
    }

    #[test]
    fn test_preset_lengths() {
        for preset in [
            EuclideanPreset::Tresillo,
            EuclideanPreset::Cinquillo,
            EuclideanPreset::SonClave,
            EuclideanPreset::Samba,
            EuclideanPreset::Venda,
            EuclideanPreset::Aksak,
            EuclideanPreset::Arabic,
            EuclideanPreset::Gahu,
            EuclideanPreset::Bembe,
            EuclideanPreset::FourOnTheFloor,
            EuclideanPreset::Offbeat,
        ] {
            let (hits, steps, _) = preset.parameters();
            let pattern = preset.pattern();
            assert_eq!(pattern.len(), steps);
            assert_eq!(pattern.iter().filter(|&&b| b).count(), hits);
        }
    }

    #[test]
    fn test_four_on_the_floor_is_even() {
        let pattern = EuclideanPreset::FourOnTheFloor.pattern();
        for (i, &hit) in pattern.iter().enumerate() {
            assert_eq!(hit, i % 4 == 0);
        }
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(
            EuclideanPreset::from_name("tresillo").unwrap(),
            EuclideanPreset::Tresillo
        );
        assert!(EuclideanPreset::from_name("polka").is_err());
    }
}
