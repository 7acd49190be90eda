// Effect Chains - Declarative effect parameters derived from a genre's sonic knobs
// The renderer interprets these; no DSP happens here

use serde::{Deserialize, Serialize};

use crate::genre::profile::GenreProfile;

/// Filter response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Lowpass,
    Highpass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub kind: FilterKind,
    pub cutoff_hz: f32,
    pub resonance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverbSettings {
    /// Decay time in seconds
    pub decay_s: f32,
    pub wet: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelaySettings {
    /// Delay time in seconds (a quarter note at the genre's BPM)
    pub time_s: f32,
    pub feedback: f32,
    pub wet: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitCrusher {
    pub bits: f32,
    pub sample_rate_hz: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeWobble {
    pub rate_hz: f32,
    pub depth: f32,
}

/// One effect chain for a composed section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectChain {
    pub filter: FilterSettings,
    pub reverb: ReverbSettings,
    pub delay: DelaySettings,
    pub distortion: f32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_crusher: Option<BitCrusher>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tape_wobble: Option<TapeWobble>,

    /// Crackle noise level when the genre asks for vinyl texture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vinyl_crackle: Option<f32>,
}

/// Derive the effect chain from a genre's sonic knobs and texture toggles
pub fn effect_chain(profile: &GenreProfile) -> EffectChain {
    let filter = FilterSettings {
        kind: if profile.brightness < 0.5 {
            FilterKind::Lowpass
        } else {
            FilterKind::Highpass
        },
        cutoff_hz: 400.0 + profile.brightness * 4000.0,
        resonance: 0.5 + profile.warmth * 0.5,
    };

    let reverb = ReverbSettings {
        decay_s: 1.0 + profile.space_reverb * 4.0,
        wet: profile.space_reverb,
    };

    let delay = DelaySettings {
        time_s: 60.0 / profile.preferred_bpm,
        feedback: profile.space_reverb * 0.6,
        wet: profile.space_reverb * 0.5,
    };

    let bit_crusher = (profile.lofi_amount > 0.3).then(|| {
        let bits = 16.0 - profile.lofi_amount * 8.0;
        BitCrusher {
            bits,
            sample_rate_hz: 44_100.0 * (bits / 16.0),
        }
    });

    let tape_wobble = profile.tape_wobble.then(|| TapeWobble {
        rate_hz: 0.9,
        depth: 0.2 + profile.lofi_amount * 0.2,
    });

    let vinyl_crackle = profile
        .vinyl_crackle
        .then(|| 0.2 + profile.lofi_amount * 0.8);

    EffectChain {
        filter,
        reverb,
        delay,
        distortion: profile.saturation * 0.5,
        bit_crusher,
        tape_wobble,
        vinyl_crackle,
    }
}
