// Section Variation and Fills - Keeping repeated sections from sounding identical
// Variations jitter a section's macro parameters; fills decorate transitions

use serde::{Deserialize, Serialize};

use crate::arrangement::generator::{Arrangement, ArrangementSection};

/// How far a variation strays from the original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationKind {
    Subtle,
    Moderate,
    Dramatic,
}

/// Produce a varied copy of a section. Energy and tension stay clamped in
/// [0, 1] and the label gains a `-var` suffix.
pub fn generate_variation(
    section: &ArrangementSection,
    kind: VariationKind,
    rng: &mut fastrand::Rng,
) -> ArrangementSection {
    let mut varied = section.clone();

    let jitter = |rng: &mut fastrand::Rng, spread: f32| (rng.f32() * 2.0 - 1.0) * spread;

    match kind {
        VariationKind::Subtle => {
            varied.energy += jitter(rng, 0.1);
        }
        VariationKind::Moderate => {
            varied.energy += jitter(rng, 0.2);
            varied.tension += jitter(rng, 0.2);
            if rng.f32() < 0.3 {
                varied.elements.percussion = !varied.elements.percussion;
            }
            if rng.f32() < 0.2 {
                varied.elements.fx = !varied.elements.fx;
            }
        }
        VariationKind::Dramatic => {
            varied.energy = 1.0 - varied.energy;
            varied.tension += jitter(rng, 0.4);

            let toggle = |rng: &mut fastrand::Rng, flag: &mut bool| {
                if rng.f32() < 0.4 {
                    *flag = !*flag;
                }
            };
            toggle(rng, &mut varied.elements.drums);
            toggle(rng, &mut varied.elements.bass);
            toggle(rng, &mut varied.elements.chords);
            toggle(rng, &mut varied.elements.melody);
            toggle(rng, &mut varied.elements.pads);
            toggle(rng, &mut varied.elements.fx);
            toggle(rng, &mut varied.elements.vocals);
            toggle(rng, &mut varied.elements.percussion);
        }
    }

    varied.energy = varied.energy.clamp(0.0, 1.0);
    varied.tension = varied.tension.clamp(0.0, 1.0);
    varied.label = format!("{}-var", section.label);
    varied
}

/// What a fill is announcing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillKind {
    /// One bar ahead of a section transition
    Transition,

    /// On an 8-bar phrase boundary
    Phrase,

    /// Small in-phrase decoration
    Mini,
}

/// A drum fill placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub bar: u32,
    pub kind: FillKind,
}

/// Place fills across an arrangement: one ahead of every transition, then
/// probabilistic phrase/mini fills every 4 bars with a 2-bar exclusion
/// window around existing fills. Returned sorted by bar.
pub fn add_fills(arrangement: &Arrangement, fill_density: f32, rng: &mut fastrand::Rng) -> Vec<Fill> {
    let fill_density = fill_density.clamp(0.0, 1.0);
    let mut fills: Vec<Fill> = arrangement
        .transitions
        .iter()
        .map(|t| Fill {
            bar: t.bar.saturating_sub(1),
            kind: FillKind::Transition,
        })
        .collect();

    let total = arrangement.total_bars();
    let mut bar = 0;
    while bar < total {
        let near_existing = fills
            .iter()
            .any(|f| f.bar.abs_diff(bar) <= 2);
        if !near_existing && rng.f32() < fill_density {
            fills.push(Fill {
                bar,
                kind: if bar % 8 == 0 {
                    FillKind::Phrase
                } else {
                    FillKind::Mini
                },
            });
        }
        bar += 4;
    }

    fills.sort_by_key(|f| f.bar);
    fills
}
