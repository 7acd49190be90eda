// Live Queries - "Where are we right now" answers for a playing arrangement
// Called once per render frame or UI tick; stays O(section count) and
// avoids string construction on the hot path

use serde::{Deserialize, Serialize};

use crate::arrangement::generator::Arrangement;
use crate::arrangement::templates::SectionType;
use crate::error::{EngineError, EngineResult};

/// Machine-readable playback suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackHint {
    /// The next section starts within 4 bars
    PrepareNextSection(SectionType),

    /// Tension is high; consider a release
    ReleaseTension,

    /// Energy is low outside intro/outro; consider adding elements
    AddElements,

    /// A buildup is about to resolve
    DropIncoming,
}

/// Current playback position and macro state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveState {
    pub section_index: usize,
    pub section_type: SectionType,
    pub bar_in_section: u32,
    pub bars_remaining: u32,
    pub beat: u32,
    pub energy: f32,
    pub tension: f32,
    pub hints: Vec<PlaybackHint>,
}

/// Per-element playback intensities, all [0.0, 1.0]; inactive elements are 0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementIntensity {
    pub drums: f32,
    pub bass: f32,
    pub chords: f32,
    pub melody: f32,
    pub pads: f32,
    pub fx: f32,
    pub vocals: f32,
    pub percussion: f32,
}

/// Resolve the live state at a bar. Bars past the end clamp to the final
/// bar so an overrunning player keeps getting answers.
pub fn live_state(arrangement: &Arrangement, bar: u32, beat: u32) -> EngineResult<LiveState> {
    let total = arrangement.total_bars();
    if total == 0 {
        return Err(EngineError::InvalidArgument(
            "arrangement has no bars".to_string(),
        ));
    }

    let bar = bar.min(total - 1);
    let (section_index, section, bar_in_section) =
        arrangement.section_at(bar).ok_or_else(|| {
            EngineError::InvalidArgument("arrangement sections and curves disagree".to_string())
        })?;

    let energy = arrangement.energy_curve[bar as usize];
    let tension = arrangement.tension_curve[bar as usize];
    let bars_remaining = section.bars - bar_in_section;

    let mut hints = Vec::new();
    if bars_remaining <= 4 {
        if let Some(next) = arrangement.sections.get(section_index + 1) {
            hints.push(PlaybackHint::PrepareNextSection(next.section_type));
        }
    }
    if tension > 0.7 {
        hints.push(PlaybackHint::ReleaseTension);
    }
    if energy < 0.3
        && !matches!(
            section.section_type,
            SectionType::Intro | SectionType::Outro
        )
    {
        hints.push(PlaybackHint::AddElements);
    }
    if section.section_type == SectionType::Buildup && bars_remaining <= 2 {
        hints.push(PlaybackHint::DropIncoming);
    }

    Ok(LiveState {
        section_index,
        section_type: section.section_type,
        bar_in_section,
        bars_remaining,
        beat,
        energy,
        tension,
        hints,
    })
}

/// Per-element intensities at a bar, derived from the current energy and
/// tension. Elements the section does not activate stay at 0.
pub fn active_elements(arrangement: &Arrangement, bar: u32) -> EngineResult<ElementIntensity> {
    let state = live_state(arrangement, bar, 0)?;
    let section = &arrangement.sections[state.section_index];
    let energy = state.energy;
    let tension = state.tension;

    let gate = |active: bool, intensity: f32| {
        if active {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    Ok(ElementIntensity {
        drums: gate(section.elements.drums, energy),
        bass: gate(section.elements.bass, 0.7 + 0.3 * energy),
        chords: gate(section.elements.chords, 0.6 + 0.4 * tension),
        melody: gate(section.elements.melody, 0.5 + 0.5 * energy),
        // Pads thin out as the track gets busier
        pads: gate(section.elements.pads, 0.8 - 0.3 * energy),
        fx: gate(section.elements.fx, tension),
        vocals: gate(section.elements.vocals, 0.7 + 0.3 * energy),
        percussion: gate(section.elements.percussion, 0.8 * energy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::generator::{
        generate_arrangement, ArrangementOptions, DurationOption, EnergyOption, StructureChoice,
    };
    use crate::arrangement::templates::StructureTemplate;
    use crate::genre::Genre;

    fn lofi_arrangement() -> Arrangement {
        let mut rng = fastrand::Rng::with_seed(1);
        let options = ArrangementOptions {
            genre: Genre::Lofi,
            key: None,
            bpm: None,
            duration: DurationOption::Short,
            energy: EnergyOption::Medium,
            structure: StructureChoice::Named(StructureTemplate::Lofi),
        };
        generate_arrangement(&options, &mut rng).unwrap()
    }

    #[test]
    fn test_live_state_start() {
        let arrangement = lofi_arrangement();
        let state = live_state(&arrangement, 0, 0).unwrap();

        assert_eq!(state.section_index, 0);
        assert_eq!(state.section_type, SectionType::Intro);
        assert_eq!(state.bar_in_section, 0);
        assert_eq!(state.bars_remaining, 5);
    }

    #[test]
    fn test_live_state_reads_curves() {
        let arrangement = lofi_arrangement();
        for bar in 0..arrangement.total_bars() {
            let state = live_state(&arrangement, bar, 0).unwrap();
            assert_eq!(state.energy, arrangement.energy_curve[bar as usize]);
            assert_eq!(state.tension, arrangement.tension_curve[bar as usize]);
        }
    }

    #[test]
    fn test_live_state_clamps_overrun() {
        let arrangement = lofi_arrangement();
        let last = live_state(&arrangement, arrangement.total_bars() - 1, 0).unwrap();
        let over = live_state(&arrangement, 9999, 0).unwrap();
        assert_eq!(last, over);
    }

    #[test]
    fn test_prepare_hint_near_boundary() {
        let arrangement = lofi_arrangement();
        // Bar 2 of a 5-bar intro leaves 3 bars: within the 4-bar window
        let state = live_state(&arrangement, 2, 0).unwrap();
        assert!(state
            .hints
            .iter()
            .any(|h| matches!(h, PlaybackHint::PrepareNextSection(SectionType::Verse))));
    }

    #[test]
    fn test_drop_hint_in_buildup_tail() {
        let mut rng = fastrand::Rng::with_seed(2);
        let options = ArrangementOptions {
            genre: Genre::Frutiger,
            key: None,
            bpm: None,
            duration: DurationOption::Medium,
            energy: EnergyOption::Medium,
            structure: StructureChoice::Named(StructureTemplate::BuildupDrop),
        };
        let arrangement = generate_arrangement(&options, &mut rng).unwrap();

        // Find the last bar of the first buildup
        let mut start = 0;
        for section in &arrangement.sections {
            if section.section_type == SectionType::Buildup {
                let state = live_state(&arrangement, start + section.bars - 1, 0).unwrap();
                assert!(state.hints.contains(&PlaybackHint::DropIncoming));
                return;
            }
            start += section.bars;
        }
        panic!("structure should contain a buildup");
    }

    #[test]
    fn test_active_elements_gating() {
        let arrangement = lofi_arrangement();
        // Intro activates chords/pads/fx only
        let intensity = active_elements(&arrangement, 0).unwrap();
        assert_eq!(intensity.drums, 0.0);
        assert_eq!(intensity.bass, 0.0);
        assert!(intensity.chords > 0.0);
        assert!(intensity.pads > 0.0);
        assert_eq!(intensity.vocals, 0.0);

        // Verse activates the core band
        let intensity = active_elements(&arrangement, 5).unwrap();
        assert!(intensity.drums > 0.0);
        assert!(intensity.bass > 0.0);
        assert!(intensity.melody > 0.0);
        assert_eq!(intensity.pads, 0.0);
    }

    #[test]
    fn test_pads_thin_as_energy_rises() {
        let arrangement = lofi_arrangement();
        let state = live_state(&arrangement, 0, 0).unwrap();
        let intensity = active_elements(&arrangement, 0).unwrap();
        assert!((intensity.pads - (0.8 - 0.3 * state.energy)).abs() < 0.0001);
    }
}
