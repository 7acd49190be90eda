// Arrangement Generation - Whole-song structure with macro energy/tension curves
// Sections come from structure templates; curves are computed per bar

use serde::{Deserialize, Serialize};

use crate::arrangement::templates::{
    section_template, ElementSet, SectionType, StructureTemplate,
};
use crate::error::{EngineError, EngineResult};
use crate::genre::{generate_section, profile, GeneratedSection, Genre, SectionOptions};
use crate::theory::PHI;

/// Requested song length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationOption {
    /// 32 bars
    Short,

    /// 64 bars
    Medium,

    /// 128 bars
    Long,

    /// Explicit bar count
    Bars(u32),
}

impl DurationOption {
    fn bars(&self) -> u32 {
        match self {
            DurationOption::Short => 32,
            DurationOption::Medium => 64,
            DurationOption::Long => 128,
            DurationOption::Bars(bars) => *bars,
        }
    }
}

/// Requested overall energy shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyOption {
    Chill,
    Medium,
    High,
    /// Push quiet sections quieter and loud sections louder
    Dynamic,
}

impl EnergyOption {
    fn delta(&self, template_energy: f32) -> f32 {
        match self {
            EnergyOption::Chill => -0.2,
            EnergyOption::Medium => 0.0,
            EnergyOption::High => 0.2,
            EnergyOption::Dynamic => {
                if template_energy > 0.5 {
                    0.15
                } else {
                    -0.15
                }
            }
        }
    }
}

/// Structure selection: a named template or the genre's default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureChoice {
    Auto,
    Named(StructureTemplate),
}

/// Options for arrangement generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangementOptions {
    pub genre: Genre,
    pub key: Option<String>,
    pub bpm: Option<f32>,
    pub duration: DurationOption,
    pub energy: EnergyOption,
    pub structure: StructureChoice,
}

impl ArrangementOptions {
    pub fn new(genre: Genre) -> Self {
        ArrangementOptions {
            genre,
            key: None,
            bpm: None,
            duration: DurationOption::Medium,
            energy: EnergyOption::Medium,
            structure: StructureChoice::Auto,
        }
    }
}

/// How one section hands over to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Riser,
    Filter,
    Fade,
    Cut,
    Stutter,
}

/// A transition at a bar boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangementTransition {
    /// Bar at which the next section starts
    pub bar: u32,
    pub kind: TransitionKind,
}

/// One structural block of the song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangementSection {
    /// Display label, normally the section type tag
    pub label: String,
    pub section_type: SectionType,
    pub bars: u32,

    /// Base energy [0.0, 1.0] after the energy option is applied
    pub energy: f32,

    /// Base tension [0.0, 1.0]
    pub tension: f32,

    pub elements: ElementSet,

    /// Composed music for this section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiled: Option<GeneratedSection>,
}

/// A complete song structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrangement {
    pub genre: Genre,
    pub key: String,
    pub bpm: f32,
    pub time_signature: (u32, u32),
    pub sections: Vec<ArrangementSection>,

    /// Per-bar energy, length equal to the total bar count
    pub energy_curve: Vec<f32>,

    /// Per-bar tension, length equal to the total bar count
    pub tension_curve: Vec<f32>,

    /// Transitions between consecutive sections, ordered by bar
    pub transitions: Vec<ArrangementTransition>,
}

impl Arrangement {
    /// Total length in bars
    pub fn total_bars(&self) -> u32 {
        self.sections.iter().map(|s| s.bars).sum()
    }

    /// The section containing `bar`, with its index and the bar offset
    /// inside it. O(section count).
    pub fn section_at(&self, bar: u32) -> Option<(usize, &ArrangementSection, u32)> {
        let mut start = 0;
        for (index, section) in self.sections.iter().enumerate() {
            if bar < start + section.bars {
                return Some((index, section, bar - start));
            }
            start += section.bars;
        }
        None
    }
}

/// Generate a full arrangement: structure, curves, transitions and
/// compiled sections
pub fn generate_arrangement(
    options: &ArrangementOptions,
    rng: &mut fastrand::Rng,
) -> EngineResult<Arrangement> {
    let requested_bars = options.duration.bars();
    if requested_bars == 0 {
        return Err(EngineError::InvalidArgument(
            "arrangement bars must be > 0".to_string(),
        ));
    }

    let genre_profile = profile(options.genre);
    let key = match &options.key {
        Some(key) => key.clone(),
        None => genre_profile.random_key(rng).to_string(),
    };
    let bpm = options.bpm.unwrap_or(genre_profile.preferred_bpm);

    let structure = match options.structure {
        StructureChoice::Named(template) => template,
        StructureChoice::Auto => StructureTemplate::default_for(options.genre),
    };
    let section_types = structure.sections();

    log::debug!(
        "generating {} arrangement: key={} bpm={} structure={:?} requested_bars={}",
        options.genre.as_str(),
        key,
        bpm,
        structure,
        requested_bars
    );

    // Divide the requested length evenly, then apply per-type overrides.
    // The real total is the post-override sum.
    let base_bars = (requested_bars / section_types.len() as u32).max(1);

    let mut sections: Vec<ArrangementSection> = section_types
        .iter()
        .map(|&section_type| {
            let template = section_template(section_type);
            let bars = match section_type {
                SectionType::Intro | SectionType::Outro => base_bars.min(8),
                SectionType::Buildup => base_bars.min(4),
                SectionType::Drop | SectionType::Chorus => base_bars.max(8),
                _ => base_bars,
            };
            let energy =
                (template.energy + options.energy.delta(template.energy)).clamp(0.0, 1.0);

            ArrangementSection {
                label: section_type.as_str().to_string(),
                section_type,
                bars,
                energy,
                tension: template.tension,
                elements: template.elements,
                compiled: None,
            }
        })
        .collect();

    // Per-bar macro curves
    let total_bars: u32 = sections.iter().map(|s| s.bars).sum();
    let mut energy_curve = Vec::with_capacity(total_bars as usize);
    let mut tension_curve = Vec::with_capacity(total_bars as usize);

    for section in &sections {
        for bar in 0..section.bars {
            let progress = bar as f32 / section.bars as f32;

            let build = match section.section_type {
                SectionType::Buildup => progress * 0.3,
                SectionType::Verse => progress * 0.1,
                _ => 0.0,
            };
            let wave = (progress * std::f32::consts::PI * PHI).sin() * 0.1;
            energy_curve.push((section.energy + wave + build).clamp(0.0, 1.0));

            let transition_tension = ((progress - 0.75) * 2.0).max(0.0);
            let release = ((0.1 - progress) * 2.0).max(0.0);
            tension_curve.push((section.tension + transition_tension - release).clamp(0.0, 1.0));
        }
    }

    // Transitions between consecutive sections, driven by the energy delta
    let mut transitions = Vec::with_capacity(sections.len().saturating_sub(1));
    let mut boundary = 0;
    for pair in 0..sections.len().saturating_sub(1) {
        boundary += sections[pair].bars;
        let delta = sections[pair + 1].energy - sections[pair].energy;

        let kind = if options.genre == Genre::Breakcore {
            if rng.bool() {
                TransitionKind::Cut
            } else {
                TransitionKind::Stutter
            }
        } else if delta > 0.3 {
            TransitionKind::Riser
        } else if delta < -0.3 {
            TransitionKind::Filter
        } else {
            TransitionKind::Fade
        };

        transitions.push(ArrangementTransition {
            bar: boundary,
            kind,
        });
    }

    // Compile each section through the genre engine, energy-scaled
    for section in &mut sections {
        let section_options = SectionOptions {
            key: Some(key.clone()),
            bpm: Some(bpm),
            bars: Some(section.bars),
            energy: Some(section.energy),
        };
        section.compiled = Some(generate_section(options.genre, &section_options, rng)?);
    }

    Ok(Arrangement {
        genre: options.genre,
        key,
        bpm,
        time_signature: (4, 4),
        sections,
        energy_curve,
        tension_curve,
        transitions,
    })
}
