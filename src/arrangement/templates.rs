// Arrangement Templates - Section defaults and named song structures
// Fixed data driving arrangement generation; nothing here is computed at runtime

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::genre::Genre;

/// Structural role of a section within a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Bridge,
    Breakdown,
    Buildup,
    Drop,
    Outro,
}

impl SectionType {
    /// Name tag for this section type
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Intro => "intro",
            SectionType::Verse => "verse",
            SectionType::PreChorus => "prechorus",
            SectionType::Chorus => "chorus",
            SectionType::Bridge => "bridge",
            SectionType::Breakdown => "breakdown",
            SectionType::Buildup => "buildup",
            SectionType::Drop => "drop",
            SectionType::Outro => "outro",
        }
    }
}

/// Which musical elements play during a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementSet {
    pub drums: bool,
    pub bass: bool,
    pub chords: bool,
    pub melody: bool,
    pub pads: bool,
    pub fx: bool,
    pub vocals: bool,
    pub percussion: bool,
}

/// Default energy/tension/instrumentation for a section type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionTemplate {
    pub energy: f32,
    pub tension: f32,
    pub elements: ElementSet,
}

/// The fixed template for a section type
pub fn section_template(section_type: SectionType) -> SectionTemplate {
    match section_type {
        SectionType::Intro => SectionTemplate {
            energy: 0.3,
            tension: 0.2,
            elements: ElementSet {
                chords: true,
                pads: true,
                fx: true,
                ..Default::default()
            },
        },
        SectionType::Verse => SectionTemplate {
            energy: 0.5,
            tension: 0.3,
            elements: ElementSet {
                drums: true,
                bass: true,
                chords: true,
                melody: true,
                vocals: true,
                ..Default::default()
            },
        },
        SectionType::PreChorus => SectionTemplate {
            energy: 0.6,
            tension: 0.5,
            elements: ElementSet {
                drums: true,
                bass: true,
                chords: true,
                melody: true,
                pads: true,
                vocals: true,
                ..Default::default()
            },
        },
        SectionType::Chorus => SectionTemplate {
            energy: 0.8,
            tension: 0.4,
            elements: ElementSet {
                drums: true,
                bass: true,
                chords: true,
                melody: true,
                pads: true,
                fx: true,
                vocals: true,
                percussion: true,
            },
        },
        SectionType::Bridge => SectionTemplate {
            energy: 0.45,
            tension: 0.55,
            elements: ElementSet {
                bass: true,
                chords: true,
                melody: true,
                pads: true,
                fx: true,
                ..Default::default()
            },
        },
        SectionType::Breakdown => SectionTemplate {
            energy: 0.35,
            tension: 0.6,
            elements: ElementSet {
                chords: true,
                pads: true,
                fx: true,
                ..Default::default()
            },
        },
        SectionType::Buildup => SectionTemplate {
            energy: 0.65,
            tension: 0.85,
            elements: ElementSet {
                drums: true,
                bass: true,
                fx: true,
                percussion: true,
                ..Default::default()
            },
        },
        SectionType::Drop => SectionTemplate {
            energy: 0.95,
            tension: 0.3,
            elements: ElementSet {
                drums: true,
                bass: true,
                chords: true,
                melody: true,
                fx: true,
                percussion: true,
                ..Default::default()
            },
        },
        SectionType::Outro => SectionTemplate {
            energy: 0.25,
            tension: 0.15,
            elements: ElementSet {
                chords: true,
                pads: true,
                ..Default::default()
            },
        },
    }
}

/// Named song structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureTemplate {
    /// Mellow loop-centric form
    Lofi,

    /// Twin buildup/drop assault
    Breakcore,

    /// Slow arcs, no percussion-led peaks
    Ambient,

    /// Classic pop form
    VerseChorus,

    /// Festival-style rise and release
    BuildupDrop,

    /// Loose wandering form
    Freeform,
}

impl StructureTemplate {
    /// Ordered section types for this structure
    pub fn sections(&self) -> &'static [SectionType] {
        use SectionType::*;
        match self {
            StructureTemplate::Lofi => &[Intro, Verse, Verse, Bridge, Verse, Outro],
            StructureTemplate::Breakcore => {
                &[Intro, Buildup, Drop, Breakdown, Buildup, Drop, Outro]
            }
            StructureTemplate::Ambient => &[Intro, Verse, Bridge, Verse, Outro],
            StructureTemplate::VerseChorus => &[
                Intro, Verse, PreChorus, Chorus, Verse, PreChorus, Chorus, Bridge, Chorus, Outro,
            ],
            StructureTemplate::BuildupDrop => {
                &[Intro, Verse, Buildup, Drop, Verse, Buildup, Drop, Outro]
            }
            StructureTemplate::Freeform => {
                &[Intro, Verse, Breakdown, Verse, Bridge, Chorus, Outro]
            }
        }
    }

    /// Resolve a structure from its name tag; unknown tags fail fast
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name {
            "lofi" => Ok(StructureTemplate::Lofi),
            "breakcore" => Ok(StructureTemplate::Breakcore),
            "ambient" => Ok(StructureTemplate::Ambient),
            "verse_chorus" => Ok(StructureTemplate::VerseChorus),
            "buildup_drop" => Ok(StructureTemplate::BuildupDrop),
            "freeform" => Ok(StructureTemplate::Freeform),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown structure: {other}"
            ))),
        }
    }

    /// The structure a genre defaults to when none is requested
    pub fn default_for(genre: Genre) -> Self {
        match genre {
            Genre::Lofi => StructureTemplate::Lofi,
            Genre::Breakcore => StructureTemplate::Breakcore,
            Genre::Ambient => StructureTemplate::Ambient,
            Genre::Frutiger => StructureTemplate::BuildupDrop,
            Genre::Cottagecore => StructureTemplate::VerseChorus,
            Genre::Vaporwave => StructureTemplate::Freeform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lofi_structure_is_pinned() {
        // Downstream fixtures depend on this exact shape
        let sections = StructureTemplate::Lofi.sections();
        assert_eq!(
            sections,
            &[
                SectionType::Intro,
                SectionType::Verse,
                SectionType::Verse,
                SectionType::Bridge,
                SectionType::Verse,
                SectionType::Outro,
            ]
        );
    }

    #[test]
    fn test_all_templates_bounded() {
        for section_type in [
            SectionType::Intro,
            SectionType::Verse,
            SectionType::PreChorus,
            SectionType::Chorus,
            SectionType::Bridge,
            SectionType::Breakdown,
            SectionType::Buildup,
            SectionType::Drop,
            SectionType::Outro,
        ] {
            let template = section_template(section_type);
            assert!((0.0..=1.0).contains(&template.energy));
            assert!((0.0..=1.0).contains(&template.tension));
        }
    }

    #[test]
    fn test_drop_is_the_energy_peak() {
        let drop = section_template(SectionType::Drop);
        let buildup = section_template(SectionType::Buildup);
        assert!(drop.energy > buildup.energy);
        // Tension releases at the drop
        assert!(drop.tension < buildup.tension);
    }

    #[test]
    fn test_structure_from_name() {
        assert_eq!(
            StructureTemplate::from_name("verse_chorus").unwrap(),
            StructureTemplate::VerseChorus
        );
        assert!(StructureTemplate::from_name("sonata").is_err());
    }

    #[test]
    fn test_every_genre_has_a_default_structure() {
        for genre in Genre::all() {
            assert!(!StructureTemplate::default_for(genre).sections().is_empty());
        }
    }
}
