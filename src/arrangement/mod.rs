// Arrangement Engine - Whole-song structure, macro curves, live queries
// Assembles genre-engine sections into a song and answers playback questions

pub mod generator;
pub mod live;
pub mod templates;
pub mod variation;

// Re-export main types
pub use generator::{
    generate_arrangement, Arrangement, ArrangementOptions, ArrangementSection,
    ArrangementTransition, DurationOption, EnergyOption, StructureChoice, TransitionKind,
};
pub use live::{active_elements, live_state, ElementIntensity, LiveState, PlaybackHint};
pub use templates::{section_template, ElementSet, SectionTemplate, SectionType, StructureTemplate};
pub use variation::{add_fills, generate_variation, Fill, FillKind, VariationKind};
