// Genre Engine - Declarative style profiles and the generators they drive
// Turns a profile into progressions, melodies, bass lines, effects and
// whole composed sections

pub mod bass;
pub mod effects;
pub mod melody;
pub mod profile;
pub mod profiles;
pub mod progression;
pub mod section;

// Re-export main types
pub use bass::generate_bass_line;
pub use effects::{effect_chain, EffectChain, FilterKind};
pub use melody::generate_melody;
pub use profile::{
    BuildupStyle, Genre, GenreProfile, ProgressionStyle, SampleProcessing, TransitionPreference,
};
pub use profiles::profile;
pub use progression::{generate_progression, ChordEvent};
pub use section::{generate_section, GeneratedSection, SectionOptions};
