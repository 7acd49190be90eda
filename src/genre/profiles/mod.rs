// Genre Profile Registry
// One constructor per supported style; the registry is the only dispatch point

pub mod ambient;
pub mod breakcore;
pub mod cottagecore;
pub mod frutiger;
pub mod lofi;
pub mod vaporwave;

pub use ambient::ambient_profile;
pub use breakcore::breakcore_profile;
pub use cottagecore::cottagecore_profile;
pub use frutiger::frutiger_profile;
pub use lofi::lofi_profile;
pub use vaporwave::vaporwave_profile;

use crate::genre::profile::{Genre, GenreProfile};

/// The profile for a genre
pub fn profile(genre: Genre) -> GenreProfile {
    match genre {
        Genre::Lofi => lofi_profile(),
        Genre::Cottagecore => cottagecore_profile(),
        Genre::Frutiger => frutiger_profile(),
        Genre::Breakcore => breakcore_profile(),
        Genre::Ambient => ambient_profile(),
        Genre::Vaporwave => vaporwave_profile(),
    }
}
