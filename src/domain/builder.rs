//! Map authoring: the built-in mansion layout

use tracing::{debug, instrument};

use crate::domain::entities::Language;
use crate::domain::error::DomainResult;
use crate::domain::tree::RoomTree;

/// Room names of the built-in mansion for one language.
struct MansionNames {
    hall: &'static str,
    living_room: &'static str,
    library: &'static str,
    kitchen: &'static str,
    dining_room: &'static str,
    office: &'static str,
    observatory: &'static str,
    pantry: &'static str,
    dome: &'static str,
}

const PT_NAMES: MansionNames = MansionNames {
    hall: "Hall de Entrada",
    living_room: "Sala de Estar",
    library: "Biblioteca",
    kitchen: "Cozinha",
    dining_room: "Sala de Jantar",
    office: "Escritório",
    observatory: "Observatório",
    pantry: "Despensa",
    dome: "Cúpula",
};

const EN_NAMES: MansionNames = MansionNames {
    hall: "Entrance Hall",
    living_room: "Living Room",
    library: "Library",
    kitchen: "Kitchen",
    dining_room: "Dining Room",
    office: "Office",
    observatory: "Observatory",
    pantry: "Pantry",
    dome: "Dome",
};

/// Builds the fixed mansion used by the game.
///
/// ```text
/// Hall
/// ├── Living Room
/// │   ├── Kitchen
/// │   │   └── [L] Pantry
/// │   └── Dining Room
/// └── Library
///     ├── Office
///     └── Observatory
///         └── [R] Dome
/// ```
pub struct MansionBuilder {
    language: Language,
}

impl Default for MansionBuilder {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl MansionBuilder {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[instrument(level = "debug", skip(self), fields(language = %self.language))]
    pub fn build(&self) -> DomainResult<RoomTree> {
        let names = match self.language {
            Language::Pt => &PT_NAMES,
            Language::En => &EN_NAMES,
        };
        let mut tree = RoomTree::new();

        let hall = tree.create_room(names.hall)?;

        let living_room = tree.create_room(names.living_room)?;
        let library = tree.create_room(names.library)?;
        tree.attach_left(hall, living_room)?;
        tree.attach_right(hall, library)?;

        let kitchen = tree.create_room(names.kitchen)?;
        let dining_room = tree.create_room(names.dining_room)?;
        tree.attach_left(living_room, kitchen)?;
        tree.attach_right(living_room, dining_room)?;

        let office = tree.create_room(names.office)?;
        let observatory = tree.create_room(names.observatory)?;
        tree.attach_left(library, office)?;
        tree.attach_right(library, observatory)?;

        let pantry = tree.create_room(names.pantry)?;
        let dome = tree.create_room(names.dome)?;
        tree.attach_left(kitchen, pantry)?;
        tree.attach_right(observatory, dome)?;

        debug!(rooms = tree.len(), depth = tree.depth(), "mansion built");
        Ok(tree)
    }
}
