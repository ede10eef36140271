use super::program::*;
use super::program_description::*;

use std::collections::{HashMap};

///
/// Owns the shader programs available to the renderer, indexed by their description
///
/// Programs are registered before a frame is built: the builders then borrow the cache for the
/// rest of the frame, so every `&Program` in a descriptor stays valid until the frame is rendered.
///
#[derive(Default)]
pub struct ProgramCache {
    programs: HashMap<ProgramDescription, Program>
}

impl ProgramCache {
    ///
    /// Creates an empty program cache
    ///
    pub fn new() -> ProgramCache {
        ProgramCache {
            programs: HashMap::new()
        }
    }

    ///
    /// Adds a program to this cache, returning the program it replaces (if any)
    ///
    pub fn insert(&mut self, program: Program) -> Option<Program> {
        let description = *program.description();

        log::debug!("Registering program {} for {:?}", program.handle(), description);
        self.programs.insert(description, program)
    }

    ///
    /// Retrieves the program matching a description
    ///
    pub fn program(&self, description: &ProgramDescription) -> Option<&Program> {
        self.programs.get(description)
    }

    ///
    /// The number of programs in this cache
    ///
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    ///
    /// True if no programs have been registered
    ///
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    ///
    /// Removes every program from the cache
    ///
    pub fn clear(&mut self) {
        self.programs.clear();
    }
}
