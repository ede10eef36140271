use super::program_description::*;

use crate::buffer::*;

///
/// A compiled and linked shader program
///
/// Programs are owned by a `ProgramCache`: draw descriptors only ever borrow them.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Program {
    /// The GL name of the linked program
    handle: GLuint,

    /// The features supported by this program
    description: ProgramDescription
}

impl Program {
    ///
    /// Wraps a linked GL program
    ///
    pub fn new(handle: GLuint, description: ProgramDescription) -> Program {
        Program {
            handle:         handle,
            description:    description
        }
    }

    ///
    /// The GL name of this program
    ///
    pub fn handle(&self) -> GLuint {
        self.handle
    }

    ///
    /// The description this program was compiled from
    ///
    pub fn description(&self) -> &ProgramDescription {
        &self.description
    }
}
