use crate::program::*;

use std::fmt;
use std::error::Error;

///
/// Ways a mesh can break the rules for its vertex and index sources
///
#[derive(Clone, Debug, PartialEq)]
pub enum MeshError {
    /// Neither a vertex buffer object nor client vertices were supplied
    MissingVertexSource,

    /// Both a vertex buffer object and client vertices were supplied
    AmbiguousVertexSource,

    /// Both an index buffer object and client indices were supplied
    AmbiguousIndexSource,

    /// No primitive mode was set
    MissingPrimitiveMode,

    /// The stride is smaller than a vertex with the enabled attributes
    StrideTooSmall { stride: usize, required: usize },

    /// The client indices are shorter than the vertex count
    ClientIndicesTooShort { required: usize, available: usize },

    /// The client vertices are too short for the number of vertices being drawn
    ClientVerticesTooShort { required: usize, available: usize },

    /// A client index refers to a vertex beyond the end of the client vertices
    IndexOutOfRange { index: usize, vertex_count: usize }
}

///
/// Ways a draw descriptor can break its contract
///
/// These are programming errors in whatever built the descriptor: the renderer reports them rather
/// than trying to repair the descriptor.
///
#[derive(Clone, Debug, PartialEq)]
pub enum GlopError {
    /// The mesh is inconsistent
    Mesh(MeshError),

    /// No shader program was supplied
    MissingProgram,

    /// The program cache has nothing matching the required description
    NoProgramForDescription(ProgramDescription),

    /// The program was compiled for different mesh attributes or a different colour filter
    ProgramMismatch { required: ProgramDescription, actual: ProgramDescription },

    /// The transfer mode can't be performed by the blend stage
    UnsupportedXferMode(XferMode),

    /// The bounds contain NaN or infinite values
    NonFiniteBounds
}

impl From<MeshError> for GlopError {
    fn from(err: MeshError) -> GlopError {
        GlopError::Mesh(err)
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::MeshError::*;

        match self {
            MissingVertexSource                                 => write!(f, "mesh has neither a vertex buffer object nor client vertices"),
            AmbiguousVertexSource                               => write!(f, "mesh has both a vertex buffer object and client vertices"),
            AmbiguousIndexSource                                => write!(f, "mesh has both an index buffer object and client indices"),
            MissingPrimitiveMode                                => write!(f, "mesh has no primitive mode"),
            StrideTooSmall { stride, required }                 => write!(f, "stride of {} bytes is smaller than the {} byte vertex", stride, required),
            ClientIndicesTooShort { required, available }       => write!(f, "draw needs {} indices but only {} were supplied", required, available),
            ClientVerticesTooShort { required, available }      => write!(f, "draw needs {} bytes of vertices but only {} were supplied", required, available),
            IndexOutOfRange { index, vertex_count }             => write!(f, "index {} is out of range for {} client vertices", index, vertex_count)
        }
    }
}

impl fmt::Display for GlopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::GlopError::*;

        match self {
            Mesh(err)                           => write!(f, "invalid mesh: {}", err),
            MissingProgram                      => write!(f, "no shader program was supplied"),
            NoProgramForDescription(desc)       => write!(f, "no program is registered for {:?}", desc),
            ProgramMismatch { required, actual } => write!(f, "program for {:?} was supplied where {:?} was required", actual, required),
            UnsupportedXferMode(mode)           => write!(f, "{:?} cannot be performed by the blend stage", mode),
            NonFiniteBounds                     => write!(f, "bounds are not finite")
        }
    }
}

impl Error for MeshError { }

impl Error for GlopError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GlopError::Mesh(err)    => Some(err),
            _                       => None
        }
    }
}
