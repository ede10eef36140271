use super::error::*;

use crate::buffer::*;

use bitflags::bitflags;

use std::mem;

bitflags! {
    ///
    /// The optional vertex attributes supplied by a mesh
    ///
    /// The position attribute is always enabled and so has no flag here.
    ///
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct VertexAttribFlags: u32 {
        const TEXTURE_COORD = 1 << 0;
        const COLOR         = 1 << 1;
        const ALPHA         = 1 << 2;
    }
}

///
/// The vertex attributes understood by the renderer, in the order they're interleaved in a vertex
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum VertexAttrib {
    /// x, y
    Position,

    /// u, v
    TextureCoord,

    /// r, g, b, a
    Color,

    /// A single coverage value
    Alpha
}

impl VertexAttrib {
    /// The attributes that can be switched on and off by a mesh
    pub const OPTIONAL: [VertexAttrib; 3] = [VertexAttrib::TextureCoord, VertexAttrib::Color, VertexAttrib::Alpha];

    ///
    /// The flag that enables this attribute (None for the position, which is always enabled)
    ///
    pub fn flag(&self) -> Option<VertexAttribFlags> {
        match self {
            VertexAttrib::Position      => None,
            VertexAttrib::TextureCoord  => Some(VertexAttribFlags::TEXTURE_COORD),
            VertexAttrib::Color         => Some(VertexAttribFlags::COLOR),
            VertexAttrib::Alpha         => Some(VertexAttribFlags::ALPHA)
        }
    }

    ///
    /// The number of floats making up this attribute
    ///
    pub fn component_count(&self) -> usize {
        match self {
            VertexAttrib::Position      => 2,
            VertexAttrib::TextureCoord  => 2,
            VertexAttrib::Color         => 4,
            VertexAttrib::Alpha         => 1
        }
    }

    ///
    /// The attribute location that programs bind this attribute to
    ///
    pub fn location(&self) -> GLuint {
        match self {
            VertexAttrib::Position      => 0,
            VertexAttrib::TextureCoord  => 1,
            VertexAttrib::Color         => 2,
            VertexAttrib::Alpha         => 3
        }
    }

    ///
    /// The size in bytes of this attribute within a vertex
    ///
    pub fn size_bytes(&self) -> usize {
        self.component_count() * mem::size_of::<f32>()
    }
}

///
/// How the vertex stream is assembled into primitives
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PrimitiveMode {
    Triangles,
    TriangleStrip
}

impl PrimitiveMode {
    pub fn to_gl_enum(&self) -> GLenum {
        match self {
            PrimitiveMode::Triangles        => GL_TRIANGLES,
            PrimitiveMode::TriangleStrip    => GL_TRIANGLE_STRIP
        }
    }
}

///
/// Where the vertices for a draw are read from
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum VertexSource<'frame> {
    /// A GL buffer object (offsets are relative to the start of the buffer)
    Buffer(GLuint),

    /// Interleaved vertex data in client memory
    Client(&'frame [u8])
}

///
/// Where the indices for a draw are read from
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IndexSource<'frame> {
    /// A GL buffer object containing 16-bit indices
    Buffer(GLuint),

    /// 16-bit indices in client memory
    Client(&'frame [u16])
}

///
/// The vertex and index data for a draw
///
/// For the vertices, exactly one of `vertex_buffer_object` (non-zero) and `vertices` (`Some`) is set.
/// Indices are optional: at most one of `index_buffer_object` and `indices` is set, and neither
/// being set means a non-indexed draw.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Mesh<'frame> {
    /// The optional attributes present in each vertex
    pub vertex_flags: VertexAttribFlags,

    /// How the vertices are assembled (None until the builder sets it)
    pub primitive_mode: Option<PrimitiveMode>,

    /// GL buffer holding the vertices, or 0 to use `vertices`
    pub vertex_buffer_object: GLuint,

    /// GL buffer holding the indices, or 0 to use `indices`
    pub index_buffer_object: GLuint,

    /// Interleaved vertices in client memory
    pub vertices: Option<&'frame [u8]>,

    /// Indices in client memory
    pub indices: Option<&'frame [u16]>,

    /// Number of vertices to draw (or indices, for an indexed draw)
    pub vertex_count: usize,

    /// Bytes between the start of consecutive vertices
    pub stride: usize
}

impl<'frame> Mesh<'frame> {
    ///
    /// Retrieves where the vertices should be read from (None if the mesh is inconsistent)
    ///
    pub fn vertex_source(&self) -> Option<VertexSource<'frame>> {
        match (self.vertex_buffer_object, self.vertices) {
            (0, Some(vertices)) => Some(VertexSource::Client(vertices)),
            (0, None)           => None,
            (vbo, None)         => Some(VertexSource::Buffer(vbo)),
            (_, Some(_))        => None
        }
    }

    ///
    /// Retrieves where the indices should be read from (None for a non-indexed draw)
    ///
    pub fn index_source(&self) -> Option<IndexSource<'frame>> {
        match (self.index_buffer_object, self.indices) {
            (0, Some(indices))  => Some(IndexSource::Client(indices)),
            (0, None)           => None,
            (ibo, _)            => Some(IndexSource::Buffer(ibo))
        }
    }

    ///
    /// True if this mesh is drawn using an index buffer or client indices
    ///
    pub fn is_indexed(&self) -> bool {
        self.index_buffer_object != 0 || self.indices.is_some()
    }

    ///
    /// True if the specified attribute is enabled for this mesh
    ///
    pub fn has_attribute(&self, attrib: VertexAttrib) -> bool {
        match attrib.flag() {
            None        => true,
            Some(flag)  => self.vertex_flags.contains(flag)
        }
    }

    ///
    /// The byte offset of an attribute within each vertex, or None if the attribute is not enabled
    ///
    /// Attributes are interleaved as position, texture coordinate, colour then alpha, skipping any
    /// that are not enabled.
    ///
    pub fn attribute_offset(&self, attrib: VertexAttrib) -> Option<usize> {
        if !self.has_attribute(attrib) {
            return None;
        }

        let mut offset = 0;
        for candidate in [VertexAttrib::Position, VertexAttrib::TextureCoord, VertexAttrib::Color, VertexAttrib::Alpha].iter() {
            if *candidate == attrib {
                return Some(offset);
            }

            if self.has_attribute(*candidate) {
                offset += candidate.size_bytes();
            }
        }

        None
    }

    ///
    /// The minimum number of bytes needed to hold one vertex with the enabled attributes
    ///
    pub fn vertex_size(&self) -> usize {
        [VertexAttrib::Position, VertexAttrib::TextureCoord, VertexAttrib::Color, VertexAttrib::Alpha].iter()
            .filter(|attrib| self.has_attribute(**attrib))
            .map(|attrib| attrib.size_bytes())
            .sum()
    }

    ///
    /// The number of bytes of client memory that `count` vertices occupy, or None if this overflows
    ///
    fn client_bytes_for(count: usize, stride: usize, vertex_size: usize) -> Option<usize> {
        if count == 0 {
            Some(0)
        } else {
            stride.checked_mul(count-1)?.checked_add(vertex_size)
        }
    }

    ///
    /// Checks that this mesh obeys the rules for the vertex and index sources
    ///
    pub fn validate(&self) -> Result<(), MeshError> {
        // Vertices come from exactly one place
        match (self.vertex_buffer_object, self.vertices) {
            (0, None)       => return Err(MeshError::MissingVertexSource),
            (0, Some(_))    => { }
            (_, None)       => { }
            (_, Some(_))    => return Err(MeshError::AmbiguousVertexSource)
        }

        // Indices come from at most one place
        if self.index_buffer_object != 0 && self.indices.is_some() {
            return Err(MeshError::AmbiguousIndexSource);
        }

        if self.primitive_mode.is_none() {
            return Err(MeshError::MissingPrimitiveMode);
        }

        let vertex_size = self.vertex_size();
        if self.stride < vertex_size {
            return Err(MeshError::StrideTooSmall { stride: self.stride, required: vertex_size });
        }

        // Client memory is read directly, so it must be large enough for the draw
        if let Some(indices) = self.indices {
            if indices.len() < self.vertex_count {
                return Err(MeshError::ClientIndicesTooShort { required: self.vertex_count, available: indices.len() });
            }

            // Every index that is drawn must land inside the client vertices
            if let Some(vertices) = self.vertices {
                if let Some(max_index) = indices[..self.vertex_count].iter().copied().max() {
                    let max_index   = max_index as usize;
                    let required    = Self::client_bytes_for(max_index + 1, self.stride, vertex_size).unwrap_or(usize::MAX);

                    if vertices.len() < required {
                        // Stride is at least the vertex size here, so it's never 0
                        let available = if vertices.len() < vertex_size { 0 } else { (vertices.len() - vertex_size) / self.stride + 1 };
                        return Err(MeshError::IndexOutOfRange { index: max_index, vertex_count: available });
                    }
                }
            }
        } else if !self.is_indexed() {
            if let Some(vertices) = self.vertices {
                let required = Self::client_bytes_for(self.vertex_count, self.stride, vertex_size).unwrap_or(usize::MAX);

                if vertices.len() < required {
                    return Err(MeshError::ClientVerticesTooShort { required: required, available: vertices.len() });
                }
            }
        }

        Ok(())
    }
}
