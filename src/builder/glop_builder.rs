use crate::buffer::*;
use crate::glop::*;
use crate::program::*;

use log::{trace, warn};

use std::mem;

///
/// Assembles a `Glop` one grouping at a time
///
/// Setters don't undo each other: setting both a vertex buffer and client vertices (for example)
/// produces an error when the descriptor is built, rather than one silently replacing the other.
///
pub struct GlopBuilder<'frame> {
    /// Where programs are looked up if one isn't set explicitly
    programs: &'frame ProgramCache,

    /// The descriptor being built
    glop: Glop<'frame>,

    /// The first error found while setting properties
    error: Option<GlopError>
}

impl<'frame> GlopBuilder<'frame> {
    ///
    /// Creates a builder that looks up programs in the specified cache
    ///
    pub fn new(programs: &'frame ProgramCache) -> GlopBuilder<'frame> {
        GlopBuilder {
            programs:   programs,
            glop:       Glop::new(),
            error:      None
        }
    }

    ///
    /// Sets the extent of the draw in local coordinates
    ///
    pub fn set_bounds(mut self, bounds: Rect) -> Self {
        self.glop.bounds = bounds;
        self
    }

    ///
    /// Reads vertices from a GL buffer object
    ///
    /// The vertex count is ignored if an index source has already been set: indexed draws are
    /// counted in indices.
    ///
    pub fn set_mesh_vertex_buffer(mut self, vertex_buffer_object: GLuint, vertex_count: usize, stride: usize) -> Self {
        self.glop.mesh.vertex_buffer_object = vertex_buffer_object;
        self.glop.mesh.stride               = stride;

        if !self.glop.mesh.is_indexed() {
            self.glop.mesh.vertex_count = vertex_count;
        }

        self
    }

    ///
    /// Streams vertices from client memory
    ///
    /// The stride is the size of the vertex type. Indexed draws are counted in indices, so the
    /// vertex count only becomes the number of vertices when no index source has been set (in
    /// either order, an index source always decides the count).
    ///
    pub fn set_mesh_client_vertices<Vertex: bytemuck::Pod>(mut self, vertices: &'frame [Vertex]) -> Self {
        self.glop.mesh.vertices     = Some(bytemuck::cast_slice(vertices));
        self.glop.mesh.stride       = mem::size_of::<Vertex>();

        if !self.glop.mesh.is_indexed() {
            self.glop.mesh.vertex_count = vertices.len();
        }

        self
    }

    ///
    /// Reads 16-bit indices from a GL buffer object
    ///
    pub fn set_mesh_index_buffer(mut self, index_buffer_object: GLuint, index_count: usize) -> Self {
        self.glop.mesh.index_buffer_object  = index_buffer_object;
        self.glop.mesh.vertex_count         = index_count;
        self
    }

    ///
    /// Streams 16-bit indices from client memory
    ///
    pub fn set_mesh_client_indices(mut self, indices: &'frame [u16]) -> Self {
        self.glop.mesh.indices      = Some(indices);
        self.glop.mesh.vertex_count = indices.len();
        self
    }

    ///
    /// Sets how the vertices are assembled into primitives
    ///
    pub fn set_mesh_primitive(mut self, primitive_mode: PrimitiveMode) -> Self {
        self.glop.mesh.primitive_mode = Some(primitive_mode);
        self
    }

    ///
    /// Sets the optional attributes present in each vertex
    ///
    pub fn set_mesh_attributes(mut self, vertex_flags: VertexAttribFlags) -> Self {
        self.glop.mesh.vertex_flags = vertex_flags;
        self
    }

    ///
    /// Overrides the number of vertices (or indices) to draw
    ///
    pub fn set_mesh_vertex_count(mut self, vertex_count: usize) -> Self {
        self.glop.mesh.vertex_count = vertex_count;
        self
    }

    ///
    /// Overrides the stride between vertices
    ///
    pub fn set_mesh_stride(mut self, stride: usize) -> Self {
        self.glop.mesh.stride = stride;
        self
    }

    ///
    /// Sets the constant fill colour
    ///
    pub fn set_fill_color(mut self, color: FloatColor) -> Self {
        self.glop.fill.color = color;
        self
    }

    ///
    /// Sets the colour filter (the filter mode follows from the filter)
    ///
    pub fn set_color_filter(mut self, filter: ColorFilter) -> Self {
        self.glop.fill.filter = filter;
        self
    }

    ///
    /// Uses a specific program rather than looking one up from the cache
    ///
    pub fn set_program(mut self, program: &'frame Program) -> Self {
        self.glop.fill.program = Some(program);
        self
    }

    ///
    /// Sets the model view and canvas transforms
    ///
    pub fn set_transform(mut self, model_view: Matrix, canvas: Matrix) -> Self {
        self.glop.transform.model_view  = model_view;
        self.glop.transform.canvas      = canvas;
        self
    }

    ///
    /// Requests the sub-pixel offset used to align non-antialiased geometry with pixel centres
    ///
    pub fn set_fudging_offset(mut self, fudging_offset: bool) -> Self {
        self.glop.transform.fudging_offset = fudging_offset;
        self
    }

    ///
    /// Sets the blend factors directly
    ///
    pub fn set_blend(mut self, blend: Blend) -> Self {
        self.glop.blend = blend;
        self
    }

    ///
    /// Sets the blend factors that perform a transfer mode
    ///
    pub fn set_blend_xfer_mode(mut self, mode: XferMode, premultiplied: bool) -> Self {
        match Blend::from_xfer_mode(mode, premultiplied) {
            Some(blend) => { self.glop.blend = blend; }
            None        => { self.error.get_or_insert(GlopError::UnsupportedXferMode(mode)); }
        }

        self
    }

    ///
    /// Sets the scissor test
    ///
    pub fn set_scissor(mut self, scissor: Scissor) -> Self {
        self.glop.scissor = scissor;
        self
    }

    ///
    /// Sets the stencil test
    ///
    pub fn set_stencil(mut self, stencil: StencilMode) -> Self {
        self.glop.stencil = stencil;
        self
    }

    ///
    /// Finishes the descriptor, checking that it's consistent
    ///
    pub fn build(self) -> Result<Glop<'frame>, GlopError> {
        let GlopBuilder { programs, mut glop, error } = self;

        if let Some(error) = error {
            warn!("Rejecting draw: {}", error);
            return Err(error);
        }

        // Pick the program for this mesh and fill if none was supplied
        if glop.fill.program.is_none() {
            let required = glop.required_program();

            match programs.program(&required) {
                Some(program)   => { glop.fill.program = Some(program); }
                None            => {
                    warn!("Rejecting draw: no program for {:?}", required);
                    return Err(GlopError::NoProgramForDescription(required));
                }
            }
        }

        if let Err(error) = glop.validate() {
            warn!("Rejecting draw: {}", error);
            return Err(error);
        }

        trace!("Built draw of {} vertices with bounds {:?}", glop.mesh.vertex_count, glop.bounds);
        Ok(glop)
    }
}
