use super::gl_command::*;
use super::framebuffer_state::*;
use super::renderer_options::*;

use crate::buffer::*;
use crate::glop::*;

use log::{trace, debug, warn};

///
/// Tracks the GL state left behind by previous draws and turns draw descriptors into the
/// commands needed to perform them
///
/// State that's already set is not sent again, so consecutive draws sharing a program, buffers
/// or blend mode only produce the commands that differ. A `None` in any of the cached fields
/// means the GL state is unknown and will be sent on the next draw.
///
pub struct RenderState {
    /// How draws are translated
    options: RendererOptions,

    /// The framebuffer being drawn into
    framebuffer: FramebufferState,

    /// The current program
    program: Option<GLuint>,

    /// True once the position attribute has been enabled
    position_enabled: bool,

    /// The buffer bound to `GL_ARRAY_BUFFER`
    vertex_buffer: Option<GLuint>,

    /// The buffer bound to `GL_ELEMENT_ARRAY_BUFFER`
    index_buffer: Option<GLuint>,

    /// The optional attributes currently enabled
    enabled_attributes: Option<VertexAttribFlags>,

    /// The blend factors (DISABLED if blending is switched off)
    blend: Option<Blend>,

    /// Whether or not the scissor test is switched on
    scissor_enabled: Option<bool>,

    /// The last scissor box that was set
    scissor_box: Option<ScissorBox>,

    /// The stencil mode
    stencil: Option<StencilMode>,

    /// The area drawn to since the frame began
    damage: Rect,

    /// Number of draws performed since the frame began
    draw_count: usize
}

impl RenderState {
    ///
    /// Creates a render state where nothing is known about the GL state
    ///
    pub fn new(options: RendererOptions) -> RenderState {
        RenderState {
            options:            options,
            framebuffer:        FramebufferState::default(),
            program:            None,
            position_enabled:   false,
            vertex_buffer:      None,
            index_buffer:       None,
            enabled_attributes: None,
            blend:              None,
            scissor_enabled:    None,
            scissor_box:        None,
            stencil:            None,
            damage:             Rect::default(),
            draw_count:         0
        }
    }

    ///
    /// The options this render state was created with
    ///
    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    ///
    /// The framebuffer currently being drawn into
    ///
    pub fn framebuffer(&self) -> &FramebufferState {
        &self.framebuffer
    }

    ///
    /// Forgets everything known about the GL state (eg, after something else has used the context)
    ///
    pub fn invalidate(&mut self) {
        self.program            = None;
        self.position_enabled   = false;
        self.vertex_buffer      = None;
        self.index_buffer       = None;
        self.enabled_attributes = None;
        self.blend              = None;
        self.scissor_enabled    = None;
        self.scissor_box        = None;
        self.stencil            = None;
    }

    ///
    /// Starts drawing a new frame into the specified framebuffer
    ///
    pub fn begin_frame(&mut self, framebuffer: FramebufferState) -> Vec<GlCommand<'static>> {
        debug!("Beginning frame of {}x{}", framebuffer.width, framebuffer.height);

        if framebuffer != self.framebuffer {
            // Scissor boxes are relative to the framebuffer height
            self.scissor_box = None;
        }

        self.framebuffer    = framebuffer;
        self.damage         = Rect::default();
        self.draw_count     = 0;

        vec![GlCommand::Viewport(framebuffer.width, framebuffer.height)]
    }

    ///
    /// The area that has been drawn to since the frame began, or None if nothing has been drawn
    ///
    pub fn damage(&self) -> Option<Rect> {
        if self.damage.is_empty() {
            None
        } else {
            Some(self.damage)
        }
    }

    ///
    /// The number of draws performed since the frame began
    ///
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    ///
    /// Consumes a draw descriptor, returning the commands needed to perform it
    ///
    /// Invalid descriptors are reported and generate no commands. The mesh is always checked, as
    /// client vertices and indices are read directly by GL: the `validate` option only turns off
    /// the checks on the bounds and on the program.
    ///
    pub fn render<'frame>(&mut self, glop: Glop<'frame>) -> Result<Vec<GlCommand<'frame>>, GlopError> {
        let validation = if self.options.validate {
            glop.validate()
        } else {
            glop.mesh.validate().map_err(GlopError::from)
        };

        if let Err(error) = validation {
            warn!("Refusing to render draw: {}", error);
            return Err(error);
        }

        if !self.options.cache_state {
            self.invalidate();
        }

        let mut commands = vec![];

        self.update_program(&glop, &mut commands)?;
        self.update_mesh(&glop, &mut commands)?;
        self.update_uniforms(&glop, &mut commands);
        self.update_blend(glop.blend, &mut commands);
        self.update_scissor(&glop.scissor, &mut commands);
        self.update_stencil(glop.stencil, &mut commands);
        self.draw(&glop, &mut commands)?;

        self.damage     = self.damage.union(&glop.bounds);
        self.draw_count += 1;

        if self.options.log_commands {
            for command in commands.iter() {
                trace!("  {:?}", command);
            }
        }

        Ok(commands)
    }

    ///
    /// Renders a series of descriptors, stopping at the first invalid one
    ///
    pub fn render_all<'frame, Glops: IntoIterator<Item=Glop<'frame>>>(&mut self, glops: Glops) -> Result<Vec<GlCommand<'frame>>, GlopError> {
        let mut commands = vec![];

        for glop in glops {
            commands.extend(self.render(glop)?);
        }

        Ok(commands)
    }

    ///
    /// Switches to the program for a draw
    ///
    fn update_program<'frame>(&mut self, glop: &Glop<'frame>, commands: &mut Vec<GlCommand<'frame>>) -> Result<(), GlopError> {
        let program = glop.fill.program.ok_or(GlopError::MissingProgram)?;
        let handle  = program.handle();

        if self.program != Some(handle) {
            debug!("Switching to program {} ({:?})", handle, program.description());

            commands.push(GlCommand::UseProgram(handle));
            self.program = Some(handle);
        }

        Ok(())
    }

    ///
    /// Binds the buffers and sets up the attributes for a draw
    ///
    fn update_mesh<'frame>(&mut self, glop: &Glop<'frame>, commands: &mut Vec<GlCommand<'frame>>) -> Result<(), GlopError> {
        let mesh            = &glop.mesh;
        let vertex_source   = mesh.vertex_source().ok_or(MeshError::MissingVertexSource)?;

        // Buffer objects (0 unbinds, so the attribute pointers refer to client memory)
        let vertex_buffer = match vertex_source {
            VertexSource::Buffer(vbo)   => vbo,
            VertexSource::Client(_)     => 0
        };

        if self.vertex_buffer != Some(vertex_buffer) {
            commands.push(GlCommand::BindVertexBuffer(vertex_buffer));
            self.vertex_buffer = Some(vertex_buffer);
        }

        if let Some(index_source) = mesh.index_source() {
            let index_buffer = match index_source {
                IndexSource::Buffer(ibo)    => ibo,
                IndexSource::Client(_)      => 0
            };

            if self.index_buffer != Some(index_buffer) {
                commands.push(GlCommand::BindIndexBuffer(index_buffer));
                self.index_buffer = Some(index_buffer);
            }
        }

        // Enable exactly the optional attributes in the mesh
        if !self.position_enabled {
            commands.push(GlCommand::EnableVertexAttrib(VertexAttrib::Position));
            self.position_enabled = true;
        }

        for attrib in VertexAttrib::OPTIONAL.iter() {
            let flag    = attrib.flag().unwrap_or_else(VertexAttribFlags::empty);
            let wanted  = mesh.vertex_flags.contains(flag);
            let current = self.enabled_attributes.map(|enabled| enabled.contains(flag));

            if current != Some(wanted) {
                if wanted {
                    commands.push(GlCommand::EnableVertexAttrib(*attrib));
                } else {
                    commands.push(GlCommand::DisableVertexAttrib(*attrib));
                }
            }
        }

        self.enabled_attributes = Some(mesh.vertex_flags);

        // Point each enabled attribute at its data
        for attrib in [VertexAttrib::Position, VertexAttrib::TextureCoord, VertexAttrib::Color, VertexAttrib::Alpha].iter() {
            if let Some(offset) = mesh.attribute_offset(*attrib) {
                let data = match vertex_source {
                    VertexSource::Buffer(_)         => AttribData::BufferOffset(offset),
                    VertexSource::Client(vertices)  => AttribData::Client(vertices.get(offset..).unwrap_or(&[]))
                };

                commands.push(GlCommand::VertexAttribPointer { attrib: *attrib, stride: mesh.stride, data: data });
            }
        }

        Ok(())
    }

    ///
    /// Uploads the transforms, the fill colour and the colour filter
    ///
    fn update_uniforms<'frame>(&mut self, glop: &Glop<'frame>, commands: &mut Vec<GlCommand<'frame>>) {
        let model_view = glop.transform.effective_model_view(self.options.fudge_factor);

        commands.push(GlCommand::UniformMatrix(Uniform::Projection, self.framebuffer.ortho.to_opengl_matrix()));
        commands.push(GlCommand::UniformMatrix(Uniform::ModelView, model_view.to_opengl_matrix()));
        commands.push(GlCommand::UniformMatrix(Uniform::Transform, glop.transform.canvas.to_opengl_matrix()));
        commands.push(GlCommand::UniformVec4(Uniform::Color, glop.fill.color.to_rgba()));

        match &glop.fill.filter {
            ColorFilter::None => { }

            ColorFilter::Matrix(color_matrix) => {
                commands.push(GlCommand::UniformMatrix(Uniform::ColorMatrix, color_matrix.matrix.to_opengl_matrix()));
                commands.push(GlCommand::UniformVec4(Uniform::ColorMatrixVector, color_matrix.vector));
            }

            ColorFilter::Blend { color, .. } => {
                commands.push(GlCommand::UniformVec4(Uniform::ColorFilterColor, color.to_rgba()));
            }
        }
    }

    ///
    /// Configures the blend stage ({ Zero, Zero } switches it off)
    ///
    fn update_blend(&mut self, blend: Blend, commands: &mut Vec<GlCommand<'_>>) {
        let previous = self.blend;

        if previous == Some(blend) {
            return;
        }

        if blend.is_disabled() {
            commands.push(GlCommand::DisableBlend);
        } else {
            let was_enabled = previous.map(|previous| !previous.is_disabled()).unwrap_or(false);

            if !was_enabled {
                commands.push(GlCommand::EnableBlend);
            }

            commands.push(GlCommand::BlendFunc(blend.src, blend.dst));
        }

        self.blend = Some(blend);
    }

    ///
    /// Configures the scissor test
    ///
    fn update_scissor(&mut self, scissor: &Scissor, commands: &mut Vec<GlCommand<'_>>) {
        let enabled = scissor.is_enabled();

        if self.scissor_enabled != Some(enabled) {
            commands.push(if enabled { GlCommand::EnableScissor } else { GlCommand::DisableScissor });
            self.scissor_enabled = Some(enabled);
        }

        if enabled {
            let scissor_box = self.framebuffer.scissor_box(scissor);

            if self.scissor_box != Some(scissor_box) {
                commands.push(GlCommand::SetScissor(scissor_box));
                self.scissor_box = Some(scissor_box);
            }
        }
    }

    ///
    /// Configures the stencil test
    ///
    fn update_stencil(&mut self, stencil: StencilMode, commands: &mut Vec<GlCommand<'_>>) {
        if self.stencil != Some(stencil) {
            commands.push(GlCommand::SetStencil(stencil));
            self.stencil = Some(stencil);
        }
    }

    ///
    /// Issues the draw call
    ///
    fn draw<'frame>(&mut self, glop: &Glop<'frame>, commands: &mut Vec<GlCommand<'frame>>) -> Result<(), GlopError> {
        let mesh    = &glop.mesh;
        let mode    = mesh.primitive_mode.ok_or(MeshError::MissingPrimitiveMode)?;
        let count   = mesh.vertex_count;

        match mesh.index_source() {
            None            => commands.push(GlCommand::DrawArrays { mode: mode, count: count }),
            Some(indices)   => commands.push(GlCommand::DrawElements { mode: mode, count: count, indices: indices })
        }

        trace!("Draw {} of {:?} ({} vertices, bounds {:?})", self.draw_count, mode, count, glop.bounds);

        Ok(())
    }
}

impl Default for RenderState {
    fn default() -> RenderState {
        RenderState::new(RendererOptions::default())
    }
}
