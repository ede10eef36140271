use flo_glop::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

///
/// A descriptor drawing a triangle from vertex buffer 1
///
fn triangle<'frame>(program: &'frame Program, bounds: Rect) -> Glop<'frame> {
    let mut glop                    = Glop::new();
    glop.bounds                     = bounds;
    glop.mesh.primitive_mode        = Some(PrimitiveMode::Triangles);
    glop.mesh.vertex_buffer_object  = 1;
    glop.mesh.vertex_count          = 3;
    glop.mesh.stride                = 8;
    glop.fill.program               = Some(program);
    glop.blend                      = Blend::new(BlendFactor::One, BlendFactor::OneMinusSrcAlpha);

    glop
}

fn is_state_change(command: &GlCommand) -> bool {
    match command {
        GlCommand::UseProgram(_)            |
        GlCommand::BindVertexBuffer(_)      |
        GlCommand::BindIndexBuffer(_)       |
        GlCommand::EnableVertexAttrib(_)    |
        GlCommand::DisableVertexAttrib(_)   |
        GlCommand::EnableBlend              |
        GlCommand::DisableBlend             |
        GlCommand::BlendFunc(_, _)          |
        GlCommand::EnableScissor            |
        GlCommand::DisableScissor           |
        GlCommand::SetScissor(_)            |
        GlCommand::SetStencil(_)            => true,
        _                                   => false
    }
}

#[test]
fn begin_frame_sets_viewport() {
    let mut state   = RenderState::default();
    let commands    = state.begin_frame(FramebufferState::new(640, 480));

    assert!(commands == vec![GlCommand::Viewport(640, 480)]);
    assert!(state.framebuffer().width == 640);
    assert!(state.damage().is_none());
}

#[test]
fn repeated_draw_only_sends_uniforms_and_draw() {
    init_logging();

    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let first       = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();
    let second      = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(first.iter().any(is_state_change));
    assert!(!second.iter().any(is_state_change));
    assert!(second.last() == Some(&GlCommand::DrawArrays { mode: PrimitiveMode::Triangles, count: 3 }));
    assert!(state.draw_count() == 2);
}

#[test]
fn changed_state_is_sent() {
    init_logging();

    let program         = Program::new(1, ProgramDescription::default());
    let other_program   = Program::new(2, ProgramDescription::default());
    let mut state       = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    let mut next        = triangle(&other_program, Rect::with_size(10.0, 10.0));
    next.mesh.vertex_buffer_object = 5;
    next.blend          = Blend::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);

    let commands        = state.render(next).unwrap();

    assert!(commands.contains(&GlCommand::UseProgram(2)));
    assert!(commands.contains(&GlCommand::BindVertexBuffer(5)));
    assert!(commands.contains(&GlCommand::BlendFunc(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)));

    // Blending was already on
    assert!(!commands.contains(&GlCommand::EnableBlend));
}

#[test]
fn attributes_follow_the_mesh() {
    let program         = Program::new(1, ProgramDescription::default());
    let colour_program  = Program::new(2, ProgramDescription { has_colors: true, ..ProgramDescription::default() });
    let mut state       = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let mut coloured    = triangle(&colour_program, Rect::with_size(10.0, 10.0));
    coloured.mesh.vertex_flags  = VertexAttribFlags::COLOR;
    coloured.mesh.stride        = 24;

    let enable          = state.render(coloured).unwrap();
    let disable         = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(enable.contains(&GlCommand::EnableVertexAttrib(VertexAttrib::Color)));
    assert!(enable.contains(&GlCommand::VertexAttribPointer { attrib: VertexAttrib::Color, stride: 24, data: AttribData::BufferOffset(8) }));
    assert!(disable.contains(&GlCommand::DisableVertexAttrib(VertexAttrib::Color)));
    assert!(!disable.contains(&GlCommand::EnableVertexAttrib(VertexAttrib::Position)));
}

#[test]
fn uncached_state_is_always_sent() {
    let program     = Program::new(1, ProgramDescription::default());
    let options     = RendererOptions { cache_state: false, ..RendererOptions::default() };
    let mut state   = RenderState::new(options);
    state.begin_frame(FramebufferState::new(100, 100));

    state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();
    let second      = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(second.contains(&GlCommand::UseProgram(1)));
    assert!(second.contains(&GlCommand::BindVertexBuffer(1)));
    assert!(second.contains(&GlCommand::EnableBlend));
}

#[test]
fn invalidate_forgets_state() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();
    state.invalidate();
    let commands    = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(commands.contains(&GlCommand::UseProgram(1)));
    assert!(commands.contains(&GlCommand::EnableVertexAttrib(VertexAttrib::Position)));
}

#[test]
fn invalid_descriptor_produces_no_commands() {
    init_logging();

    let program     = Program::new(1, ProgramDescription::default());
    let vertices    = [0u8; 24];
    let mut state   = RenderState::default();

    let mut glop    = triangle(&program, Rect::with_size(10.0, 10.0));
    glop.mesh.vertices = Some(&vertices[..]);

    assert!(state.render(glop) == Err(GlopError::Mesh(MeshError::AmbiguousVertexSource)));
    assert!(state.draw_count() == 0);

    // Nothing was sent, so the next draw still sets up everything
    let commands    = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();
    assert!(commands.contains(&GlCommand::UseProgram(1)));
}

#[test]
fn missing_program_is_an_error() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();

    let mut glop    = triangle(&program, Rect::with_size(10.0, 10.0));
    glop.fill.program = None;

    assert!(state.render(glop) == Err(GlopError::MissingProgram));
}

#[test]
fn program_checks_can_be_turned_off() {
    init_logging();

    let program     = Program::new(2, ProgramDescription { has_texture: true, ..ProgramDescription::default() });

    let mut checked = RenderState::default();
    assert!(match checked.render(triangle(&program, Rect::with_size(10.0, 10.0))) {
        Err(GlopError::ProgramMismatch { .. })  => true,
        _                                       => false
    });

    let options     = RendererOptions { validate: false, ..RendererOptions::default() };
    let mut trusted = RenderState::new(options);
    let commands    = trusted.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(commands.contains(&GlCommand::UseProgram(2)));
    assert!(trusted.draw_count() == 1);
}

#[test]
fn client_indices_past_the_client_vertices_never_draw() {
    init_logging();

    let program     = Program::new(1, ProgramDescription::default());
    let vertices    = [0u8; 8];
    let indices     = [0u16, 1000, 60000];

    for validate in [true, false].iter() {
        let options     = RendererOptions { validate: *validate, ..RendererOptions::default() };
        let mut state   = RenderState::new(options);

        let mut glop                    = triangle(&program, Rect::with_size(10.0, 10.0));
        glop.mesh.vertex_buffer_object  = 0;
        glop.mesh.vertices              = Some(&vertices[..]);
        glop.mesh.indices               = Some(&indices[..]);

        assert!(state.render(glop) == Err(GlopError::Mesh(MeshError::IndexOutOfRange { index: 60000, vertex_count: 1 })));
        assert!(state.draw_count() == 0);
    }
}

#[test]
fn damage_is_union_of_bounds() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    state.render(triangle(&program, Rect::new(10.0, 10.0, 20.0, 20.0))).unwrap();
    state.render(triangle(&program, Rect::new(50.0, 0.0, 60.0, 15.0))).unwrap();

    assert!(state.damage() == Some(Rect::new(10.0, 0.0, 60.0, 20.0)));

    state.begin_frame(FramebufferState::new(100, 100));
    assert!(state.damage().is_none());
    assert!(state.draw_count() == 0);
}

#[test]
fn render_all_concatenates_commands() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let glops       = vec![triangle(&program, Rect::with_size(10.0, 10.0)), triangle(&program, Rect::with_size(20.0, 20.0))];
    let commands    = state.render_all(glops).unwrap();
    let draws       = commands.iter().filter(|command| match command { GlCommand::DrawArrays { .. } => true, _ => false }).count();

    assert!(draws == 2);
    assert!(state.damage() == Some(Rect::with_size(20.0, 20.0)));
}

#[test]
fn projection_is_framebuffer_ortho() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    let framebuffer = FramebufferState::new(256, 128);
    state.begin_frame(framebuffer);

    let commands    = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();

    assert!(commands.contains(&GlCommand::UniformMatrix(Uniform::Projection, framebuffer.ortho.to_opengl_matrix())));
    assert!(framebuffer.ortho.transform_point(0.0, 0.0, 0.0) == (-1.0, 1.0, 0.0));
    assert!(framebuffer.ortho.transform_point(256.0, 128.0, 0.0) == (1.0, -1.0, 0.0));
}

#[test]
fn scissor_box_is_flipped_to_window_coordinates() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let mut glop    = triangle(&program, Rect::with_size(10.0, 10.0));
    glop.scissor    = Scissor::clip_to(Rect::new(10.0, 20.0, 30.5, 40.0));

    let commands    = state.render(glop).unwrap();

    assert!(commands.contains(&GlCommand::EnableScissor));
    assert!(commands.contains(&GlCommand::SetScissor(ScissorBox { x: 10, y: 60, width: 21, height: 20 })));

    let unclipped   = state.render(triangle(&program, Rect::with_size(10.0, 10.0))).unwrap();
    assert!(unclipped.contains(&GlCommand::DisableScissor));
    assert!(!unclipped.iter().any(|command| match command { GlCommand::SetScissor(_) => true, _ => false }));
}

#[test]
fn stencil_changes_are_sent_once() {
    let program     = Program::new(1, ProgramDescription::default());
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let mut draw_into   = triangle(&program, Rect::with_size(10.0, 10.0));
    draw_into.stencil   = StencilMode::DrawInto;
    let mut mask        = triangle(&program, Rect::with_size(10.0, 10.0));
    mask.stencil        = StencilMode::Mask;
    let mut mask_again  = triangle(&program, Rect::with_size(10.0, 10.0));
    mask_again.stencil  = StencilMode::Mask;

    assert!(state.render(draw_into).unwrap().contains(&GlCommand::SetStencil(StencilMode::DrawInto)));
    assert!(state.render(mask).unwrap().contains(&GlCommand::SetStencil(StencilMode::Mask)));
    assert!(!state.render(mask_again).unwrap().contains(&GlCommand::SetStencil(StencilMode::Mask)));
}

#[test]
fn client_indices_unbind_index_buffer() {
    let program     = Program::new(1, ProgramDescription::default());
    let indices     = [0u16, 1, 2];
    let mut state   = RenderState::default();
    state.begin_frame(FramebufferState::new(100, 100));

    let mut glop    = triangle(&program, Rect::with_size(10.0, 10.0));
    glop.mesh.indices = Some(&indices[..]);

    let commands    = state.render(glop).unwrap();

    assert!(commands.contains(&GlCommand::BindIndexBuffer(0)));
    assert!(commands.last() == Some(&GlCommand::DrawElements { mode: PrimitiveMode::Triangles, count: 3, indices: IndexSource::Client(&indices[..]) }));
}

#[test]
fn options_load_from_json() {
    let options = RendererOptions::from_json(r#"{ "fudge_factor": 0.5 }"#).unwrap();

    assert!(options.fudge_factor == 0.5);
    assert!(options.cache_state);
    assert!(options.validate);
    assert!(!options.log_commands);

    let round_trip = RendererOptions::from_json(&options.to_json().unwrap()).unwrap();
    assert!(round_trip == options);
}

#[test]
fn options_control_fudge_factor() {
    let program     = Program::new(1, ProgramDescription::default());
    let options     = RendererOptions { fudge_factor: 0.5, log_commands: true, ..RendererOptions::default() };
    let mut state   = RenderState::new(options);
    state.begin_frame(FramebufferState::new(100, 100));

    let mut glop    = triangle(&program, Rect::with_size(10.0, 10.0));
    glop.transform.fudging_offset = true;

    let commands    = state.render(glop).unwrap();

    assert!(commands.contains(&GlCommand::UniformMatrix(Uniform::ModelView, Matrix::translate(0.5, 0.5, 0.0).to_opengl_matrix())));
}
