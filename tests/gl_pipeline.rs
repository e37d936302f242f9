//! End-to-end properties of the shader build pipeline and geometry setup.
//!
//! Everything that needs a live OpenGL context runs as one sequential
//! `#[ignore]`d test, because a context is bound to the thread that made it
//! current and the test harness runs tests concurrently. Run those with
//! `cargo test -- --ignored` on a machine with a display (or EGL/OSMesa
//! headless support). The failure-path tests at the bottom touch no GPU
//! state and always run.

use std::mem::size_of;
use std::os::raw::c_void;

use glbook::{Error, Mesh, Program, ShaderKind, ShaderStage, VertexAttribute};

const PASSTHROUGH_VERT: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";

const ORANGE_FRAG: &str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

// The missing semicolon after the assignment is the point.
const BROKEN_FRAG: &str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0)
}
";

#[rustfmt::skip]
const TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

#[test]
#[ignore = "needs an OpenGL 3.3 driver and a display or headless EGL/OSMesa"]
fn shader_pipeline_properties() {
    let event_loop = glutin::event_loop::EventLoop::new();
    let context = glutin::ContextBuilder::new()
        .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
        .with_gl_profile(glutin::GlProfile::Core)
        .build_headless(&event_loop, glutin::dpi::PhysicalSize::new(1, 1))
        .expect("failed to create a headless context");
    let context = unsafe { context.make_current().expect("failed to make the context current") };
    gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

    // A valid vertex+fragment pair compiles and links.
    let program = Program::from_sources(PASSTHROUGH_VERT, ORANGE_FRAG)
        .expect("a valid source pair must link");

    // Setting uniforms the program does not have must be a silent no-op.
    program.set_float("definitelyNotAUniform", 1.0);
    program.set_int("name\0with a NUL in it", 3);
    unsafe { assert_eq!(gl::GetError(), gl::NO_ERROR) };

    // A fragment stage missing a semicolon fails with a non-empty log and
    // yields no program.
    match Program::from_sources(PASSTHROUGH_VERT, BROKEN_FRAG) {
        Err(Error::ShaderCompile { stage, log }) => {
            assert_eq!(stage, ShaderKind::Fragment);
            assert!(!log.trim().is_empty(), "the driver log must not be empty");
        }
        Err(other) => panic!("expected a fragment compile failure, got: {}", other),
        Ok(_) => panic!("a broken fragment shader must not produce a program"),
    }

    // Stages that compile individually also link when combined.
    let vert = ShaderStage::compile(ShaderKind::Vertex, PASSTHROUGH_VERT).unwrap();
    let frag = ShaderStage::compile(ShaderKind::Fragment, ORANGE_FRAG).unwrap();
    assert_eq!(vert.kind(), ShaderKind::Vertex);
    let linked = Program::link(vert, frag).expect("individually valid stages must link");

    // Uploading identical vertex data twice produces identical GPU bytes.
    let layout = [VertexAttribute::new(0, 3)];
    let first = Mesh::build(&TRIANGLE, None, &layout);
    let second = Mesh::build(&TRIANGLE, None, &layout);
    assert_eq!(read_back(&first), read_back(&second));
    assert_eq!(read_back(&first), TRIANGLE.to_vec());

    // End to end: one draw call of the triangle renders without errors and
    // actually covers the middle of the frame.
    let pixel = draw_center_pixel(&linked, &first);
    assert_eq!(pixel[0], 255);
    assert!((pixel[1] as i32 - 128).abs() <= 2, "green was {}", pixel[1]);
    assert!((pixel[2] as i32 - 51).abs() <= 2, "blue was {}", pixel[2]);
}

fn read_back(mesh: &Mesh) -> Vec<f32> {
    let mut data = vec![0.0f32; TRIANGLE.len()];
    unsafe {
        gl::BindBuffer(gl::ARRAY_BUFFER, mesh.vbo());
        gl::GetBufferSubData(
            gl::ARRAY_BUFFER,
            0,
            (data.len() * size_of::<f32>()) as isize,
            data.as_mut_ptr() as *mut c_void,
        );
    }
    data
}

/// Draws the mesh into a small offscreen framebuffer and reads back a pixel
/// near the middle of it.
fn draw_center_pixel(program: &Program, mesh: &Mesh) -> [u8; 4] {
    const SIZE: i32 = 64;

    let mut fbo = 0;
    let mut rbo = 0;
    unsafe {
        gl::GenFramebuffers(1, &mut fbo);
        gl::BindFramebuffer(gl::FRAMEBUFFER, fbo);
        gl::GenRenderbuffers(1, &mut rbo);
        gl::BindRenderbuffer(gl::RENDERBUFFER, rbo);
        gl::RenderbufferStorage(gl::RENDERBUFFER, gl::RGBA8, SIZE, SIZE);
        gl::FramebufferRenderbuffer(
            gl::FRAMEBUFFER,
            gl::COLOR_ATTACHMENT0,
            gl::RENDERBUFFER,
            rbo,
        );
        assert_eq!(
            gl::CheckFramebufferStatus(gl::FRAMEBUFFER),
            gl::FRAMEBUFFER_COMPLETE
        );

        gl::Viewport(0, 0, SIZE, SIZE);
        gl::ClearColor(0.0, 0.0, 0.0, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    program.bind();
    mesh.draw();

    let mut pixel = [0u8; 4];
    unsafe {
        // Just below the center, safely inside the triangle.
        gl::ReadPixels(
            SIZE / 2,
            SIZE / 2 - 8,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixel.as_mut_ptr() as *mut c_void,
        );
        assert_eq!(gl::GetError(), gl::NO_ERROR);

        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        gl::DeleteRenderbuffers(1, &rbo);
        gl::DeleteFramebuffers(1, &fbo);
    }
    pixel
}

#[test]
fn unreadable_vertex_source_fails_before_any_gpu_work() {
    let err = Program::from_files("shaders/does_not_exist.vert", "shaders/does_not_exist.frag")
        .err()
        .expect("missing shader files must fail");

    match err {
        Error::ShaderSource { path, .. } => assert!(path.ends_with("does_not_exist.vert")),
        other => panic!("expected a source-read failure, got: {}", other),
    }
}

#[test]
fn unreadable_stage_source_reports_its_own_path() {
    let err = ShaderStage::from_file(ShaderKind::Fragment, "shaders/does_not_exist.frag")
        .err()
        .expect("a missing fragment file must fail");

    match err {
        Error::ShaderSource { path, .. } => assert!(path.ends_with("does_not_exist.frag")),
        other => panic!("expected a source-read failure, got: {}", other),
    }
}
