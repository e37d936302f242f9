//! Lesson 1.3.3.3: file-loaded shaders, a per-vertex color attribute, and a
//! triangle that slides along the x-axis through a uniform updated every
//! frame.

use glbook::{App, Error, Mesh, Program, VertexAttribute, WindowConfig};

const VERTEX_SHADER_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/shaders/moving_triangle.vert"
);
const FRAGMENT_SHADER_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/shaders/moving_triangle.frag"
);

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // positions      // colors
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,  0.0, 0.0, 1.0,
];

fn main() {
    glbook::logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.3.3 - Shaders Class"))?;

    let program = Program::from_files(VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;
    let mesh = Mesh::build(
        &VERTICES,
        None,
        &[VertexAttribute::new(0, 3), VertexAttribute::new(1, 3)],
    );

    app.run(|seconds| {
        program.set_float("xOffset", seconds.sin() / 2.0);
        program.bind();
        mesh.draw();
    });

    Ok(())
}
