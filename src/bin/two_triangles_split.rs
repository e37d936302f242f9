//! Lesson 1.2.4: the same two triangles, but each with its own vertex
//! buffer and attribute-layout object.

use glbook::{App, Error, Mesh, Program, VertexAttribute, WindowConfig};

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

#[rustfmt::skip]
const LEFT_TRIANGLE: [f32; 9] = [
    -0.9, -0.5, 0.0,
     0.0, -0.5, 0.0,
    -0.45, 0.5, 0.0,
];

#[rustfmt::skip]
const RIGHT_TRIANGLE: [f32; 9] = [
    0.0, -0.5, 0.0,
    0.9, -0.5, 0.0,
    0.45, 0.5, 0.0,
];

fn main() {
    glbook::logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut app = App::build(&WindowConfig::titled(
        "LearnOpenGL - 1.2.4 - Two Triangles, Split Buffers",
    ))?;

    let program = Program::from_sources(VERTEX_SHADER, FRAGMENT_SHADER)?;
    let layout = [VertexAttribute::new(0, 3)];
    let left = Mesh::build(&LEFT_TRIANGLE, None, &layout);
    let right = Mesh::build(&RIGHT_TRIANGLE, None, &layout);

    app.run(|_| {
        program.bind();
        left.draw();
        right.draw();
    });

    Ok(())
}
