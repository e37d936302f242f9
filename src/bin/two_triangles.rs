//! Lesson 1.2.3: two triangles next to each other from a single vertex
//! buffer.

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
const VERTICES: [f32; 18] = [
    // left triangle
    -0.9, -0.5, 0.0,
     0.0, -0.5, 0.0,
    -0.45, 0.5, 0.0,
    // right triangle
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
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.2.3 - Two Triangles"))?;

    let program = Program::from_sources(VERTEX_SHADER, FRAGMENT_SHADER)?;
    let mesh = Mesh::build(&VERTICES, None, &[VertexAttribute::new(0, 3)]);

    app.run(|_| {
        program.bind();
        mesh.draw();
    });

    Ok(())
}
