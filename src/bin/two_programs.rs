//! Lesson 1.2.5: two triangles drawn with two different shader programs,
//! one orange and one yellow.

use glbook::{App, Drawable, Error, Mesh, Program, VertexAttribute, WindowConfig};

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";

const ORANGE_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

const YELLOW_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 1.0, 0.0, 1.0);
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
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.2.5 - Two Programs"))?;

    let layout = [VertexAttribute::new(0, 3)];
    let orange = Drawable::new(
        Mesh::build(&LEFT_TRIANGLE, None, &layout),
        Program::from_sources(VERTEX_SHADER, ORANGE_FRAGMENT_SHADER)?,
    );
    let yellow = Drawable::new(
        Mesh::build(&RIGHT_TRIANGLE, None, &layout),
        Program::from_sources(VERTEX_SHADER, YELLOW_FRAGMENT_SHADER)?,
    );

    app.run(|_| {
        orange.draw();
        yellow.draw();
    });

    Ok(())
}
