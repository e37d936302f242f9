//! Lesson 1.4.1: a texture loaded from a file and applied to a rectangle,
//! tinted by the per-vertex colors.

use glbook::{App, Error, Mesh, Program, Texture, TextureOptions, VertexAttribute, WindowConfig};

const VERTEX_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture.vert");
const FRAGMENT_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture.frag");
const CONTAINER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/container.png");

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // positions       // colors        // texture coords
     0.5,  0.5, 0.0,   1.0, 0.0, 0.0,   1.0, 1.0, // top right
     0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 1.0, // top left
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

fn main() {
    glbook::logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.4.1 - Textures"))?;

    let program = Program::from_files(VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;
    let mesh = Mesh::build(
        &VERTICES,
        Some(&INDICES),
        &[
            VertexAttribute::new(0, 3),
            VertexAttribute::new(1, 3),
            VertexAttribute::new(2, 2),
        ],
    );
    let container = Texture::open(CONTAINER_PATH, &TextureOptions::default())?;

    program.set_int("textureContainer", 0);

    app.run(|_| {
        container.bind(0);
        program.bind();
        mesh.draw();
    });

    Ok(())
}
