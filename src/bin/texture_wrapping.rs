//! Lesson 1.4.4: texture coordinates outside [0, 1], a different wrap mode
//! per texture, and two textures mixed in one fragment shader.

use glbook::{
    App, Error, Mesh, Program, Texture, TextureOptions, VertexAttribute, WindowConfig, Wrap,
};

const VERTEX_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture_mix.vert");
const FRAGMENT_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture_mix.frag");
const CONTAINER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/container.png");
const FACE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/awesomeface.png");

// Texture coordinates run to 2.0 so the wrap modes are visible.
#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // positions       // colors        // texture coords
     0.5,  0.5, 0.0,   1.0, 0.0, 0.0,   2.0, 2.0, // top right
     0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   2.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 2.0, // top left
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
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.4.4 - Texture Wrapping"))?;

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
    let face = Texture::open(
        FACE_PATH,
        &TextureOptions {
            wrap_s: Wrap::ClampToEdge,
            wrap_t: Wrap::ClampToEdge,
            ..TextureOptions::default()
        },
    )?;

    // Tell the sampler uniforms which texture unit each texture lives on.
    program.set_int("textureContainer", 0);
    program.set_int("textureFace", 1);

    app.run(|_| {
        container.bind(0);
        face.bind(1);
        program.bind();
        mesh.draw();
    });

    Ok(())
}
