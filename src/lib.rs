//! Rust ports of the LearnOpenGL "Getting Started" lessons.
//!
//! Each lesson lives in its own binary under `src/bin/`, the same way the
//! original C++ tutorials are each a standalone `main`. What this library
//! holds is the boilerplate every lesson would otherwise repeat: window and
//! context setup, the shader compile/link pipeline, vertex buffer setup, and
//! texture loading. The lessons themselves stay small enough to read top to
//! bottom.
//!
//! All GPU objects are wrapped in owning types whose `Drop` impls release
//! the underlying handle, so a lesson never has to match up delete calls
//! across its exit paths. The wrappers are deliberately thin; a knowledge of
//! OpenGL is still necessary to follow what they do, and the
//! [Learn OpenGL](https://learnopengl.com/) text remains the reference for
//! the concepts behind each call.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::App;
pub use config::WindowConfig;
pub use error::Error;
pub use mesh::{Drawable, Mesh, VertexAttribute};
pub use shader::{Program, ShaderKind, ShaderStage};
pub use texture::{Filter, Texture, TextureOptions, Wrap};
