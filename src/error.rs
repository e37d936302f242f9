use std::path::PathBuf;

use crate::shader::ShaderKind;

/// Everything that can go wrong during one-time setup.
///
/// None of these are recoverable at runtime: the lessons have no degraded
/// mode, so every binary reports the error and exits non-zero.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to create the window: {0}")]
    WindowCreation(#[from] glutin::CreationError),

    #[error("failed to activate the OpenGL context: {0}")]
    ContextLoad(#[from] glutin::ContextError),

    #[error("{stage} shader failed to compile:\n{log}")]
    ShaderCompile { stage: ShaderKind, log: String },

    #[error("shader program failed to link:\n{log}")]
    ProgramLink { log: String },

    #[error("could not read shader source {path:?}: {source}")]
    ShaderSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not load texture {path:?}: {source}")]
    TextureLoad {
        path: PathBuf,
        source: image::ImageError,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compile_error_carries_the_driver_log() {
        let err = Error::ShaderCompile {
            stage: ShaderKind::Fragment,
            log: String::from("0:3(1): error: syntax error, unexpected '}'"),
        };

        let message = err.to_string();
        assert!(message.starts_with("fragment shader failed to compile"));
        assert!(message.contains("syntax error"));
    }

    #[test]
    fn source_error_names_the_missing_file() {
        let err = Error::ShaderSource {
            path: PathBuf::from("shaders/missing.vert"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(err.to_string().contains("missing.vert"));
    }
}
