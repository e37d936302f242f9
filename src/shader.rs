//! The shader build pipeline: compile a vertex and a fragment stage, link
//! them into a program, and set uniforms on the result by name.
//!
//! A [`Program`] is only ever handed out fully linked. Stage objects exist
//! solely during the build and are deleted as soon as the link attempt
//! finishes, which is all OpenGL needs them for.

use std::ffi::CString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};

use crate::error::Error;

/// One compilable unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        })
    }
}

/// A compiled shader stage, deleted on drop.
pub struct ShaderStage {
    id: GLuint,
    kind: ShaderKind,
}

impl ShaderStage {
    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    /// Compiles `source` as a stage of the given kind, or fails with the
    /// driver's info log.
    pub fn compile(kind: ShaderKind, source: &str) -> Result<Self, Error> {
        let source = CString::new(source).map_err(|_| Error::ShaderCompile {
            stage: kind,
            log: String::from("shader source contains an interior NUL byte"),
        })?;

        let stage = Self {
            id: unsafe { gl::CreateShader(kind.gl_enum()) },
            kind,
        };

        unsafe {
            gl::ShaderSource(stage.id, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(stage.id);
        }

        let mut success = 0;
        unsafe { gl::GetShaderiv(stage.id, gl::COMPILE_STATUS, &mut success) };

        if success == 0 {
            return Err(Error::ShaderCompile {
                stage: kind,
                log: stage.info_log(),
            });
        }

        Ok(stage)
    }

    /// Reads the source from `path` and compiles it. An unreadable file fails
    /// before any GPU object is created.
    pub fn from_file(kind: ShaderKind, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::ShaderSource {
            path: path.to_path_buf(),
            source,
        })?;

        Self::compile(kind, &source)
    }

    fn info_log(&self) -> String {
        let mut len = 0;
        unsafe { gl::GetShaderiv(self.id, gl::INFO_LOG_LENGTH, &mut len) };

        let log = whitespace_cstring(len as usize);
        unsafe { gl::GetShaderInfoLog(self.id, len, ptr::null_mut(), log.as_ptr() as *mut GLchar) };

        log.to_string_lossy().into_owned()
    }
}

impl Drop for ShaderStage {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

/// A linked shader program, deleted on drop.
///
/// Uniforms are resolved by name on every set. The lessons touch each
/// uniform once per frame at most, so there is nothing to win by caching
/// locations, and a name the program does not know resolves to the GL
/// sentinel location `-1`, which the upload silently ignores.
pub struct Program {
    id: GLuint,
}

impl Program {
    /// Compiles both stages from inline source and links them.
    pub fn from_sources(vertex: &str, fragment: &str) -> Result<Self, Error> {
        let vertex = ShaderStage::compile(ShaderKind::Vertex, vertex)?;
        let fragment = ShaderStage::compile(ShaderKind::Fragment, fragment)?;

        Self::link(vertex, fragment)
    }

    /// Compiles both stages from files and links them.
    pub fn from_files(vertex: impl AsRef<Path>, fragment: impl AsRef<Path>) -> Result<Self, Error> {
        let vertex = ShaderStage::from_file(ShaderKind::Vertex, vertex)?;
        let fragment = ShaderStage::from_file(ShaderKind::Fragment, fragment)?;

        Self::link(vertex, fragment)
    }

    /// Links the two stages into a program.
    ///
    /// Takes the stages by value: both are deleted when this returns,
    /// whether the link worked or not.
    pub fn link(vertex: ShaderStage, fragment: ShaderStage) -> Result<Self, Error> {
        let program = Self {
            id: unsafe { gl::CreateProgram() },
        };

        unsafe {
            gl::AttachShader(program.id, vertex.id());
            gl::AttachShader(program.id, fragment.id());
            gl::LinkProgram(program.id);
        }

        let mut success = 0;
        unsafe { gl::GetProgramiv(program.id, gl::LINK_STATUS, &mut success) };

        if success == 0 {
            return Err(Error::ProgramLink {
                log: program.info_log(),
            });
        }

        unsafe {
            gl::DetachShader(program.id, vertex.id());
            gl::DetachShader(program.id, fragment.id());
        }

        Ok(program)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Makes this the current program.
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.bind();
        unsafe { gl::Uniform1i(self.location(name), value) };
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.bind();
        unsafe { gl::Uniform1f(self.location(name), value) };
    }

    pub fn set_vec3(&self, name: &str, value: [f32; 3]) {
        self.bind();
        unsafe { gl::Uniform3f(self.location(name), value[0], value[1], value[2]) };
    }

    pub fn set_vec4(&self, name: &str, value: [f32; 4]) {
        self.bind();
        unsafe { gl::Uniform4f(self.location(name), value[0], value[1], value[2], value[3]) };
    }

    fn location(&self, name: &str) -> GLint {
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) },
            // An interior NUL can't name a uniform; behave like an unknown name.
            Err(_) => -1,
        }
    }

    fn info_log(&self) -> String {
        let mut len = 0;
        unsafe { gl::GetProgramiv(self.id, gl::INFO_LOG_LENGTH, &mut len) };

        let log = whitespace_cstring(len as usize);
        unsafe { gl::GetProgramInfoLog(self.id, len, ptr::null_mut(), log.as_ptr() as *mut GLchar) };

        log.to_string_lossy().into_owned()
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

/// A space-filled `CString` the driver can write an info log into.
fn whitespace_cstring(len: usize) -> CString {
    let mut buf: Vec<u8> = Vec::with_capacity(len + 1);
    buf.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buf) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shader_kind_names_match_driver_terminology() {
        assert_eq!(ShaderKind::Vertex.to_string(), "vertex");
        assert_eq!(ShaderKind::Fragment.to_string(), "fragment");
    }

    #[test]
    fn whitespace_cstring_has_the_requested_length() {
        let buf = whitespace_cstring(16);

        assert_eq!(buf.as_bytes().len(), 16);
        assert!(buf.as_bytes().iter().all(|&b| b == b' '));
    }
}
