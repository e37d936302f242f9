//! Texture loading: decode an image file and upload it as a 2D texture.
//!
//! Decoding belongs to the `image` crate; this module only chooses the
//! upload format from what was decoded and applies the sampling parameters
//! the lesson asked for.

use std::os::raw::c_void;
use std::path::Path;

use gl::types::{GLenum, GLint, GLuint};
use image::DynamicImage;

use crate::error::Error;

/// Texture coordinate wrapping outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

impl Wrap {
    fn gl_enum(self) -> GLint {
        (match self {
            Wrap::Repeat => gl::REPEAT,
            Wrap::MirroredRepeat => gl::MIRRORED_REPEAT,
            Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
            Wrap::ClampToBorder => gl::CLAMP_TO_BORDER,
        }) as GLint
    }
}

/// Sampling filter. The mipmap variants only make sense for minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapLinear,
}

impl Filter {
    fn gl_enum(self) -> GLint {
        (match self {
            Filter::Nearest => gl::NEAREST,
            Filter::Linear => gl::LINEAR,
            Filter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
            Filter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
        }) as GLint
    }
}

/// Per-texture sampling and decode options.
///
/// The defaults match the first textures lesson: repeat on both axes,
/// trilinear minification, and a vertical flip so image row order matches
/// OpenGL's bottom-left origin.
#[derive(Debug, Clone, Copy)]
pub struct TextureOptions {
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub flip_vertical: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            min_filter: Filter::LinearMipmapLinear,
            mag_filter: Filter::Linear,
            flip_vertical: true,
        }
    }
}

/// A GPU-resident 2D texture, deleted on drop.
pub struct Texture {
    id: GLuint,
}

impl Texture {
    /// Decodes the image at `path` and uploads it with the given options,
    /// generating mipmaps.
    ///
    /// 8-bit RGB images upload as `GL_RGB`; every other decoded format is
    /// converted to RGBA8 first.
    pub fn open(path: impl AsRef<Path>, options: &TextureOptions) -> Result<Self, Error> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| Error::TextureLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = if options.flip_vertical {
            decoded.flipv()
        } else {
            decoded
        };

        let (width, height, format, pixels): (u32, u32, GLenum, Vec<u8>) = match decoded {
            DynamicImage::ImageRgb8(buf) => (buf.width(), buf.height(), gl::RGB, buf.into_raw()),
            other => {
                let buf = other.to_rgba8();
                (buf.width(), buf.height(), gl::RGBA, buf.into_raw())
            }
        };

        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, options.wrap_s.gl_enum());
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, options.wrap_t.gl_enum());
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                options.min_filter.gl_enum(),
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                options.mag_filter.gl_enum(),
            );

            // RGB rows are not 4-byte aligned for odd widths.
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format as GLint,
                width as GLint,
                height as GLint,
                0,
                format,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        log::debug!("loaded texture {:?} ({}x{})", path, width, height);

        Ok(Self { id })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Binds this texture to the given texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_fails_before_any_gpu_work() {
        let err = Texture::open("assets/does_not_exist.png", &TextureOptions::default())
            .err()
            .expect("opening a missing file must fail");

        assert!(matches!(err, Error::TextureLoad { .. }));
        assert!(err.to_string().contains("does_not_exist.png"));
    }
}
