//! Static geometry: an owning VAO/VBO/EBO bundle plus the interleaved
//! attribute layout its vertex shader expects.
//!
//! The original tutorials juggle the raw handles in parallel arrays and
//! delete them one by one at the end of `main`; here a [`Mesh`] owns all of
//! its handles and releases them together, and a [`Drawable`] extends the
//! same pairing to the shader program a mesh is drawn with.

use std::mem::size_of;
use std::os::raw::c_void;
use std::ptr;

use gl::types::{GLsizei, GLuint};

use crate::shader::Program;

/// One attribute in an interleaved vertex layout: `location` is the
/// `layout (location = N)` slot in the vertex shader, `components` how many
/// consecutive floats belong to it.
///
/// Offsets and the shared stride are derived from the attribute order, so a
/// layout is described once and cannot disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: i32) -> Self {
        Self {
            location,
            components,
        }
    }
}

/// Total floats per vertex across an attribute list.
fn floats_per_vertex(attributes: &[VertexAttribute]) -> usize {
    attributes.iter().map(|a| a.components as usize).sum()
}

/// A static, GPU-resident piece of geometry.
///
/// Uploaded once at build time; none of the lessons mutate vertex data after
/// setup.
pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: Option<GLuint>,
    vertex_count: GLsizei,
    index_count: GLsizei,
}

impl Mesh {
    /// Allocates a VAO and VBO (plus an EBO when `indices` is given),
    /// uploads the data, and records the attribute layout in the VAO.
    ///
    /// `vertices` is one flat interleaved sequence; its length must be a
    /// multiple of the layout's per-vertex float count.
    pub fn build(
        vertices: &[f32],
        indices: Option<&[u32]>,
        attributes: &[VertexAttribute],
    ) -> Self {
        let layout_floats = floats_per_vertex(attributes);
        assert!(layout_floats > 0, "a mesh needs at least one attribute");
        assert_eq!(
            vertices.len() % layout_floats,
            0,
            "vertex data does not divide into whole vertices"
        );

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * size_of::<f32>()) as isize,
                vertices.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        let ebo = indices.map(|indices| {
            let mut ebo = 0;
            unsafe {
                gl::GenBuffers(1, &mut ebo);
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    (indices.len() * size_of::<u32>()) as isize,
                    indices.as_ptr() as *const c_void,
                    gl::STATIC_DRAW,
                );
            }
            ebo
        });

        let stride = (layout_floats * size_of::<f32>()) as GLsizei;
        let mut offset = 0usize;

        for attribute in attributes {
            unsafe {
                gl::EnableVertexAttribArray(attribute.location);
                gl::VertexAttribPointer(
                    attribute.location,
                    attribute.components,
                    gl::FLOAT,
                    gl::FALSE,
                    stride,
                    (offset * size_of::<f32>()) as *const c_void,
                );
            }
            offset += attribute.components as usize;
        }

        unsafe { gl::BindVertexArray(0) };

        Self {
            vao,
            vbo,
            ebo,
            vertex_count: (vertices.len() / layout_floats) as GLsizei,
            index_count: indices.map_or(0, |i| i.len() as GLsizei),
        }
    }

    pub fn vao(&self) -> GLuint {
        self.vao
    }

    pub fn vbo(&self) -> GLuint {
        self.vbo
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }

    /// Draws the whole mesh as triangles, indexed when an EBO was built.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            match self.ebo {
                Some(_) => gl::DrawElements(
                    gl::TRIANGLES,
                    self.index_count,
                    gl::UNSIGNED_INT,
                    ptr::null(),
                ),
                None => gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count),
            }
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            if let Some(ebo) = self.ebo {
                gl::DeleteBuffers(1, &ebo);
            }
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

/// A mesh bound to the program it is drawn with, released together.
pub struct Drawable {
    pub mesh: Mesh,
    pub program: Program,
}

impl Drawable {
    pub fn new(mesh: Mesh, program: Program) -> Self {
        Self { mesh, program }
    }

    pub fn draw(&self) {
        self.program.bind();
        self.mesh.draw();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout_stride_is_the_sum_of_component_counts() {
        // position (3) + color (3) + texture coords (2), the textures layout
        let attributes = [
            VertexAttribute::new(0, 3),
            VertexAttribute::new(1, 3),
            VertexAttribute::new(2, 2),
        ];

        assert_eq!(floats_per_vertex(&attributes), 8);
    }

    #[test]
    fn single_attribute_layout_is_tightly_packed() {
        assert_eq!(floats_per_vertex(&[VertexAttribute::new(0, 3)]), 3);
    }
}
