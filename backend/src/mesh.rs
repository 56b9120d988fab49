use gl::types::*;
use std::mem;

use crate::gl_call;
use crate::glutils::buffer_data_static;
use crate::math::Vec2;

pub const TRIANGLE_VERTICES: [Vec2; 3] = [
    Vec2::new(0.0, 0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(-0.5, -0.5),
];

pub const TRIANGLE_INDICES: [GLuint; 3] = [0, 1, 2];

/// Vertex array with one position buffer and one index buffer.
pub struct TriangleMesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    index_count: GLsizei,
}

impl TriangleMesh {
    /// Creates and binds the VAO, then uploads both buffers. The vertex
    /// buffer is unbound afterwards, the index buffer stays bound so the VAO
    /// records it.
    pub fn upload(vertices: &[Vec2], indices: &[GLuint]) -> TriangleMesh {
        let mut vao: GLuint = 0;
        gl_call!(gl::GenVertexArrays(1, &mut vao));
        gl_call!(gl::BindVertexArray(vao));

        let mut vbo: GLuint = 0;
        gl_call!(gl::GenBuffers(1, &mut vbo));
        gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, vbo));
        buffer_data_static(gl::ARRAY_BUFFER, vertices);
        gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, 0));

        let mut ebo: GLuint = 0;
        gl_call!(gl::GenBuffers(1, &mut ebo));
        gl_call!(gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo));
        buffer_data_static(gl::ELEMENT_ARRAY_BUFFER, indices);

        log::debug!(
            "mesh uploaded: vao={vao} vbo={vbo} ebo={ebo}, {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        TriangleMesh {
            vao,
            vbo,
            ebo,
            index_count: indices.len() as GLsizei,
        }
    }

    /// Feeds the vertex buffer into attribute `index` as tightly packed
    /// `Vec2`s starting at offset 0.
    pub fn bind_position_attribute(&self, index: GLuint) {
        gl_call!(gl::EnableVertexAttribArray(index));
        gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo));
        gl_call!(gl::VertexAttribPointer(
            index,
            Vec2::COMPONENTS,
            gl::FLOAT,
            gl::FALSE,
            mem::size_of::<Vec2>() as GLsizei,
            std::ptr::null(),
        ));
        gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, 0));
    }

    pub fn draw(&self) {
        gl_call!(gl::DrawElements(
            gl::TRIANGLES,
            self.index_count,
            gl::UNSIGNED_INT,
            std::ptr::null(),
        ));
    }

    pub fn delete(self) {
        gl_call!(gl::DeleteBuffers(1, &self.ebo));
        gl_call!(gl::DeleteBuffers(1, &self.vbo));
        gl_call!(gl::DeleteVertexArrays(1, &self.vao));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_vertices() {
        let flat: Vec<f32> = TRIANGLE_VERTICES.iter().flat_map(|v| [v.x, v.y]).collect();
        assert_eq!(flat, [0.0, 0.5, 0.5, -0.5, -0.5, -0.5]);
        assert_eq!(mem::size_of_val(&TRIANGLE_VERTICES), 6 * mem::size_of::<f32>());
    }

    #[test]
    fn triangle_indices() {
        assert_eq!(TRIANGLE_INDICES, [0, 1, 2]);
        assert_eq!(mem::size_of_val(&TRIANGLE_INDICES), 3 * mem::size_of::<u32>());
        assert!(TRIANGLE_INDICES
            .iter()
            .all(|&i| (i as usize) < TRIANGLE_VERTICES.len()));
    }
}
