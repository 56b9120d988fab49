use crate::config::SceneConfig;
use crate::error::BackendError;
use crate::gl_call;
use crate::mesh::{TriangleMesh, TRIANGLE_INDICES, TRIANGLE_VERTICES};
use crate::shaders::{ShaderProgram, FRAGMENT_SHADER_SRC, POSITION_ATTRIB, VERTEX_SHADER_SRC};

/// All GPU resources of the demo: one mesh drawn with one program.
pub struct Scene {
    mesh: TriangleMesh,
    program: ShaderProgram,
}

impl Scene {
    /// Uploads the triangle, builds the program, makes it current and wires
    /// the `position` attribute to the vertex buffer.
    ///
    /// Requires a current context with loaded entry points.
    pub fn build(config: &SceneConfig) -> Result<Scene, BackendError> {
        let mesh = TriangleMesh::upload(&TRIANGLE_VERTICES, &TRIANGLE_INDICES);

        let program =
            match ShaderProgram::from_str(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, config.strictness)
            {
                Ok(p) => p,
                Err(e) => {
                    mesh.delete();
                    return Err(e);
                }
            };
        program.use_program();

        let position = match program.attrib_index(POSITION_ATTRIB, config.strictness) {
            Ok(index) => index,
            Err(e) => {
                program.delete();
                mesh.delete();
                return Err(e);
            }
        };
        mesh.bind_position_attribute(position);

        log::info!("scene ready ({:?})", config.strictness);
        Ok(Scene { mesh, program })
    }

    /// Clears the color buffer and draws the triangle.
    pub fn render_frame(&self) {
        gl_call!(gl::Clear(gl::COLOR_BUFFER_BIT));
        self.mesh.draw();
    }

    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// Deletes the program and its shaders, then the buffers and the VAO.
    pub fn delete(self) {
        self.program.delete();
        self.mesh.delete();
    }
}
