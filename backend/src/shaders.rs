use gl::types::*;
use std::ffi::CStr;
use std::fmt;

use crate::config::Strictness;
use crate::error::BackendError;
use crate::glutils::{log_shader_info, program_info_log, shader_info_log};
use crate::{gl_call, gl_result};

pub const VERTEX_SHADER_SRC: &str = r#"
    #version 150
    in vec2 position;
    void main() { gl_Position = vec4(position, 0.0, 1.0); }
"#;

pub const FRAGMENT_SHADER_SRC: &str = r#"
    #version 150
    out vec4 outColor;
    void main() { outColor = vec4(1.0, 1.0, 1.0, 1.0); }
"#;

/// Fragment output bound to color number 0.
pub const FRAG_OUTPUT: &CStr = c"outColor";

pub const POSITION_ATTRIB: &CStr = c"position";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    /// Line written to the diagnostic stream when compilation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex shader failed",
            ShaderStage::Fragment => "Fragment shader failed",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Linked vertex + fragment program. The shader objects stay alive until
/// `delete`.
pub struct ShaderProgram {
    program_id: GLuint,
    vertex_shader: GLuint,
    fragment_shader: GLuint,
}

impl ShaderProgram {
    pub fn from_str(
        vertex_code: &str,
        fragment_code: &str,
        strictness: Strictness,
    ) -> Result<ShaderProgram, BackendError> {
        let vertex_shader = Self::compile(ShaderStage::Vertex, vertex_code, strictness)?;
        let fragment_shader =
            match Self::compile(ShaderStage::Fragment, fragment_code, strictness) {
                Ok(id) => id,
                Err(e) => {
                    gl_call!(gl::DeleteShader(vertex_shader));
                    return Err(e);
                }
            };

        // create program and link shaders
        let program_id = gl_result!(gl::CreateProgram());
        gl_call!(gl::AttachShader(program_id, vertex_shader));
        gl_call!(gl::AttachShader(program_id, fragment_shader));
        gl_call!(gl::BindFragDataLocation(program_id, 0, FRAG_OUTPUT.as_ptr()));
        gl_call!(gl::LinkProgram(program_id));

        let program = ShaderProgram {
            program_id,
            vertex_shader,
            fragment_shader,
        };

        if strictness == Strictness::Strict {
            let mut success: GLint = 0;
            gl_call!(gl::GetProgramiv(program_id, gl::LINK_STATUS, &mut success));
            if success == 0 {
                let log = program_info_log(program_id).unwrap_or_default();
                program.delete();
                return Err(BackendError::ProgramLink(log));
            }
        }

        log::debug!(
            "program {program_id} built from shaders {vertex_shader} and {fragment_shader}"
        );
        Ok(program)
    }

    /// Compiles one shader object. A failed compilation is reported on the
    /// diagnostic stream; only `Strictness::Strict` turns it into an error.
    fn compile(
        stage: ShaderStage,
        shader_code: &str,
        strictness: Strictness,
    ) -> Result<GLuint, BackendError> {
        let shader_id = gl_result!(gl::CreateShader(stage.gl_type()));

        gl_call!(gl::ShaderSource(
            shader_id,
            1,
            &shader_code.as_ptr().cast(),
            &(shader_code.len() as GLint),
        ));
        gl_call!(gl::CompileShader(shader_id));

        let mut compiled: GLint = 0;
        gl_call!(gl::GetShaderiv(shader_id, gl::COMPILE_STATUS, &mut compiled));
        if compiled == 0 {
            log::error!("{}", stage.failure_message());
            log_shader_info(shader_id);

            if strictness == Strictness::Strict {
                let log = shader_info_log(shader_id).unwrap_or_default();
                gl_call!(gl::DeleteShader(shader_id));
                return Err(BackendError::ShaderCompile { stage, log });
            }
        }

        Ok(shader_id)
    }

    pub fn use_program(&self) {
        gl_call!(gl::UseProgram(self.program_id));
    }

    /// Raw `glGetAttribLocation` result, -1 when `name` is not active.
    pub fn attrib_location(&self, name: &CStr) -> GLint {
        gl_result!(gl::GetAttribLocation(self.program_id, name.as_ptr()))
    }

    /// Attribute index for `name`. In lenient mode a missing attribute is
    /// passed on unchecked (as `GLuint`, i.e. wrapped -1), letting GL report
    /// the bad index.
    pub fn attrib_index(&self, name: &CStr, strictness: Strictness) -> Result<GLuint, BackendError> {
        let location = self.attrib_location(name);
        if location < 0 && strictness == Strictness::Strict {
            return Err(BackendError::AttribNotFound(
                name.to_string_lossy().to_string(),
            ));
        }
        Ok(location as GLuint)
    }

    pub fn delete(self) {
        gl_call!(gl::DeleteProgram(self.program_id));
        gl_call!(gl::DeleteShader(self.fragment_shader));
        gl_call!(gl::DeleteShader(self.vertex_shader));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        assert_eq!(ShaderStage::Vertex.failure_message(), "Vertex shader failed");
        assert_eq!(
            ShaderStage::Fragment.failure_message(),
            "Fragment shader failed"
        );
    }

    #[test]
    fn stage_gl_types() {
        assert_eq!(ShaderStage::Vertex.gl_type(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn sources_declare_expected_interface() {
        assert!(VERTEX_SHADER_SRC.trim_start().starts_with("#version 150"));
        assert!(VERTEX_SHADER_SRC.contains("in vec2 position;"));
        assert!(FRAGMENT_SHADER_SRC.trim_start().starts_with("#version 150"));
        assert!(FRAGMENT_SHADER_SRC.contains("out vec4 outColor;"));
        assert!(FRAGMENT_SHADER_SRC.contains("vec4(1.0, 1.0, 1.0, 1.0)"));
    }

    #[test]
    fn names_match_shader_sources() {
        assert!(VERTEX_SHADER_SRC.contains(POSITION_ATTRIB.to_str().unwrap()));
        assert!(FRAGMENT_SHADER_SRC.contains(FRAG_OUTPUT.to_str().unwrap()));
    }
}
