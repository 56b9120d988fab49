use thiserror::Error;

use crate::shaders::ShaderStage;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("SDL initialization failure: {0}")]
    Sdl(String),

    #[error("Error while building OpenGL window: {0}")]
    Window(String),

    #[error("OpenGL context creation failure: {0}")]
    Context(String),

    #[error("GL loader init error: {0}")]
    Loader(String),

    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program link error: {0}")]
    ProgramLink(String),

    #[error("attribute '{0}' is not an active attribute of the program")]
    AttribNotFound(String),
}

impl From<sdl2::video::WindowBuildError> for BackendError {
    fn from(e: sdl2::video::WindowBuildError) -> Self {
        BackendError::Window(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_error_message() {
        let e = BackendError::Loader("missing entry points: glClear".to_string());
        assert_eq!(
            e.to_string(),
            "GL loader init error: missing entry points: glClear"
        );
    }

    #[test]
    fn compile_error_names_the_stage() {
        let e = BackendError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): syntax error".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "fragment shader compilation error: 0:1(1): syntax error"
        );
    }
}
